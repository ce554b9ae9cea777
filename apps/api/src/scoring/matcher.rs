//! Keyword matching over a [`ResumeCorpus`].
//!
//! Matching is case-insensitive substring containment with no tokenization or
//! word boundaries, so `java` matches inside `javascript` and `r` matches
//! almost any resume. These false positives are accepted behavior.

use crate::scoring::extract::ResumeCorpus;

impl ResumeCorpus {
    /// True when the lowercased keyword occurs anywhere in the corpus.
    pub fn matches(&self, keyword: &str) -> bool {
        self.as_str().contains(&keyword.to_lowercase())
    }

    /// True when any keyword in the set occurs in the corpus.
    pub fn matches_any<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().any(|k| self.matches(k.as_ref()))
    }
}
