//! Live scoring sessions — debounced, cancelable single-shot scoring per session.
//!
//! Every `schedule` supersedes whatever is pending for that session: the old
//! timer task is aborted and its generation is retired, so a completion that
//! slips through is discarded. Only the most recent request ever lands.
//! A resume without a name is not scored at all and leaves the session idle.
//! Sessions with nothing pending are evicted once untouched for the TTL.

pub mod handlers;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::models::resume::Resume;
use crate::scoring::{RelevanceScorer, ScoreResult, ScoringTarget};

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LiveStatus {
    /// Nothing scored yet, or the resume has no name.
    #[default]
    Idle,
    Calculating,
    Ready {
        result: Box<ScoreResult>,
    },
    Failed {
        message: String,
    },
}

struct Session {
    generation: u64,
    pending: Option<JoinHandle<()>>,
    status: LiveStatus,
    last_touched: Instant,
}

impl Session {
    fn new(now: Instant) -> Self {
        Self {
            generation: 0,
            pending: None,
            status: LiveStatus::Idle,
            last_touched: now,
        }
    }

    fn expired(&self, now: Instant, ttl: Duration) -> bool {
        self.pending.is_none() && now.duration_since(self.last_touched) >= ttl
    }
}

#[derive(Clone)]
pub struct LiveScoring {
    delay: Duration,
    ttl: Duration,
    scorer: Arc<dyn RelevanceScorer>,
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl LiveScoring {
    pub fn new(scorer: Arc<dyn RelevanceScorer>, delay: Duration, ttl: Duration) -> Self {
        Self {
            delay,
            ttl,
            scorer,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Schedules a score for `session_id` after the debounce delay.
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&self, session_id: &str, resume: Resume, target: ScoringTarget) -> LiveStatus {
        let now = Instant::now();
        let mut sessions = self.lock();
        self.sweep(&mut sessions, now);
        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(now));

        session.last_touched = now;
        session.generation += 1;
        if let Some(handle) = session.pending.take() {
            debug!(session_id, "Superseding pending score");
            handle.abort();
        }

        if resume.profile.name.is_empty() {
            session.status = LiveStatus::Idle;
            return LiveStatus::Idle;
        }

        let generation = session.generation;
        let this = self.clone();
        let id = session_id.to_string();

        session.status = LiveStatus::Calculating;
        session.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(this.delay).await;
            let status = match this.scorer.compute_score(&resume, &target) {
                Ok(result) => LiveStatus::Ready {
                    result: Box::new(result),
                },
                Err(e) => LiveStatus::Failed {
                    message: e.to_string(),
                },
            };
            this.complete(&id, generation, status);
        }));

        LiveStatus::Calculating
    }

    pub fn status(&self, session_id: &str) -> Option<LiveStatus> {
        let now = Instant::now();
        let mut sessions = self.lock();
        self.sweep(&mut sessions, now);
        sessions.get_mut(session_id).map(|session| {
            session.last_touched = now;
            session.status.clone()
        })
    }

    /// Drops a session, aborting any pending score. Returns false if it did not exist.
    pub fn cancel(&self, session_id: &str) -> bool {
        match self.lock().remove(session_id) {
            Some(session) => {
                if let Some(handle) = session.pending {
                    handle.abort();
                }
                true
            }
            None => false,
        }
    }

    fn complete(&self, session_id: &str, generation: u64, status: LiveStatus) {
        let mut sessions = self.lock();
        match sessions.get_mut(session_id) {
            Some(session) if session.generation == generation => {
                session.status = status;
                session.pending = None;
                session.last_touched = Instant::now();
            }
            _ => debug!(session_id, generation, "Discarding superseded score"),
        }
    }

    fn sweep(&self, sessions: &mut HashMap<String, Session>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, session| !session.expired(now, self.ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Evicted idle live sessions");
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        // A panic while holding the lock leaves the map itself consistent.
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}
