//! Per-session state with an explicit lifecycle: created on session start,
//! cleared on session end. Nothing here is global or shared across sessions.

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::schema::AnalysisResult;

/// One answered question. The question and result are always present, even
/// when the result is an error-flavored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub result: AnalysisResult,
    pub asked_at: DateTime<Utc>,
}

/// The history log for one user session, most-recent-first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    history: Vec<HistoryEntry>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an answered question to the front of the history.
    pub fn record(&mut self, question: impl Into<String>, result: AnalysisResult) {
        let entry = HistoryEntry {
            question: question.into(),
            result,
            asked_at: Utc::now(),
        };
        debug!(
            "Recording history entry #{} (question: {:?})",
            self.history.len() + 1,
            entry.question
        );
        self.history.insert(0, entry);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Session end: drop all recorded history.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
