//! Session-scoped favorites: leads the user explicitly marked.

use dashmap::DashMap;

use crate::lead::Lead;

/// Identifies one user session.
pub type SessionId = String;

/// Append-only store of saved leads, one list per session.
///
/// Lists are never deduplicated and live only as long as the store itself.
#[derive(Default)]
pub struct FavoritesStore {
    sessions: DashMap<SessionId, Vec<Lead>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lead to the session's favorites and returns the new count.
    pub fn save(&self, session: &str, lead: Lead) -> usize {
        let mut entry = self.sessions.entry(session.to_string()).or_default();
        entry.push(lead);
        entry.len()
    }

    /// Saved leads for a session, in the order they were marked.
    pub fn list(&self, session: &str) -> Vec<Lead> {
        self.sessions
            .get(session)
            .map(|leads| leads.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, session: &str) -> usize {
        self.sessions.get(session).map(|l| l.len()).unwrap_or(0)
    }
}
