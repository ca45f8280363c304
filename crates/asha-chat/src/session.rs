//! In-memory conversation history per session.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use asha_core::ChatTurn;

use crate::error::ChatError;

/// Session id to ordered turns, oldest first.
///
/// Sessions are created on first append and live for the process. After
/// a trim the first turn is always kept as an anchor, followed by the
/// most recent `max_history - 1` turns.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Vec<ChatTurn>>>,
    max_history: usize,
}

impl SessionStore {
    pub fn new(max_history: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_history: max_history.max(1),
        }
    }

    /// History for `session_id`; empty for an unknown session.
    pub fn get(&self, session_id: &str) -> Result<Vec<ChatTurn>, ChatError> {
        Ok(self.lock()?.get(session_id).cloned().unwrap_or_default())
    }

    pub fn append(&self, session_id: &str, turn: ChatTurn) -> Result<(), ChatError> {
        self.lock()?
            .entry(session_id.to_string())
            .or_default()
            .push(turn);
        Ok(())
    }

    /// Enforce the size bound. Returns how many turns were dropped.
    pub fn trim(&self, session_id: &str) -> Result<usize, ChatError> {
        let mut sessions = self.lock()?;
        let Some(history) = sessions.get_mut(session_id) else {
            return Ok(0);
        };
        Ok(trim_history(history, self.max_history))
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<ChatTurn>>>, ChatError> {
        self.sessions
            .lock()
            .map_err(|e| ChatError::Storage(format!("session lock poisoned: {}", e)))
    }
}

fn trim_history(history: &mut Vec<ChatTurn>, max: usize) -> usize {
    if history.len() <= max {
        return 0;
    }
    // Keep index 0, drop the middle.
    let excess = history.len() - max;
    history.drain(1..1 + excess);
    excess
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(i: usize) -> ChatTurn {
        if i % 2 == 0 {
            ChatTurn::user(format!("turn {}", i))
        } else {
            ChatTurn::assistant(format!("turn {}", i))
        }
    }

    #[test]
    fn test_unknown_session_is_empty() {
        let store = SessionStore::new(20);
        assert!(store.get("nope").unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_creates_session() {
        let store = SessionStore::new(20);
        store.append("s1", ChatTurn::user("hello")).unwrap();
        assert_eq!(store.get("s1").unwrap(), vec![ChatTurn::user("hello")]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_twenty_one_turns_trim_to_twenty() {
        let store = SessionStore::new(20);
        for i in 1..=21 {
            store.append("s", turn(i)).unwrap();
        }
        assert_eq!(store.trim("s").unwrap(), 1);

        let history = store.get("s").unwrap();
        assert_eq!(history.len(), 20);
        assert_eq!(history[0], turn(1));
        let tail: Vec<ChatTurn> = (3..=21).map(turn).collect();
        assert_eq!(&history[1..], tail.as_slice());
    }

    #[test]
    fn test_trim_under_bound_is_noop() {
        let store = SessionStore::new(20);
        for i in 1..=20 {
            store.append("s", turn(i)).unwrap();
        }
        assert_eq!(store.trim("s").unwrap(), 0);
        assert_eq!(store.get("s").unwrap().len(), 20);
        assert_eq!(store.trim("missing").unwrap(), 0);
    }

    #[test]
    fn test_anchor_survives_many_trims() {
        let store = SessionStore::new(20);
        for i in 1..=100 {
            store.append("s", turn(i)).unwrap();
            store.trim("s").unwrap();
            let history = store.get("s").unwrap();
            assert!(history.len() <= 20);
            assert_eq!(history[0], turn(1));
            assert_eq!(history.last(), Some(&turn(i)));
        }
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = SessionStore::new(2);
        store.append("a", turn(1)).unwrap();
        store.append("a", turn(2)).unwrap();
        store.append("a", turn(3)).unwrap();
        store.append("b", turn(9)).unwrap();
        store.trim("a").unwrap();

        assert_eq!(store.get("a").unwrap(), vec![turn(1), turn(3)]);
        assert_eq!(store.get("b").unwrap(), vec![turn(9)]);
    }
}
