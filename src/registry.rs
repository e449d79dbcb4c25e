//! Process-wide mapping from conversation ids to active game sessions.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::session::GameSession;

/// At most one active [`GameSession`] per conversation id.
///
/// The registry's own lock is held only long enough to touch the map;
/// each session sits behind its own mutex, so operations on one
/// conversation are linearized while different conversations proceed
/// independently. Guesses racing on the same id therefore cannot
/// double-count attempts or slip past a terminal state.
///
/// # Examples
///
/// ```rust
/// use wordle_chat::SessionRegistry;
///
/// let registry = SessionRegistry::new();
/// registry.start("chat-1", "ROBOT");
///
/// let session = registry.get("chat-1").unwrap();
/// session.lock().unwrap().submit_guess("BOOKS")?;
///
/// assert!(registry.stop("chat-1"));
/// assert!(!registry.stop("chat-1"));
/// #
/// # Ok::<_, wordle_chat::WordleError>(())
/// ```
#[derive(Debug, Default)]
pub struct SessionRegistry {
    inner: Mutex<HashMap<String, Arc<Mutex<GameSession>>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for `id` around `secret`, unconditionally
    /// discarding any session the id already had.
    pub fn start(&self, id: &str, secret: &str) -> Arc<Mutex<GameSession>> {
        let session = Arc::new(Mutex::new(GameSession::new(secret)));
        self.inner
            .lock()
            .unwrap()
            .insert(id.to_string(), Arc::clone(&session));
        session
    }

    /// Looks up the active session for `id`, if any.
    pub fn get(&self, id: &str) -> Option<Arc<Mutex<GameSession>>> {
        self.inner.lock().unwrap().get(id).map(Arc::clone)
    }

    /// Removes the session for `id`, reporting whether one existed.
    pub fn stop(&self, id: &str) -> bool {
        self.inner.lock().unwrap().remove(id).is_some()
    }

    /// The number of active sessions across all conversations.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod test {
    use std::thread;

    use super::*;
    use crate::session::Status;

    #[test]
    fn starting_replaces_any_existing_session() {
        let registry = SessionRegistry::new();
        registry.start("id", "ROBOT");
        registry
            .get("id")
            .unwrap()
            .lock()
            .unwrap()
            .submit_guess("BOOKS")
            .unwrap();

        registry.start("id", "APPLE");
        let session = registry.get("id").unwrap();
        let session = session.lock().unwrap();
        assert_eq!(session.secret(), "APPLE");
        assert_eq!(session.attempts(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn stop_reports_whether_a_session_existed() {
        let registry = SessionRegistry::new();
        assert!(!registry.stop("id"));
        registry.start("id", "ROBOT");
        assert!(registry.stop("id"));
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_independent() {
        let registry = SessionRegistry::new();
        registry.start("a", "ROBOT");
        registry.start("b", "APPLE");

        registry.stop("a");
        assert!(registry.get("a").is_none());
        assert_eq!(registry.get("b").unwrap().lock().unwrap().secret(), "APPLE");
    }

    #[test]
    fn concurrent_guesses_on_one_id_never_exceed_the_budget() {
        let registry = Arc::new(SessionRegistry::new());
        registry.start("id", "ROBOT");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..4 {
                        let session = registry.get("id").unwrap();
                        let mut session = session.lock().unwrap();
                        // Losing the race to a terminal state is expected.
                        let _ = session.submit_guess("BOOKS");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let session = registry.get("id").unwrap();
        let session = session.lock().unwrap();
        assert_eq!(session.attempts(), session.max_attempts());
        assert_eq!(session.status(), Status::Exhausted);
    }
}
