use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use ulid::Ulid;

use crate::quiz::QuizSession;

#[derive(Default)]
struct Registry {
    sessions: HashMap<String, QuizSession>,
    // creation order, oldest first
    order: VecDeque<String>,
}

/// Quiz sessions of every visitor, keyed by the token stored in their cookie.
///
/// Each session is only ever touched through its own entry; the lock is held
/// for the duration of a single closure and never across an await.
#[derive(Clone)]
pub struct QuizSessions {
    registry: Arc<Mutex<Registry>>,
    capacity: usize,
}

impl QuizSessions {
    pub fn new(capacity: usize) -> Self {
        Self {
            registry: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a fresh session and returns its token. Evicts the oldest
    /// sessions once the registry is full.
    pub fn create(&self) -> String {
        let token = Ulid::new().to_string();
        let mut registry = self.lock();

        while registry.sessions.len() >= self.capacity {
            let Some(oldest) = registry.order.pop_front() else {
                break;
            };
            registry.sessions.remove(&oldest);
            tracing::debug!("evicted quiz session {oldest}");
        }

        registry.sessions.insert(token.clone(), QuizSession::new());
        registry.order.push_back(token.clone());
        tracing::info!("quiz session created: {token}");
        token
    }

    /// Runs `f` on the session for `token`. `None` if the session is unknown.
    pub fn with_session<T>(&self, token: &str, f: impl FnOnce(&mut QuizSession) -> T) -> Option<T> {
        self.lock().sessions.get_mut(token).map(f)
    }

    pub fn remove(&self, token: &str) -> Option<QuizSession> {
        let mut registry = self.lock();
        registry.order.retain(|t| t != token);
        registry.sessions.remove(token)
    }

    pub fn len(&self) -> usize {
        self.lock().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_are_independent() {
        let sessions = QuizSessions::new(10);
        let a = sessions.create();
        let b = sessions.create();
        assert_ne!(a, b);

        sessions
            .with_session(&a, |s| s.answer(1, 3).unwrap())
            .unwrap();

        assert_eq!(sessions.with_session(&a, |s| s.progress()), Some((1, 5)));
        assert_eq!(sessions.with_session(&b, |s| s.progress()), Some((0, 5)));
    }

    #[test]
    fn unknown_token_is_none() {
        let sessions = QuizSessions::new(10);
        assert!(sessions.with_session("missing", |s| s.progress()).is_none());
    }

    #[test]
    fn oldest_session_is_evicted_at_capacity() {
        let sessions = QuizSessions::new(2);
        let first = sessions.create();
        let second = sessions.create();
        let third = sessions.create();

        assert_eq!(sessions.len(), 2);
        assert!(sessions.with_session(&first, |_| ()).is_none());
        assert!(sessions.with_session(&second, |_| ()).is_some());
        assert!(sessions.with_session(&third, |_| ()).is_some());
    }

    #[test]
    fn removed_session_is_gone() {
        let sessions = QuizSessions::new(2);
        let token = sessions.create();
        assert!(sessions.remove(&token).is_some());
        assert!(sessions.is_empty());
        assert!(sessions.remove(&token).is_none());
    }
}
