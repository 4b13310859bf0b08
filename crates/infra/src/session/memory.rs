//! In-process session store
//!
//! Sessions live only as long as the process. Expired entries are dropped
//! lazily on lookup and by [`InMemorySessionStore::purge_expired`], which
//! [`InMemorySessionStore::spawn_sweeper`] runs on an interval.

use std::sync::{Arc, Weak};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use ignitecall_core::auth::ports::SessionStore;
use ignitecall_domain::{IgniteCallError, Result, Session};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every expired session, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired());
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            debug!(removed, "purged expired sessions");
        }
        removed
    }

    /// Purge expired sessions every `every` until the store is dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let store: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(store) = store.upgrade() else {
                    debug!("session store dropped, sweeper exiting");
                    break;
                };
                store.purge_expired();
            }
        })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, session: Session) -> Result<()> {
        if self.sessions.contains_key(&session.id) {
            return Err(IgniteCallError::Conflict(format!("session {} already exists", session.id)));
        }
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Session>> {
        let expired = match self.sessions.get(id) {
            Some(entry) if !entry.is_expired() => return Ok(Some(entry.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.sessions.remove(id);
        }
        Ok(None)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.sessions.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_get_delete() {
        let store = InMemorySessionStore::new();
        let session = Session::new("s1".into(), "u1".into(), None, 60);
        store.create(session.clone()).await.unwrap();

        assert_eq!(store.get("s1").await.unwrap(), Some(session));
        store.delete("s1").await.unwrap();
        assert!(store.get("s1").await.unwrap().is_none());
        // deleting twice is fine
        store.delete("s1").await.unwrap();
    }

    #[tokio::test]
    async fn expired_session_is_missing_and_evicted() {
        let store = InMemorySessionStore::new();
        store.create(Session::new("old".into(), "u1".into(), None, 0)).await.unwrap();

        assert!(store.get("old").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn duplicate_id_is_conflict() {
        let store = InMemorySessionStore::new();
        store.create(Session::new("s1".into(), "u1".into(), None, 60)).await.unwrap();
        let err = store.create(Session::new("s1".into(), "u2".into(), None, 60)).await.unwrap_err();
        assert!(matches!(err, IgniteCallError::Conflict(_)));
    }

    #[tokio::test]
    async fn purge_removes_only_expired() {
        let store = InMemorySessionStore::new();
        store.create(Session::new("live".into(), "u1".into(), None, 60)).await.unwrap();
        store.create(Session::new("dead".into(), "u2".into(), None, 0)).await.unwrap();

        assert_eq!(store.purge_expired(), 1);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn sweeper_purges_sessions_nobody_looks_up() {
        let store = Arc::new(InMemorySessionStore::new());
        store.create(Session::new("live".into(), "u1".into(), None, 60)).await.unwrap();
        store.create(Session::new("dead".into(), "u2".into(), None, 0)).await.unwrap();

        let sweeper = store.spawn_sweeper(Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(store.len(), 1);
        assert!(store.sessions.contains_key("live"));
        sweeper.abort();
    }

    #[tokio::test]
    async fn sweeper_stops_with_the_store() {
        let store = Arc::new(InMemorySessionStore::new());
        let sweeper = store.spawn_sweeper(Duration::from_millis(10));
        drop(store);

        tokio::time::timeout(Duration::from_secs(1), sweeper)
            .await
            .expect("sweeper exits")
            .unwrap();
    }
}
