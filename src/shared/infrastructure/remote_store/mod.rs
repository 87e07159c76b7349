// Port for the remote document store the dashboard reads from and writes to.
//
// Purpose
// - Describe what the application needs from the hosted database: sign-in, snapshot
//   subscriptions and keyed writes.
//
// Boundaries
// - No concrete backend here. `in_memory` implements the port for local runs and tests.
// - `client` holds the explicitly constructed, possibly unconfigured, handle to a store.

pub mod client;
pub mod in_memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("remote store is not configured")]
    NotConfigured,

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Anonymous,
    CustomToken(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub is_anonymous: bool,
}

/// Path of a document collection, scoped to one identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath(String);

impl CollectionPath {
    pub fn weekly_data(app_id: &str, identity: &Identity) -> Self {
        Self(format!("artifacts/{app_id}/users/{}/weeklyData", identity.uid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

/// Every document of a collection at one point in time.
pub type Snapshot = Vec<Document>;

/// A live feed of full collection snapshots.
///
/// The first call to `next` yields the collection as it was when the
/// subscription was opened; later calls wait for the next change. Each
/// snapshot replaces the previous one. Dropping the subscription unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    path: CollectionPath,
    receiver: watch::Receiver<Snapshot>,
    delivered_initial: bool,
}

impl Subscription {
    pub fn new(path: CollectionPath, receiver: watch::Receiver<Snapshot>) -> Self {
        Self {
            path,
            receiver,
            delivered_initial: false,
        }
    }

    pub fn path(&self) -> &CollectionPath {
        &self.path
    }

    /// Returns `None` once the store closes the feed.
    pub async fn next(&mut self) -> Option<Snapshot> {
        if !self.delivered_initial {
            self.delivered_initial = true;
            return Some(self.receiver.borrow_and_update().clone());
        }
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {
        tracing::debug!(path = %self.path, "unsubscribed from collection");
    }
}

#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn authenticate(&self, credentials: Credentials) -> Result<Identity, StoreError>;

    async fn subscribe(&self, path: &CollectionPath) -> Result<Subscription, StoreError>;

    /// Writes `data` under `key`, replacing any document already stored there.
    /// The store stamps the document with its own creation time.
    async fn create(
        &self,
        path: &CollectionPath,
        key: &str,
        data: Map<String, Value>,
    ) -> Result<(), StoreError>;
}

#[cfg(test)]
mod remote_store_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_scope_the_collection_path_to_the_identity() {
        let identity = Identity {
            uid: "user-0001".to_string(),
            is_anonymous: true,
        };
        let path = CollectionPath::weekly_data("kpi-tracker", &identity);
        assert_eq!(
            path.as_str(),
            "artifacts/kpi-tracker/users/user-0001/weeklyData"
        );
        assert_eq!(path.to_string(), path.as_str());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_deliver_the_initial_snapshot_then_wait_for_changes() {
        let (publisher, receiver) = watch::channel(Snapshot::new());
        let mut subscription = Subscription::new(CollectionPath("c".into()), receiver);

        assert_eq!(subscription.next().await, Some(Vec::new()));

        let document = Document {
            id: "2025-06-09".to_string(),
            data: Map::new(),
            created_at: Utc::now(),
        };
        publisher.send_replace(vec![document.clone()]);
        assert_eq!(subscription.next().await, Some(vec![document]));

        drop(publisher);
        assert_eq!(subscription.next().await, None);
    }
}
