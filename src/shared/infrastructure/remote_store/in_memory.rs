// In memory implementation of the RemoteStore port.
//
// Purpose
// - Run the service locally and exercise subscriptions and writes in tests without a hosted database.
//
// Responsibilities
// - Keep documents per collection path, keyed by document id.
// - Publish the full collection to every subscriber after each write.
// - Simulate an unreachable backend through an offline toggle.

use crate::shared::infrastructure::remote_store::{
    CollectionPath, Credentials, Document, Identity, RemoteStore, Snapshot, StoreError,
    Subscription,
};
use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

struct Collection {
    documents: BTreeMap<String, Document>,
    publisher: watch::Sender<Snapshot>,
}

impl Collection {
    fn new() -> Self {
        let (publisher, _) = watch::channel(Snapshot::new());
        Self {
            documents: BTreeMap::new(),
            publisher,
        }
    }

    fn publish(&self) {
        self.publisher
            .send_replace(self.documents.values().cloned().collect());
    }
}

#[derive(Default)]
pub struct InMemoryRemoteStore {
    collections: RwLock<HashMap<CollectionPath, Collection>>,
    is_offline: AtomicBool,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("Remote store offline".into()));
        }
        Ok(())
    }

    pub async fn documents(&self, path: &CollectionPath) -> Vec<Document> {
        self.collections
            .read()
            .await
            .get(path)
            .map(|c| c.documents.values().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn subscriber_count(&self, path: &CollectionPath) -> usize {
        self.collections
            .read()
            .await
            .get(path)
            .map(|c| c.publisher.receiver_count())
            .unwrap_or(0)
    }

    /// Closes every open subscription, as a dropped backend connection would.
    pub async fn disconnect_subscribers(&self) {
        let mut guard = self.collections.write().await;
        for collection in guard.values_mut() {
            let (publisher, _) = watch::channel(collection.documents.values().cloned().collect());
            collection.publisher = publisher;
        }
    }
}

#[async_trait::async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn authenticate(&self, credentials: Credentials) -> Result<Identity, StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Authentication("Remote store offline".into()));
        }
        match credentials {
            Credentials::Anonymous => Ok(Identity {
                uid: Uuid::now_v7().to_string(),
                is_anonymous: true,
            }),
            Credentials::CustomToken(token) if token.trim().is_empty() => Err(
                StoreError::Authentication("custom token is empty".into()),
            ),
            Credentials::CustomToken(token) => Ok(Identity {
                uid: token.trim().to_string(),
                is_anonymous: false,
            }),
        }
    }

    async fn subscribe(&self, path: &CollectionPath) -> Result<Subscription, StoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        let collection = guard.entry(path.clone()).or_insert_with(Collection::new);
        Ok(Subscription::new(
            path.clone(),
            collection.publisher.subscribe(),
        ))
    }

    async fn create(
        &self,
        path: &CollectionPath,
        key: &str,
        data: Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.collections.write().await;
        let collection = guard.entry(path.clone()).or_insert_with(Collection::new);
        let mut data = data;
        let created_at = Utc::now();
        data.insert(
            "createdAt".to_string(),
            Value::String(created_at.to_rfc3339()),
        );
        collection.documents.insert(
            key.to_string(),
            Document {
                id: key.to_string(),
                data,
                created_at,
            },
        );
        collection.publish();
        Ok(())
    }
}
