use crate::shared::infrastructure::remote_store::{RemoteStore, StoreError};
use std::sync::Arc;

/// Handle to the remote store, built once by the composition root and passed
/// to every component that talks to the backend.
///
/// `Unconfigured` means no backend credentials were provided. Every operation
/// then fails with [`StoreError::NotConfigured`] and the service stays up with
/// an empty dashboard.
#[derive(Clone)]
pub enum StoreClient {
    Unconfigured,
    Ready(Arc<dyn RemoteStore>),
}

impl StoreClient {
    pub fn ready(store: Arc<dyn RemoteStore>) -> Self {
        Self::Ready(store)
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn store(&self) -> Result<Arc<dyn RemoteStore>, StoreError> {
        match self {
            Self::Ready(store) => Ok(store.clone()),
            Self::Unconfigured => Err(StoreError::NotConfigured),
        }
    }
}
