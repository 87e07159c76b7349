// Signed-in identity of the running service.
//
// Purpose
// - Establish the identity once at startup and make it observable to the write path and the
//   dashboard projector.
//
// Responsibilities
// - Sign in with a custom token when one is configured, anonymously otherwise.
// - Log sign-in failures. No retry: the identity simply stays absent.

use crate::shared::infrastructure::remote_store::client::StoreClient;
use crate::shared::infrastructure::remote_store::{Credentials, Identity, StoreError};
use tokio::sync::watch;

pub struct Session {
    identity: watch::Sender<Option<Identity>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let (identity, _) = watch::channel(None);
        Self { identity }
    }

    pub async fn sign_in(
        &self,
        client: &StoreClient,
        initial_auth_token: Option<&str>,
    ) -> Result<Identity, StoreError> {
        let credentials = match initial_auth_token {
            Some(token) => Credentials::CustomToken(token.to_string()),
            None => Credentials::Anonymous,
        };
        let result = match client.store() {
            Ok(store) => store.authenticate(credentials).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(identity) => {
                tracing::info!(
                    uid = %identity.uid,
                    anonymous = identity.is_anonymous,
                    "signed in"
                );
                self.identity.send_replace(Some(identity.clone()));
                Ok(identity)
            }
            Err(e) => {
                tracing::error!(error = %e, "Authentication failed");
                Err(e)
            }
        }
    }

    pub fn current(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.subscribe()
    }
}
