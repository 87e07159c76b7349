// Dashboard projector: keeps the published dashboard in step with the remote collection.
//
// Purpose
// - Consume the snapshot subscription of the signed-in identity's weekly collection and
//   rebuild the dashboard from scratch on every snapshot.
//
// Responsibilities
// - Wait for the session identity before subscribing.
// - Seed the sample weeks once, when the first snapshot of the subscription is empty.
// - Never leave readers on `Loading` after a store failure: publish an empty dashboard instead.
//
// Boundaries
// - An authentication failure leaves the dashboard on `Loading`; there is nothing to read.

use crate::modules::weekly_metrics::adapters::outbound::document_mapper::weeks_from_snapshot;
use crate::modules::weekly_metrics::core::dashboard::{Dashboard, DashboardState};
use crate::modules::weekly_metrics::core::sample_data::sample_week_documents;
use crate::shared::infrastructure::remote_store::client::StoreClient;
use crate::shared::infrastructure::remote_store::{CollectionPath, RemoteStore, StoreError};
use crate::shared::infrastructure::session::Session;
use std::sync::Arc;
use tokio::sync::watch;

pub struct DashboardProjector {
    app_id: String,
    client: StoreClient,
    session: Arc<Session>,
    publisher: watch::Sender<DashboardState>,
}

impl DashboardProjector {
    pub fn new(
        app_id: impl Into<String>,
        client: StoreClient,
        session: Arc<Session>,
        publisher: watch::Sender<DashboardState>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            client,
            session,
            publisher,
        }
    }

    pub async fn run(self) {
        let store = match self.client.store() {
            Ok(store) => store,
            Err(e) => {
                tracing::debug!(error = %e, "dashboard has no data source");
                self.publish_empty();
                return;
            }
        };

        let mut identity_watch = self.session.watch();
        let identity = match identity_watch.wait_for(Option::is_some).await {
            Ok(current) => (*current).clone(),
            Err(_) => None,
        };
        let Some(identity) = identity else {
            tracing::debug!("session closed before sign-in, dashboard stays loading");
            return;
        };

        let path = CollectionPath::weekly_data(&self.app_id, &identity);
        let mut subscription = match store.subscribe(&path).await {
            Ok(subscription) => subscription,
            Err(e) => {
                tracing::error!(error = %e, path = %path, "Error fetching weekly data");
                self.publish_empty();
                return;
            }
        };
        tracing::info!(path = %path, "dashboard projector subscribed");

        let mut first_snapshot = true;
        while let Some(snapshot) = subscription.next().await {
            if first_snapshot && snapshot.is_empty() {
                if let Err(e) = seed_sample_weeks(store.as_ref(), &path).await {
                    tracing::error!(error = %e, path = %path, "Error populating data");
                }
            }
            first_snapshot = false;

            let weeks = weeks_from_snapshot(&snapshot);
            self.publisher
                .send_replace(DashboardState::ready(Dashboard::build(&weeks)));
        }

        tracing::info!(path = %path, "weekly data subscription closed");
        subscription.unsubscribe();
    }

    fn publish_empty(&self) {
        self.publisher
            .send_replace(DashboardState::ready(Dashboard::build(&[])));
    }
}

async fn seed_sample_weeks(store: &dyn RemoteStore, path: &CollectionPath) -> Result<(), StoreError> {
    tracing::info!(path = %path, "No data found. Pre-populating with initial data");
    for (key, data) in sample_week_documents() {
        store.create(path, &key, data).await?;
    }
    tracing::info!(path = %path, "Initial data populated");
    Ok(())
}
