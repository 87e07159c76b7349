use crate::modules::weekly_metrics::core::dashboard::DashboardState;
use crate::modules::weekly_metrics::use_cases::view_dashboard::handler::DashboardProjector;
use crate::shared::infrastructure::remote_store::client::StoreClient;
use crate::shared::infrastructure::session::Session;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Starts the dashboard projector and hands back the receiver readers borrow from.
pub fn spawn_dashboard_projector(
    app_id: &str,
    client: StoreClient,
    session: Arc<Session>,
) -> (watch::Receiver<DashboardState>, JoinHandle<()>) {
    let (publisher, receiver) = watch::channel(DashboardState::Loading);
    let projector = DashboardProjector::new(app_id, client, session, publisher);
    (receiver, tokio::spawn(projector.run()))
}
