// Shared AppState fixtures for inbound adapter tests.

use crate::modules::weekly_metrics::core::dashboard::DashboardState;
use crate::modules::weekly_metrics::use_cases::record_week::handler::RecordWeekHandler;
use crate::shared::infrastructure::remote_store::client::StoreClient;
use crate::shared::infrastructure::remote_store::in_memory::InMemoryRemoteStore;
use crate::shared::infrastructure::session::Session;
use crate::shell::state::AppState;
use std::sync::Arc;
use tokio::sync::watch;

pub const APP_ID: &str = "test-app";
pub const USER_ID: &str = "user-fixed-0001";

fn make_state(client: StoreClient, session: Arc<Session>, dashboard: DashboardState) -> AppState {
    let (_, receiver) = watch::channel(dashboard);
    AppState {
        record_week_handler: Arc::new(RecordWeekHandler::new(APP_ID, client, session)),
        dashboard: receiver,
    }
}

/// Configured store, signed in as [`USER_ID`].
pub async fn make_signed_in_state() -> (AppState, Arc<InMemoryRemoteStore>) {
    let store = Arc::new(InMemoryRemoteStore::new());
    let client = StoreClient::ready(store.clone());
    let session = Arc::new(Session::new());
    session.sign_in(&client, Some(USER_ID)).await.unwrap();
    (make_state(client, session, DashboardState::Loading), store)
}

pub async fn make_offline_store_state() -> AppState {
    let (state, store) = make_signed_in_state().await;
    store.toggle_offline();
    state
}

pub fn make_signed_out_state() -> AppState {
    let client = StoreClient::ready(Arc::new(InMemoryRemoteStore::new()));
    make_state(client, Arc::new(Session::new()), DashboardState::Loading)
}

pub fn make_unconfigured_state() -> AppState {
    make_state(
        StoreClient::Unconfigured,
        Arc::new(Session::new()),
        DashboardState::Loading,
    )
}

pub fn make_state_with_dashboard(dashboard: DashboardState) -> AppState {
    make_state(StoreClient::Unconfigured, Arc::new(Session::new()), dashboard)
}
