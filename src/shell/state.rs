use crate::modules::weekly_metrics::core::dashboard::DashboardState;
use crate::modules::weekly_metrics::use_cases::record_week::handler::RecordWeekHandler;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct AppState {
    pub record_week_handler: Arc<RecordWeekHandler>,
    pub dashboard: watch::Receiver<DashboardState>,
}
