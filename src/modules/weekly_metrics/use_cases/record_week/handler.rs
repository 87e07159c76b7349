use crate::modules::weekly_metrics::use_cases::record_week::command::RecordWeek;
use crate::modules::weekly_metrics::use_cases::record_week::decide::decide_record;
use crate::modules::weekly_metrics::use_cases::record_week::decision::DecideError;
use crate::shared::infrastructure::remote_store::client::StoreClient;
use crate::shared::infrastructure::remote_store::{CollectionPath, StoreError};
use crate::shared::infrastructure::session::Session;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Authentication error. Cannot add data.")]
    Unauthenticated,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DecideError),
}

pub struct RecordWeekHandler {
    app_id: String,
    client: StoreClient,
    session: Arc<Session>,
}

impl RecordWeekHandler {
    pub fn new(app_id: impl Into<String>, client: StoreClient, session: Arc<Session>) -> Self {
        Self {
            app_id: app_id.into(),
            client,
            session,
        }
    }

    /// Upserts the week under its start date. An existing week is replaced.
    pub async fn handle(&self, command: RecordWeek) -> Result<NaiveDate, ApplicationError> {
        let store = self.client.store()?;
        let identity = self
            .session
            .current()
            .ok_or(ApplicationError::Unauthenticated)?;
        let week = decide_record(command)?;

        let path = CollectionPath::weekly_data(&self.app_id, &identity);
        let key = week.key();
        if let Err(e) = store.create(&path, &key, week.to_document_data()).await {
            tracing::error!(error = %e, path = %path, week = %key, "Error adding document");
            return Err(e.into());
        }
        tracing::info!(path = %path, week = %key, "Weekly data recorded");
        Ok(week.week_start_date)
    }
}
