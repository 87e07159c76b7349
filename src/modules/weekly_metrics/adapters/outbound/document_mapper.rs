use crate::modules::weekly_metrics::core::record::{
    WEEK_START_DATE_FIELD, WeeklyMetrics, parse_week_start_date,
};
use crate::shared::infrastructure::remote_store::Document;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentMappingError {
    #[error("document {id} has no valid week start date")]
    InvalidWeekStartDate { id: String },
}

impl TryFrom<&Document> for WeeklyMetrics {
    type Error = DocumentMappingError;

    fn try_from(document: &Document) -> Result<Self, Self::Error> {
        // The document key is the week start date.
        let raw_date = match document.data.get(WEEK_START_DATE_FIELD) {
            Some(Value::String(date)) => date.as_str(),
            _ => document.id.as_str(),
        };
        let week_start_date = parse_week_start_date(raw_date).ok_or_else(|| {
            DocumentMappingError::InvalidWeekStartDate {
                id: document.id.clone(),
            }
        })?;

        let mut week = WeeklyMetrics::from_fields(week_start_date, &document.data);
        week.created_at = Some(document.created_at);
        Ok(week)
    }
}

/// Maps a snapshot to records, skipping documents that cannot be read.
pub fn weeks_from_snapshot(snapshot: &[Document]) -> Vec<WeeklyMetrics> {
    snapshot
        .iter()
        .filter_map(|document| match WeeklyMetrics::try_from(document) {
            Ok(week) => Some(week),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable weekly metrics document");
                None
            }
        })
        .collect()
}
