// Shared test fixtures for weekly metrics records.

use crate::modules::weekly_metrics::adapters::outbound::document_mapper::weeks_from_snapshot;
use crate::modules::weekly_metrics::core::record::{WeeklyMetrics, parse_week_start_date};
use crate::modules::weekly_metrics::core::sample_data::sample_week_documents;
use crate::shared::infrastructure::remote_store::Document;
use chrono::Utc;
use std::fs;

pub struct WeeklyMetricsBuilder {
    inner: WeeklyMetrics,
}

impl Default for WeeklyMetricsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl WeeklyMetricsBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/tests/fixtures/json/weekly_metrics.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn week_start_date(mut self, v: &str) -> Self {
        self.inner.week_start_date = parse_week_start_date(v).unwrap();
        self
    }

    pub fn new_leads(mut self, v: u64) -> Self {
        self.inner.new_leads = v;
        self
    }

    pub fn emails_delivered(mut self, v: u64) -> Self {
        self.inner.emails_delivered = v;
        self
    }

    pub fn emails_opened(mut self, v: u64) -> Self {
        self.inner.emails_opened = v;
        self
    }

    pub fn emails_replied(mut self, v: u64) -> Self {
        self.inner.emails_replied = v;
        self
    }

    pub fn profile_visits(mut self, v: u64) -> Self {
        self.inner.profile_visits = v;
        self
    }

    pub fn connection_requests(mut self, v: u64) -> Self {
        self.inner.connection_requests = v;
        self
    }

    pub fn likes(mut self, v: u64) -> Self {
        self.inner.likes = v;
        self
    }

    pub fn messages_sent(mut self, v: u64) -> Self {
        self.inner.messages_sent = v;
        self
    }

    pub fn calls_dialed(mut self, v: u64) -> Self {
        self.inner.calls_dialed = v;
        self
    }

    pub fn calls_connected(mut self, v: u64) -> Self {
        self.inner.calls_connected = v;
        self
    }

    pub fn meetings_booked(mut self, v: u64) -> Self {
        self.inner.meetings_booked = v;
        self
    }

    pub fn build(self) -> WeeklyMetrics {
        self.inner
    }
}

/// The bundled sample weeks, read back the way the projector reads them.
pub fn sample_weeks() -> Vec<WeeklyMetrics> {
    let snapshot: Vec<Document> = sample_week_documents()
        .into_iter()
        .map(|(id, data)| Document {
            id,
            data,
            created_at: Utc::now(),
        })
        .collect();
    let mut weeks = weeks_from_snapshot(&snapshot);
    for week in &mut weeks {
        week.created_at = None;
    }
    weeks
}

#[cfg(test)]
mod weekly_metrics_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = WeeklyMetricsBuilder::default().build();
        assert_eq!(built.key(), "2025-06-09");
        assert_eq!(built.new_leads, 0);
        assert_eq!(built.meetings_booked, 0);
        assert_eq!(built.created_at, None);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = WeeklyMetricsBuilder::new()
            .week_start_date("2025-07-07")
            .new_leads(106)
            .calls_connected(2)
            .meetings_booked(1)
            .build();
        assert_eq!(custom.key(), "2025-07-07");
        assert_eq!(custom.new_leads, 106);
        assert_eq!(custom.calls_connected, 2);
        assert_eq!(custom.meetings_booked, 1);
    }

    #[rstest]
    fn sample_weeks_are_the_nine_bundled_weeks_in_order() {
        let weeks = sample_weeks();
        assert_eq!(weeks.len(), 9);
        assert_eq!(weeks[0].key(), "2025-06-09");
        assert_eq!(weeks[8].key(), "2025-08-04");
    }
}
