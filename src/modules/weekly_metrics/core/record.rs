// One week of outreach activity.
//
// Purpose
// - Hold the counters recorded for a single calendar week, keyed by the week's start date.
//
// Boundaries
// - Framework free. Counters are coerced when a record is built from raw fields, so every
//   consumer can rely on plain non-negative integers.

use crate::shared::core::primitives::coerce_count;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const WEEK_START_DATE_FIELD: &str = "weekStartDate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMetrics {
    pub week_start_date: NaiveDate,
    #[serde(default)]
    pub new_leads: u64,
    #[serde(default)]
    pub emails_delivered: u64,
    #[serde(default)]
    pub emails_opened: u64,
    #[serde(default)]
    pub emails_replied: u64,
    #[serde(default)]
    pub profile_visits: u64,
    #[serde(default)]
    pub connection_requests: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub messages_sent: u64,
    #[serde(default)]
    pub calls_dialed: u64,
    #[serde(default)]
    pub calls_connected: u64,
    #[serde(default)]
    pub meetings_booked: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl WeeklyMetrics {
    /// Builds a record from loosely typed fields, using their wire names.
    /// Missing or non-numeric counters become 0.
    pub fn from_fields(week_start_date: NaiveDate, fields: &Map<String, Value>) -> Self {
        let count = |name: &str| coerce_count(fields.get(name));
        Self {
            week_start_date,
            new_leads: count("newLeads"),
            emails_delivered: count("emailsDelivered"),
            emails_opened: count("emailsOpened"),
            emails_replied: count("emailsReplied"),
            profile_visits: count("profileVisits"),
            connection_requests: count("connectionRequests"),
            likes: count("likes"),
            messages_sent: count("messagesSent"),
            calls_dialed: count("callsDialed"),
            calls_connected: count("callsConnected"),
            meetings_booked: count("meetingsBooked"),
            created_at: None,
        }
    }

    /// Document key of the week: its ISO start date.
    pub fn key(&self) -> String {
        self.week_start_date.format("%Y-%m-%d").to_string()
    }

    /// Document body written to the store. `createdAt` is left to the store.
    pub fn to_document_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(WEEK_START_DATE_FIELD.to_string(), json!(self.key()));
        data.insert("newLeads".to_string(), json!(self.new_leads));
        data.insert("emailsDelivered".to_string(), json!(self.emails_delivered));
        data.insert("emailsOpened".to_string(), json!(self.emails_opened));
        data.insert("emailsReplied".to_string(), json!(self.emails_replied));
        data.insert("profileVisits".to_string(), json!(self.profile_visits));
        data.insert(
            "connectionRequests".to_string(),
            json!(self.connection_requests),
        );
        data.insert("likes".to_string(), json!(self.likes));
        data.insert("messagesSent".to_string(), json!(self.messages_sent));
        data.insert("callsDialed".to_string(), json!(self.calls_dialed));
        data.insert("callsConnected".to_string(), json!(self.calls_connected));
        data.insert("meetingsBooked".to_string(), json!(self.meetings_booked));
        data
    }
}

/// Parses a week-start date. Accepts `YYYY-MM-DD` and full RFC 3339
/// timestamps, which are read in UTC.
pub fn parse_week_start_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}
