// Per-week composites and all-time KPIs.
//
// Boundaries
// - Pure functions over records. No input or output, no hidden state.

use crate::modules::weekly_metrics::core::record::WeeklyMetrics;
use serde::{Serialize, Serializer};
use std::fmt;

/// Emails delivered, profile visits, connection requests, messages, calls dialed and likes.
pub fn total_outbound(week: &WeeklyMetrics) -> u64 {
    [
        week.emails_delivered,
        week.profile_visits,
        week.connection_requests,
        week.messages_sent,
        week.calls_dialed,
        week.likes,
    ]
    .into_iter()
    .fold(0, u64::saturating_add)
}

pub fn total_linkedin_activity(week: &WeeklyMetrics) -> u64 {
    [
        week.profile_visits,
        week.connection_requests,
        week.likes,
        week.messages_sent,
    ]
    .into_iter()
    .fold(0, u64::saturating_add)
}

/// A ratio shown as a percentage with one decimal, ties rounded away from zero.
/// A zero denominator renders as `0%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rate {
    Undefined,
    Percent(f64),
}

impl Rate {
    pub fn of(numerator: u64, denominator: u64) -> Self {
        if denominator == 0 {
            return Self::Undefined;
        }
        let percent = numerator as f64 / denominator as f64 * 100.0;
        Self::Percent((percent * 10.0).round() / 10.0)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("0%"),
            Self::Percent(p) => write!(f, "{p:.1}%"),
        }
    }
}

impl Serialize for Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivitiesPerMeeting {
    NotApplicable,
    PerMeeting(f64),
}

impl ActivitiesPerMeeting {
    pub fn of(total_outbound: u64, total_meetings: u64) -> Self {
        if total_meetings == 0 {
            return Self::NotApplicable;
        }
        let ratio = total_outbound as f64 / total_meetings as f64;
        Self::PerMeeting((ratio * 10.0).round() / 10.0)
    }
}

impl fmt::Display for ActivitiesPerMeeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => f.write_str("N/A"),
            Self::PerMeeting(value) => write!(f, "{value:.1}"),
        }
    }
}

impl Serialize for ActivitiesPerMeeting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllTimeSummary {
    pub total_meetings: u64,
    pub total_new_leads: u64,
    pub total_outbound_all_time: u64,
    pub total_calls_dialed: u64,
    pub total_calls_connected: u64,
    pub lead_conversion_rate: Rate,
    pub call_connection_rate: Rate,
    pub activities_per_meeting: ActivitiesPerMeeting,
}

pub fn all_time_summary(weeks: &[WeeklyMetrics]) -> AllTimeSummary {
    let sum = |field: fn(&WeeklyMetrics) -> u64| weeks.iter().map(field).fold(0, u64::saturating_add);

    let total_meetings = sum(|w| w.meetings_booked);
    let total_new_leads = sum(|w| w.new_leads);
    let total_outbound_all_time = sum(total_outbound);
    let total_calls_dialed = sum(|w| w.calls_dialed);
    let total_calls_connected = sum(|w| w.calls_connected);

    AllTimeSummary {
        total_meetings,
        total_new_leads,
        total_outbound_all_time,
        total_calls_dialed,
        total_calls_connected,
        lead_conversion_rate: Rate::of(total_meetings, total_new_leads),
        call_connection_rate: Rate::of(total_calls_connected, total_calls_dialed),
        activities_per_meeting: ActivitiesPerMeeting::of(total_outbound_all_time, total_meetings),
    }
}
