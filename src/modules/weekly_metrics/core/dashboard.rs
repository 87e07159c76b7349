// Dashboard view model: everything a front end needs to render the KPI page.
//
// Purpose
// - Combine the all-time summary and the derived series into one value, rebuilt from scratch
//   for every snapshot of the collection.
//
// Responsibilities
// - Latest-week summary, KPI cards, progress chart, trend charts and history table.
// - Never fail: an empty collection yields empty series and no latest week.

use crate::modules::weekly_metrics::core::aggregation::{
    AllTimeSummary, all_time_summary, total_linkedin_activity,
};
use crate::modules::weekly_metrics::core::format::{format_thousands, full_date_label};
use crate::modules::weekly_metrics::core::record::WeeklyMetrics;
use crate::modules::weekly_metrics::core::views::{
    ProgressPoint, TrendPoint, WEEKLY_OUTBOUND_GOAL, cumulative_progress, latest_week,
    recent_window, sort_reverse_chronological,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestWeekSummary {
    pub label: String,
    pub new_leads: u64,
    pub emails_delivered: u64,
    pub linkedin_activity: u64,
    pub calls_dialed: u64,
    pub calls_connected: u64,
    pub meetings_booked: u64,
}

impl From<&WeeklyMetrics> for LatestWeekSummary {
    fn from(week: &WeeklyMetrics) -> Self {
        Self {
            label: full_date_label(week.week_start_date),
            new_leads: week.new_leads,
            emails_delivered: week.emails_delivered,
            linkedin_activity: total_linkedin_activity(week),
            calls_dialed: week.calls_dialed,
            calls_connected: week.calls_connected,
            meetings_booked: week.meetings_booked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    pub subtext: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressChart {
    pub weekly_goal: u64,
    pub points: Vec<ProgressPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendLine {
    pub data_key: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendChart {
    pub title: &'static str,
    pub lines: Vec<TrendLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendCharts {
    pub charts: Vec<TrendChart>,
    pub points: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub id: String,
    pub label: String,
    #[serde(rename = "totalLinkedInActivity")]
    pub total_linkedin_activity: u64,
    #[serde(flatten)]
    pub week: WeeklyMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub latest_week: Option<LatestWeekSummary>,
    pub progress: ProgressChart,
    pub summary: AllTimeSummary,
    pub cards: Vec<KpiCard>,
    pub trends: TrendCharts,
    pub history: Vec<HistoryRow>,
}

impl Dashboard {
    pub fn build(weeks: &[WeeklyMetrics]) -> Self {
        let summary = all_time_summary(weeks);
        Self {
            latest_week: latest_week(weeks).as_ref().map(LatestWeekSummary::from),
            progress: ProgressChart {
                weekly_goal: WEEKLY_OUTBOUND_GOAL,
                points: cumulative_progress(weeks),
            },
            cards: kpi_cards(&summary),
            summary,
            trends: TrendCharts {
                charts: trend_charts(),
                points: recent_window(weeks),
            },
            history: history(weeks),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

fn kpi_cards(summary: &AllTimeSummary) -> Vec<KpiCard> {
    vec![
        KpiCard {
            title: "Total Meetings Booked",
            value: summary.total_meetings.to_string(),
            subtext: "All Time",
        },
        KpiCard {
            title: "Lead Conversion Rate",
            value: summary.lead_conversion_rate.to_string(),
            subtext: "Meetings / New Leads",
        },
        KpiCard {
            title: "Call Connection Rate",
            value: summary.call_connection_rate.to_string(),
            subtext: "Connected / Dialed",
        },
        KpiCard {
            title: "Total New Leads",
            value: summary.total_new_leads.to_string(),
            subtext: "All Time",
        },
        KpiCard {
            title: "Total Outbound Activities",
            value: format_thousands(summary.total_outbound_all_time),
            subtext: "All Time",
        },
        KpiCard {
            title: "Activities Per Meeting",
            value: summary.activities_per_meeting.to_string(),
            subtext: "Effort to get 1 meeting",
        },
    ]
}

fn trend_charts() -> Vec<TrendChart> {
    let line = |data_key: &'static str, name: &'static str| TrendLine { data_key, name };
    vec![
        TrendChart {
            title: "Emails Sent",
            lines: vec![
                line("emailsDelivered", "Delivered"),
                line("emailsOpened", "Opened"),
            ],
        },
        TrendChart {
            title: "Calls Dialed",
            lines: vec![
                line("callsDialed", "Dialed"),
                line("callsConnected", "Connected"),
            ],
        },
        TrendChart {
            title: "LinkedIn Activity",
            lines: vec![line("totalLinkedInActivity", "Total Activity")],
        },
        TrendChart {
            title: "Meetings Booked",
            lines: vec![line("meetingsBooked", "Booked")],
        },
    ]
}

fn history(weeks: &[WeeklyMetrics]) -> Vec<HistoryRow> {
    sort_reverse_chronological(weeks)
        .into_iter()
        .map(|week| HistoryRow {
            id: week.key(),
            label: full_date_label(week.week_start_date),
            total_linkedin_activity: total_linkedin_activity(&week),
            week,
        })
        .collect()
}

/// What readers see: nothing yet, or the dashboard of the latest snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardState {
    Loading,
    Ready(Box<Dashboard>),
}

impl DashboardState {
    pub fn ready(dashboard: Dashboard) -> Self {
        Self::Ready(Box::new(dashboard))
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            Self::Loading => None,
            Self::Ready(dashboard) => Some(&**dashboard),
        }
    }
}
