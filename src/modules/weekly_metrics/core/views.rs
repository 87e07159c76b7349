// Chart-ready series derived from the full collection of weeks.
//
// Purpose
// - Sort, accumulate and window the weeks for the progress chart, the trend charts and the
//   latest-week summary.
//
// Boundaries
// - Pure. Inputs are borrowed and never reordered; every function returns new values.

use crate::modules::weekly_metrics::core::aggregation::{total_linkedin_activity, total_outbound};
use crate::modules::weekly_metrics::core::format::short_label;
use crate::modules::weekly_metrics::core::record::WeeklyMetrics;
use serde::Serialize;

/// Weekly outbound target; the goal pace grows by this much per recorded week.
pub const WEEKLY_OUTBOUND_GOAL: u64 = 160;

pub const RECENT_WINDOW_WEEKS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    pub name: String,
    pub weekly_outbound: u64,
    pub cumulative_outbound: u64,
    #[serde(rename = "cumulativeYearlyGoalPace")]
    pub cumulative_goal_pace: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub name: String,
    #[serde(rename = "totalLinkedInActivity")]
    pub total_linkedin_activity: u64,
    #[serde(flatten)]
    pub week: WeeklyMetrics,
}

pub fn sort_chronological(weeks: &[WeeklyMetrics]) -> Vec<WeeklyMetrics> {
    let mut sorted = weeks.to_vec();
    sorted.sort_by_key(|w| w.week_start_date);
    sorted
}

pub fn sort_reverse_chronological(weeks: &[WeeklyMetrics]) -> Vec<WeeklyMetrics> {
    let mut sorted = weeks.to_vec();
    sorted.sort_by(|a, b| b.week_start_date.cmp(&a.week_start_date));
    sorted
}

pub fn cumulative_progress(weeks: &[WeeklyMetrics]) -> Vec<ProgressPoint> {
    let mut cumulative_outbound: u64 = 0;
    sort_chronological(weeks)
        .iter()
        .zip(1u64..)
        .map(|(week, position)| {
            let weekly_outbound = total_outbound(week);
            cumulative_outbound = u64::saturating_add(cumulative_outbound, weekly_outbound);
            ProgressPoint {
                name: short_label(week.week_start_date),
                weekly_outbound,
                cumulative_outbound,
                cumulative_goal_pace: position * WEEKLY_OUTBOUND_GOAL,
            }
        })
        .collect()
}

/// The most recent weeks, oldest first.
pub fn recent_window(weeks: &[WeeklyMetrics]) -> Vec<TrendPoint> {
    let mut recent: Vec<WeeklyMetrics> = sort_reverse_chronological(weeks)
        .into_iter()
        .take(RECENT_WINDOW_WEEKS)
        .collect();
    recent.sort_by_key(|w| w.week_start_date);
    recent
        .into_iter()
        .map(|week| TrendPoint {
            name: short_label(week.week_start_date),
            total_linkedin_activity: total_linkedin_activity(&week),
            week,
        })
        .collect()
}

pub fn latest_week(weeks: &[WeeklyMetrics]) -> Option<WeeklyMetrics> {
    weeks.iter().max_by_key(|w| w.week_start_date).cloned()
}
