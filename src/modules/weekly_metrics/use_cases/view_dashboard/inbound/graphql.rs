use async_graphql::{Context, Object, SimpleObject};

use crate::modules::weekly_metrics::core::aggregation::AllTimeSummary;
use crate::modules::weekly_metrics::core::dashboard::{
    Dashboard, HistoryRow, KpiCard, LatestWeekSummary,
};
use crate::modules::weekly_metrics::core::views::ProgressPoint;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlWeek {
    pub id: String,
    pub label: String,
    pub week_start_date: String,
    pub new_leads: u64,
    pub emails_delivered: u64,
    pub emails_opened: u64,
    pub emails_replied: u64,
    pub profile_visits: u64,
    pub connection_requests: u64,
    pub likes: u64,
    pub messages_sent: u64,
    pub calls_dialed: u64,
    pub calls_connected: u64,
    pub meetings_booked: u64,
    #[graphql(name = "totalLinkedInActivity")]
    pub total_linkedin_activity: u64,
}

impl From<HistoryRow> for GqlWeek {
    fn from(row: HistoryRow) -> Self {
        let week = row.week;
        Self {
            id: row.id,
            label: row.label,
            week_start_date: week.key(),
            new_leads: week.new_leads,
            emails_delivered: week.emails_delivered,
            emails_opened: week.emails_opened,
            emails_replied: week.emails_replied,
            profile_visits: week.profile_visits,
            connection_requests: week.connection_requests,
            likes: week.likes,
            messages_sent: week.messages_sent,
            calls_dialed: week.calls_dialed,
            calls_connected: week.calls_connected,
            meetings_booked: week.meetings_booked,
            total_linkedin_activity: row.total_linkedin_activity,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlLatestWeek {
    pub label: String,
    pub new_leads: u64,
    pub emails_delivered: u64,
    #[graphql(name = "linkedInActivity")]
    pub linkedin_activity: u64,
    pub calls_dialed: u64,
    pub calls_connected: u64,
    pub meetings_booked: u64,
}

impl From<LatestWeekSummary> for GqlLatestWeek {
    fn from(latest: LatestWeekSummary) -> Self {
        Self {
            label: latest.label,
            new_leads: latest.new_leads,
            emails_delivered: latest.emails_delivered,
            linkedin_activity: latest.linkedin_activity,
            calls_dialed: latest.calls_dialed,
            calls_connected: latest.calls_connected,
            meetings_booked: latest.meetings_booked,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlSummary {
    pub total_meetings: u64,
    pub total_new_leads: u64,
    pub total_outbound_all_time: u64,
    pub total_calls_dialed: u64,
    pub total_calls_connected: u64,
    pub lead_conversion_rate: String,
    pub call_connection_rate: String,
    pub activities_per_meeting: String,
}

impl From<AllTimeSummary> for GqlSummary {
    fn from(summary: AllTimeSummary) -> Self {
        Self {
            total_meetings: summary.total_meetings,
            total_new_leads: summary.total_new_leads,
            total_outbound_all_time: summary.total_outbound_all_time,
            total_calls_dialed: summary.total_calls_dialed,
            total_calls_connected: summary.total_calls_connected,
            lead_conversion_rate: summary.lead_conversion_rate.to_string(),
            call_connection_rate: summary.call_connection_rate.to_string(),
            activities_per_meeting: summary.activities_per_meeting.to_string(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlKpiCard {
    pub title: String,
    pub value: String,
    pub subtext: String,
}

impl From<KpiCard> for GqlKpiCard {
    fn from(card: KpiCard) -> Self {
        Self {
            title: card.title.to_string(),
            value: card.value,
            subtext: card.subtext.to_string(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlProgressPoint {
    pub name: String,
    pub weekly_outbound: u64,
    pub cumulative_outbound: u64,
    #[graphql(name = "cumulativeYearlyGoalPace")]
    pub cumulative_goal_pace: u64,
}

impl From<ProgressPoint> for GqlProgressPoint {
    fn from(point: ProgressPoint) -> Self {
        Self {
            name: point.name,
            weekly_outbound: point.weekly_outbound,
            cumulative_outbound: point.cumulative_outbound,
            cumulative_goal_pace: point.cumulative_goal_pace,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDashboard {
    pub latest_week: Option<GqlLatestWeek>,
    pub summary: GqlSummary,
    pub cards: Vec<GqlKpiCard>,
    pub weekly_goal: u64,
    pub progress: Vec<GqlProgressPoint>,
}

impl From<Dashboard> for GqlDashboard {
    fn from(dashboard: Dashboard) -> Self {
        Self {
            latest_week: dashboard.latest_week.map(Into::into),
            summary: dashboard.summary.into(),
            cards: dashboard.cards.into_iter().map(Into::into).collect(),
            weekly_goal: dashboard.progress.weekly_goal,
            progress: dashboard.progress.points.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// True until the first snapshot of the weekly collection has been read.
    async fn loading(&self, context: &Context<'_>) -> bool {
        let state = context.data_unchecked::<AppState>();
        state.dashboard.borrow().dashboard().is_none()
    }

    /// `null` while loading.
    async fn dashboard(&self, context: &Context<'_>) -> Option<GqlDashboard> {
        let state = context.data_unchecked::<AppState>();
        let dashboard = state.dashboard.borrow().dashboard().cloned();
        dashboard.map(Into::into)
    }

    async fn weeks(&self, context: &Context<'_>) -> Vec<GqlWeek> {
        let state = context.data_unchecked::<AppState>();
        let history = state
            .dashboard
            .borrow()
            .dashboard()
            .map(|dashboard| dashboard.history.clone())
            .unwrap_or_default();
        history.into_iter().map(Into::into).collect()
    }
}
