use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::modules::weekly_metrics::use_cases::record_week::command::RecordWeek;
use crate::shell::state::AppState;

/// Form input. Counters left out are recorded as 0.
#[derive(InputObject, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecordWeekInput {
    pub week_start_date: String,
    pub new_leads: Option<f64>,
    pub emails_delivered: Option<f64>,
    pub emails_opened: Option<f64>,
    pub emails_replied: Option<f64>,
    pub profile_visits: Option<f64>,
    pub connection_requests: Option<f64>,
    pub likes: Option<f64>,
    pub messages_sent: Option<f64>,
    pub calls_dialed: Option<f64>,
    pub calls_connected: Option<f64>,
    pub meetings_booked: Option<f64>,
}

impl From<RecordWeekInput> for RecordWeek {
    fn from(input: RecordWeekInput) -> Self {
        let counts: Map<String, Value> = match serde_json::to_value(&input) {
            Ok(Value::Object(mut fields)) => {
                fields.remove("weekStartDate");
                fields.retain(|_, value| !value.is_null());
                fields
            }
            _ => Map::new(),
        };
        RecordWeek {
            week_start_date: input.week_start_date,
            counts,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Records a week, replacing any week with the same start date. Returns the week key.
    async fn record_week(
        &self,
        context: &Context<'_>,
        input: RecordWeekInput,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let week_start_date = state
            .record_week_handler
            .handle(input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(week_start_date.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod record_week_graphql_inbound_tests {
    use super::*;
    use crate::shell::graphql::build_schema;
    use crate::tests::fixtures::app_state::{make_signed_in_state, make_signed_out_state};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_turn_the_input_into_a_command() {
        let command = RecordWeek::from(RecordWeekInput {
            week_start_date: "2025-06-09".into(),
            new_leads: Some(70.0),
            likes: Some(12.0),
            ..Default::default()
        });
        assert_eq!(command.week_start_date, "2025-06-09");
        assert_eq!(command.counts.len(), 2);
        assert_eq!(command.counts["newLeads"], json!(70.0));
    }

    #[tokio::test]
    async fn it_should_record_a_week_through_the_mutation() {
        let (state, _) = make_signed_in_state().await;
        let schema = build_schema(state);
        let response = schema
            .execute(
                r#"mutation { recordWeek(input: { weekStartDate: "2025-06-16", newLeads: 99, callsDialed: 103 }) }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["recordWeek"], "2025-06-16");
    }

    #[tokio::test]
    async fn it_should_surface_the_error_message_when_signed_out() {
        let schema = build_schema(make_signed_out_state());
        let response = schema
            .execute(r#"mutation { recordWeek(input: { weekStartDate: "2025-06-16" }) }"#)
            .await;
        assert_eq!(
            response.errors[0].message,
            "Authentication error. Cannot add data."
        );
    }
}
