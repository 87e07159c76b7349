// Command data type for recording one week of metrics, as submitted by the data-entry form.
//
// Purpose
// - Carry the raw form input: a week start date and up to eleven counters, each either a number
//   or the text typed into the field.
//
// Responsibilities
// - Be independent of the transport (HTTP or GraphQL). Coercion happens in the decider.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordWeek {
    #[serde(default)]
    pub week_start_date: String,
    #[serde(flatten)]
    pub counts: Map<String, Value>,
}
