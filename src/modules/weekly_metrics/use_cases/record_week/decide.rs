// Pure decision function for recording a week.
//
// Responsibilities
// - Require a week start date and parse it.
// - Coerce every counter; nothing else is validated.
// - Never perform input or output.

use crate::modules::weekly_metrics::core::record::{WeeklyMetrics, parse_week_start_date};
use crate::modules::weekly_metrics::use_cases::record_week::command::RecordWeek;
use crate::modules::weekly_metrics::use_cases::record_week::decision::DecideError;

pub fn decide_record(command: RecordWeek) -> Result<WeeklyMetrics, DecideError> {
    let raw_date = command.week_start_date.trim();
    if raw_date.is_empty() {
        return Err(DecideError::MissingWeekStartDate);
    }
    let week_start_date = parse_week_start_date(raw_date)
        .ok_or_else(|| DecideError::InvalidWeekStartDate(raw_date.to_string()))?;
    Ok(WeeklyMetrics::from_fields(week_start_date, &command.counts))
}
