// Primitive conversions shared by every module.
//
// Purpose
// - Turn loosely typed document and form values into the strict counters the domain works with.
//
// Boundaries
// - No input or output. Pure functions only.

use serde_json::Value;

/// Largest integer a JSON number holds exactly (2^53 - 1).
pub const MAX_COUNT: u64 = 9_007_199_254_740_991;

/// Coerce a raw field into a non-negative counter.
///
/// Numbers are used as-is, strings are read by their leading numeric prefix
/// (`"12 calls"` is 12), and everything else, including a missing field,
/// becomes 0. Negative and non-finite values become 0, fractions are
/// truncated and anything above [`MAX_COUNT`] is capped.
pub fn coerce_count(value: Option<&Value>) -> u64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_leading_number(s),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() && n > 0.0 => (n.trunc() as u64).min(MAX_COUNT),
        _ => 0,
    }
}

fn parse_leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    (1..=candidate_len)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
}
