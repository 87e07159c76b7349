// Display formatting for labels and large counters, always in UTC, US English style.

use chrono::NaiveDate;

/// `Jun 9`
pub fn short_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `6/9/2025`
pub fn full_date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `4704` becomes `4,704`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
