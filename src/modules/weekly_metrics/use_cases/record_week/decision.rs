#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Week Start Date is required.")]
    MissingWeekStartDate,

    #[error("Week Start Date {0:?} is not a valid date.")]
    InvalidWeekStartDate(String),
}
