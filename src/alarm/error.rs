use thiserror::Error;

use crate::alarm::Day;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlarmError {
    #[error("invalid time {hour}:{minute}; hour must be 0-23 and minute 0-59")]
    InvalidTimeValue { hour: i64, minute: i64 },
    #[error("day map is missing key '{}'", .0.key())]
    MissingDayKey(Day),
    #[error("unknown day key '{0}'")]
    UnknownDayKey(String),
    #[error("invalid alarm id '{0}'")]
    InvalidId(String),
    #[error("malformed alarm record: {0}")]
    MalformedRecord(String),
    #[error("failed to encode alarm record: {0}")]
    Encode(String),
}
