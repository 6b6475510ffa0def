//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A weekday entry of the opening-hours table is malformed.
    /// `weekday` is the table index (0 = Sunday).
    #[error("Invalid opening hours for weekday {weekday}: {message}")]
    InvalidOpeningHours { weekday: usize, message: String },

    #[error("Opening hours table must have 7 entries, got {0}")]
    InvalidOpeningHoursLength(usize),

    #[error("Invalid datetime '{value}': {message}")]
    InvalidDatetime { value: String, message: String },

    #[error("Invalid interval: start {start} is after end {end}")]
    InvalidInterval { start: String, end: String },

    #[error("Invalid step: must be a positive number of minutes, got {0}")]
    InvalidStep(u32),

    #[error("Free/busy response has no calendar '{0}'")]
    MissingCalendar(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Configuration source error: {0}")]
    ConfigSource(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
