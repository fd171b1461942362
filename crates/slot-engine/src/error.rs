//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid slot duration: {0} minutes (must be at least 1)")]
    InvalidDuration(u32),

    #[error("Invalid request document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
