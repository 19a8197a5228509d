//! parser.rs
//!
//! Splits a comma delimited record into typed fields. Durations use the
//! compound syntax understood by `humantime` (`45m`, `1h30m`, `1h 30m`).
use std::time::Duration;

use tracing::debug;

use crate::{
    constants::{DAY_RECORD_FIELDS, TRAINING_RECORD_FIELDS},
    errors::StepStatError,
    models::{Activity, DayRecord, TrainingRecord},
};

/// Split `data` on commas and trim each field. Fails unless exactly
/// `expected` fields come out.
pub fn split_record(data: &str, expected: usize) -> Result<Vec<&str>, StepStatError> {
    let parts: Vec<&str> = data.split(',').map(str::trim).collect();
    if parts.len() != expected {
        let shape = if expected == TRAINING_RECORD_FIELDS {
            "steps,activity,duration"
        } else {
            "steps,duration"
        };
        return Err(StepStatError::InvalidFormat(format!(
            "'{}': expected {} fields '{}', found {}",
            data,
            expected,
            shape,
            parts.len()
        )));
    }
    Ok(parts)
}

/// Parse a strictly positive step count.
pub fn parse_steps(field: &str) -> Result<u64, StepStatError> {
    let steps: i64 = field.parse().map_err(|e| {
        StepStatError::InvalidFormat(format!("steps '{}': expected an integer ({})", field, e))
    })?;
    if steps <= 0 {
        return Err(StepStatError::OutOfRange(format!(
            "steps '{}' must be positive",
            field
        )));
    }
    Ok(steps as u64)
}

/// Parse an activity label.
pub fn parse_activity(field: &str) -> Result<Activity, StepStatError> {
    field.parse()
}

/// Parse a strictly positive duration such as `45m` or `1h30m`.
pub fn parse_duration(field: &str) -> Result<Duration, StepStatError> {
    // a well-formed negative duration is out of range, not malformed
    if let Some(magnitude) = field.strip_prefix('-') {
        if humantime::parse_duration(magnitude.trim()).is_ok() {
            return Err(StepStatError::OutOfRange(format!(
                "duration '{}' must be positive",
                field
            )));
        }
    }
    let duration = humantime::parse_duration(field).map_err(|e| {
        StepStatError::InvalidFormat(format!(
            "duration '{}': expected a value like '45m' or '1h30m' ({})",
            field, e
        ))
    })?;
    if duration == Duration::from_secs(0) {
        return Err(StepStatError::OutOfRange(format!(
            "duration '{}' must be positive",
            field
        )));
    }
    Ok(duration)
}

/// Parse a `steps,duration` record.
pub fn parse_package(data: &str) -> Result<DayRecord, StepStatError> {
    let parts = split_record(data, DAY_RECORD_FIELDS)?;
    let record = DayRecord {
        steps: parse_steps(parts[0])?,
        duration: parse_duration(parts[1])?,
    };
    debug!(steps = record.steps, duration = ?record.duration, "parsed day record");
    Ok(record)
}

/// Parse a `steps,activity,duration` record.
pub fn parse_training(data: &str) -> Result<TrainingRecord, StepStatError> {
    let parts = split_record(data, TRAINING_RECORD_FIELDS)?;
    let record = TrainingRecord {
        steps: parse_steps(parts[0])?,
        activity: parse_activity(parts[1])?,
        duration: parse_duration(parts[2])?,
    };
    debug!(
        steps = record.steps,
        activity = %record.activity,
        duration = ?record.duration,
        "parsed training record"
    );
    Ok(record)
}
