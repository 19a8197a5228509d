//! models.rs
//!
//! Typed records produced by the parser, and the body metrics the
//! caller supplies alongside them.
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{RUNNING_LABEL, WALKING_LABEL};
use crate::errors::StepStatError;

/// Kind of training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Walking,
    Running,
}

impl Activity {
    /// The label used for this activity on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Walking => WALKING_LABEL,
            Activity::Running => RUNNING_LABEL,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Activity {
    type Err = StepStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RUNNING_LABEL => Ok(Activity::Running),
            WALKING_LABEL => Ok(Activity::Walking),
            _ => Err(StepStatError::UnknownActivity(format!(
                "'{}': expected '{}' or '{}'",
                s, RUNNING_LABEL, WALKING_LABEL
            ))),
        }
    }
}

/// Weight in kilograms and height in centimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub weight: f64,
    pub height: f64,
}

impl BodyMetrics {
    /// Build a `BodyMetrics`, rejecting anything that is not a strictly
    /// positive finite number.
    pub fn new(weight: f64, height: f64) -> Result<Self, StepStatError> {
        if !is_positive(weight) {
            return Err(StepStatError::InvalidParameters(format!(
                "weight '{}' must be a positive number of kg",
                weight
            )));
        }
        if !is_positive(height) {
            return Err(StepStatError::InvalidParameters(format!(
                "height '{}' must be a positive number of cm",
                height
            )));
        }
        Ok(Self { weight, height })
    }
}

/// A `steps,duration` record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    pub steps: u64,
    pub duration: Duration,
}

/// A `steps,activity,duration` record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingRecord {
    pub steps: u64,
    pub activity: Activity,
    pub duration: Duration,
}

// NaN and infinities are not positive
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
