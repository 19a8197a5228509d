//! constants.rs
//!
//! Constants for project. Every ratio, coefficient and unit conversion
//! used by the calculator lives here.

/// Stride length as a fraction of the walker's height
pub const STEP_LENGTH_RATIO: f64 = 0.45;

/// Calories burned walking relative to running at the same speed
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Number of metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Number of centimetres in a metre. Height is supplied in centimetres.
pub const CM_IN_M: f64 = 100.0;

/// Number of minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Number of seconds in an hour
pub const SECS_PER_HOUR: f64 = 3600.0;

/// Number of seconds in a minute
pub const SECS_PER_MIN: f64 = 60.0;

/// Field count of a `steps,duration` record
pub const DAY_RECORD_FIELDS: usize = 2;

/// Field count of a `steps,activity,duration` record
pub const TRAINING_RECORD_FIELDS: usize = 3;

/// Accepted label for a running session
pub const RUNNING_LABEL: &str = "Бег";

/// Accepted label for a walking session
pub const WALKING_LABEL: &str = "Ходьба";
