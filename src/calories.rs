//! calories.rs
//!
//! Distance, speed and calorie formulas. Stride length is
//! `STEP_LENGTH_RATIO` of the walker's height, with height in centimetres.
//! Calories follow the linear `weight * speed * minutes / 60` model, scaled
//! down by `WALKING_CALORIES_COEFFICIENT` for walking.
use std::time::Duration;

use crate::{
    constants::{
        CM_IN_M, MIN_IN_H, M_IN_KM, SECS_PER_HOUR, SECS_PER_MIN, STEP_LENGTH_RATIO,
        WALKING_CALORIES_COEFFICIENT,
    },
    errors::StepStatError,
    models::{is_positive, Activity},
};

pub fn duration_hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECS_PER_HOUR
}

pub fn duration_minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / SECS_PER_MIN
}

/// Stride length in metres for a height in centimetres.
pub fn step_length(height: f64) -> f64 {
    height / CM_IN_M * STEP_LENGTH_RATIO
}

/// Distance in km covered by `steps` strides.
pub fn distance(steps: u64, height: f64) -> f64 {
    steps as f64 * step_length(height) / M_IN_KM
}

/// Mean speed in km/h. A zero duration yields 0 rather than infinity.
pub fn mean_speed(distance_km: f64, duration: Duration) -> f64 {
    if duration == Duration::from_secs(0) {
        return 0.0;
    }
    distance_km / duration_hours(duration)
}

fn validate(steps: u64, weight: f64, height: f64, duration: Duration) -> Result<(), StepStatError> {
    if steps == 0 || !is_positive(weight) || !is_positive(height) || duration == Duration::from_secs(0) {
        return Err(StepStatError::InvalidParameters(format!(
            "steps {}, weight {}, height {} and duration {:?} must all be positive",
            steps, weight, height, duration
        )));
    }
    Ok(())
}

/// Calories burned running.
pub fn running_spent_calories(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, StepStatError> {
    validate(steps, weight, height, duration)?;
    let speed = mean_speed(distance(steps, height), duration);
    let calories = weight * speed * duration_minutes(duration) / MIN_IN_H;
    if !calories.is_finite() {
        return Err(StepStatError::InvalidParameters(format!(
            "steps {}, weight {}, height {} and duration {:?} overflow the calorie figure",
            steps, weight, height, duration
        )));
    }
    Ok(calories)
}

/// Calories burned walking: the running figure scaled by
/// `WALKING_CALORIES_COEFFICIENT`.
pub fn walking_spent_calories(
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, StepStatError> {
    Ok(running_spent_calories(steps, weight, height, duration)? * WALKING_CALORIES_COEFFICIENT)
}

pub fn spent_calories(
    activity: Activity,
    steps: u64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> Result<f64, StepStatError> {
    match activity {
        Activity::Running => running_spent_calories(steps, weight, height, duration),
        Activity::Walking => walking_spent_calories(steps, weight, height, duration),
    }
}
