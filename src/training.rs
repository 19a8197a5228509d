//! training.rs
//!
//! Training summary for a `steps,activity,duration` record.
use tracing::{debug, warn};

use crate::{
    calories::{distance, duration_hours, mean_speed, spent_calories},
    errors::StepStatError,
    models::{BodyMetrics, TrainingRecord},
    parser::parse_training,
    traits::InfoReport,
};

impl InfoReport for TrainingRecord {
    fn info(&self, body: &BodyMetrics) -> Result<String, StepStatError> {
        let calories = spent_calories(
            self.activity,
            self.steps,
            body.weight,
            body.height,
            self.duration,
        )?;
        let distance_km = distance(self.steps, body.height);
        let speed = mean_speed(distance_km, self.duration);
        debug!(activity = %self.activity, distance_km, speed, calories, "training summary");

        Ok(format!(
            "Тип тренировки: {}\nДлительность: {:.2} ч.\nДистанция: {:.2} км.\nСкорость: {:.2} км/ч\nСожгли калорий: {:.2}",
            self.activity,
            duration_hours(self.duration),
            distance_km,
            speed,
            calories
        ))
    }
}

/// Summarise a `steps,activity,duration` record: activity, duration in
/// hours, distance, speed and calories.
///
/// Weight is in kg, height in cm. Body metrics are checked before the
/// record is parsed, so a bad weight is reported as `InvalidParameters`
/// whatever the record holds.
pub fn training_info(data: &str, weight: f64, height: f64) -> Result<String, StepStatError> {
    let report = BodyMetrics::new(weight, height)
        .and_then(|body| parse_training(data).and_then(|record| record.info(&body)));
    if let Err(ref e) = report {
        warn!(record = data, "training info rejected: {}", e);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_summary() {
        let summary = training_info("6000,Бег,45m", 70.0, 180.0).unwrap();
        assert_eq!(
            summary,
            "Тип тренировки: Бег\nДлительность: 0.75 ч.\nДистанция: 4.86 км.\nСкорость: 6.48 км/ч\nСожгли калорий: 340.20"
        );
    }

    #[test]
    fn walking_summary() {
        let summary = training_info("6000,Ходьба,45m", 70.0, 180.0).unwrap();
        assert!(summary.starts_with("Тип тренировки: Ходьба\n"));
        assert!(summary.ends_with("Сожгли калорий: 170.10"));
    }

    #[test]
    fn zero_weight_is_invalid_parameters() {
        for record in &["6000,Бег,45m", "abc,Плавание,", ""] {
            match training_info(record, 0.0, 175.0) {
                Err(StepStatError::InvalidParameters(_)) => (),
                other => panic!("unexpected {:?} for {}", other, record),
            }
        }
    }
}
