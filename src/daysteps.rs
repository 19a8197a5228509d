//! daysteps.rs
//!
//! Daily step summary for a `steps,duration` record.
use tracing::{debug, warn};

use crate::{
    calories::{distance, walking_spent_calories},
    errors::StepStatError,
    models::{BodyMetrics, DayRecord},
    parser::parse_package,
    traits::InfoReport,
};

impl InfoReport for DayRecord {
    fn info(&self, body: &BodyMetrics) -> Result<String, StepStatError> {
        let distance_km = distance(self.steps, body.height);
        let calories = walking_spent_calories(self.steps, body.weight, body.height, self.duration)?;
        debug!(steps = self.steps, distance_km, calories, "day summary");

        Ok(format!(
            "Количество шагов: {}.\nДистанция составила {:.2} км.\nВы сожгли {:.2} ккал.",
            self.steps, distance_km, calories
        ))
    }
}

/// Summarise a `steps,duration` record: step count, distance and calories.
///
/// Weight is in kg, height in cm. Body metrics are checked before the
/// record is parsed.
pub fn day_action_info(data: &str, weight: f64, height: f64) -> Result<String, StepStatError> {
    let report = BodyMetrics::new(weight, height)
        .and_then(|body| parse_package(data).and_then(|record| record.info(&body)));
    if let Err(ref e) = report {
        warn!(record = data, "day action info rejected: {}", e);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn summary_lists_steps_distance_and_calories() {
        let summary = day_action_info("6000,45m", 70.0, 180.0).unwrap();
        assert_eq!(
            summary,
            "Количество шагов: 6000.\nДистанция составила 4.86 км.\nВы сожгли 170.10 ккал."
        );
    }

    #[test]
    fn record_renders_like_entry_point() {
        let record = DayRecord { steps: 6000, duration: Duration::from_secs(45 * 60) };
        let body = BodyMetrics::new(70.0, 180.0).unwrap();
        assert_eq!(record.info(&body).unwrap(), day_action_info("6000,45m", 70.0, 180.0).unwrap());
    }

    #[test]
    fn bad_height_wins_over_bad_record() {
        match day_action_info("nonsense", 70.0, 0.0) {
            Err(StepStatError::InvalidParameters(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
