//! stepstat
//!
//! Turns `steps,duration` and `steps,activity,duration` records into
//! distance, speed and calorie summaries for walking and running.
//!
//! ```
//! let summary = stepstat::training_info("6000,Бег,45m", 70.0, 180.0).unwrap();
//! assert!(summary.contains("4.86 км"));
//! ```
pub mod calories;
pub mod constants;
pub mod daysteps;
pub mod errors;
pub mod models;
pub mod parser;
pub mod traits;
pub mod training;

pub use crate::daysteps::day_action_info;
pub use crate::training::training_info;
