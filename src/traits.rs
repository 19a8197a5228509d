//! traits.rs
//!
//! Defines the InfoReport trait, implemented by the parsed records in
//! daysteps and training to render a summary for a given body.
use crate::{errors::StepStatError, models::BodyMetrics};

/// InfoReport provides the info method, which turns a parsed record
/// into the multi-line summary shown to the user.
pub trait InfoReport {
    fn info(&self, body: &BodyMetrics) -> Result<String, StepStatError>;
}
