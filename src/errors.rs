use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum StepStatError {
    #[fail(display = "InvalidFormat: {}", _0)]
    InvalidFormat (String),

    #[fail(display = "OutOfRange: {}", _0)]
    OutOfRange (String),

    #[fail(display = "UnknownActivity: {}", _0)]
    UnknownActivity (String),

    #[fail(display = "InvalidParameters: {}", _0)]
    InvalidParameters (String),
}

impl From<std::num::ParseIntError> for StepStatError {
    fn from(error: std::num::ParseIntError) -> Self {
        StepStatError::InvalidFormat(error.to_string())
    }
}

impl From<humantime::DurationError> for StepStatError {
    fn from(error: humantime::DurationError) -> Self {
        StepStatError::InvalidFormat(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind() {
        let err = StepStatError::OutOfRange("steps '-10' must be positive".to_string());
        assert_eq!(err.to_string(), "OutOfRange: steps '-10' must be positive");
    }

    #[test]
    fn parse_int_error_is_invalid_format() {
        let err: StepStatError = "abc".parse::<i64>().unwrap_err().into();
        match err {
            StepStatError::InvalidFormat(_) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn duration_error_is_invalid_format() {
        let err: StepStatError = humantime::parse_duration("soon").unwrap_err().into();
        match err {
            StepStatError::InvalidFormat(_) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
