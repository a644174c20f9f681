use thiserror::Error;

/// Errors raised while turning raw sensor fields into a workout record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("Invalid field count for {workout_type}: expected {expected}, got {actual}")]
    InvalidFieldArity {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {field}: {value} is not a non-negative whole number")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("Invalid {field}: {value} must be a positive finite number")]
    NonPositive { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, WorkoutError>;

/// Checks that a real-valued measurement is finite and strictly positive.
pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::NonPositive { field, value })
    }
}

/// Converts a raw reading into a whole, non-negative count.
pub(crate) fn count(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidCount { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_nan() {
        assert_eq!(positive("weight_kg", 75.0), Ok(75.0));
        assert!(positive("duration_hours", 0.0).is_err());
        assert!(positive("duration_hours", -1.0).is_err());
        assert!(positive("duration_hours", f64::NAN).is_err());
        assert!(positive("duration_hours", f64::INFINITY).is_err());
    }

    #[test]
    fn test_count_requires_whole_numbers() {
        assert_eq!(count("action_count", 0.0), Ok(0));
        assert_eq!(count("action_count", 15000.0), Ok(15000));
        assert_eq!(
            count("lap_count", 2.5),
            Err(WorkoutError::InvalidCount {
                field: "lap_count",
                value: 2.5
            })
        );
        assert!(count("lap_count", -1.0).is_err());
        assert!(count("lap_count", 1e12).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = WorkoutError::InvalidFieldArity {
            workout_type: "RUN",
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid field count for RUN: expected 3, got 2"
        );
        assert_eq!(
            WorkoutError::UnknownWorkoutType("XYZ".into()).to_string(),
            "Unknown workout type: XYZ"
        );
    }
}
