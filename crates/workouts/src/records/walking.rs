//! Sports walking workout.

use super::{TrainingRecord, Workout};
use crate::errors::{Result, positive};
use crate::models::WorkoutType;

/// A sports walking workout, counted in steps.
///
/// Calories depend on the walker's height through a floored
/// speed-squared-over-height term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    workout: Workout,
    height_cm: f64,
}

impl Walking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_EXPONENT: i32 = 2;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        Ok(Self {
            workout: Workout::new(action_count, duration_hours, weight_kg)?,
            height_cm: positive("height_cm", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl TrainingRecord for Walking {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Walking
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.workout.weight_kg();
        // Floor division, kept for output compatibility with existing reports.
        let speed_term =
            (self.mean_speed_kmh().powi(Self::CALORIES_SPEED_EXPONENT) / self.height_cm).floor();

        (Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.duration_minutes()
    }
}
