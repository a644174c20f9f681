//! Running workout.

use super::{TrainingRecord, Workout};
use crate::errors::Result;
use crate::models::WorkoutType;
use crate::units::M_IN_KM;

/// A running workout, counted in steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    workout: Workout,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            workout: Workout::new(action_count, duration_hours, weight_kg)?,
        })
    }
}

impl TrainingRecord for Running {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Running
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - Self::CALORIES_SPEED_SHIFT)
            * self.workout.weight_kg()
            / M_IN_KM
            * self.duration_minutes()
    }
}
