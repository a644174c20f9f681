//! Swimming workout.

use super::{TrainingRecord, Workout};
use crate::errors::{Result, positive};
use crate::models::WorkoutType;
use crate::units::M_IN_KM;

/// A swimming workout, counted in strokes.
///
/// Mean speed comes from pool length and lap count, while distance still
/// comes from the stroke count. Both end up in the summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    workout: Workout,
    pool_length_m: f64,
    lap_count: u32,
}

impl Swimming {
    const LEN_STROKE_M: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: u32,
    ) -> Result<Self> {
        Ok(Self {
            workout: Workout::new(action_count, duration_hours, weight_kg)?,
            pool_length_m: positive("pool_length_m", pool_length_m)?,
            lap_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn lap_count(&self) -> u32 {
        self.lap_count
    }
}

impl TrainingRecord for Swimming {
    fn workout_type(&self) -> WorkoutType {
        WorkoutType::Swimming
    }

    fn workout(&self) -> &Workout {
        &self.workout
    }

    fn step_length_m(&self) -> f64 {
        Self::LEN_STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.lap_count) / M_IN_KM / self.workout.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.workout.weight_kg()
    }
}
