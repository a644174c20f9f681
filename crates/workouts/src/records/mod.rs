//! Workout records and their calculations.
//!
//! Every variant wraps a [`Workout`] holding the raw sensor readings and
//! implements [`TrainingRecord`] with its own calorie formula. [`Workout`]
//! itself does not implement the trait and has no calorie formula.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::errors::{Result, positive};
use crate::models::WorkoutType;
use crate::summary::Summary;
use crate::units::{LEN_STEP_M, M_IN_KM, MIN_IN_H};

/// Raw readings common to every workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    /// Steps or strokes, depending on the workout type.
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Workout {
    /// Validates and stores the shared readings.
    ///
    /// Duration and weight must be finite and strictly positive.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action_count,
            duration_hours: positive("duration_hours", duration_hours)?,
            weight_kg: positive("weight_kg", weight_kg)?,
        })
    }

    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Calculations available on every concrete workout.
///
/// Implementations must provide the base fields and a calorie formula.
/// The remaining methods have defaults derived from those.
pub trait TrainingRecord {
    /// The workout type this record belongs to.
    fn workout_type(&self) -> WorkoutType;

    /// Shared raw readings.
    fn workout(&self) -> &Workout;

    /// Calories spent during the workout, in kcal.
    fn spent_calories(&self) -> f64;

    /// Distance covered by one action unit, in meters.
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.workout().action_count) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.workout().duration_hours
    }

    fn duration_minutes(&self) -> f64 {
        self.workout().duration_hours * MIN_IN_H
    }

    /// Builds a read-only summary of the computed metrics.
    fn summarize(&self) -> Summary {
        Summary {
            workout_type: self.workout_type().label().to_string(),
            duration_hours: self.workout().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

/// A workout of any supported type, as produced by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Record {
    fn inner(&self) -> &dyn TrainingRecord {
        match self {
            Record::Running(r) => r,
            Record::Walking(w) => w,
            Record::Swimming(s) => s,
        }
    }
}

impl TrainingRecord for Record {
    fn workout_type(&self) -> WorkoutType {
        self.inner().workout_type()
    }

    fn workout(&self) -> &Workout {
        self.inner().workout()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }

    fn step_length_m(&self) -> f64 {
        self.inner().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.inner().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.inner().mean_speed_kmh()
    }
}

impl From<Running> for Record {
    fn from(value: Running) -> Self {
        Record::Running(value)
    }
}

impl From<Walking> for Record {
    fn from(value: Walking) -> Self {
        Record::Walking(value)
    }
}

impl From<Swimming> for Record {
    fn from(value: Swimming) -> Self {
        Record::Swimming(value)
    }
}
