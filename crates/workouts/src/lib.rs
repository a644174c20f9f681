//! Workout metric calculations.
//!
//! This crate turns raw sensor packages for running, sports walking and
//! swimming into distance, mean speed and calorie figures, and renders them
//! as fixed-format report lines.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use workouts::prelude::*;
//!
//! let record = create_record("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", record.summarize());
//! ```

pub mod dispatch;
pub mod errors;
pub mod models;
pub mod records;
pub mod summary;
pub mod units;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::dispatch::create_record;
    pub use crate::errors::{Result, WorkoutError};
    pub use crate::models::WorkoutType;
    pub use crate::records::{Record, Running, Swimming, TrainingRecord, Walking, Workout};
    pub use crate::summary::{Summary, format_summary};
}
