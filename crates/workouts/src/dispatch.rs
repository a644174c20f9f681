//! Turns a raw sensor package into a typed workout record.

use tracing::debug;

use crate::errors::{Result, WorkoutError, count};
use crate::models::WorkoutType;
use crate::records::{Record, Running, Swimming, Walking};

/// Builds the record for `type_code` from its positional raw fields.
///
/// Field order per code:
/// - `SWM`: action_count, duration_hours, weight_kg, pool_length_m, lap_count
/// - `RUN`: action_count, duration_hours, weight_kg
/// - `WLK`: action_count, duration_hours, weight_kg, height_cm
pub fn create_record(type_code: &str, raw_fields: &[f64]) -> Result<Record> {
    let workout_type: WorkoutType = type_code.parse()?;

    debug!(%workout_type, ?raw_fields, "Dispatching workout package");

    let record: Record = match (workout_type, raw_fields) {
        (WorkoutType::Running, &[action, duration, weight]) => {
            Running::new(count("action_count", action)?, duration, weight)?.into()
        }
        (WorkoutType::Walking, &[action, duration, weight, height]) => {
            Walking::new(count("action_count", action)?, duration, weight, height)?.into()
        }
        (WorkoutType::Swimming, &[action, duration, weight, pool_length, laps]) => Swimming::new(
            count("action_count", action)?,
            duration,
            weight,
            pool_length,
            count("lap_count", laps)?,
        )?
        .into(),
        _ => {
            return Err(WorkoutError::InvalidFieldArity {
                workout_type: workout_type.code(),
                expected: workout_type.arity(),
                actual: raw_fields.len(),
            });
        }
    };

    Ok(record)
}
