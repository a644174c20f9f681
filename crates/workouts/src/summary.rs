//! Computed workout summaries and their message format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fractional digits shown for every number in a summary message.
const PRECISION: usize = 3;

/// Metrics computed for a single workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Label of the workout variant, e.g. `Running`.
    pub workout_type: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Summary {
    /// Renders the summary as a single report line.
    pub fn message(&self) -> String {
        format_summary(self)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {} ч.; Дистанция: {} км; Ср. скорость: {} км/ч; Потрачено ккал: {}.",
            self.workout_type,
            fixed(self.duration_hours),
            fixed(self.distance_km),
            fixed(self.mean_speed_kmh),
            fixed(self.calories_kcal),
        )
    }
}

/// Formats a summary as its report line.
pub fn format_summary(summary: &Summary) -> String {
    summary.to_string()
}

/// Fixed-point rendering with [`PRECISION`] fractional digits.
///
/// Rounds half away from zero on the shortest decimal form of `value`, so
/// `700.0875` becomes `700.088` even though its binary value sits just below
/// the midpoint.
fn fixed(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let frac = frac_part.as_bytes();
    digits.extend((0..PRECISION).map(|i| frac.get(i).copied().unwrap_or(b'0')));

    if frac.get(PRECISION).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - PRECISION;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&b| b as char));
    out.push('.');
    out.extend(digits[split..].iter().map(|&b| b as char));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_summary() -> Summary {
        Summary {
            workout_type: "Running".to_string(),
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_kcal: 700.0875,
        }
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(
            format_summary(&running_summary()),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 700.088."
        );
    }

    #[test]
    fn test_message_matches_display() {
        let summary = running_summary();
        assert_eq!(summary.message(), summary.to_string());
    }

    #[test]
    fn test_fixed_rounding() {
        assert_eq!(fixed(700.0875), "700.088");
        assert_eq!(fixed(0.9936), "0.994");
        assert_eq!(fixed(0.0004), "0.000");
        assert_eq!(fixed(0.0005), "0.001");
        assert_eq!(fixed(336.0), "336.000");
        assert_eq!(fixed(157.50000000000003), "157.500");
        assert_eq!(fixed(9.9996), "10.000");
        assert_eq!(fixed(999.9999), "1000.000");
        assert_eq!(fixed(0.0), "0.000");
    }

    #[test]
    fn test_fixed_negative_values() {
        assert_eq!(fixed(-20.0), "-20.000");
        assert_eq!(fixed(-1.2345), "-1.235");
    }
}
