use crate::support::constraint::ConstraintError;

use super::{Measurement, UnitSystem, ValidationError};

/// Parses the two text fields and produces a valid [`Measurement`].
///
/// Inputs are interpreted in the unit system's native units: kg and cm for
/// metric, lbs and in for imperial. Whitespace around a field is ignored.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the offending field if either input
/// is empty, not a number, zero, or negative. No BMI is computed on failure.
///
/// # Example
///
/// ```
/// use bmi_models::models::bmi::{UnitSystem, validate};
///
/// assert!(validate("70", "175", UnitSystem::Metric).is_ok());
/// assert!(validate("abc", "175", UnitSystem::Metric).is_err());
/// assert!(validate("70", "0", UnitSystem::Metric).is_err());
/// ```
pub fn validate(
    weight_input: &str,
    height_input: &str,
    unit_system: UnitSystem,
) -> Result<Measurement, ValidationError> {
    let weight =
        parse_field(weight_input).map_err(|source| ValidationError::Weight { source })?;
    let height =
        parse_field(height_input).map_err(|source| ValidationError::Height { source })?;

    Measurement::new(weight, height, unit_system)
}

// An empty or unparseable field reports the same violation as a literal NaN.
fn parse_field(input: &str) -> Result<f64, ConstraintError> {
    input.trim().parse().map_err(|_| ConstraintError::NotANumber)
}
