use uom::si::{
    length::{centimeter, inch},
    mass::{kilogram, pound},
};

use super::{Bmi, Measurement, UnitSystem};

/// Computes the body mass index for a validated measurement.
///
/// Each unit system uses its own exact formula rather than a shared
/// unit-converted one:
///
/// - metric: `w_kg / (h_cm / 100)^2`
/// - imperial: `703 * w_lbs / h_in^2`
///
/// The imperial `703` factor is the conventional rounded constant, so the
/// two formulas agree only approximately for equivalent measurements.
/// No rounding is applied here.
///
/// # Example
///
/// ```
/// use bmi_models::models::bmi::{Measurement, UnitSystem, evaluate};
///
/// let m = Measurement::new(70.0, 175.0, UnitSystem::Metric)?;
/// assert_eq!(format!("{:.2}", evaluate(&m).value()), "22.86");
/// # Ok::<(), bmi_models::models::bmi::ValidationError>(())
/// ```
#[must_use]
pub fn evaluate(measurement: &Measurement) -> Bmi {
    let value = match measurement.unit_system() {
        UnitSystem::Metric => {
            let height_m = measurement.height().get::<centimeter>() / 100.0;
            measurement.weight().get::<kilogram>() / (height_m * height_m)
        }
        UnitSystem::Imperial => {
            let height_in = measurement.height().get::<inch>();
            703.0 * measurement.weight().get::<pound>() / (height_in * height_in)
        }
    };

    Bmi::new(value)
}
