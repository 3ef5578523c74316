use uom::si::{
    f64::{Length, Mass},
    length::{centimeter, inch},
    mass::{kilogram, pound},
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

use super::ValidationError;

/// The unit system a measurement was entered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitSystem {
    /// Kilograms and centimeters.
    #[default]
    Metric,
    /// Pounds and inches.
    Imperial,
}

impl UnitSystem {
    /// The parenthesized unit hint shown next to the weight field.
    #[must_use]
    pub fn weight_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "(kg)",
            UnitSystem::Imperial => "(lbs)",
        }
    }

    /// The parenthesized unit hint shown next to the height field.
    #[must_use]
    pub fn height_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "(cm)",
            UnitSystem::Imperial => "(in)",
        }
    }
}

/// A validated weight and height pair, tagged with its unit system.
///
/// Both quantities are strictly positive by construction, so evaluation
/// never has to re-check them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    weight: Constrained<Mass, StrictlyPositive>,
    height: Constrained<Length, StrictlyPositive>,
    unit_system: UnitSystem,
}

impl Measurement {
    /// Creates a measurement from scalar values in the unit system's native
    /// units (kg/cm for metric, lbs/in for imperial).
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field if either
    /// value is non-finite, zero, or negative.
    pub fn new(weight: f64, height: f64, unit_system: UnitSystem) -> Result<Self, ValidationError> {
        ensure_finite(weight).map_err(|source| ValidationError::Weight { source })?;
        ensure_finite(height).map_err(|source| ValidationError::Height { source })?;

        let (weight, height) = match unit_system {
            UnitSystem::Metric => (
                Mass::new::<kilogram>(weight),
                Length::new::<centimeter>(height),
            ),
            UnitSystem::Imperial => (Mass::new::<pound>(weight), Length::new::<inch>(height)),
        };

        Ok(Self {
            weight: StrictlyPositive::new(weight)
                .map_err(|source| ValidationError::Weight { source })?,
            height: StrictlyPositive::new(height)
                .map_err(|source| ValidationError::Height { source })?,
            unit_system,
        })
    }

    /// The weight quantity.
    #[must_use]
    pub fn weight(&self) -> Mass {
        *self.weight.as_ref()
    }

    /// The height quantity.
    #[must_use]
    pub fn height(&self) -> Length {
        *self.height.as_ref()
    }

    /// The unit system the measurement was entered in.
    #[must_use]
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }
}

// Infinities pass a positivity check but are not usable measurements.
fn ensure_finite(value: f64) -> Result<(), ConstraintError> {
    if value.is_infinite() {
        return Err(ConstraintError::NotANumber);
    }
    Ok(())
}
