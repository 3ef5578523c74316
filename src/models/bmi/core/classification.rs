use crate::support::locale::Language;

/// Upper bound of the underweight band.
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;

/// Upper bound of the normal band.
pub const NORMAL_LIMIT: f64 = 24.9;

/// Upper bound of the overweight band.
pub const OVERWEIGHT_LIMIT: f64 = 29.9;

/// Upper edge of the advisory "ideal" band.
///
/// Deliberately not [`NORMAL_LIMIT`]: the advisory flags results at or above
/// 25.0, so a BMI of 24.95 classifies as overweight yet still counts as
/// ideal.
pub const IDEAL_LIMIT: f64 = 25.0;

/// One of the four BMI bands, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl Classification {
    /// The localized display label for this band.
    #[must_use]
    pub fn label(self, language: Language) -> &'static str {
        let statuses = &language.texts().statuses;
        match self {
            Classification::Underweight => statuses.underweight,
            Classification::Normal => statuses.normal,
            Classification::Overweight => statuses.overweight,
            Classification::Obese => statuses.obese,
        }
    }
}

/// A computed body mass index on the kg/m² scale.
///
/// Carries full precision; rendering to two decimal places is a view
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bmi(f64);

impl Bmi {
    /// Wraps a raw BMI value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw BMI value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Places this BMI in one of the four bands.
    ///
    /// The ladder is evaluated in order and the first match wins:
    /// `< 18.5` underweight, `< 24.9` normal, `< 29.9` overweight, otherwise
    /// obese. The 24.9 and 29.9 cutoffs are intentional; they must not be
    /// normalized to the clinical 25/30 boundaries.
    ///
    /// ```
    /// use bmi_models::models::bmi::{Bmi, Classification};
    ///
    /// assert_eq!(Bmi::new(22.86).classify(), Classification::Normal);
    /// assert_eq!(Bmi::new(24.9).classify(), Classification::Overweight);
    /// ```
    #[must_use]
    pub fn classify(self) -> Classification {
        if self.0 < UNDERWEIGHT_LIMIT {
            Classification::Underweight
        } else if self.0 < NORMAL_LIMIT {
            Classification::Normal
        } else if self.0 < OVERWEIGHT_LIMIT {
            Classification::Overweight
        } else {
            Classification::Obese
        }
    }

    /// Whether this BMI falls in the advisory ideal band `18.5 <= bmi < 25`.
    #[must_use]
    pub fn within_ideal_range(self) -> bool {
        self.0 >= UNDERWEIGHT_LIMIT && self.0 < IDEAL_LIMIT
    }
}
