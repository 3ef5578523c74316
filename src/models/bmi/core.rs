//! BMI evaluation core.
//!
//! The pipeline is deliberately small: raw text fields are parsed and
//! checked once ([`validate`]), producing a [`Measurement`] that is valid by
//! construction; [`evaluate`] applies the unit system's exact formula; and
//! [`Bmi::classify`] places the result in one of four bands.

mod classification;
mod error;
mod evaluate;
mod measurement;
mod validate;

pub use classification::{
    Bmi, Classification, IDEAL_LIMIT, NORMAL_LIMIT, OVERWEIGHT_LIMIT, UNDERWEIGHT_LIMIT,
};
pub use error::ValidationError;
pub use evaluate::evaluate;
pub use measurement::{Measurement, UnitSystem};
pub use validate::validate;
