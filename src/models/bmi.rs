//! Body mass index model.
//!
//! The computational core (validation, evaluation, classification) is in the
//! internal [`core`] module and re-exported here. The [`form`] module layers
//! a pure state reducer over the core for driving the calculator UI.

mod core;
pub mod form;

pub use self::core::{
    Bmi, Classification, IDEAL_LIMIT, Measurement, NORMAL_LIMIT, OVERWEIGHT_LIMIT,
    UNDERWEIGHT_LIMIT, UnitSystem, ValidationError, evaluate, validate,
};
