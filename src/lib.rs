//! # BMI Models
//!
//! Domain models for body mass index evaluation: typed measurements,
//! the exact metric and imperial BMI formulas, a four-band classification
//! ladder, and a pure reducer for the calculator form built on top of them.
//!
//! ## Crate layout
//!
//! - [`models`]: the BMI evaluator and its form reducer.
//! - [`support`]: supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use bmi_models::models::bmi::{Classification, UnitSystem, evaluate, validate};
//!
//! let measurement = validate("70", "175", UnitSystem::Metric)?;
//! let bmi = evaluate(&measurement);
//!
//! assert_eq!(bmi.classify(), Classification::Normal);
//! assert_eq!(format!("{:.2}", bmi.value()), "22.86");
//! # Ok::<(), bmi_models::models::bmi::ValidationError>(())
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
