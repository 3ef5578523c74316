//! Public models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. Anything
//! layered on top of a core (such as the [`bmi::form`] reducer) is a thin
//! adapter that delegates to the core API.

pub mod bmi;
