//! Error handling for winnower.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod removal_error;

pub use removal_error::RemovalError;
