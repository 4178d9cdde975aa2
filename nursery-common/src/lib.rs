#![warn(missing_docs)]

//! Shared datatypes and traits used by the nursery crates
//!
//! Provide:
//! - The [capability] model: the [Collaborator][capability::Collaborator] interface a
//!   dependent object talks to, and the [Interface][capability::Interface] declaration of a
//!   real type's capabilities.
//! - Substitutes for collaborators in the [double] module, either unverified ([double::double])
//!   or verified against a real type ([double::instance_double]).
//! - [logging] helpers for `slog`.
//! - useful test utilities, available with the `test_tools` feature, in the [test] module.

pub mod capability;
pub mod double;
pub mod logging;

#[cfg(any(test, feature = "test_tools"))]
pub mod test;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = anyhow::Result<T, StdError>;
