#![warn(missing_docs)]
//! Nursery crate documentation
//!
//! A [Baby] owns a rattle and can shake it, throw it, or add it to its toy collection.
//! The rattle is any [Collaborator][nursery_common::capability::Collaborator]: the real
//! [Rattle], or a double built from [nursery_common::double] or from a
//! [DoubleConfiguration].
//!
//! ```
//! use std::sync::Arc;
//! use nursery::{Baby, Rattle, SHAKE_RESPONSE};
//!
//! let baby = Baby::new(Arc::new(Rattle::new()));
//! assert_eq!(Ok(SHAKE_RESPONSE.to_string()), baby.shake_rattle());
//! assert!(baby.throw_rattle().is_err());
//! ```

mod baby;
mod configuration;
mod rattle;

pub use baby::{Baby, THROW};
pub use configuration::{DoubleBuilderError, DoubleConfiguration};
pub use rattle::{Rattle, SHAKE, SHAKE_RESPONSE};
