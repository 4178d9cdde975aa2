//! Substitutes for collaborators.
//!
//! Two flavours are provided:
//! - [Double], built by [double], answers any capability it is stubbed with, whether or not a
//!   real collaborator would be able to perform it.
//! - [InstanceDouble], built by [instance_double], is verified against a real type
//!   [Interface]: stubbing a capability the real type does not declare is rejected when the
//!   double is configured.
//!
//! Each factory call produces an independent double, nothing is shared between them.

mod unverified;
mod verified;

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::capability::{Capability, Interface};

pub use unverified::Double;
pub use verified::InstanceDouble;

/// Errors raised while configuring a double.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoubleConfigurationError {
    /// A verified double was stubbed with a capability absent from its real type.
    #[error("the {type_name} type does not implement the capability '{capability}'")]
    UndeclaredCapability {
        /// Name of the real type the double is verified against
        type_name: &'static str,
        /// Rejected capability
        capability: Capability,
    },
}

/// Create an unverified double with the given name.
pub fn double<T: Into<String>>(name: T) -> Double {
    Double::new(name)
}

/// Create a double verified against the capabilities declared by `T`.
pub fn instance_double<T: Interface>() -> InstanceDouble<T> {
    InstanceDouble::new()
}

/// Count of the capabilities received by a double.
#[derive(Debug, Default)]
struct ReceivedCalls {
    calls: Mutex<BTreeMap<Capability, usize>>,
}

impl ReceivedCalls {
    fn record(&self, capability: &Capability) {
        let mut calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        *calls.entry(capability.clone()).or_default() += 1;
    }

    fn count(&self, capability: &Capability) -> usize {
        let calls = self.calls.lock().unwrap_or_else(PoisonError::into_inner);
        calls.get(capability).copied().unwrap_or_default()
    }
}
