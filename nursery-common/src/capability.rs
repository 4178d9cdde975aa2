//! Capabilities exposed by collaborators.
//!
//! A [Collaborator] answers capability calls by name, so that any object able to answer them,
//! real or substitute, can be injected in its place. Real types additionally declare their
//! capability set through the [Interface] trait.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of an operation a collaborator may be able to perform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    /// Capability factory
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self(name.into())
    }

    /// Name of the capability
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Capability {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Capability {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Errors raised when a collaborator is asked to perform a capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// The receiver has no such capability.
    #[error("{receiver} does not support the capability '{capability}'")]
    NotSupported {
        /// Description of the receiver
        receiver: String,
        /// Requested capability
        capability: Capability,
    },

    /// The receiver is a double that was not told how to answer this capability.
    #[error("{double} received unexpected capability '{capability}' with no configured response")]
    Unconfigured {
        /// Description of the double
        double: String,
        /// Requested capability
        capability: Capability,
    },
}

/// An object another object depends on to perform part of its work.
#[cfg_attr(test, mockall::automock)]
pub trait Collaborator: Send + Sync {
    /// Perform the given capability and return its response.
    fn call(&self, capability: &Capability) -> Result<String, CapabilityError>;

    /// Human readable description of the collaborator, used in logs and errors.
    fn describe(&self) -> String;
}

/// Static declaration of the capabilities a real type exposes.
///
/// Verified doubles check their configuration against this declaration.
pub trait Interface {
    /// Name of the real type.
    const TYPE_NAME: &'static str;

    /// Names of the capabilities the real type performs.
    const CAPABILITIES: &'static [&'static str];

    /// Check if the real type declares the given capability.
    fn declares(capability: &Capability) -> bool {
        Self::CAPABILITIES.contains(&capability.name())
    }
}
