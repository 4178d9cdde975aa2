use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use nursery_common::{
    StdResult,
    capability::{Capability, Collaborator, Interface},
    double::{DoubleConfigurationError, double, instance_double},
};

use crate::Rattle;

/// Prefix of the environment variables overriding a [DoubleConfiguration] loaded from a file.
const ENVIRONMENT_PREFIX: &str = "NURSERY_DOUBLE";

/// Error type for the double builder.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DoubleBuilderError {
    /// The double is verified against a type that is not known.
    #[error("can not verify a double against unknown type '{0}'")]
    UnknownInterface(String),

    /// The double configuration was rejected.
    #[error("invalid double configuration: {0}")]
    Configuration(#[from] DoubleConfigurationError),
}

/// Declarative description of a double.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoubleConfiguration {
    /// Name of the double, used to describe unverified doubles.
    pub name: String,

    /// Name of the real type the double is verified against.
    ///
    /// The double is unverified when not set.
    #[serde(default)]
    pub verified_against: Option<String>,

    /// Response of each stubbed capability.
    #[serde(default)]
    pub stubs: BTreeMap<Capability, String>,
}

impl DoubleConfiguration {
    /// Read a configuration from a JSON document.
    pub fn from_json(json: &str) -> StdResult<Self> {
        Config::builder()
            .add_source(File::from_str(json, FileFormat::Json))
            .build()
            .and_then(|config| config.try_deserialize())
            .with_context(|| "Invalid double configuration document")
    }

    /// Read a configuration from a file, the format being deduced from its extension.
    ///
    /// Values can be overridden by `NURSERY_DOUBLE_` prefixed environment variables, nested
    /// keys being separated by `__` (ie: `NURSERY_DOUBLE_STUBS__SHAKE`).
    pub fn load(path: &Path) -> StdResult<Self> {
        Self::load_with_environment(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENVIRONMENT_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_with_environment(path: &Path, environment: Environment) -> StdResult<Self> {
        Config::builder()
            .add_source(File::from(path))
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize())
            .with_context(|| {
                format!(
                    "Could not load double configuration from '{}'",
                    path.display()
                )
            })
    }

    /// Build the configured double.
    pub fn build(&self) -> Result<Arc<dyn Collaborator>, DoubleBuilderError> {
        match self.verified_against.as_deref() {
            None => Ok(Arc::new(
                double(self.name.clone()).with_stubs(self.stubs.clone()),
            )),
            Some(type_name) if type_name == Rattle::TYPE_NAME => self.build_verified::<Rattle>(),
            Some(unknown) => Err(DoubleBuilderError::UnknownInterface(unknown.to_string())),
        }
    }

    fn build_verified<T: Interface + 'static>(
        &self,
    ) -> Result<Arc<dyn Collaborator>, DoubleBuilderError> {
        let double = instance_double::<T>().with_stubs(self.stubs.clone())?;

        Ok(Arc::new(double))
    }
}
