use std::sync::Arc;

use slog::{Logger, debug, warn};

use nursery_common::{
    capability::{Capability, CapabilityError, Collaborator},
    logging::{LoggerExtensions, discard_logger},
};

use crate::{Rattle, SHAKE};

/// Name of the capability to throw a rattle, which real rattles do not have.
pub const THROW: &str = "throw";

/// A baby playing with its rattle.
///
/// The rattle is given at construction and kept for the whole life of the baby.
pub struct Baby {
    rattle: Arc<dyn Collaborator>,
    toys: Vec<Arc<dyn Collaborator>>,
    logger: Logger,
}

impl Baby {
    /// Create a baby playing with the given rattle.
    pub fn new(rattle: Arc<dyn Collaborator>) -> Self {
        Self {
            rattle,
            toys: Vec::new(),
            logger: discard_logger(),
        }
    }

    /// Set the [Logger] to use.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger.new_with_component_name::<Self>();
        self
    }

    /// Shake the rattle and return what it answers.
    pub fn shake_rattle(&self) -> Result<String, CapabilityError> {
        self.use_rattle(SHAKE)
    }

    /// Throw the rattle and return what it answers.
    ///
    /// A real [Rattle] can not be thrown, so this only succeeds with a double stubbed to answer it.
    pub fn throw_rattle(&self) -> Result<String, CapabilityError> {
        self.use_rattle(THROW)
    }

    /// Add the rattle to the toy collection, and return the whole collection.
    pub fn collect_rattle(&mut self) -> &[Arc<dyn Collaborator>] {
        self.toys.push(self.rattle.clone());
        debug!(self.logger, "Rattle collected"; "toys" => self.toys.len());

        &self.toys
    }

    /// The rattle the baby plays with.
    pub fn rattle(&self) -> &Arc<dyn Collaborator> {
        &self.rattle
    }

    /// The toys collected so far, in collection order.
    pub fn toys(&self) -> &[Arc<dyn Collaborator>] {
        &self.toys
    }

    fn use_rattle(&self, capability: &str) -> Result<String, CapabilityError> {
        let capability = Capability::new(capability);
        debug!(self.logger, ">> use_rattle"; "capability" => %capability);

        self.rattle.call(&capability).inspect_err(|error| {
            warn!(self.logger, "Rattle can not be used"; "capability" => %capability, "error" => %error);
        })
    }
}

impl Default for Baby {
    fn default() -> Self {
        Self::new(Arc::new(Rattle::new()))
    }
}
