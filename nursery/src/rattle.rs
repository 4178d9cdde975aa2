use nursery_common::capability::{Capability, CapabilityError, Collaborator, Interface};

/// Name of the capability to shake a rattle.
pub const SHAKE: &str = "shake";

/// What a real rattle answers when shaken.
pub const SHAKE_RESPONSE: &str = "I'm a rattle being shaken";

/// The real rattle: it can be shaken, and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rattle;

impl Rattle {
    /// Rattle factory
    pub fn new() -> Self {
        Self
    }

    /// Shake the rattle.
    pub fn shake(&self) -> &'static str {
        SHAKE_RESPONSE
    }
}

impl Interface for Rattle {
    const TYPE_NAME: &'static str = "Rattle";
    const CAPABILITIES: &'static [&'static str] = &[SHAKE];
}

impl Collaborator for Rattle {
    fn call(&self, capability: &Capability) -> Result<String, CapabilityError> {
        match capability.name() {
            SHAKE => Ok(self.shake().to_string()),
            _ => Err(CapabilityError::NotSupported {
                receiver: self.describe(),
                capability: capability.clone(),
            }),
        }
    }

    fn describe(&self) -> String {
        Self::TYPE_NAME.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::THROW;

    use super::*;

    #[test]
    fn shaking_a_rattle_returns_a_constant_message() {
        assert_eq!("I'm a rattle being shaken", Rattle::new().shake());
    }

    #[test]
    fn every_declared_capability_is_answered() {
        let rattle = Rattle::new();

        for capability in Rattle::CAPABILITIES {
            rattle
                .call(&Capability::new(*capability))
                .unwrap_or_else(|e| panic!("declared capability '{capability}' failed: {e}"));
        }
    }

    #[test]
    fn a_rattle_can_not_be_thrown() {
        assert!(!Rattle::declares(&Capability::new(THROW)));

        let error = Rattle::new().call(&Capability::new(THROW)).unwrap_err();

        assert_eq!(
            CapabilityError::NotSupported {
                receiver: "Rattle".to_string(),
                capability: Capability::new(THROW),
            },
            error
        );
    }
}
