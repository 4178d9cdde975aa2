use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::capability::{Capability, CapabilityError, Collaborator, Interface};

use super::{DoubleConfigurationError, ReceivedCalls};

/// A double that only accepts stubs for capabilities declared by the real type `T`.
#[derive(Debug)]
pub struct InstanceDouble<T: Interface> {
    stubs: BTreeMap<Capability, String>,
    received: ReceivedCalls,
    interface: PhantomData<fn() -> T>,
}

impl<T: Interface> InstanceDouble<T> {
    /// Create a verified double with no stubbed capability.
    pub fn new() -> Self {
        Self {
            stubs: BTreeMap::new(),
            received: ReceivedCalls::default(),
            interface: PhantomData,
        }
    }

    /// Tell the double to answer `capability` with `response`.
    ///
    /// Fails if `T` does not declare `capability`.
    pub fn stub<C: Into<Capability>, R: Into<String>>(
        mut self,
        capability: C,
        response: R,
    ) -> Result<Self, DoubleConfigurationError> {
        let capability = capability.into();
        if !T::declares(&capability) {
            return Err(DoubleConfigurationError::UndeclaredCapability {
                type_name: T::TYPE_NAME,
                capability,
            });
        }

        self.stubs.insert(capability, response.into());
        Ok(self)
    }

    /// Stub all the given capabilities, failing on the first one `T` does not declare.
    pub fn with_stubs<I, C, R>(self, stubs: I) -> Result<Self, DoubleConfigurationError>
    where
        I: IntoIterator<Item = (C, R)>,
        C: Into<Capability>,
        R: Into<String>,
    {
        stubs
            .into_iter()
            .try_fold(self, |double, (capability, response)| double.stub(capability, response))
    }

    /// Number of times the double received the given capability, stubbed or not.
    pub fn received(&self, capability: &Capability) -> usize {
        self.received.count(capability)
    }
}

impl<T: Interface> Default for InstanceDouble<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Interface> Collaborator for InstanceDouble<T> {
    fn call(&self, capability: &Capability) -> Result<String, CapabilityError> {
        self.received.record(capability);

        if !T::declares(capability) {
            return Err(CapabilityError::NotSupported {
                receiver: self.describe(),
                capability: capability.clone(),
            });
        }

        self.stubs
            .get(capability)
            .cloned()
            .ok_or_else(|| CapabilityError::Unconfigured {
                double: self.describe(),
                capability: capability.clone(),
            })
    }

    fn describe(&self) -> String {
        format!("InstanceDouble({})", T::TYPE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Rattle;

    impl Interface for Rattle {
        const TYPE_NAME: &'static str = "Rattle";
        const CAPABILITIES: &'static [&'static str] = &["shake"];
    }

    #[test]
    fn stubbing_a_declared_capability_is_accepted() {
        let double = InstanceDouble::<Rattle>::new()
            .stub("shake", "I'm a rattle being shaken")
            .unwrap();

        assert_eq!(
            Ok("I'm a rattle being shaken".to_string()),
            double.call(&Capability::new("shake"))
        );
    }

    #[test]
    fn stubbing_an_undeclared_capability_is_rejected_at_configuration() {
        let error = InstanceDouble::<Rattle>::new()
            .stub("throw", "it flies across the room")
            .expect_err("configuring 'throw' on a Rattle double should fail");

        assert_eq!(
            DoubleConfigurationError::UndeclaredCapability {
                type_name: "Rattle",
                capability: Capability::new("throw"),
            },
            error
        );
        assert_eq!(
            "the Rattle type does not implement the capability 'throw'",
            error.to_string()
        );
    }

    #[test]
    fn with_stubs_fails_if_any_capability_is_undeclared() {
        InstanceDouble::<Rattle>::new()
            .with_stubs([("shake", "shaken"), ("throw", "thrown")])
            .expect_err("'throw' is not declared by Rattle");
    }

    #[test]
    fn declared_but_unstubbed_capability_is_unconfigured() {
        let double = InstanceDouble::<Rattle>::default();

        let error = double.call(&Capability::new("shake")).unwrap_err();

        assert_eq!(
            CapabilityError::Unconfigured {
                double: "InstanceDouble(Rattle)".to_string(),
                capability: Capability::new("shake"),
            },
            error
        );
    }

    #[test]
    fn undeclared_capability_call_is_not_supported() {
        let double = InstanceDouble::<Rattle>::new()
            .stub("shake", "shaken")
            .unwrap();

        let error = double.call(&Capability::new("throw")).unwrap_err();

        assert!(
            matches!(error, CapabilityError::NotSupported { ref capability, .. } if capability.name() == "throw"),
            "unexpected error: {error:?}"
        );
        assert_eq!(1, double.received(&Capability::new("throw")));
    }
}
