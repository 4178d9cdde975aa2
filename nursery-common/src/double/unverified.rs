use std::collections::BTreeMap;

use crate::capability::{Capability, CapabilityError, Collaborator};

use super::ReceivedCalls;

/// A double accepting any stubbed capability, with no check against a real type.
#[derive(Debug)]
pub struct Double {
    name: String,
    stubs: BTreeMap<Capability, String>,
    received: ReceivedCalls,
}

impl Double {
    /// Create a double with the given name and no stubbed capability.
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            stubs: BTreeMap::new(),
            received: ReceivedCalls::default(),
        }
    }

    /// Tell the double to answer `capability` with `response`.
    pub fn stub<C: Into<Capability>, R: Into<String>>(
        mut self,
        capability: C,
        response: R,
    ) -> Self {
        self.stubs.insert(capability.into(), response.into());
        self
    }

    /// Stub all the given capabilities.
    pub fn with_stubs<I, C, R>(self, stubs: I) -> Self
    where
        I: IntoIterator<Item = (C, R)>,
        C: Into<Capability>,
        R: Into<String>,
    {
        stubs
            .into_iter()
            .fold(self, |double, (capability, response)| double.stub(capability, response))
    }

    /// Name given to the double.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of times the double received the given capability, stubbed or not.
    pub fn received(&self, capability: &Capability) -> usize {
        self.received.count(capability)
    }
}

impl Collaborator for Double {
    fn call(&self, capability: &Capability) -> Result<String, CapabilityError> {
        self.received.record(capability);

        self.stubs
            .get(capability)
            .cloned()
            .ok_or_else(|| CapabilityError::Unconfigured {
                double: self.describe(),
                capability: capability.clone(),
            })
    }

    fn describe(&self) -> String {
        format!("Double \"{}\"", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_without_stub_fails_with_unconfigured_capability() {
        let double = Double::new("I'm a fake rattle");

        let error = double
            .call(&Capability::new("shake"))
            .expect_err("an unstubbed double should not answer");

        assert_eq!(
            CapabilityError::Unconfigured {
                double: "Double \"I'm a fake rattle\"".to_string(),
                capability: Capability::new("shake"),
            },
            error
        );
    }

    #[test]
    fn double_answers_stubbed_capability() {
        let double = Double::new("I'm a fake rattle").stub("shake", "I'm a rattle being shaken");

        assert_eq!(
            Ok("I'm a rattle being shaken".to_string()),
            double.call(&Capability::new("shake"))
        );
    }

    #[test]
    fn double_accepts_any_capability_name() {
        let double = Double::new("Rattle").with_stubs([
            ("throw", "it flies across the room"),
            ("chew", "it gets wet"),
        ]);

        assert_eq!(
            Ok("it flies across the room".to_string()),
            double.call(&Capability::new("throw"))
        );
        assert_eq!(
            Ok("it gets wet".to_string()),
            double.call(&Capability::new("chew"))
        );
    }

    #[test]
    fn restubbing_a_capability_replaces_its_response() {
        let double = Double::new("fake").stub("shake", "first").stub("shake", "second");

        assert_eq!(Ok("second".to_string()), double.call(&"shake".into()));
    }

    #[test]
    fn received_capabilities_include_the_unconfigured_ones() {
        let double = Double::new("fake").stub("shake", "shaken");

        double.call(&"shake".into()).unwrap();
        double.call(&"shake".into()).unwrap();
        double.call(&"throw".into()).unwrap_err();

        assert_eq!(2, double.received(&"shake".into()));
        assert_eq!(1, double.received(&"throw".into()));
        assert_eq!("fake", double.name());
    }
}
