use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::signature::{Callable, Signature};

/// Members of a resource type, keyed by canonical method name
///
/// This is the explicit `methodName -> signature` mapping handed over by
/// the parsing collaborator. Names that are not recognized handlers or
/// hooks are carried along but never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    #[serde(default)]
    pub methods: BTreeMap<String, Callable>,
}

impl ResourceDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a method signature
    pub fn with_method(mut self, name: impl Into<String>, sig: Signature) -> Self {
        self.methods.insert(name.into(), Callable::Function(sig));
        self
    }

    /// Builder-style insert of a non-callable member
    pub fn with_value(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.methods.insert(
            name.into(),
            Callable::Value {
                type_name: type_name.into(),
            },
        );
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, callable: Callable) {
        self.methods.insert(name.into(), callable);
    }

    pub fn get(&self, name: &str) -> Option<&Callable> {
        self.methods.get(name)
    }
}

/// A resource registered under its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredResource {
    pub name: String,
    #[serde(flatten)]
    pub descriptor: ResourceDescriptor,
}

impl RegisteredResource {
    pub fn new(name: impl Into<String>, descriptor: ResourceDescriptor) -> Self {
        RegisteredResource {
            name: name.into(),
            descriptor,
        }
    }
}
