use serde::{Deserialize, Serialize};

use crate::routes::HookKind;

/// A valid handler found on a resource
///
/// `params` excludes the receiver, so it is always 2 or 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Params")]
    pub params: usize,
}

impl HandlerRecord {
    pub fn new(name: impl Into<String>, params: usize) -> Self {
        HandlerRecord {
            name: name.into(),
            params,
        }
    }
}

/// Introspection result for one registered resource
///
/// Field names are the interchange contract with the code emission stage
/// and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceReport {
    #[serde(rename = "StructName")]
    pub struct_name: String,
    #[serde(rename = "Handlers", default)]
    pub handlers: Vec<HandlerRecord>,
    #[serde(rename = "HasBeforeOne", default)]
    pub has_before_one: bool,
    #[serde(rename = "HasBeforeMany", default)]
    pub has_before_many: bool,
    #[serde(rename = "HasBeforeAll", default)]
    pub has_before_all: bool,
    #[serde(rename = "Warnings", default)]
    pub warnings: Vec<String>,
}

impl ResourceReport {
    /// Empty report: no handlers, no hooks, no warnings
    pub fn new(struct_name: impl Into<String>) -> Self {
        ResourceReport {
            struct_name: struct_name.into(),
            handlers: Vec::new(),
            has_before_one: false,
            has_before_many: false,
            has_before_all: false,
            warnings: Vec::new(),
        }
    }

    pub fn has_hook(&self, hook: HookKind) -> bool {
        match hook {
            HookKind::BeforeOne => self.has_before_one,
            HookKind::BeforeMany => self.has_before_many,
            HookKind::BeforeAll => self.has_before_all,
        }
    }

    pub fn set_hook(&mut self, hook: HookKind, present: bool) {
        match hook {
            HookKind::BeforeOne => self.has_before_one = present,
            HookKind::BeforeMany => self.has_before_many = present,
            HookKind::BeforeAll => self.has_before_all = present,
        }
    }

    pub fn handler(&self, name: &str) -> Option<&HandlerRecord> {
        self.handlers.iter().find(|h| h.name == name)
    }

    /// `Name/params` list, e.g. `GetMany/3, GetOne/2`
    pub fn handler_summary(&self) -> String {
        self.handlers
            .iter()
            .map(|h| format!("{}/{}", h.name, h.params))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
