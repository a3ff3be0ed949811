use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::RouteError;

/// Handler methods a resource may implement
///
/// `ALL` is the fixed recognition order used by the introspector. It drives
/// the order of generated routes, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandlerKind {
    DeleteOne,
    DeleteMany,
    GetMany,
    GetOne,
    Patch,
    Post,
    Put,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 7] = [
        HandlerKind::DeleteOne,
        HandlerKind::DeleteMany,
        HandlerKind::GetMany,
        HandlerKind::GetOne,
        HandlerKind::Patch,
        HandlerKind::Post,
        HandlerKind::Put,
    ];

    /// Canonical method name (`GetOne`)
    pub fn name(&self) -> &'static str {
        match self {
            HandlerKind::DeleteOne => "DeleteOne",
            HandlerKind::DeleteMany => "DeleteMany",
            HandlerKind::GetMany => "GetMany",
            HandlerKind::GetOne => "GetOne",
            HandlerKind::Patch => "Patch",
            HandlerKind::Post => "Post",
            HandlerKind::Put => "Put",
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HandlerKind {
    type Err = RouteError;

    /// Canonical names only; `get_one` is mapped to `GetOne` at discovery
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandlerKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| RouteError::UnknownHandlerKind(s.to_string()))
    }
}

/// Optional hooks run before handlers
///
/// `ALL` lists hooks in introspection order. Execution order is different:
/// see [`super::hook_chain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookKind {
    BeforeOne,
    BeforeMany,
    BeforeAll,
}

impl HookKind {
    pub const ALL: [HookKind; 3] = [
        HookKind::BeforeOne,
        HookKind::BeforeMany,
        HookKind::BeforeAll,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HookKind::BeforeOne => "BeforeOne",
            HookKind::BeforeMany => "BeforeMany",
            HookKind::BeforeAll => "BeforeAll",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HookKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| RouteError::UnknownHookKind(s.to_string()))
    }
}

// Both kinds travel as their canonical names in reports and route plans.

impl Serialize for HandlerKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for HandlerKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for HookKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for HookKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
