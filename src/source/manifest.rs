use anyhow::{bail, Context};
use std::path::Path;

use super::classify::TypeNames;
use super::discover::{discover_file, module_name, DiscoveredFile};
use crate::resource::RegisteredResource;

/// Kind of input accepted by [`load_input`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Rust source, parsed for structs and impls
    RustSource,
    /// Pre-built descriptor list in JSON
    JsonManifest,
    /// Pre-built descriptor list in YAML
    YamlManifest,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "rs" => Some(InputKind::RustSource),
            "json" => Some(InputKind::JsonManifest),
            "yaml" | "yml" => Some(InputKind::YamlManifest),
            _ => None,
        }
    }
}

/// Load a descriptor manifest: a list of `{ name, methods }` entries.
///
/// This is the interchange format for parsing collaborators other than the
/// built-in Rust parser.
pub fn load_manifest(path: &Path) -> anyhow::Result<Vec<RegisteredResource>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    let resources = match InputKind::from_path(path) {
        Some(InputKind::YamlManifest) => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML manifest {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON manifest {}", path.display()))?,
    };
    Ok(resources)
}

/// Load resources from a Rust file or a manifest, chosen by extension
pub fn load_input(path: &Path, types: &TypeNames) -> anyhow::Result<DiscoveredFile> {
    match InputKind::from_path(path) {
        Some(InputKind::RustSource) => discover_file(path, types),
        Some(InputKind::JsonManifest | InputKind::YamlManifest) => Ok(DiscoveredFile {
            module: module_name(path),
            resources: load_manifest(path)?,
        }),
        None => bail!(
            "Unsupported input {}: expected a .rs, .json, .yaml or .yml file",
            path.display()
        ),
    }
}
