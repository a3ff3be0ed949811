use anyhow::Context;
use quote::ToTokens;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use syn::{FnArg, ImplItem, Item, ItemImpl, Signature as FnSignature, Type};
use tracing::debug;

use super::classify::{tidy_tokens, TypeNames};
use crate::resource::{RegisteredResource, ResourceDescriptor};
use crate::signature::{Callable, Signature};

/// Resources found in one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// File stem, used as the module name of generated code
    pub module: String,
    /// Every top-level struct, in declaration order
    pub resources: Vec<RegisteredResource>,
}

/// Parse Rust source and describe every top-level struct as a resource.
///
/// Methods come from all top-level `impl` blocks whose self type is one of
/// the file's structs. Inherent methods shadow trait methods of the same
/// name. Method names are converted to CamelCase (`get_one` -> `GetOne`).
///
/// # Errors
///
/// Returns an error if `source` is not valid Rust.
pub fn discover_resources(
    source: &str,
    types: &TypeNames,
) -> anyhow::Result<Vec<RegisteredResource>> {
    let file = syn::parse_file(source).map_err(|e| anyhow::anyhow!("Parse error: {}", e))?;

    let mut order: Vec<String> = Vec::new();
    for item in &file.items {
        if let Item::Struct(s) = item {
            order.push(s.ident.to_string());
        }
    }
    let known: HashSet<&str> = order.iter().map(String::as_str).collect();

    let mut methods: HashMap<String, ResourceDescriptor> = HashMap::new();
    let mut inherent: HashSet<(String, String)> = HashSet::new();
    for item in &file.items {
        let Item::Impl(imp) = item else {
            continue;
        };
        let Some(target) = impl_target(imp) else {
            continue;
        };
        if !known.contains(target.as_str()) {
            debug!(target = %target, "skipping impl for a type not declared in this file");
            continue;
        }
        let is_inherent = imp.trait_.is_none();
        let descriptor = methods.entry(target.clone()).or_default();
        for impl_item in &imp.items {
            let ImplItem::Fn(f) = impl_item else {
                continue;
            };
            let name = to_camel_case(&f.sig.ident.to_string());
            let key = (target.clone(), name.clone());
            if !is_inherent && (inherent.contains(&key) || descriptor.get(&name).is_some()) {
                continue;
            }
            if is_inherent {
                inherent.insert(key);
            }
            descriptor.insert(name, Callable::Function(describe_fn(&f.sig, types)));
        }
    }

    Ok(order
        .into_iter()
        .map(|name| {
            let descriptor = methods.remove(&name).unwrap_or_default();
            RegisteredResource::new(name, descriptor)
        })
        .collect())
}

/// Read and parse a Rust source file
pub fn discover_file(path: &Path, types: &TypeNames) -> anyhow::Result<DiscoveredFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let resources = discover_resources(&source, types)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(DiscoveredFile {
        module: module_name(path),
        resources,
    })
}

pub(crate) fn module_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Describe a function signature; the receiver, if any, is the first param
pub fn describe_fn(sig: &FnSignature, types: &TypeNames) -> Signature {
    let params = sig
        .inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Receiver(r) => {
                crate::signature::ParamKind::Other(tidy_tokens(&r.to_token_stream().to_string()))
            }
            FnArg::Typed(pat) => types.classify_param(&pat.ty),
        })
        .collect();
    Signature::new(params, types.classify_returns(&sig.output))
}

fn impl_target(imp: &ItemImpl) -> Option<String> {
    match &*imp.self_ty {
        Type::Path(p) if p.qself.is_none() => p.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    }
}

/// Convert a snake_case method name to CamelCase
///
/// Names that are already CamelCase pass through unchanged.
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
