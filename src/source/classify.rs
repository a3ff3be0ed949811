use quote::ToTokens;
use serde::{Deserialize, Serialize};
use syn::{GenericArgument, PathArguments, ReturnType, Type, TypeParamBound};

use crate::signature::{ParamKind, ReturnKind};

/// Names of the framework types that make up a handler signature
///
/// Matching is on the last path segment, so `web::RoutingContext` and
/// `RoutingContext` are the same type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeNames {
    /// Routing context, passed by value
    pub context: String,
    /// Response writer, passed as `&mut`
    pub response_writer: String,
    /// Request, passed behind `&`, `&mut` or `Box`
    pub request: String,
}

impl Default for TypeNames {
    fn default() -> Self {
        TypeNames {
            context: "RoutingContext".to_string(),
            response_writer: "ResponseWriter".to_string(),
            request: "Request".to_string(),
        }
    }
}

impl TypeNames {
    /// Tag a parameter type
    pub fn classify_param(&self, ty: &Type) -> ParamKind {
        match strip_groups(ty) {
            Type::Path(_) if self.last_segment_is(ty, &self.context) => ParamKind::Context,
            Type::Path(p) if last_ident_is(&p.path, "Box") => {
                match single_generic(&p.path) {
                    Some(inner) if self.last_segment_is(inner, &self.request) => {
                        ParamKind::RequestPointer
                    }
                    _ => ParamKind::Other(display_type(ty)),
                }
            }
            Type::Reference(r) => {
                let inner = strip_groups(&r.elem);
                if r.mutability.is_some()
                    && self.names_trait_or_type(inner, &self.response_writer)
                {
                    ParamKind::ResponseWriter
                } else if self.last_segment_is(inner, &self.request) {
                    ParamKind::RequestPointer
                } else {
                    ParamKind::Other(display_type(ty))
                }
            }
            _ => ParamKind::Other(display_type(ty)),
        }
    }

    /// Tag the declared return values; a tuple counts one value per element
    pub fn classify_returns(&self, output: &ReturnType) -> Vec<ReturnKind> {
        match output {
            ReturnType::Default => Vec::new(),
            ReturnType::Type(_, ty) => match strip_groups(ty) {
                Type::Tuple(tuple) => tuple.elems.iter().map(classify_return).collect(),
                _ => vec![classify_return(ty)],
            },
        }
    }

    fn last_segment_is(&self, ty: &Type, name: &str) -> bool {
        match strip_groups(ty) {
            Type::Path(p) => p.qself.is_none() && last_ident_is(&p.path, last_segment(name)),
            _ => false,
        }
    }

    /// `W`, `dyn W` or `impl W`
    fn names_trait_or_type(&self, ty: &Type, name: &str) -> bool {
        let want = last_segment(name);
        match ty {
            Type::Path(_) => self.last_segment_is(ty, name),
            Type::TraitObject(t) => bounds_name(t.bounds.iter(), want),
            Type::ImplTrait(t) => bounds_name(t.bounds.iter(), want),
            _ => false,
        }
    }
}

fn classify_return(ty: &Type) -> ReturnKind {
    match strip_groups(ty) {
        Type::Path(p) if p.qself.is_none() && p.path.is_ident("bool") => ReturnKind::Bool,
        _ => ReturnKind::Other(display_type(ty)),
    }
}

fn bounds_name<'a>(mut bounds: impl Iterator<Item = &'a TypeParamBound>, want: &str) -> bool {
    bounds.any(|b| match b {
        TypeParamBound::Trait(t) => last_ident_is(&t.path, want),
        _ => false,
    })
}

fn strip_groups(ty: &Type) -> &Type {
    match ty {
        Type::Group(g) => strip_groups(&g.elem),
        Type::Paren(p) => strip_groups(&p.elem),
        _ => ty,
    }
}

fn last_ident_is(path: &syn::Path, name: &str) -> bool {
    path.segments.last().is_some_and(|s| s.ident == name)
}

fn last_segment(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}

fn single_generic(path: &syn::Path) -> Option<&Type> {
    let seg = path.segments.last()?;
    let PathArguments::AngleBracketed(args) = &seg.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(ty) if args.args.len() == 1 => Some(ty),
        _ => None,
    }
}

/// Source-like display of a type: `& mut Foo < T >` becomes `&mut Foo<T>`
pub fn display_type(ty: &Type) -> String {
    tidy_tokens(&ty.to_token_stream().to_string())
}

pub(crate) fn tidy_tokens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            let prev = out.chars().last();
            let next = chars.peek().copied();
            let glue_prev = matches!(prev, Some('&' | '<' | '(' | '[')) || out.ends_with("::");
            let glue_next = matches!(next, Some('<' | '>' | ')' | ']' | ',' | ':' | ';'));
            if glue_prev || glue_next {
                continue;
            }
        }
        out.push(c);
    }
    out
}
