#![allow(dead_code)]

use restgen::{ParamKind, Signature};

/// `(&self, &mut ResponseWriter, &Request)`
pub fn two_param(returns_bool: bool) -> Signature {
    build(
        vec![
            ParamKind::other("&self"),
            ParamKind::ResponseWriter,
            ParamKind::RequestPointer,
        ],
        returns_bool,
    )
}

/// `(&self, RoutingContext, &mut ResponseWriter, &Request)`
pub fn three_param(returns_bool: bool) -> Signature {
    build(
        vec![
            ParamKind::other("&self"),
            ParamKind::Context,
            ParamKind::ResponseWriter,
            ParamKind::RequestPointer,
        ],
        returns_bool,
    )
}

fn build(params: Vec<ParamKind>, returns_bool: bool) -> Signature {
    if returns_bool {
        Signature::hook(params)
    } else {
        Signature::handler(params)
    }
}

pub mod fixtures {
    use std::path::PathBuf;

    pub fn path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }
}
