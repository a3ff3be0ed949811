#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::classify::tidy_tokens;
use super::*;
use crate::signature::{Callable, ParamKind, ReturnKind, Signature};
use std::io::Write;
use tempfile::NamedTempFile;

const TODOS: &str = r#"
use web::{Request, ResponseWriter, RoutingContext};

pub struct TodosResource {
    store: Vec<String>,
}

impl TodosResource {
    pub fn before_all(&self, c: RoutingContext, w: &mut ResponseWriter, r: &Request) -> bool {
        true
    }

    pub fn get_many(&self, c: RoutingContext, w: &mut ResponseWriter, r: &Request) {}

    pub fn get_one(&self, w: &mut dyn ResponseWriter, r: &Request) {}

    fn helper(&self) -> usize {
        self.store.len()
    }
}

struct Plain;
"#;

fn param_kinds(sig: &Callable) -> Vec<ParamKind> {
    sig.signature().unwrap().params.clone()
}

#[test]
fn test_discovers_structs_in_declaration_order() {
    let found = discover_resources(TODOS, &TypeNames::default()).unwrap();
    let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["TodosResource", "Plain"]);
    assert!(found[1].descriptor.methods.is_empty());
}

#[test]
fn test_method_signatures() {
    let found = discover_resources(TODOS, &TypeNames::default()).unwrap();
    let todos = &found[0].descriptor;

    assert_eq!(
        todos.get("GetMany").unwrap(),
        &Callable::Function(Signature::handler(vec![
            ParamKind::other("&self"),
            ParamKind::Context,
            ParamKind::ResponseWriter,
            ParamKind::RequestPointer,
        ]))
    );
    assert_eq!(
        param_kinds(todos.get("GetOne").unwrap()),
        vec![
            ParamKind::other("&self"),
            ParamKind::ResponseWriter,
            ParamKind::RequestPointer
        ]
    );
    assert_eq!(
        todos.get("BeforeAll").unwrap().signature().unwrap().returns,
        vec![ReturnKind::Bool]
    );
    assert_eq!(
        todos.get("Helper").unwrap().signature().unwrap().returns,
        vec![ReturnKind::other("usize")]
    );
}

#[test]
fn test_type_classification() {
    let src = r#"
struct R;
impl R {
    fn a(self, c: web::RoutingContext, w: &mut impl ResponseWriter, r: Box<Request>) {}
    fn b(&mut self, c: &RoutingContext, w: &ResponseWriter, r: Request) {}
    fn c(&self, r: &mut http::Request, v: Vec<&str>) -> (bool, i32) {}
    fn d(&self) -> () {}
}
"#;
    let found = discover_resources(src, &TypeNames::default()).unwrap();
    let r = &found[0].descriptor;

    assert_eq!(
        param_kinds(r.get("A").unwrap()),
        vec![
            ParamKind::other("self"),
            ParamKind::Context,
            ParamKind::ResponseWriter,
            ParamKind::RequestPointer
        ]
    );
    assert_eq!(
        param_kinds(r.get("B").unwrap()),
        vec![
            ParamKind::other("&mut self"),
            ParamKind::other("&RoutingContext"),
            ParamKind::other("&ResponseWriter"),
            ParamKind::other("Request"),
        ]
    );
    let c = r.get("C").unwrap().signature().unwrap();
    assert_eq!(c.params[1], ParamKind::RequestPointer);
    assert_eq!(c.params[2], ParamKind::other("Vec<&str>"));
    assert_eq!(c.returns, vec![ReturnKind::Bool, ReturnKind::other("i32")]);
    assert!(r.get("D").unwrap().signature().unwrap().returns.is_empty());
}

#[test]
fn test_custom_type_names() {
    let src = r#"
struct UsersResource;
impl UsersResource {
    fn get_one(&self, c: Ctx, w: &mut Out, r: &In) {}
}
"#;
    let types = TypeNames {
        context: "Ctx".to_string(),
        response_writer: "framework::Out".to_string(),
        request: "In".to_string(),
    };
    let found = discover_resources(src, &types).unwrap();
    assert_eq!(
        param_kinds(found[0].descriptor.get("GetOne").unwrap()),
        vec![
            ParamKind::other("&self"),
            ParamKind::Context,
            ParamKind::ResponseWriter,
            ParamKind::RequestPointer
        ]
    );
}

#[test]
fn test_trait_impls_and_shadowing() {
    let src = r#"
struct TodosResource;
trait Listing { fn get_many(&self, w: &mut ResponseWriter, r: &Request); fn put(&self); }
impl Listing for TodosResource {
    fn get_many(&self, w: &mut ResponseWriter, r: &Request) {}
    fn put(&self) {}
}
impl TodosResource {
    fn put(&self, w: &mut ResponseWriter, r: &Request) {}
}
impl Other { fn post(&self, w: &mut ResponseWriter, r: &Request) {} }
"#;
    let found = discover_resources(src, &TypeNames::default()).unwrap();
    assert_eq!(found.len(), 1);
    let d = &found[0].descriptor;
    assert_eq!(param_kinds(d.get("GetMany").unwrap()).len(), 3);
    // The inherent `put` wins over the trait one
    assert_eq!(param_kinds(d.get("Put").unwrap()).len(), 3);
    assert!(d.get("Post").is_none());
}

#[test]
fn test_associated_fn_without_receiver() {
    let src = r#"
struct TodosResource;
impl TodosResource {
    fn get_one(w: &mut ResponseWriter, r: &Request) {}
}
"#;
    let found = discover_resources(src, &TypeNames::default()).unwrap();
    assert_eq!(
        param_kinds(found[0].descriptor.get("GetOne").unwrap()),
        vec![ParamKind::ResponseWriter, ParamKind::RequestPointer]
    );
}

#[test]
fn test_parse_error() {
    let err = discover_resources("struct {", &TypeNames::default()).unwrap_err();
    assert!(err.to_string().starts_with("Parse error"));
}

#[test]
fn test_to_camel_case() {
    assert_eq!(to_camel_case("get_one"), "GetOne");
    assert_eq!(to_camel_case("before_all"), "BeforeAll");
    assert_eq!(to_camel_case("post"), "Post");
    assert_eq!(to_camel_case("GetOne"), "GetOne");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn test_tidy_tokens() {
    assert_eq!(tidy_tokens("& mut ResponseWriter"), "&mut ResponseWriter");
    assert_eq!(tidy_tokens("Box < Request >"), "Box<Request>");
    assert_eq!(tidy_tokens("std :: fmt :: Write"), "std::fmt::Write");
    assert_eq!(tidy_tokens("self : Box < Self >"), "self: Box<Self>");
    assert_eq!(tidy_tokens("(A , B)"), "(A, B)");
}

#[test]
fn test_input_kind() {
    use std::path::Path;
    assert_eq!(InputKind::from_path(Path::new("a/todos.rs")), Some(InputKind::RustSource));
    assert_eq!(InputKind::from_path(Path::new("m.json")), Some(InputKind::JsonManifest));
    assert_eq!(InputKind::from_path(Path::new("m.yml")), Some(InputKind::YamlManifest));
    assert_eq!(InputKind::from_path(Path::new("m.go")), None);
    assert_eq!(InputKind::from_path(Path::new("noext")), None);
}

#[test]
fn test_load_input_rust_file() {
    let mut file = NamedTempFile::with_suffix(".rs").unwrap();
    file.write_all(TODOS.as_bytes()).unwrap();
    file.flush().unwrap();

    let discovered = load_input(file.path(), &TypeNames::default()).unwrap();
    assert!(!discovered.module.is_empty());
    assert_eq!(discovered.resources.len(), 2);
}

#[test]
fn test_load_input_json_manifest() {
    let manifest = r#"[
        {"name": "TodosResource", "methods": {
            "GetOne": {"Function": {
                "params": [{"Other": "self"}, "ResponseWriter", "RequestPointer"]
            }}
        }},
        {"name": "Empty"}
    ]"#;
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    file.write_all(manifest.as_bytes()).unwrap();
    file.flush().unwrap();

    let discovered = load_input(file.path(), &TypeNames::default()).unwrap();
    assert_eq!(discovered.resources.len(), 2);
    assert_eq!(discovered.resources[0].name, "TodosResource");
    assert!(discovered.resources[1].descriptor.methods.is_empty());
}

#[test]
fn test_load_input_rejects_unknown_extension() {
    let file = NamedTempFile::with_suffix(".txt").unwrap();
    let err = load_input(file.path(), &TypeNames::default()).unwrap_err();
    assert!(err.to_string().contains("Unsupported input"));
}
