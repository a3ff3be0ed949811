#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::signature::{ParamKind, ReturnKind, Signature};

fn recv() -> ParamKind {
    ParamKind::other("&self")
}

fn two_arg() -> Signature {
    Signature::handler(vec![recv(), ParamKind::ResponseWriter, ParamKind::RequestPointer])
}

fn three_arg() -> Signature {
    Signature::handler(vec![
        recv(),
        ParamKind::Context,
        ParamKind::ResponseWriter,
        ParamKind::RequestPointer,
    ])
}

fn hook() -> Signature {
    Signature::hook(vec![
        recv(),
        ParamKind::Context,
        ParamKind::ResponseWriter,
        ParamKind::RequestPointer,
    ])
}

#[test]
fn test_empty_resource() {
    let report = introspect("EmptyResource", &ResourceDescriptor::new());
    assert_eq!(report, ResourceReport::new("EmptyResource"));
    assert!(report.handlers.is_empty());
    assert!(!report.has_before_one && !report.has_before_many && !report.has_before_all);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_valid_handler_invalid_hook() {
    let descriptor = ResourceDescriptor::new()
        .with_method("GetOne", two_arg())
        .with_method(
            "BeforeOne",
            Signature::hook(vec![recv(), ParamKind::ResponseWriter]),
        );
    let report = introspect("TodosResource", &descriptor);

    assert_eq!(report.handlers, vec![HandlerRecord::new("GetOne", 2)]);
    assert!(!report.has_before_one);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("BeforeOne"));
    assert_eq!(
        report.warnings[0],
        "method 'BeforeOne' is present but invalid: wrong number of parameters: 1"
    );
}

#[test]
fn test_handlers_follow_recognition_order() {
    // BTreeMap keys iterate alphabetically; the report must not.
    let descriptor = ResourceDescriptor::new()
        .with_method("Put", two_arg())
        .with_method("GetOne", three_arg())
        .with_method("DeleteOne", two_arg())
        .with_method("Post", two_arg())
        .with_method("GetMany", three_arg())
        .with_method("DeleteMany", two_arg())
        .with_method("Patch", two_arg());
    let report = introspect("TodosResource", &descriptor);

    let names: Vec<_> = report.handlers.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["DeleteOne", "DeleteMany", "GetMany", "GetOne", "Patch", "Post", "Put"]
    );
    assert_eq!(report.handler("GetMany").unwrap().params, 3);
    assert_eq!(report.handler("Put").unwrap().params, 2);
    assert_eq!(
        report.handler_summary(),
        "DeleteOne/2, DeleteMany/2, GetMany/3, GetOne/3, Patch/2, Post/2, Put/2"
    );
}

#[test]
fn test_invalid_handler_is_warned_not_recorded() {
    let descriptor = ResourceDescriptor::new()
        .with_method("GetMany", three_arg())
        .with_method(
            "Post",
            Signature::new(
                vec![recv(), ParamKind::ResponseWriter, ParamKind::RequestPointer],
                vec![ReturnKind::other("Result<(), Error>")],
            ),
        )
        .with_value("Put", "String");
    let report = introspect("TodosResource", &descriptor);

    assert_eq!(report.handlers, vec![HandlerRecord::new("GetMany", 3)]);
    assert_eq!(
        report.warnings,
        vec![
            "method 'Post' is present but invalid: function should have 0 return value(s), not 1"
                .to_string(),
            "method 'Put' is present but invalid: not a function: String".to_string(),
        ]
    );
}

#[test]
fn test_no_name_in_both_handlers_and_warnings() {
    let descriptor = ResourceDescriptor::new()
        .with_method("GetOne", two_arg())
        .with_method("GetMany", Signature::handler(vec![recv()]))
        .with_method("BeforeAll", hook())
        .with_method("BeforeMany", two_arg());
    let report = introspect("TodosResource", &descriptor);

    for handler in &report.handlers {
        assert!(
            !report.warnings.iter().any(|w| w.contains(&format!("'{}'", handler.name))),
            "{} appears in both handlers and warnings",
            handler.name
        );
    }
    assert_eq!(report.handlers.len(), 1);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.has_before_all);
    assert!(!report.has_before_many);
}

#[test]
fn test_all_hooks() {
    let descriptor = ResourceDescriptor::new()
        .with_method("BeforeOne", hook())
        .with_method("BeforeMany", hook())
        .with_method("BeforeAll", hook());
    let report = introspect("TodosResource", &descriptor);
    assert!(report.has_before_one);
    assert!(report.has_before_many);
    assert!(report.has_before_all);
    assert!(report.handlers.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_hook_with_wrong_return_type() {
    let descriptor = ResourceDescriptor::new().with_method(
        "BeforeAll",
        Signature::new(
            vec![recv(), ParamKind::ResponseWriter, ParamKind::RequestPointer],
            vec![ReturnKind::other("Option<bool>")],
        ),
    );
    let report = introspect("TodosResource", &descriptor);
    assert!(!report.has_before_all);
    let expected = "method 'BeforeAll' is present but invalid: \
                    return value should be bool, not Option<bool>";
    assert_eq!(report.warnings, vec![expected]);
}

#[test]
fn test_unrecognized_methods_are_ignored() {
    let descriptor = ResourceDescriptor::new()
        .with_method("Delete", two_arg())
        .with_method("Helper", Signature::handler(vec![recv()]));
    let report = introspect("TodosResource", &descriptor);
    assert!(report.handlers.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_report_field_names() {
    let mut report = ResourceReport::new("TodosResource");
    report.handlers.push(HandlerRecord::new("GetMany", 3));
    report.has_before_all = true;
    report.warnings.push("w".to_string());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "StructName": "TodosResource",
            "Handlers": [{"Name": "GetMany", "Params": 3}],
            "HasBeforeOne": false,
            "HasBeforeMany": false,
            "HasBeforeAll": true,
            "Warnings": ["w"]
        })
    );
    let back: ResourceReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_descriptor_json_shape() {
    let json = r#"{
        "name": "TodosResource",
        "methods": {
            "GetOne": {"Function": {
                "params": [{"Other": "&self"}, "ResponseWriter", "RequestPointer"]
            }},
            "Put": {"Value": {"type_name": "u8"}}
        }
    }"#;
    let registered: RegisteredResource = serde_json::from_str(json).unwrap();
    assert_eq!(registered.name, "TodosResource");
    let report = introspect(&registered.name, &registered.descriptor);
    assert_eq!(report.handlers, vec![HandlerRecord::new("GetOne", 2)]);
    assert_eq!(report.warnings.len(), 1);
}
