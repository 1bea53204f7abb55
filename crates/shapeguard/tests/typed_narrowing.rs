//! Typed narrowing over composed asserters.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use shapeguard::{
    ArrayAsserter, Asserted, LiteralUnionAsserter, NarrowError, NumberAsserter,
    NumberAsserterOptions, NumberBound, ObjectAsserter, OptionAsserter, SharedAsserter, Typed,
    builtin,
};
use std::sync::Arc;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Level {
    Debug,
    Info,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Service {
    name: String,
    port: u16,
    level: Level,
    replicas: Option<u32>,
    tags: Vec<String>,
}

fn port() -> SharedAsserter {
    Arc::new(
        NumberAsserter::new("Port", NumberAsserterOptions {
            min: Some(NumberBound::inclusive(1.0)),
            max: Some(NumberBound::inclusive(65535.0)),
            step: Some(1.0),
            ..Default::default()
        })
        .unwrap(),
    )
}

fn service() -> Typed<Service> {
    let level: SharedAsserter =
        Arc::new(LiteralUnionAsserter::new("Level", vec![json!("debug"), json!("info")]).unwrap());
    let replicas: SharedAsserter = Arc::new(OptionAsserter::of(builtin::safe_integer()));
    let tags: SharedAsserter = Arc::new(ArrayAsserter::of(builtin::string()));
    let object = ObjectAsserter::new("Service", [
        ("name", builtin::string()),
        ("port", port()),
        ("level", level),
        ("replicas", replicas),
        ("tags", tags),
    ])
    .unwrap();
    Typed::new(Arc::new(object))
}

#[test]
fn conforming_document_narrows_to_struct() {
    let value = json!({
        "name": "api",
        "port": 8080,
        "level": "info",
        "tags": ["edge"]
    });
    let narrowed: Asserted<Typed<Service>> = service().assert(&value).unwrap();
    assert_eq!(narrowed, Service {
        name: "api".into(),
        port: 8080,
        level: Level::Info,
        replicas: None,
        tags: vec!["edge".into()],
    });
}

#[test]
fn nonconforming_document_reports_every_slot() {
    let err = service()
        .assert_named(
            &json!({ "name": "api", "port": 70000.5, "level": "warn", "tags": ["a", null] }),
            "service",
        )
        .unwrap_err();
    assert!(matches!(err, NarrowError::Assertion(_)));
    assert_snapshot!(err.to_string(), @r"
    `service` is of type `Object`; expected type of `Service`:
      - `port` is of type `number`; expected type of `Port`:
        - must be <= 65535
        - must be a multiple of 1 from 1
      - `level` is of type `string`; expected type of `Level`
      - `tags` is of type `Array`; expected type of `Array<string>`:
        - `1` is of type `null`; expected type of `string`
    ");
}

#[test]
fn typed_views_share_one_asserter() {
    let service = service();
    let loose: Typed<serde_json::Value> = Typed::new(Arc::clone(service.asserter()));
    let value = json!({ "name": "api", "port": 1, "level": "debug", "tags": [] });
    assert_eq!(loose.assert(&value).unwrap(), value);
    assert!(service.is(&value));
    assert_eq!(loose.type_name(), "Service");
}
