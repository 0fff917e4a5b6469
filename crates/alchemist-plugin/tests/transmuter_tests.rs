// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for manifest branch selection and engine arguments.

use std::path::PathBuf;
use std::sync::Arc;

use alchemist_core::{AlchemistError, Context, LoadedManifest, ManifestSource};
use alchemist_plugin::Transmuter;
use alchemist_test_utils::{MockDataAdapter, MockEngine};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object literal")
}

fn context() -> Context {
    Context::new(json!({ "configs": [{ "name": "root" }] }))
}

// ---- Location manifests ----

#[tokio::test]
async fn location_manifest_is_loaded_once_through_the_adapter() {
    let adapter = Arc::new(MockDataAdapter::new(
        object(json!({ "steps": ["render"] })),
        "/project/build",
    ));
    let engine = Arc::new(MockEngine::new());
    let transmuter = Transmuter::new(adapter.clone(), engine.clone());

    transmuter
        .invoke(&ManifestSource::Location("manifest.yml".into()), context())
        .await
        .unwrap();

    let calls = adapter.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].location, "manifest.yml");
    assert_eq!(calls[0].context, context());

    let requests = engine.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].manifest_base_path,
        Some(PathBuf::from("/project/build"))
    );
    assert_eq!(requests[0].context_values, Context::empty());
    assert_eq!(
        requests[0].loaded_manifest.context(),
        Some(context().as_value())
    );
}

#[tokio::test]
async fn manifest_load_errors_propagate_without_running_the_engine() {
    let adapter = Arc::new(MockDataAdapter::failing("no such file"));
    let engine = Arc::new(MockEngine::new());
    let transmuter = Transmuter::new(adapter, engine.clone());

    let err = transmuter
        .invoke(&ManifestSource::Location("missing.yml".into()), context())
        .await
        .unwrap_err();

    match err {
        AlchemistError::ManifestLoad { location, source } => {
            assert_eq!(location, "missing.yml");
            assert_eq!(source.to_string(), "no such file");
        }
        other => panic!("expected ManifestLoad, got {other:?}"),
    }
    assert!(engine.requests().await.is_empty());
}

// ---- Inline manifests ----

#[tokio::test]
async fn inline_manifest_bypasses_the_adapter() {
    let adapter = Arc::new(MockDataAdapter::default());
    let engine = Arc::new(MockEngine::new());
    let transmuter = Transmuter::new(adapter.clone(), engine.clone());

    transmuter
        .invoke(
            &ManifestSource::Inline(object(json!({ "steps": [] }))),
            context(),
        )
        .await
        .unwrap();

    assert!(adapter.calls().await.is_empty());

    let requests = engine.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].manifest_base_path, None);
    assert_eq!(
        Value::Object(requests[0].loaded_manifest.document().clone()),
        json!({ "steps": [], "context": { "configs": [{ "name": "root" }] } })
    );
    assert_eq!(requests[0].context_values, Context::empty());
}

#[tokio::test]
async fn inline_context_key_is_replaced() {
    let engine = Arc::new(MockEngine::new());
    let transmuter = Transmuter::new(Arc::new(MockDataAdapter::default()), engine.clone());

    transmuter
        .invoke(
            &ManifestSource::Inline(object(json!({ "context": { "stale": true } }))),
            context(),
        )
        .await
        .unwrap();

    let requests = engine.requests().await;
    assert_eq!(
        requests[0].loaded_manifest.context(),
        Some(context().as_value())
    );
}

#[tokio::test]
async fn inline_manifest_reaches_the_engine_as_a_parsed_document() {
    let engine = Arc::new(MockEngine::new());
    let transmuter = Transmuter::new(Arc::new(MockDataAdapter::default()), engine.clone());
    let inline = json!({ "name": "inline", "steps": [{ "run": "render" }] });

    transmuter
        .invoke(&ManifestSource::Inline(object(inline)), context())
        .await
        .unwrap();

    let expected = LoadedManifest::parse(json!({
        "name": "inline",
        "steps": [{ "run": "render" }],
        "context": { "configs": [{ "name": "root" }] }
    }))
    .unwrap();
    assert_eq!(engine.requests().await[0].loaded_manifest, expected);
}

#[tokio::test]
async fn engine_errors_propagate_unchanged() {
    let engine = Arc::new(MockEngine::failing("step `render` failed"));
    let transmuter = Transmuter::new(Arc::new(MockDataAdapter::default()), engine);

    let err = transmuter
        .invoke(&ManifestSource::Inline(Map::new()), Context::empty())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AlchemistError::Transmutation { ref message, .. } if message == "step `render` failed"
    ));
}
