// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock data adapter for deterministic testing.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use alchemist_core::{AlchemistError, Context, DataAdapter, LoadedManifest};

/// One recorded `load_manifest` call.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadCall {
    pub location: String,
    pub context: Context,
}

/// A data adapter that serves one fixed manifest document.
///
/// Every call is recorded. The returned manifest carries the context it was
/// loaded with, like a real adapter would.
pub struct MockDataAdapter {
    document: Map<String, Value>,
    base_path: PathBuf,
    failure: Option<String>,
    calls: Mutex<Vec<LoadCall>>,
}

impl MockDataAdapter {
    /// Serve `document` with `base_path` as the manifest base path.
    pub fn new(document: Map<String, Value>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            document,
            base_path: base_path.into(),
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail every load with a `ManifestLoad` error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new(Map::new(), PathBuf::new())
        }
    }

    /// All calls received so far, in order.
    pub async fn calls(&self) -> Vec<LoadCall> {
        self.calls.lock().await.clone()
    }
}

impl Default for MockDataAdapter {
    fn default() -> Self {
        Self::new(Map::new(), PathBuf::from("."))
    }
}

#[async_trait]
impl DataAdapter for MockDataAdapter {
    async fn load_manifest(
        &self,
        location: &str,
        context: &Context,
    ) -> Result<(LoadedManifest, PathBuf), AlchemistError> {
        self.calls.lock().await.push(LoadCall {
            location: location.to_string(),
            context: context.clone(),
        });

        if let Some(message) = &self.failure {
            return Err(AlchemistError::manifest_load(location, message.clone()));
        }

        let manifest = LoadedManifest::with_context(self.document.clone(), context);
        Ok((manifest, self.base_path.clone()))
    }
}
