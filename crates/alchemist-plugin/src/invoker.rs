// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transmutation invoker: picks the manifest loading path and marshals the
//! engine arguments.

use std::sync::Arc;

use alchemist_core::{
    AlchemistError, Context, DataAdapter, LoadedManifest, ManifestSource, TransmutationEngine,
    TransmuteRequest,
};
use serde_json::Value;

/// Calls the transmutation engine for a manifest source and a context.
///
/// Location manifests are loaded through the data adapter, which also
/// supplies the manifest base path. Inline manifests get the context merged
/// in directly and never touch the adapter. Errors from either collaborator
/// are returned as-is.
#[derive(Clone)]
pub struct Transmuter {
    data_adapter: Arc<dyn DataAdapter>,
    engine: Arc<dyn TransmutationEngine>,
}

impl Transmuter {
    pub fn new(data_adapter: Arc<dyn DataAdapter>, engine: Arc<dyn TransmutationEngine>) -> Self {
        Self {
            data_adapter,
            engine,
        }
    }

    pub async fn invoke(
        &self,
        manifest: &ManifestSource,
        context: Context,
    ) -> Result<(), AlchemistError> {
        let request = match manifest {
            ManifestSource::Location(location) => {
                tracing::debug!(location = %location, "loading manifest");
                let (loaded_manifest, base_path) =
                    self.data_adapter.load_manifest(location, &context).await?;
                TransmuteRequest {
                    manifest_base_path: Some(base_path),
                    data_adapter: self.data_adapter.as_ref(),
                    loaded_manifest,
                    context_values: Context::empty(),
                }
            }
            ManifestSource::Inline(document) => {
                let mut merged = document.clone();
                merged.insert("context".to_string(), context.into_value());
                TransmuteRequest {
                    manifest_base_path: None,
                    data_adapter: self.data_adapter.as_ref(),
                    loaded_manifest: LoadedManifest::parse(Value::Object(merged))?,
                    context_values: Context::empty(),
                }
            }
        };

        tracing::info!(
            location = manifest.location(),
            base_path = ?request.manifest_base_path,
            "invoking transmutation engine"
        );
        self.engine.transmute(request).await
    }
}

impl std::fmt::Debug for Transmuter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transmuter").finish_non_exhaustive()
    }
}
