// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transmutation engine trait.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::AlchemistError;
use crate::traits::data_adapter::DataAdapter;
use crate::types::{Context, LoadedManifest};

/// Arguments for a single transmutation run.
pub struct TransmuteRequest<'a> {
    /// Base path of a manifest loaded from a location. `None` for inline manifests.
    pub manifest_base_path: Option<PathBuf>,
    pub data_adapter: &'a dyn DataAdapter,
    pub loaded_manifest: LoadedManifest,
    pub context_values: Context,
}

impl std::fmt::Debug for TransmuteRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransmuteRequest")
            .field("manifest_base_path", &self.manifest_base_path)
            .field("loaded_manifest", &self.loaded_manifest)
            .field("context_values", &self.context_values)
            .finish_non_exhaustive()
    }
}

/// The external engine that executes manifest-described transformations.
///
/// All real work (file generation, transformation) happens here. Nothing the
/// engine returns besides success or failure is consumed by the plugin.
#[async_trait]
pub trait TransmutationEngine: Send + Sync {
    async fn transmute(&self, request: TransmuteRequest<'_>) -> Result<(), AlchemistError>;
}
