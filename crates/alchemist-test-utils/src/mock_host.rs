// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory host configuration loader.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use alchemist_core::{AlchemistError, ConfigLoader, ConfigTree, ConfigurationNode};

/// Serves a fixed [`ConfigTree`] as the host's active configuration.
pub struct InMemoryConfigLoader {
    config: Option<Arc<ConfigTree>>,
    loads: AtomicUsize,
}

impl InMemoryConfigLoader {
    pub fn new(config: ConfigTree) -> Self {
        Self {
            config: Some(Arc::new(config)),
            loads: AtomicUsize::new(0),
        }
    }

    /// A loader whose every load fails with `ConfigLoad`.
    pub fn failing() -> Self {
        Self {
            config: None,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of times the configuration was loaded.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigLoader for InMemoryConfigLoader {
    async fn load_config(&self) -> Result<Arc<dyn ConfigurationNode>, AlchemistError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match &self.config {
            Some(config) => Ok(config.clone() as Arc<dyn ConfigurationNode>),
            None => Err(AlchemistError::ConfigLoad {
                message: "no project configuration found".to_string(),
                source: None,
            }),
        }
    }
}
