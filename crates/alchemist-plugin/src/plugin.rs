// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin adapter: the lifecycle hooks and command registration the host sees.

use std::sync::Arc;

use alchemist_config::{PluginOptions, validate_options};
use alchemist_core::{
    AlchemistError, DataAdapter, HostContext, HostPlugin, PluginCommand, PluginFactory,
    TransmutationEngine,
};
use async_trait::async_trait;

use crate::command::AlchemistCommand;
use crate::context::build_context;
use crate::invoker::Transmuter;

/// Name the plugin reports to the host.
pub const PLUGIN_NAME: &str = "alchemist";

/// The Alchemist workflow plugin.
///
/// Options are validated once, when the plugin is created, and shared by the
/// hooks and the registered command.
pub struct AlchemistPlugin {
    options: Arc<PluginOptions>,
    transmuter: Transmuter,
}

impl AlchemistPlugin {
    pub fn new(options: PluginOptions, transmuter: Transmuter) -> Self {
        Self {
            options: Arc::new(options),
            transmuter,
        }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }
}

/// Validate raw options and create the plugin.
///
/// Fails with [`AlchemistError::Validation`] before anything else runs if the
/// options are malformed.
pub fn create_plugin(
    options: &serde_json::Value,
    data_adapter: Arc<dyn DataAdapter>,
    engine: Arc<dyn TransmutationEngine>,
) -> Result<AlchemistPlugin, AlchemistError> {
    let options = validate_options(options)?;
    tracing::debug!(
        manifest = options.manifest.location(),
        included = options.included.len(),
        mode = %options.context_mode,
        "created alchemist plugin"
    );
    Ok(AlchemistPlugin::new(
        options,
        Transmuter::new(data_adapter, engine),
    ))
}

#[async_trait]
impl HostPlugin for AlchemistPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    async fn init(&self, ctx: &HostContext<'_>) -> Result<(), AlchemistError> {
        tracing::info!(config = ctx.config.identifier(), "running alchemist init hook");
        let context = build_context(ctx.config, &self.options);
        self.transmuter.invoke(&self.options.manifest, context).await
    }

    async fn update_version(
        &self,
        old_version: &semver::Version,
        new_version: &semver::Version,
        _ctx: &HostContext<'_>,
    ) -> Result<(), AlchemistError> {
        tracing::debug!(
            old = %old_version,
            new = %new_version,
            "alchemist has nothing to do on version update"
        );
        Ok(())
    }

    fn register_commands(&self) -> Vec<Box<dyn PluginCommand>> {
        vec![Box::new(AlchemistCommand::new(
            self.options.clone(),
            self.transmuter.clone(),
        ))]
    }
}

/// Factory hosts register to create the plugin from raw options.
pub struct AlchemistPluginFactory {
    data_adapter: Arc<dyn DataAdapter>,
    engine: Arc<dyn TransmutationEngine>,
}

impl AlchemistPluginFactory {
    pub fn new(data_adapter: Arc<dyn DataAdapter>, engine: Arc<dyn TransmutationEngine>) -> Self {
        Self {
            data_adapter,
            engine,
        }
    }
}

impl PluginFactory for AlchemistPluginFactory {
    fn create(&self, options: &serde_json::Value) -> Result<Box<dyn HostPlugin>, AlchemistError> {
        let plugin = create_plugin(options, self.data_adapter.clone(), self.engine.clone())?;
        Ok(Box::new(plugin))
    }
}
