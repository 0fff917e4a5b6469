// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `alchemist` subcommand contributed to the host.

use std::sync::Arc;

use alchemist_config::PluginOptions;
use alchemist_core::{AlchemistError, CommandContext, CommandUsage, PluginCommand};
use async_trait::async_trait;

use crate::context::build_context;
use crate::invoker::Transmuter;

/// Path the command is registered under.
pub const COMMAND_PATH: &str = "alchemist";

/// Loads the active project configuration, builds the context, and runs the
/// transmutation. Trailing arguments are accepted and ignored.
pub struct AlchemistCommand {
    options: Arc<PluginOptions>,
    transmuter: Transmuter,
}

impl AlchemistCommand {
    pub fn new(options: Arc<PluginOptions>, transmuter: Transmuter) -> Self {
        Self {
            options,
            transmuter,
        }
    }
}

#[async_trait]
impl PluginCommand for AlchemistCommand {
    fn paths(&self) -> Vec<Vec<String>> {
        vec![vec![COMMAND_PATH.to_string()]]
    }

    fn usage(&self) -> CommandUsage {
        CommandUsage {
            description: "Invoke Alchemist build command".to_string(),
            category: "Alchemist".to_string(),
        }
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> Result<(), AlchemistError> {
        tracing::info!(
            args = ?ctx.args,
            mode = %self.options.context_mode,
            "running alchemist command"
        );
        let config = ctx.config_loader.load_config().await?;
        let context = build_context(config.as_ref(), &self.options);
        self.transmuter.invoke(&self.options.manifest, context).await
    }
}
