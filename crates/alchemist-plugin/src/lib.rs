// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workflow plugin that drives the Alchemist transmutation engine.
//!
//! The host creates the plugin from its raw options (see [`create_plugin`]
//! or [`AlchemistPluginFactory`]). The plugin contributes one `alchemist`
//! command and an `init` hook; both turn the project configuration into a
//! context and hand it, with the configured manifest, to the engine.
//!
//! The plugin never owns a `main`: the host, the data adapter, and the
//! engine are all injected.

pub mod command;
pub mod context;
pub mod filter;
pub mod fs_adapter;
pub mod invoker;
pub mod plugin;

pub use command::{AlchemistCommand, COMMAND_PATH};
pub use context::{build_context, build_filtered_context, build_recursive_context};
pub use filter::{filter_by_labels, matches_labels};
pub use fs_adapter::FileDataAdapter;
pub use invoker::Transmuter;
pub use plugin::{AlchemistPlugin, AlchemistPluginFactory, PLUGIN_NAME, create_plugin};
