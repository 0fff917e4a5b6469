// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Alchemist plugin integration tests.
//!
//! Provides recording mock collaborators for fast, deterministic tests
//! without a real transmutation engine or host.
//!
//! # Components
//!
//! - [`MockDataAdapter`] - Data adapter returning a fixed manifest and recording loads
//! - [`MockEngine`] - Transmutation engine recording every request
//! - [`InMemoryConfigLoader`] - Host config loader serving a fixed
//!   [`ConfigTree`](alchemist_core::ConfigTree)

pub mod mock_adapter;
pub mod mock_engine;
pub mod mock_host;

pub use mock_adapter::{LoadCall, MockDataAdapter};
pub use mock_engine::{MockEngine, RecordedRequest};
pub use mock_host::InMemoryConfigLoader;
