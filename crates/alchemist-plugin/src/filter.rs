// SPDX-FileCopyrightText: 2026 Alchemist Plugin Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Label filter over configuration nodes.
//!
//! A node is retained when, for every key of the filter, the node carries
//! that label and at least one of its values is among the accepted values.
//! Keys combine with AND, values within a key with OR. Comparison is exact
//! and case-sensitive.

use alchemist_config::IncludedLabels;
use alchemist_core::{ConfigurationNode, Labels};

/// Returns true if `labels` satisfy every key of `included`.
///
/// An empty filter matches everything.
pub fn matches_labels(labels: &Labels, included: &IncludedLabels) -> bool {
    included.iter().all(|(key, accepted)| {
        labels
            .get(key)
            .is_some_and(|values| values.iter().any(|value| accepted.contains(value)))
    })
}

/// Returns the nodes whose labels satisfy `included`, preserving order.
pub fn filter_by_labels<'a, N>(nodes: &[&'a N], included: &IncludedLabels) -> Vec<&'a N>
where
    N: ConfigurationNode + ?Sized,
{
    if included.is_empty() {
        return nodes.to_vec();
    }

    nodes
        .iter()
        .copied()
        .filter(|node| {
            let retained = matches_labels(&node.normalize_labels(), included);
            if !retained {
                tracing::debug!(node = node.identifier(), "excluded by label filter");
            }
            retained
        })
        .collect()
}
