//! Serializer configuration.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::limits::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_PROPS, MAX_DEPTH_CEILING};

/// Limits applied to every class documented in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocGenOptions {
    /// Maximum ancestor-path length (counting the type being serialized)
    /// at which child types are still expanded.
    pub max_depth: usize,
    /// Shapes with more declared properties than this are not expanded.
    pub max_props: usize,
}

impl Default for DocGenOptions {
    fn default() -> Self {
        DocGenOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            max_props: DEFAULT_MAX_PROPS,
        }
    }
}

impl DocGenOptions {
    pub fn new(max_depth: usize, max_props: usize) -> Self {
        DocGenOptions {
            max_depth,
            max_props,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_props(mut self, max_props: usize) -> Self {
        self.max_props = max_props;
        self
    }

    /// Returns these options with `max_depth` clamped to [`MAX_DEPTH_CEILING`].
    pub fn clamped(self) -> Self {
        if self.max_depth > MAX_DEPTH_CEILING {
            warn!(
                requested = self.max_depth,
                ceiling = MAX_DEPTH_CEILING,
                "maxDepth exceeds the recursion ceiling, clamping"
            );
            return self.with_max_depth(MAX_DEPTH_CEILING);
        }
        self
    }
}
