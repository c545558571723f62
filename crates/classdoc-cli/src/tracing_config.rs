//! Tracing configuration.
//!
//! Logging is off unless `CLASSDOC_LOG` (or `RUST_LOG`) holds a filter.
//! `CLASSDOC_LOG_FORMAT` picks the output:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: `tracing-tree` output, one indent level per manifest, source
//!   unit and class
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! CLASSDOC_LOG=debug CLASSDOC_LOG_FORMAT=tree classdoc demos/
//! CLASSDOC_LOG="classdoc::serialize=trace" classdoc demos/nested-types.json
//! ```
//!
//! Everything is written to stderr; stdout carries only the JSON result.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "CLASSDOC_LOG";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";
const LOG_FORMAT_ENV: &str = "CLASSDOC_LOG_FORMAT";

const TREE_INDENT: usize = 2;

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unrecognized names fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Filter directives and output format requested through the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve settings through `lookup`, or `None` when logging is off.
    /// `CLASSDOC_LOG` wins over `RUST_LOG`.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup(LOG_ENV).or_else(|| lookup(FALLBACK_LOG_ENV))?;
        let format = lookup(LOG_FORMAT_ENV)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Some(LogSettings { directives, format })
    }

    pub fn from_env() -> Option<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }
}

/// Install the global subscriber when logging was requested.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let filter = settings.filter();

    match settings.format {
        LogFormat::Tree => {
            let layer = tracing_tree::HierarchicalLayer::new(TREE_INDENT).with_targets(true);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).init();
        }
    }
}
