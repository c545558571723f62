use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the classdoc binary.
#[derive(Parser, Debug)]
#[command(
    name = "classdoc",
    version,
    about = "Document the configuration shape of exported classes"
)]
pub struct CliArgs {
    /// Type-graph manifests, or directories searched for `*.json` manifests.
    pub inputs: Vec<PathBuf>,

    /// Path to classdoc.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    /// Maximum ancestor-path length at which nested types are still expanded.
    #[arg(long = "maxDepth", alias = "max-depth")]
    pub max_depth: Option<usize>,

    /// Shapes with more properties than this are emitted without members.
    #[arg(long = "maxProps", alias = "max-props")]
    pub max_props: Option<usize>,

    /// Write the documentation to this file instead of stdout.
    #[arg(short = 'o', long = "out")]
    pub out: Option<PathBuf>,

    /// Print single-line JSON.
    #[arg(long)]
    pub compact: bool,

    /// Disable colors in failure reports.
    #[arg(long = "noColor", alias = "no-color")]
    pub no_color: bool,
}
