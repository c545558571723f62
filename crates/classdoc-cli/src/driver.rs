use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span};
use walkdir::WalkDir;

use classdoc::manifest::Manifest;
use classdoc::{DocGenOptions, Documentation, generate_documentation};

use crate::args::CliArgs;
use crate::config::{CONFIG_FILE_NAME, load_config, resolve_config, resolve_config_path};

const MANIFEST_EXTENSION: &str = "json";

/// Outcome of one documentation run.
#[derive(Debug, Default)]
pub struct RunResult {
    pub documentation: Documentation,
    /// Manifests read, in output order.
    pub manifests: Vec<PathBuf>,
}

/// Resolve configuration, document every manifest and concatenate the
/// results in input order.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let config_path = resolve_config_path(cwd, args.project.as_deref())?;
    let config = config_path.as_deref().map(load_config).transpose()?;
    let resolved = resolve_config(config, &args.inputs, args.max_depth, args.max_props, cwd);

    if resolved.inputs.is_empty() {
        bail!("no input manifests; pass files or directories, or use --project");
    }

    let manifests = collect_manifests(&resolved.inputs)?;
    debug!(count = manifests.len(), options = ?resolved.options, "documenting manifests");

    let documentation = document_manifests(&manifests, resolved.options)?;
    Ok(RunResult {
        documentation,
        manifests,
    })
}

/// Expand directories into the `*.json` manifests below them, sorted by
/// path. Project files found while walking are not manifests and are
/// skipped.
pub fn collect_manifests(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut manifests = Vec::new();

    for input in inputs {
        if input.is_file() {
            manifests.push(input.clone());
            continue;
        }
        if !input.is_dir() {
            bail!("input not found: {}", input.display());
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("failed to read directory {}", input.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let is_manifest = path
                .extension()
                .is_some_and(|extension| extension == MANIFEST_EXTENSION);
            let is_config = path
                .file_name()
                .is_some_and(|name| name == CONFIG_FILE_NAME);
            if is_manifest && !is_config {
                manifests.push(path.to_path_buf());
            }
        }
    }

    Ok(manifests)
}

/// Document manifests in parallel. Each manifest gets its own type graph;
/// results keep the order of `manifests`.
pub fn document_manifests(manifests: &[PathBuf], options: DocGenOptions) -> Result<Documentation> {
    let results = manifests
        .par_iter()
        .map(|path| document_manifest(path, options))
        .collect::<Result<Vec<_>>>()?;

    let mut documentation = Documentation::default();
    for result in results {
        documentation.extend(result);
    }
    Ok(documentation)
}

pub fn document_manifest(path: &Path, options: DocGenOptions) -> Result<Documentation> {
    let _span = debug_span!("manifest", path = %path.display()).entered();

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest: {}", path.display()))?;
    let manifest = Manifest::from_json(&source)
        .with_context(|| format!("failed to parse manifest: {}", path.display()))?;
    let graph = manifest
        .lower()
        .with_context(|| format!("invalid manifest: {}", path.display()))?;

    Ok(generate_documentation(&graph, options))
}

/// JSON text for the class list, newline-terminated.
pub fn render_json(documentation: &Documentation, compact: bool) -> Result<String> {
    let mut text = if compact {
        serde_json::to_string(documentation)
    } else {
        serde_json::to_string_pretty(documentation)
    }
    .context("failed to serialize documentation")?;
    text.push('\n');
    Ok(text)
}
