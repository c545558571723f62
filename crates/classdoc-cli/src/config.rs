use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use classdoc::DocGenOptions;

/// Name of the project file looked up by `--project <dir>` and in the
/// working directory.
pub const CONFIG_FILE_NAME: &str = "classdoc.json";

/// Contents of a `classdoc.json` project file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassdocConfig {
    /// Manifests or manifest directories, relative to the config file.
    #[serde(default)]
    pub files: Vec<PathBuf>,
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub max_props: Option<usize>,
}

/// Options after merging the project file with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub inputs: Vec<PathBuf>,
    pub options: DocGenOptions,
}

pub fn parse_config(source: &str) -> Result<ClassdocConfig> {
    let config = serde_json::from_str(source).context("failed to parse classdoc.json")?;
    Ok(config)
}

/// Load a project file. Relative `files` entries are rebased onto the
/// directory containing it.
pub fn load_config(path: &Path) -> Result<ClassdocConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config =
        parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    for file in &mut config.files {
        if file.is_relative() {
            *file = base_dir.join(&*file);
        }
    }
    Ok(config)
}

pub(crate) fn find_config(cwd: &Path) -> Option<PathBuf> {
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Resolve `--project`, falling back to a `classdoc.json` in `cwd`.
pub fn resolve_config_path(cwd: &Path, project: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(project) = project else {
        return Ok(find_config(cwd));
    };

    let mut candidate = if project.is_absolute() {
        project.to_path_buf()
    } else {
        cwd.join(project)
    };

    if candidate.is_dir() {
        candidate = candidate.join(CONFIG_FILE_NAME);
    }

    if !candidate.exists() {
        bail!("config file not found at {}", candidate.display());
    }

    Ok(Some(candidate))
}

/// Merge a project file with command-line values. Command-line inputs
/// replace the config's `files`; explicit limits replace the config's.
pub fn resolve_config(
    config: Option<ClassdocConfig>,
    cli_inputs: &[PathBuf],
    cli_max_depth: Option<usize>,
    cli_max_props: Option<usize>,
    cwd: &Path,
) -> ResolvedConfig {
    let config = config.unwrap_or_default();
    let defaults = DocGenOptions::default();

    let inputs = if cli_inputs.is_empty() {
        config.files
    } else {
        cli_inputs
            .iter()
            .map(|input| {
                if input.is_relative() {
                    cwd.join(input)
                } else {
                    input.clone()
                }
            })
            .collect()
    };

    let options = DocGenOptions::new(
        cli_max_depth
            .or(config.max_depth)
            .unwrap_or(defaults.max_depth),
        cli_max_props
            .or(config.max_props)
            .unwrap_or(defaults.max_props),
    );

    ResolvedConfig { inputs, options }
}
