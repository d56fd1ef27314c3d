//! Generator configuration helpers.
//!
//! The config is an optional JSON file in the docs root. Every key has a
//! default matching the virgil docs layout, and CLI flags override file values.
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Config file picked up from the docs root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "vcli2sphinx.json";

/// Layout and invocation settings for one docs tree.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Program command line; the utility name and help flag are appended.
    pub program: String,
    pub help_flag: String,
    /// Utility list, relative to the docs root unless absolute.
    pub utils_file: PathBuf,
    /// Sphinx source directory, relative to the docs root.
    pub source_dir: String,
    /// Index stub directory under `source_dir`. Must be a single directory.
    pub indexes_dir: String,
    /// Page directory under `source_dir`.
    pub pages_dir: String,
    /// Sphinx config file under `source_dir`.
    pub conf_py: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        default_config()
    }
}

/// Build the config used when no config file exists.
pub fn default_config() -> GeneratorConfig {
    GeneratorConfig {
        program: "virgil".to_string(),
        help_flag: "-h".to_string(),
        utils_file: PathBuf::from("utils.txt"),
        source_dir: "source".to_string(),
        indexes_dir: "indexes".to_string(),
        pages_dir: "virgil-cli".to_string(),
        conf_py: "conf.py".to_string(),
    }
}

/// Values supplied on the command line that replace config file values.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub program: Option<String>,
    pub help_flag: Option<String>,
    pub utils_file: Option<PathBuf>,
}

/// Load a config file from disk.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

/// Resolve the effective config for a docs root.
///
/// An explicit path must exist; otherwise `<root>/vcli2sphinx.json` is used
/// when present and defaults apply when it is not.
pub fn resolve_config(
    root: &Path,
    explicit: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<GeneratorConfig> {
    let mut config = match explicit {
        Some(path) => load_config(path)?,
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                load_config(&candidate)?
            } else {
                default_config()
            }
        }
    };
    apply_overrides(&mut config, overrides);
    validate_config(&config)?;
    tracing::debug!(?config, "resolved generator config");
    Ok(config)
}

fn apply_overrides(config: &mut GeneratorConfig, overrides: &ConfigOverrides) {
    if let Some(program) = &overrides.program {
        config.program = program.clone();
    }
    if let Some(help_flag) = &overrides.help_flag {
        config.help_flag = help_flag.clone();
    }
    if let Some(utils_file) = &overrides.utils_file {
        config.utils_file = utils_file.clone();
    }
}

/// Validate user-provided values before any file is touched.
pub fn validate_config(config: &GeneratorConfig) -> Result<()> {
    if config.program.trim().is_empty() {
        return Err(anyhow!("program must not be empty"));
    }
    if config.help_flag.trim().is_empty() {
        return Err(anyhow!("help_flag must not be empty"));
    }
    if config.utils_file.as_os_str().is_empty() {
        return Err(anyhow!("utils_file must not be empty"));
    }
    validate_relative("source_dir", &config.source_dir)?;
    validate_relative("indexes_dir", &config.indexes_dir)?;
    validate_relative("pages_dir", &config.pages_dir)?;
    validate_relative("conf_py", &config.conf_py)?;
    // Index stubs reference pages as `../<pages_dir>/...`.
    if Path::new(&config.indexes_dir).components().count() != 1 {
        return Err(anyhow!(
            "indexes_dir must be a single directory name (got {:?})",
            config.indexes_dir
        ));
    }
    Ok(())
}

fn validate_relative(label: &str, rel: &str) -> Result<()> {
    let path = PathBuf::from(rel);
    if rel.trim().is_empty() || path.is_absolute() || has_parent_components(&path) {
        return Err(anyhow!(
            "{label} must be a relative path without '..' (got {rel:?})"
        ));
    }
    Ok(())
}

fn has_parent_components(path: &Path) -> bool {
    path.components()
        .any(|component| matches!(component, Component::ParentDir))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
