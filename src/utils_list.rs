//! Utility list (`utils.txt`) parsing.
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

/// Parse utility names in file order.
///
/// Blank lines and lines whose first character is `#` are skipped; names are
/// trimmed.
pub fn parse_utils_list(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and validate the utility list at `path`.
pub fn read_utils_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read utility list {}", path.display()))?;
    let utils = parse_utils_list(&text);
    for util in &utils {
        validate_util_name(util)
            .with_context(|| format!("invalid entry in utility list {}", path.display()))?;
    }
    Ok(utils)
}

/// Utility names become file-name components and toctree references, so they
/// must not carry path separators or dot components.
pub fn validate_util_name(util: &str) -> Result<()> {
    if util == "." || util == ".." || util.contains(['/', '\\', '\0']) {
        return Err(anyhow!(
            "invalid utility name {util}: path separators and `..` are not allowed"
        ));
    }
    Ok(())
}
