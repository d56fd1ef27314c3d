//! Batched, rollback-capable writes of generated files.
//!
//! Every output of a run is rendered in memory first and published here in
//! one pass. Each file is written through a temporary sibling and renamed
//! into place; if any write fails, files already published are restored and
//! directories created by the publish are removed.
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One file to publish.
#[derive(Debug, Clone)]
pub struct PlannedWrite {
    pub path: PathBuf,
    pub contents: String,
}

impl PlannedWrite {
    pub fn new(path: PathBuf, contents: String) -> Self {
        Self { path, contents }
    }
}

/// Publish all planned writes or none of them.
pub fn publish_writes(writes: &[PlannedWrite]) -> Result<Vec<PathBuf>> {
    let mut published = Vec::new();
    let mut backups: Vec<(PathBuf, Option<Vec<u8>>)> = Vec::new();
    let mut created_dirs = Vec::new();
    for write in writes {
        let previous = if write.path.is_file() {
            Some(
                fs::read(&write.path)
                    .with_context(|| format!("backup {}", write.path.display()))?,
            )
        } else {
            None
        };
        backups.push((write.path.clone(), previous));
        if let Some(dir) = first_missing_ancestor(&write.path) {
            created_dirs.push(dir);
        }

        if let Err(err) = write_text_atomic(&write.path, &write.contents) {
            rollback_writes(&backups, &created_dirs);
            return Err(err);
        }
        tracing::debug!(path = %write.path.display(), bytes = write.contents.len(), "published");
        published.push(write.path.clone());
    }
    Ok(published)
}

/// Write `text` to `dest` through a temporary sibling and a rename.
pub fn write_text_atomic(dest: &Path, text: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let file_name = dest
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("staged");
    let tmp_path = dest
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!(".{file_name}.tmp"));
    fs::write(&tmp_path, text.as_bytes())
        .with_context(|| format!("write {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, dest) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("publish {}", dest.display()));
    }
    Ok(())
}

/// Outermost ancestor of `path` that does not exist yet.
fn first_missing_ancestor(path: &Path) -> Option<PathBuf> {
    let mut missing = None;
    let mut current = path.parent();
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() || dir.exists() {
            break;
        }
        missing = Some(dir.to_path_buf());
        current = dir.parent();
    }
    missing
}

fn rollback_writes(backups: &[(PathBuf, Option<Vec<u8>>)], created_dirs: &[PathBuf]) {
    for (path, previous) in backups.iter().rev() {
        let restored = match previous {
            Some(bytes) => fs::write(path, bytes),
            None if path.exists() => fs::remove_file(path),
            None => Ok(()),
        };
        if let Err(err) = restored {
            tracing::warn!(path = %path.display(), %err, "rollback failed");
        }
    }
    for dir in created_dirs.iter().rev() {
        if !dir.exists() {
            continue;
        }
        if let Err(err) = fs::remove_dir_all(dir) {
            tracing::warn!(path = %dir.display(), %err, "rollback failed");
        }
    }
}
