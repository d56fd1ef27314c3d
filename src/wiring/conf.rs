//! `conf.py` patching for the Sphinx `man_pages` array.
//!
//! Records are spliced in right after the `man_pages = [` line, so the most
//! recently added record always comes first.
use crate::error::ConfError;
use std::path::Path;

/// Array-opening marker located in `conf.py`. Only the first occurrence is used.
pub const MAN_PAGES_MARKER: &str = "man_pages = [";

/// Trailing separator written after a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySeparator {
    Comma,
    Bare,
}

impl EntrySeparator {
    fn as_str(self) -> &'static str {
        match self {
            EntrySeparator::Comma => ",",
            EntrySeparator::Bare => "",
        }
    }
}

/// One `man_pages` tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManPageEntry {
    pub document: String,
    pub name: String,
    pub description: String,
}

impl ManPageEntry {
    /// Build a record; whitespace runs in `description` collapse to one space.
    pub fn new(document: &str, name: &str, description: &str) -> Self {
        Self {
            document: document.to_string(),
            name: name.to_string(),
            description: collapse_whitespace(description),
        }
    }

    /// Format the record as one indented `conf.py` line.
    pub fn format(&self, separator: EntrySeparator) -> String {
        format!(
            "    (\"{}\", \"{}\", u\"{}\", [author], 1){}\n",
            escape_py_string(&self.document),
            escape_py_string(&self.name),
            escape_py_string(&self.description),
            separator.as_str()
        )
    }
}

/// Records accumulated over a run, spliced into `conf.py` in one pass.
#[derive(Debug, Default)]
pub struct ConfPatch {
    entries: Vec<ManPageEntry>,
}

impl ConfPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ManPageEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Splice every record into `text`, newest first.
    ///
    /// Records get a trailing comma, except the oldest one when the array had
    /// no elements before the patch.
    pub fn apply(&self, text: &str, path: &Path) -> Result<String, ConfError> {
        let point = insertion_point(text).ok_or_else(|| marker_not_found(path))?;
        let array_empty = text[point.offset..].trim_start().starts_with(']');
        let mut patched = text.to_string();
        for (idx, entry) in self.entries.iter().enumerate() {
            let separator = if idx == 0 && array_empty {
                EntrySeparator::Bare
            } else {
                EntrySeparator::Comma
            };
            patched = insert_entry(&patched, entry, separator, path)?;
        }
        Ok(patched)
    }
}

/// Splice one record immediately after the marker line.
pub fn insert_entry(
    text: &str,
    entry: &ManPageEntry,
    separator: EntrySeparator,
    path: &Path,
) -> Result<String, ConfError> {
    let point = insertion_point(text).ok_or_else(|| marker_not_found(path))?;
    let line = entry.format(separator);
    let mut out = String::with_capacity(text.len() + line.len() + 1);
    out.push_str(&text[..point.offset]);
    if point.needs_newline {
        out.push('\n');
    }
    out.push_str(&line);
    out.push_str(&text[point.offset..]);
    Ok(out)
}

struct InsertionPoint {
    offset: usize,
    needs_newline: bool,
}

fn insertion_point(text: &str) -> Option<InsertionPoint> {
    let start = text.find(MAN_PAGES_MARKER)? + MAN_PAGES_MARKER.len();
    let rest = &text[start..];
    let point = match rest.find('\n') {
        Some(newline) if rest[..newline].trim().is_empty() => InsertionPoint {
            offset: start + newline + 1,
            needs_newline: false,
        },
        None if rest.trim().is_empty() => InsertionPoint {
            offset: text.len(),
            needs_newline: true,
        },
        // Elements share the marker line; start a fresh line right after `[`.
        _ => InsertionPoint {
            offset: start,
            needs_newline: true,
        },
    };
    Some(point)
}

fn marker_not_found(path: &Path) -> ConfError {
    ConfError::MarkerNotFound {
        path: path.to_path_buf(),
        marker: MAN_PAGES_MARKER,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn escape_py_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
#[path = "conf_tests.rs"]
mod tests;
