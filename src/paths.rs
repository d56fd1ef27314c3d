//! Typed paths into a Sphinx docs tree.
//!
//! All file and document names derive from here so index stubs, pages, and
//! `conf.py` records always agree.
use crate::config::GeneratorConfig;
use std::path::{Path, PathBuf};

/// Document base name for a utility, e.g. `virgil-card-create`.
pub fn document_name(program_name: &str, util: &str) -> String {
    format!("{program_name}-{util}")
}

/// Locates generator inputs and outputs under a docs root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
    utils_file: PathBuf,
    source_dir: String,
    indexes_dir: String,
    pages_dir: String,
    conf_py: String,
}

impl ProjectPaths {
    pub fn new(root: PathBuf, config: &GeneratorConfig) -> Self {
        Self {
            root,
            utils_file: config.utils_file.clone(),
            source_dir: config.source_dir.clone(),
            indexes_dir: config.indexes_dir.clone(),
            pages_dir: config.pages_dir.clone(),
            conf_py: config.conf_py.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the utility list path.
    pub fn utils_path(&self) -> PathBuf {
        self.root.join(&self.utils_file)
    }

    /// Return the Sphinx `source/` directory.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }

    /// Return the `source/conf.py` path.
    pub fn conf_py_path(&self) -> PathBuf {
        self.source_dir().join(&self.conf_py)
    }

    /// Return the `source/indexes/<doc>.rst` path.
    pub fn index_path(&self, doc_name: &str) -> PathBuf {
        self.source_dir()
            .join(&self.indexes_dir)
            .join(format!("{doc_name}.rst"))
    }

    /// Return the `source/virgil-cli/<doc>.rst` path.
    pub fn page_path(&self, doc_name: &str) -> PathBuf {
        self.source_dir()
            .join(&self.pages_dir)
            .join(format!("{doc_name}.rst"))
    }

    /// Sphinx document name of the index stub, as listed in `man_pages`.
    pub fn index_document(&self, doc_name: &str) -> String {
        format!("{}/{doc_name}", self.indexes_dir)
    }

    /// Page reference written into the index stub's toctree.
    pub fn page_reference(&self, doc_name: &str) -> String {
        format!("../{}/{doc_name}.rst", self.pages_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;

    #[test]
    fn default_layout_paths() {
        let paths = ProjectPaths::new(PathBuf::from("/docs"), &default_config());
        let doc = document_name("virgil", "card-create");
        assert_eq!(doc, "virgil-card-create");
        assert_eq!(paths.utils_path(), PathBuf::from("/docs/utils.txt"));
        assert_eq!(paths.conf_py_path(), PathBuf::from("/docs/source/conf.py"));
        assert_eq!(
            paths.index_path(&doc),
            PathBuf::from("/docs/source/indexes/virgil-card-create.rst")
        );
        assert_eq!(
            paths.page_path(&doc),
            PathBuf::from("/docs/source/virgil-cli/virgil-card-create.rst")
        );
        assert_eq!(paths.index_document(&doc), "indexes/virgil-card-create");
        assert_eq!(
            paths.page_reference(&doc),
            "../virgil-cli/virgil-card-create.rst"
        );
    }

    #[test]
    fn custom_pages_dir_flows_into_references() {
        let mut config = default_config();
        config.pages_dir = "cli".to_string();
        let paths = ProjectPaths::new(PathBuf::from("docs"), &config);
        assert_eq!(paths.page_reference("virgil-keygen"), "../cli/virgil-keygen.rst");
        assert_eq!(
            paths.page_path("virgil-keygen"),
            PathBuf::from("docs/source/cli/virgil-keygen.rst")
        );
    }
}
