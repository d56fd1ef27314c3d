//! Shared setup for workflow commands.
use crate::cli::CommonArgs;
use crate::config::{resolve_config, ConfigOverrides, GeneratorConfig};
use crate::help::{HelpCommand, SectionPatterns, UtilHelp};
use crate::paths::{document_name, ProjectPaths};
use anyhow::{Context, Result};
use std::path::Path;

/// Resolved config, paths, and help tooling for one command invocation.
pub(crate) struct GeneratorContext {
    pub(crate) config: GeneratorConfig,
    pub(crate) paths: ProjectPaths,
    pub(crate) command: HelpCommand,
    pub(crate) patterns: SectionPatterns,
    program_name: String,
}

impl GeneratorContext {
    pub(crate) fn load(common: &CommonArgs, utils_file: Option<&Path>) -> Result<Self> {
        let overrides = ConfigOverrides {
            program: common.program.clone(),
            help_flag: common.help_flag.clone(),
            utils_file: utils_file.map(Path::to_path_buf),
        };
        let config = resolve_config(&common.root, common.config.as_deref(), &overrides)?;
        let paths = ProjectPaths::new(common.root.clone(), &config);
        let command = HelpCommand::parse(&config.program, &config.help_flag)?;
        let patterns = SectionPatterns::new()?;
        let program_name = command.program_name();
        Ok(Self {
            config,
            paths,
            command,
            patterns,
            program_name,
        })
    }

    /// Document base name for `util`, e.g. `virgil-keygen`.
    pub(crate) fn document_name(&self, util: &str) -> String {
        document_name(&self.program_name, util)
    }

    /// Capture and extract help for `util`.
    pub(crate) fn help_for(&self, util: &str) -> Result<UtilHelp> {
        let text = self.command.capture(util)?;
        self.extract(util, &text)
    }

    pub(crate) fn extract(&self, util: &str, help_text: &str) -> Result<UtilHelp> {
        let help = self
            .patterns
            .extract(util, help_text)
            .with_context(|| format!("extract help sections for {util}"))?;
        Ok(help)
    }
}
