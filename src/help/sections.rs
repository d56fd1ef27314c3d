//! Section markers and the extractor built from them.
//!
//! Help text is expected to carry four labeled regions in this order:
//! `Synopsis:`, `Options:`, `DESCRIPTION:`, `EXAMPLES:`. Each region runs from
//! its start marker to the first following end marker (or end of text for
//! examples). Extraction walks the text once, so regions never overlap and a
//! start marker that only appears before the previous region is an ordering
//! error.
use super::model::UtilHelp;
use crate::error::HelpError;
use anyhow::{Context, Result};
use regex::Regex;

/// A named region of help text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Synopsis,
    Options,
    Description,
    Examples,
}

impl Section {
    /// Sections in the order they must appear in help text.
    pub const ORDERED: [Section; 4] = [
        Section::Synopsis,
        Section::Options,
        Section::Description,
        Section::Examples,
    ];

    /// Heading used for this section in rendered pages and error messages.
    pub fn title(self) -> &'static str {
        match self {
            Section::Synopsis => "SYNOPSIS",
            Section::Options => "OPTIONS",
            Section::Description => "DESCRIPTION",
            Section::Examples => "EXAMPLES",
        }
    }

    pub fn start_marker(self) -> &'static str {
        match self {
            Section::Synopsis => "Synopsis:",
            Section::Options => "Options:",
            Section::Description => "DESCRIPTION:",
            Section::Examples => "EXAMPLES:",
        }
    }

    /// Marker that closes the region; `None` means the region runs to end of text.
    pub fn end_marker(self) -> Option<&'static str> {
        match self {
            Section::Synopsis => Some("Options"),
            Section::Options => Some("DESCRIPTION"),
            Section::Description => Some("EXAMPLES"),
            Section::Examples => None,
        }
    }
}

struct CompiledSection {
    section: Section,
    start: Regex,
    end: Option<(&'static str, Regex)>,
}

/// Compiled section markers, built once per run.
pub struct SectionPatterns {
    sections: Vec<CompiledSection>,
}

impl SectionPatterns {
    pub fn new() -> Result<Self> {
        let mut sections = Vec::with_capacity(Section::ORDERED.len());
        for section in Section::ORDERED {
            let start = compile_marker(section, section.start_marker())?;
            let end = match section.end_marker() {
                Some(marker) => Some((marker, compile_marker(section, marker)?)),
                None => None,
            };
            sections.push(CompiledSection {
                section,
                start,
                end,
            });
        }
        Ok(Self { sections })
    }

    /// Extract all four sections in order or fail on the first one that is
    /// missing or misplaced.
    pub fn extract(&self, util: &str, help_text: &str) -> Result<UtilHelp, HelpError> {
        let mut help = UtilHelp::default();
        let mut cursor = 0;
        for (idx, compiled) in self.sections.iter().enumerate() {
            let section = compiled.section;
            let start = match compiled.start.find_at(help_text, cursor) {
                Some(found) => found,
                None if compiled.start.is_match(help_text) => {
                    return Err(out_of_order(util, section));
                }
                None => return Err(missing_section(util, section, section.start_marker())),
            };

            let (region, region_end) = match &compiled.end {
                Some((marker, end)) => {
                    let found = end
                        .find_at(help_text, start.end())
                        .ok_or_else(|| missing_section(util, section, *marker))?;
                    (&help_text[start.end()..found.start()], found.start())
                }
                None => (&help_text[start.end()..], help_text.len()),
            };

            // A later section's start marker inside this region means the
            // sections are shuffled.
            if let Some(later) = self.sections[idx + 1..]
                .iter()
                .find(|later| later.start.is_match(region))
            {
                return Err(out_of_order(util, later.section));
            }
            cursor = region_end;

            let value = format!("{}\n", region.trim());
            match section {
                Section::Synopsis => help.synopsis = value,
                Section::Options => help.options = value,
                Section::Description => help.name = value,
                Section::Examples => help.examples = value.replace('\t', "  "),
            }
        }
        Ok(help)
    }
}

fn compile_marker(section: Section, marker: &str) -> Result<Regex> {
    Regex::new(&regex::escape(marker))
        .with_context(|| format!("compile {} section marker {marker:?}", section.title()))
}

fn missing_section(util: &str, section: Section, marker: &'static str) -> HelpError {
    HelpError::MissingSection {
        util: util.to_string(),
        section: section.title(),
        marker,
    }
}

fn out_of_order(util: &str, section: Section) -> HelpError {
    HelpError::OutOfOrder {
        util: util.to_string(),
        section: section.title(),
    }
}
