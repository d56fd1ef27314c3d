use serde::Serialize;

/// The four regions scraped from one utility's help text.
///
/// Every field is trimmed and ends with exactly one `\n`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct UtilHelp {
    /// One-paragraph description taken from the `DESCRIPTION:` region.
    pub name: String,
    pub synopsis: String,
    pub options: String,
    /// Examples block with tabs normalized to two spaces.
    pub examples: String,
}
