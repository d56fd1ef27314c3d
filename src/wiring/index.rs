/// Two-line toctree stub pointing at a generated page.
///
/// No trailing newline is written after the reference line.
pub fn index_stub(page_reference: &str) -> String {
    format!(".. toctree::\n    {page_reference}")
}
