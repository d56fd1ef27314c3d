//! reStructuredText man page renderer.
//!
//! Captured help text is inserted verbatim; nothing is escaped, so RST markup
//! in the help text passes through as-is.

use crate::help::{Section, UtilHelp};

/// Render the page for `title` from extracted help sections.
pub fn render_man_page(title: &str, help: &UtilHelp) -> String {
    let mut out = String::new();
    append_title_block(&mut out, title);

    append_section_heading(&mut out, Section::Synopsis);
    out.push_str(&help.synopsis);
    out.push('\n');

    append_section_heading(&mut out, Section::Description);
    out.push_str(&help.name);
    out.push_str("\n\n");

    append_section_heading(&mut out, Section::Options);
    out.push_str(&help.options);
    out.push_str("\n\n");

    append_section_heading(&mut out, Section::Examples);
    out.push_str(&help.examples);
    out.push_str("\n\n");

    out
}

/// A rule of `ch` as long as `title`, counted in characters.
pub fn rule(title: &str, ch: char) -> String {
    String::from(ch).repeat(title.chars().count())
}

fn append_title_block(out: &mut String, title: &str) {
    append_ruled(out, title, '*');
    out.push('\n');
}

fn append_section_heading(out: &mut String, section: Section) {
    append_ruled(out, section.title(), '=');
}

fn append_ruled(out: &mut String, title: &str, ch: char) {
    let rule = rule(title, ch);
    out.push_str(&rule);
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::SectionPatterns;

    fn foo_help() -> UtilHelp {
        UtilHelp {
            name: "does foo\n".to_string(),
            synopsis: "foo [-x]\n".to_string(),
            options: "-x  enable x\n".to_string(),
            examples: "foo -x\n".to_string(),
        }
    }

    #[test]
    fn renders_full_page_layout() {
        let page = render_man_page("foo", &foo_help());
        let expected = "***\nfoo\n***\n\n\
            ========\nSYNOPSIS\n========\nfoo [-x]\n\n\
            ===========\nDESCRIPTION\n===========\ndoes foo\n\n\n\
            =======\nOPTIONS\n=======\n-x  enable x\n\n\n\
            ========\nEXAMPLES\n========\nfoo -x\n\n\n";
        assert_eq!(page, expected);
    }

    #[test]
    fn extracted_help_renders_synopsis_block() {
        let text = "Synopsis:\n  foo [-x]\nOptions:\n  -x  enable x\nDESCRIPTION:\n  does foo\nEXAMPLES:\n  foo -x\n";
        let patterns = SectionPatterns::new().expect("compile patterns");
        let help = patterns.extract("foo", text).expect("extract");
        assert_eq!(help, foo_help());
        let page = render_man_page("foo", &help);
        assert!(page.contains("SYNOPSIS\n========\nfoo [-x]"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let help = foo_help();
        assert_eq!(
            render_man_page("card-create", &help),
            render_man_page("card-create", &help)
        );
    }

    #[test]
    fn rule_length_matches_title_length() {
        for title in ["", "x", "foo", "card-create", "ключ", "SYNOPSIS"] {
            let rule = rule(title, '=');
            assert_eq!(rule.chars().count(), title.chars().count(), "title {title:?}");
            assert!(rule.chars().all(|ch| ch == '='));
        }
    }

    #[test]
    fn title_rules_match_for_empty_and_single_char_titles() {
        let page = render_man_page("", &UtilHelp::default());
        assert!(page.starts_with("\n\n\n\n"));
        let page = render_man_page("k", &UtilHelp::default());
        assert!(page.starts_with("*\nk\n*\n\n"));
    }

    #[test]
    fn rendered_examples_keep_no_tabs() {
        let text = "Synopsis:\nfoo\nOptions:\n-x\nDESCRIPTION:\nd\nEXAMPLES:\n\tfoo\t-x\n";
        let help = SectionPatterns::new()
            .expect("compile patterns")
            .extract("foo", text)
            .expect("extract");
        let page = render_man_page("foo", &help);
        assert!(!page.contains('\t'));
        assert!(page.contains("foo  -x\n"));
    }

    #[test]
    fn help_text_is_not_escaped() {
        let help = UtilHelp {
            name: "uses *stars* and `ticks`\n".to_string(),
            ..foo_help()
        };
        let page = render_man_page("foo", &help);
        assert!(page.contains("uses *stars* and `ticks`\n"));
    }
}
