//! Single-page rendering to stdout.
use super::context::GeneratorContext;
use crate::cli::RenderArgs;
use crate::render::render_man_page;
use anyhow::{Context, Result};
use std::fs;

/// Render one utility's page (or its extracted sections) to stdout.
pub fn run_render(args: RenderArgs) -> Result<()> {
    let context = GeneratorContext::load(&args.common, None)?;
    let help = match &args.help_text {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read help text {}", path.display()))?;
            context.extract(&args.util, &text)?
        }
        None => context.help_for(&args.util)?,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&help).context("serialize help sections")?;
        println!("{json}");
    } else {
        print!("{}", render_man_page(&args.util, &help));
    }
    tracing::debug!(
        util = %args.util,
        document = %context.document_name(&args.util),
        "rendered page"
    );
    Ok(())
}
