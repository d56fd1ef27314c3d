//! Batch generation over the utility list.
//!
//! Every utility is captured, extracted, and rendered before any file is
//! touched, so a malformed help text aborts the run with nothing written.
use super::context::GeneratorContext;
use crate::cli::GenerateArgs;
use crate::render::render_man_page;
use crate::staging::{publish_writes, write_text_atomic, PlannedWrite};
use crate::utils_list::read_utils_list;
use crate::wiring::{index_stub, ConfPatch, ManPageEntry};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const REPORT_SCHEMA_VERSION: u32 = 1;

/// All in-memory output for one utility.
struct GeneratedUtil {
    util: String,
    document: String,
    index_path: PathBuf,
    index_stub: String,
    page_path: PathBuf,
    page: String,
    entry: ManPageEntry,
}

#[derive(Serialize)]
struct RunReport {
    schema_version: u32,
    program: String,
    root: String,
    dry_run: bool,
    utilities: Vec<UtilReport>,
    conf_py: String,
    conf_records: usize,
    written: Vec<String>,
}

#[derive(Serialize)]
struct UtilReport {
    util: String,
    document: String,
    index_path: String,
    page_path: String,
    description: String,
}

/// Generate pages, index stubs, and `conf.py` records for every listed utility.
pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let context = GeneratorContext::load(&args.common, args.utils.as_deref())?;
    let utils_path = context.paths.utils_path();
    let utils = read_utils_list(&utils_path)?;
    tracing::info!(
        count = utils.len(),
        path = %utils_path.display(),
        "loaded utility list"
    );
    if utils.is_empty() {
        tracing::warn!("utility list is empty; nothing to generate");
    }

    let mut generated = Vec::with_capacity(utils.len());
    for util in &utils {
        generated.push(generate_util(&context, util)?);
    }

    let mut patch = ConfPatch::new();
    for item in &generated {
        patch.push(item.entry.clone());
    }

    let conf_path = context.paths.conf_py_path();
    let mut writes = Vec::with_capacity(generated.len() * 2 + 1);
    for item in &generated {
        writes.push(PlannedWrite::new(
            item.index_path.clone(),
            item.index_stub.clone(),
        ));
        writes.push(PlannedWrite::new(item.page_path.clone(), item.page.clone()));
    }
    if !patch.is_empty() {
        let conf_text = fs::read_to_string(&conf_path)
            .with_context(|| format!("read {}", conf_path.display()))?;
        let patched = patch
            .apply(&conf_text, &conf_path)
            .with_context(|| format!("patch {}", conf_path.display()))?;
        writes.push(PlannedWrite::new(conf_path.clone(), patched));
    }

    let written = if args.dry_run {
        for write in &writes {
            tracing::info!(
                path = %write.path.display(),
                bytes = write.contents.len(),
                "dry run: would write"
            );
        }
        Vec::new()
    } else {
        publish_writes(&writes)?
    };

    println!(
        "Generated {} pages; added {} records to {}{}",
        generated.len(),
        patch.len(),
        display_path(&conf_path, context.paths.root()),
        if args.dry_run { " (dry run)" } else { "" }
    );

    if let Some(report_path) = &args.report {
        let report = build_report(
            &context,
            &generated,
            &conf_path,
            patch.len(),
            &written,
            args.dry_run,
        );
        let json = serde_json::to_string_pretty(&report).context("serialize run report")?;
        write_text_atomic(report_path, &json)?;
        println!("Wrote run report to {}", report_path.display());
    }
    Ok(())
}

fn generate_util(context: &GeneratorContext, util: &str) -> Result<GeneratedUtil> {
    let help = context.help_for(util)?;
    let document = context.document_name(util);
    let page = render_man_page(util, &help);
    let entry = ManPageEntry::new(
        &context.paths.index_document(&document),
        &document,
        &help.name,
    );
    tracing::info!(util, document = %document, page_bytes = page.len(), "rendered page");
    Ok(GeneratedUtil {
        util: util.to_string(),
        index_path: context.paths.index_path(&document),
        index_stub: index_stub(&context.paths.page_reference(&document)),
        page_path: context.paths.page_path(&document),
        page,
        entry,
        document,
    })
}

fn build_report(
    context: &GeneratorContext,
    generated: &[GeneratedUtil],
    conf_path: &Path,
    conf_records: usize,
    written: &[PathBuf],
    dry_run: bool,
) -> RunReport {
    let root = context.paths.root();
    RunReport {
        schema_version: REPORT_SCHEMA_VERSION,
        program: context.config.program.clone(),
        root: root.display().to_string(),
        dry_run,
        utilities: generated
            .iter()
            .map(|item| UtilReport {
                util: item.util.clone(),
                document: item.document.clone(),
                index_path: display_path(&item.index_path, root),
                page_path: display_path(&item.page_path, root),
                description: item.entry.description.clone(),
            })
            .collect(),
        conf_py: display_path(conf_path, root),
        conf_records,
        written: written.iter().map(|path| display_path(path, root)).collect(),
    }
}

fn display_path(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
