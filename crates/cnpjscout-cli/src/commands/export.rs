use crate::commands::search::{run_search, SearchArgs};
use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use cnpjscout_core::{export_rows, ExportFormat};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Full records as `;`-separated CSV
    Csv(ExportArgs),
    /// One email address per line
    Emails(ExportArgs),
    /// One normalized phone number per line
    Phones(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub search: SearchArgs,
    /// File to write, or a directory to hold the default file name
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    format: ExportFormat,
    count: usize,
    output: Option<String>,
}

pub fn export_csv(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    export(ctx, ExportFormat::Csv, args)
}

pub fn export_emails(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    export(ctx, ExportFormat::Emails, args)
}

pub fn export_phones(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    export(ctx, ExportFormat::Phones, args)
}

fn export(ctx: &Context<'_>, format: ExportFormat, args: ExportArgs) -> Result<()> {
    if ctx.json && args.out.is_none() {
        return Err(invalid_input("--json requires --out for export commands"));
    }

    let results = run_search(ctx, &args.search)?;
    if results.is_empty() {
        return Err(not_found("no results to export"));
    }

    let rows = results.rows();
    let document = export_rows(format, &rows);
    if document.count == 0 {
        return Err(not_found(format!(
            "no valid {} found to export",
            format.label()
        )));
    }

    let output = args
        .out
        .as_deref()
        .map(|path| resolve_output_path(path, format));
    write_export(
        ctx,
        ExportReport {
            format,
            count: document.count,
            output: output.as_ref().map(|path| path.display().to_string()),
        },
        output.as_deref(),
        &document.data,
    )
}

fn resolve_output_path(out: &Path, format: ExportFormat) -> PathBuf {
    if out.is_dir() {
        out.join(format.default_file_name())
    } else {
        out.to_path_buf()
    }
}

fn write_export(
    ctx: &Context<'_>,
    report: ExportReport,
    out: Option<&Path>,
    data: &str,
) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("create export directory {}", parent.display()))?;
                }
            }
            fs::write(path, data)
                .with_context(|| format!("write export file {}", path.display()))?;
            if ctx.json {
                print_json(&report)?;
            } else {
                println!(
                    "Exported {} {} to {}",
                    report.count,
                    report.format.label(),
                    path.display()
                );
            }
            Ok(())
        }
        None => {
            println!("{}", data);
            Ok(())
        }
    }
}
