use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::format_table;
use anyhow::{Context as _, Result};
use clap::Args;
use cnpjscout_config::MAX_LIMIT;
use cnpjscout_core::{parse_date, today_local, SearchResults, SearchWindow};
use cnpjscout_registry::{CnpjaSource, JsonFileSource, RecordSource, RegistryError, SearchQuery};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// First founding date to include (defaults to --days before --to)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<String>,
    /// Last founding date to include (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<String>,
    #[arg(long, conflicts_with = "from")]
    pub days: Option<i64>,
    #[arg(long)]
    pub limit: Option<u32>,
    /// Filter on the SIMEI optant flag
    #[arg(long, value_name = "BOOL")]
    pub simei: Option<bool>,
    /// Read a saved registry response instead of querying the API
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

pub fn search(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let results = run_search(ctx, &args)?;
    let rows = results.rows();

    if ctx.json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("no companies found");
        return Ok(());
    }

    print!("{}", format_table(&rows));
    println!("{} companies found", rows.len());
    Ok(())
}

pub fn run_search(ctx: &Context<'_>, args: &SearchArgs) -> Result<SearchResults> {
    let query = build_query(ctx, args)?;
    let source = record_source(ctx, args)?;
    debug!(source = source.source_name(), "searching registry");
    let results = source
        .fetch_records(&query)
        .with_context(|| format!("search {} registry", source.source_name()))?;
    debug!(count = results.len(), "search finished");
    Ok(results)
}

fn build_query(ctx: &Context<'_>, args: &SearchArgs) -> Result<SearchQuery> {
    let to = match args.to.as_deref() {
        Some(raw) => parse_date(raw).with_context(|| format!("parse --to {raw}"))?,
        None => today_local(),
    };
    let window = match args.from.as_deref() {
        Some(raw) => {
            let from = parse_date(raw).with_context(|| format!("parse --from {raw}"))?;
            SearchWindow::new(from, to)?
        }
        None => SearchWindow::last_days(to, args.days.unwrap_or(ctx.config.default_window_days))?,
    };

    let limit = args.limit.unwrap_or(ctx.config.registry.limit);
    if limit == 0 || limit > MAX_LIMIT {
        return Err(invalid_input(format!(
            "--limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let simei_optant = args.simei.unwrap_or(ctx.config.registry.simei_optant);
    Ok(SearchQuery::new(window, simei_optant, limit))
}

fn record_source(ctx: &Context<'_>, args: &SearchArgs) -> Result<Box<dyn RecordSource>> {
    if let Some(path) = args.input.as_ref() {
        return Ok(Box::new(JsonFileSource::new(path.clone())));
    }

    let registry = &ctx.config.registry;
    let api_key = args
        .api_key
        .clone()
        .or_else(|| registry.api_key.clone())
        .filter(|key| !key.trim().is_empty())
        .ok_or(RegistryError::MissingApiKey)?;
    Ok(Box::new(CnpjaSource::new(
        registry.base_url.clone(),
        api_key,
        registry.user_agent.clone(),
    )))
}
