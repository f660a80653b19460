use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use cnpjscout_core::{area_code_for_state, normalize_phone, DEFAULT_COUNTRY_CODE, NOT_AVAILABLE};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct NormalizePhoneArgs {
    pub raw: String,
    /// State used to infer the area code of bare subscriber numbers
    #[arg(long, value_name = "UF")]
    pub state: Option<String>,
    /// Explicit area code; wins over --state
    #[arg(long, value_name = "DDD")]
    pub area: Option<String>,
    #[arg(long, value_name = "CODE", default_value = DEFAULT_COUNTRY_CODE)]
    pub country: String,
}

#[derive(Debug, Serialize)]
struct NormalizedPhone<'a> {
    input: &'a str,
    area_code: Option<&'a str>,
    normalized: Option<String>,
}

pub fn normalize(json: bool, args: NormalizePhoneArgs) -> Result<()> {
    let inferred = args.state.as_deref().and_then(area_code_for_state);
    if args.state.is_some() && inferred.is_none() {
        debug!(state = ?args.state, "no area code known for state");
    }
    let area_code = args.area.as_deref().or(inferred);
    let normalized = normalize_phone(Some(&args.raw), &args.country, area_code);

    if json {
        return print_json(&NormalizedPhone {
            input: &args.raw,
            area_code,
            normalized,
        });
    }

    println!("{}", normalized.as_deref().unwrap_or(NOT_AVAILABLE));
    Ok(())
}
