use anyhow::{Context as _, Result};
use clap::{Args, CommandFactory};
use clap_complete::{generate, generate_to, Shell};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
    /// Write the script into this directory instead of stdout
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let bin = cmd.get_name().to_string();

    let Some(dir) = args.dir else {
        generate(args.shell, &mut cmd, bin, &mut io::stdout().lock());
        return Ok(());
    };

    fs::create_dir_all(&dir)
        .with_context(|| format!("create completions directory {}", dir.display()))?;
    let path = generate_to(args.shell, &mut cmd, bin, &dir)
        .with_context(|| format!("write {} completions", args.shell))?;
    println!("{}", path.display());
    Ok(())
}
