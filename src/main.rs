use anyhow::Result;
use clap::Parser;
use seqflow::cli::{Cli, Commands};
use seqflow::config::{load_config, load_config_from_path};
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    seqflow::observability::init_tracing(cli.verbosity);

    let config = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };
    let color = config.output.color && !cli.plain;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run { demo } => seqflow::commands::run::run_demos(demo, &config, color, &mut out)?,
        Commands::List => seqflow::commands::list::list_demos(&mut out)?,
        Commands::Init { force } => {
            let path = seqflow::commands::init::init_config(force)?;
            writeln!(out, "Created {}", path.display())?;
        }
    }

    out.flush()?;
    Ok(())
}
