use anyhow::{Context, Result};
use clap::Parser;
use d2lmd_cli::chapter::build_chapter;
use d2lmd_cli::{Cli, Commands, convert_file, load_options};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = load_options(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Convert { input, output } => {
            convert_file(&input, output.as_deref(), &options)
                .with_context(|| format!("Failed to convert {}", input.display()))?;
        }
        Commands::Chapter {
            dir,
            output,
            threads,
        } => {
            let report = build_chapter(&dir, output.as_deref(), &options, threads)
                .with_context(|| format!("Failed to build chapter from {}", dir.display()))?;
            println!(
                "{} pages, combined chapter at {}",
                report.pages.len(),
                report.combined.display()
            );
        }
    }

    Ok(())
}
