//! Command-line front end for d2lmd.

use clap::{Parser, Subcommand};
use d2lmd_core::D2lError;
use d2lmd_filter::{Options, convert};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Chapter folder conversion.
pub mod chapter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert Markdown course chapters into Brightspace D2L HTML pages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// YAML or JSON file with filter and rendering options.
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert one Markdown file to an HTML page.
    Convert {
        /// Markdown file to read, or `-` for stdin.
        input: PathBuf,

        /// Where to write the HTML. Defaults to stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Convert every Markdown file in a folder and stitch them into one chapter.
    ///
    /// Each `*.md` file gets a sibling `.html` page. The sources are then
    /// concatenated in file-name order and converted once more into the
    /// combined chapter page.
    Chapter {
        /// Folder holding the chapter's Markdown files.
        dir: PathBuf,

        /// Combined chapter page. Defaults to `<DIR>/chapter.html`.
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Worker threads for per-file conversion. Defaults to the number of CPUs.
        #[arg(long, short = 'j')]
        threads: Option<usize>,
    },
}

/// Loads options from `config`, or returns the defaults.
pub fn load_options(config: Option<&Path>) -> Result<Options, D2lError> {
    match config {
        Some(path) => {
            log::debug!("Loading options from {}", path.display());
            Options::load(path)
        }
        None => Ok(Options::default()),
    }
}

/// Converts `input` (or stdin for `-`) and writes the page to `output` (or stdout).
pub fn convert_file(input: &Path, output: Option<&Path>, options: &Options) -> Result<(), D2lError> {
    let source = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input).map_err(|err| D2lError::io_at(input, err))?
    };

    let html = convert(&source, options).map_err(|err| err.in_file(input))?;

    match output {
        Some(path) => {
            std::fs::write(path, html).map_err(|err| D2lError::io_at(path, err))?;
            log::info!("Wrote {}", path.display());
        }
        None => std::io::stdout().write_all(html.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chapter_command() {
        let cli = Cli::parse_from(["d2lmd", "chapter", "week1", "-j", "2", "--config", "d2l.yaml"]);
        assert_eq!(cli.config.as_deref(), Some(Path::new("d2l.yaml")));
        match cli.command {
            Commands::Chapter {
                dir,
                output,
                threads,
            } => {
                assert_eq!(dir, PathBuf::from("week1"));
                assert_eq!(output, None);
                assert_eq!(threads, Some(2));
            }
            Commands::Convert { .. } => panic!("expected chapter command"),
        }
    }

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(load_options(None).unwrap(), Options::default());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
