use anyhow::Result;
use clap::{Parser, Subcommand};
use minus::Pager;
use rift::DiffEngineKind;
use rift::areas::comparator::Comparator;
use rift::artifacts::core::{PagerWriter, stdout_is_terminal};
use rift::commands::porcelain::diff::DiffOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rift",
    version = "0.1.0",
    about = "A line-level diff engine and viewer",
    long_about = "Computes a minimal edit script between two versions of a text file \
    and renders it as a list of equal/insert/delete/modify records. \
    The core engine is a from-scratch shortest-edit-script implementation; \
    a library-backed alternate engine is available for comparison.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the line-level changes between two files",
        long_about = "This command reads both files, computes the minimal edit script \
        between them and prints one record per line: unchanged lines prefixed with a space, \
        deleted with '-', inserted with '+' and modified with '~'."
    )]
    Diff {
        #[arg(index = 1, help = "The old version of the file")]
        old: PathBuf,
        #[arg(index = 2, help = "The new version of the file")]
        new: PathBuf,
        #[arg(long, value_enum, default_value = "myers", help = "The diff engine to use")]
        engine: DiffEngineKind,
        #[arg(long, help = "Emit the change records as JSON instead of text")]
        json: bool,
        #[arg(long, help = "Do not pipe output through the pager")]
        no_pager: bool,
    },
    #[command(
        name = "distance",
        about = "Print the minimal edit distance between two files",
        long_about = "This command prints the minimal number of single-line insertions \
        and deletions needed to transform the old file into the new one."
    )]
    Distance {
        #[arg(index = 1, help = "The old version of the file")]
        old: PathBuf,
        #[arg(index = 2, help = "The new version of the file")]
        new: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Diff {
            old,
            new,
            engine,
            json,
            no_pager,
        } => {
            let opts = DiffOptions {
                engine: *engine,
                json: *json,
            };

            if !*no_pager && !*json && stdout_is_terminal() {
                let pager = Pager::new();
                let comparator = Comparator::new(
                    &pwd.to_string_lossy(),
                    Box::new(PagerWriter::new(pager.clone())),
                )?;

                comparator.diff(old, new, &opts).await?;
                minus::page_all(pager)?;
            } else {
                let comparator =
                    Comparator::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

                comparator.diff(old, new, &opts).await?;
            }
        }
        Commands::Distance { old, new } => {
            let comparator =
                Comparator::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            comparator.distance(old, new).await?;
        }
    }

    Ok(())
}
