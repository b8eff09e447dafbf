use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod convert;
mod util;

#[derive(Parser)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// The command to execute
    #[command(subcommand)]
    command: LatexpageCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,

    /// Overwrite an existing config file
    #[arg(short, long, default_value = "false")]
    force: bool,
}

#[derive(Parser)]
struct ConvertArgs {
    /// LaTeX sources to convert (defaults to `documents` in the config file)
    inputs: Vec<PathBuf>,

    /// The path to the configuration file
    #[arg(short, long, default_value = "latexpage.yaml")]
    config_file: Option<PathBuf>,

    /// Run every conversion stage but write nothing
    #[arg(long, default_value = "false")]
    dry_run: bool,

    /// Print a JSON report of labels and unresolved references
    #[arg(long, default_value = "false")]
    report: bool,
}

#[derive(Parser)]
struct CleanArgs {
    /// Sources whose converted output should be deleted (defaults to `documents`)
    inputs: Vec<PathBuf>,

    /// The path to the configuration file
    #[arg(short, long, default_value = "latexpage.yaml")]
    config_file: Option<PathBuf>,

    /// Only print what would be deleted
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum LatexpageCommand {
    /// Create a default latexpage.yaml
    Init(InitArgs),

    /// Convert LaTeX documents to embeddable HTML fragments
    Convert(ConvertArgs),

    /// Delete converted output files
    Clean(CleanArgs),
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        LatexpageCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        LatexpageCommand::Convert(args) => {
            commands::convert::run(&args).await?;
        }
        LatexpageCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let args = Args::parse_from(["latexpage", "-vv", "convert", "a.tex", "b.tex", "--report"]);
        assert_eq!(args.verbose, 2);
        match args.command {
            LatexpageCommand::Convert(convert) => {
                assert_eq!(convert.inputs, vec![PathBuf::from("a.tex"), PathBuf::from("b.tex")]);
                assert!(convert.report);
                assert!(!convert.dry_run);
                assert_eq!(convert.config_file, Some(PathBuf::from("latexpage.yaml")));
            }
            _ => panic!("expected convert"),
        }
    }
}
