//! LinkScout CLI
//!
//! Generates categorized OSINT lookup links for a target and exports them.

mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use linkscout_core::{
    categories, registry_json, source_count, CatalogError, Interrupt, ResultStore, RunConfig,
    DEFAULT_RATE_LIMIT_SECS, DEFAULT_TIMEOUT_SECS,
};

#[derive(Parser)]
#[command(name = "linkscout")]
#[command(author, version, about = "LinkScout: OSINT lookup link generator", long_about = None)]
#[command(after_help = "Example: linkscout search 'John Smith' --output results.json")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate lookup links for a target
    Search {
        /// Name of the target to gather information about
        name: String,

        /// Output file for the results (default: osint_<name>_<timestamp>.json)
        #[arg(short, long, env = "LINKSCOUT_OUTPUT")]
        output: Option<PathBuf>,

        /// Time to wait between requests in seconds
        #[arg(short, long, default_value_t = DEFAULT_RATE_LIMIT_SECS)]
        rate_limit: u64,

        /// Request timeout in seconds
        #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        /// Print the results without writing a file
        #[arg(long)]
        no_export: bool,
    },

    /// List every category and source with its URL template
    Sources {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a previously exported catalog
    Show {
        /// Exported catalog file
        file: PathBuf,

        /// Target name to show in the header (default: file name)
        #[arg(long)]
        target: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    let verbose = cli.verbose;
    let interrupt = Interrupt::new();
    let worker_interrupt = interrupt.clone();
    let work = tokio::task::spawn_blocking(move || execute(cli.command, verbose, &worker_interrupt));

    let result = tokio::select! {
        joined = work => joined.context("Command task failed").and_then(|r| r),
        _ = tokio::signal::ctrl_c() => {
            interrupt.trigger();
            report_interrupted();
            // The blocking task may be stuck on the export; don't wait for it
            std::process::exit(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_interrupted(&e) => {
            report_interrupted();
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("\n{} {}", "Error:".bold().red(), e);
            if verbose > 0 {
                println!("{:?}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands, verbose: u8, interrupt: &Interrupt) -> Result<()> {
    match command {
        Commands::Search {
            name,
            output,
            rate_limit,
            timeout,
            no_export,
        } => {
            let config = RunConfig::default()
                .with_rate_limit(rate_limit)
                .with_timeout(timeout)
                .with_verbose(verbose > 0);
            run_search(&name, config, output.as_deref(), no_export, interrupt)
        }
        Commands::Sources { json } => list_sources(json),
        Commands::Show { file, target } => show_catalog(&file, target.as_deref()),
    }
}

fn report_interrupted() {
    println!("\n{}", "Search interrupted by user".bold().red());
}

fn is_interrupted(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<CatalogError>(),
            Some(CatalogError::Interrupted { .. })
        )
    })
}

fn run_search(
    name: &str,
    config: RunConfig,
    output: Option<&Path>,
    no_export: bool,
    interrupt: &Interrupt,
) -> Result<()> {
    println!("\n{} {}\n", "Starting OSINT search for:".bold().cyan(), name);
    debug!(
        "rate limit {}s, timeout {}s (no requests are made)",
        config.rate_limit_secs, config.timeout_secs
    );

    let store = ResultStore::new(config);
    let catalog = store.run_all_with(name, interrupt)?;

    render::print_catalog(&catalog);

    if no_export {
        return Ok(());
    }

    let path = store
        .export_with(&catalog, output, interrupt)
        .context("Failed to export results")?;
    println!("{} {}", "Results exported to:".bold().green(), path.display());

    Ok(())
}

fn list_sources(json: bool) -> Result<()> {
    if json {
        println!("{}", registry_json().context("Failed to serialize registry")?);
        return Ok(());
    }

    println!(
        "{} categories, {} sources\n",
        categories().count(),
        source_count()
    );
    render::print_sources(categories());
    Ok(())
}

fn show_catalog(file: &Path, target: Option<&str>) -> Result<()> {
    let label = match target {
        Some(t) => t.to_string(),
        None => file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let store = ResultStore::default();
    let catalog = store
        .load(file, &label)
        .with_context(|| format!("Failed to load catalog {}", file.display()))?;

    render::print_catalog(&catalog);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::parse_from(["linkscout", "search", "Alex Johnson", "-r", "2", "-t", "15"]);
        match cli.command {
            Commands::Search {
                name,
                rate_limit,
                timeout,
                no_export,
                ..
            } => {
                assert_eq!(name, "Alex Johnson");
                assert_eq!(rate_limit, 2);
                assert_eq!(timeout, 15);
                assert!(!no_export);
            }
            _ => panic!("expected search"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::parse_from(["linkscout", "-vv", "search", "Jane Doe", "--no-export"]);
        match cli.command {
            Commands::Search {
                rate_limit,
                timeout,
                no_export,
                ..
            } => {
                assert_eq!(rate_limit, 1);
                assert_eq!(timeout, 10);
                assert!(no_export);
            }
            _ => panic!("expected search"),
        }
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_bare_verbose_flag() {
        let cli = Cli::parse_from(["linkscout", "search", "Jane Doe", "--verbose"]);
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_sources_json_flag() {
        let cli = Cli::parse_from(["linkscout", "sources", "--json"]);
        assert!(matches!(cli.command, Commands::Sources { json: true }));
        assert!(execute(cli.command, 0, &Interrupt::new()).is_ok());
    }

    #[test]
    fn test_interrupted_search_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("results.json");
        let interrupt = Interrupt::new();
        interrupt.trigger();

        let err = run_search("Jane Doe", RunConfig::default(), Some(&output), false, &interrupt)
            .unwrap_err();
        assert!(is_interrupted(&err));
        assert!(!output.exists());
    }

    #[test]
    fn test_search_exports_to_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("results.json");

        run_search("Jane Doe", RunConfig::default(), Some(&output), false, &Interrupt::new())
            .unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_interrupted_detection() {
        let err = anyhow::Error::new(CatalogError::Interrupted { completed: 3 });
        assert!(is_interrupted(&err));
        assert!(!is_interrupted(&anyhow::anyhow!("other")));

        let wrapped: Result<()> = Err(CatalogError::Interrupted { completed: 12 }.into());
        let wrapped = wrapped.context("Failed to export results").unwrap_err();
        assert!(is_interrupted(&wrapped));
    }
}
