//! CLI entry point for nedra-map

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use nedra_map::cli::{self, Commands};

/// Query and export concession map data
#[derive(Parser)]
#[command(name = "nedra-map")]
#[command(author, version)]
#[command(about = "Query and export concession map data: statistics, facet options, GeoJSON markers")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Stats {
            path,
            filter,
            top,
            json,
        } => cli::cmd_stats(&path, &filter, top, json.as_deref())?,
        Commands::List { path, filter } => cli::cmd_list(&path, &filter)?,
        Commands::Options { path, field } => cli::cmd_options(&path, field)?,
        Commands::Export {
            path,
            output,
            palette,
            filter,
        } => cli::cmd_export(&path, &output, &palette, &filter)?,
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
