//! otmap CLI - inspect OTBM maps and render house footprints

mod commands;
mod error;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use otmap::RenderConfig;
use tracing_subscriber::EnvFilter;

use commands::common::load_map;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "otmap")]
#[command(version, about = "Inspect OTBM map files and render house footprints", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Skip tile items while decoding
    #[arg(long, global = true)]
    no_items: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show map header fields and summary counts
    Info {
        /// Map file
        file: PathBuf,
    },
    /// List houses with tile counts and floors
    Houses {
        /// Map file
        file: PathBuf,
    },
    /// List towns with their temple positions
    Towns {
        /// Map file
        file: PathBuf,
    },
    /// Write one PNG footprint per house floor
    Render {
        /// Map file
        file: PathBuf,

        /// Output directory (created if missing)
        #[arg(short, long)]
        out: PathBuf,

        /// Only render these houses (repeatable)
        #[arg(long = "house", value_name = "ID")]
        houses: Vec<u32>,

        /// Render floors one at a time
        #[arg(long)]
        sequential: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG overrides the -v flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let keep_items = !cli.no_items;
    match cli.command {
        Commands::Info { file } => commands::info::run(&load_map(&file, keep_items)?),
        Commands::Houses { file } => commands::houses::run(&load_map(&file, keep_items)?),
        Commands::Towns { file } => commands::towns::run(&load_map(&file, keep_items)?),
        Commands::Render {
            file,
            out,
            houses,
            sequential,
        } => {
            let map = load_map(&file, keep_items)?;
            let config = RenderConfig::new().with_parallel(!sequential);
            commands::render::run(&map, &out, &houses, &config)?;
        }
    }
    Ok(())
}
