//! Proof-of-work algorithm registry CLI
//!
//! A command-line interface for inspecting algorithms and hashing test data.

use clap::{Parser, Subcommand};
use pow_algorithms::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "algos")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "Proof-of-work algorithm registry for mining pools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported algorithms
    List,

    /// Show details of one algorithm
    Info {
        /// Algorithm key
        algorithm: String,
    },

    /// Hash data with a digest algorithm
    Hash {
        /// Algorithm key
        #[arg(short, long)]
        algorithm: String,

        /// Coin configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input data (hex), usually an 80-byte block header
        #[arg(short, long)]
        data: String,

        /// Header timestamp
        #[arg(short, long, default_value = "0")]
        ntime: u32,
    },

    /// Verify a solution with a verify algorithm
    Verify {
        /// Algorithm key
        #[arg(short, long, default_value = "equihash")]
        algorithm: String,

        /// Coin configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Block header including nonce (hex)
        #[arg(long)]
        header: String,

        /// Solution without its length prefix (hex)
        #[arg(short, long)]
        solution: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => cli::cmd_list()?,
        Commands::Info { algorithm } => cli::cmd_info(&algorithm)?,
        Commands::Hash {
            algorithm,
            config,
            data,
            ntime,
        } => cli::cmd_hash(&algorithm, config.as_deref(), &data, ntime)?,
        Commands::Verify {
            algorithm,
            config,
            header,
            solution,
        } => cli::cmd_verify(&algorithm, config.as_deref(), &header, &solution)?,
    }

    Ok(())
}
