//! DNA-Lang Command-Line Interface
//!
//! Compiles DNA-Lang organism programs to Qiskit circuit scripts.
//!
//! ```text
//! dnalang compile organism.dna            # JSON result on stdout
//! dnalang compile organism.dna --emit organism.py
//! dnalang tokens organism.dna             # token stream for debugging
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{common, compile, tokens, version};

/// DNA-Lang - compile organism programs to Qiskit circuits
#[derive(Parser)]
#[command(name = "dnalang")]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Compiler options file (YAML)
    #[arg(long, global = true, env = "DNALANG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a DNA-Lang file and print the result as JSON
    Compile {
        /// Input file (.dna)
        input: PathBuf,

        /// Also write the generated Qiskit code to this file
        #[arg(short, long)]
        emit: Option<PathBuf>,

        /// Print single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print the token stream of a DNA-Lang file
    Tokens {
        /// Input file (.dna)
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Compile {
            input,
            emit,
            compact,
        } => common::load_options(cli.config.as_deref())
            .and_then(|options| compile::execute(&input, emit.as_deref(), compact, &options)),

        Commands::Tokens { input } => tokens::execute(&input),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
