//! wavwalk CLI - inspect RIFF/WAVE files without decoding their samples
//!
//! This binary walks WAVE chunk lists, reports PCM formats and payload
//! locations, copies payloads out, and checks whole directories.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;
use wavwalk_core::DecodeOptions;

// Use modules from the library crate
use wavwalk_cli::{commands, logging};

/// wavwalk - RIFF/WAVE chunk inspector
#[derive(Parser)]
#[command(name = "wavwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the PCM format and data regions of a WAV file
    Info {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,

        /// Skip the RIFF pad byte after odd-sized chunks
        #[arg(long)]
        align_chunks: bool,
    },

    /// Copy the raw payload of the first data chunk into a file
    Extract {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output file for the payload bytes
        #[arg(short, long)]
        output: String,

        /// Skip the RIFF pad byte after odd-sized chunks
        #[arg(long)]
        align_chunks: bool,
    },

    /// Recursively check every .wav file in a directory
    Scan {
        /// Directory to scan
        #[arg(long)]
        input_dir: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,

        /// Skip the RIFF pad byte after odd-sized chunks
        #[arg(long)]
        align_chunks: bool,
    },
}

fn options(align_chunks: bool) -> DecodeOptions {
    DecodeOptions::default().align_chunks(align_chunks)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Info {
            input,
            json,
            align_chunks,
        } => commands::info::run(&input, json, options(align_chunks)),
        Commands::Extract {
            input,
            output,
            align_chunks,
        } => commands::extract::run(&input, &output, options(align_chunks)),
        Commands::Scan {
            input_dir,
            json,
            align_chunks,
        } => commands::scan::run(&input_dir, json, options(align_chunks)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
