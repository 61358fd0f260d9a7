//! Info command implementation
//!
//! Walks one WAVE file and reports its PCM format and data regions.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use wavwalk_core::DecodeOptions;

use super::json_output::{InfoOutput, InfoResult};
use super::{inspect, InspectError};

/// Run the info command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json` - Whether to output machine-readable JSON
/// * `options` - Decoder options
///
/// # Returns
/// Exit code: 0 success, 1 if the file could not be walked
pub fn run(input: &str, json: bool, options: DecodeOptions) -> Result<ExitCode> {
    if json {
        run_json(input, options)
    } else {
        run_human(input, options)
    }
}

fn run_human(input: &str, options: DecodeOptions) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);

    let info = inspect(Path::new(input), options).map_err(|e| match e {
        InspectError::Open(io) => {
            anyhow::Error::new(io).context(format!("Failed to open file: {}", input))
        }
        InspectError::Decode(wav) => anyhow::Error::new(wav),
    })?;
    let result = InfoResult::new(input, &info);

    match result.format {
        Some(format) => {
            println!(
                "{} {} ch, {} Hz, {} bit, {} byte frames",
                "Format:".dimmed(),
                format.channels,
                format.sample_rate,
                format.bits_per_sample,
                format.frame_size
            );
        }
        None => println!("{} {}", "Format:".dimmed(), "none found".yellow()),
    }

    if result.data.is_empty() {
        println!("{} {}", "Data:".dimmed(), "none found".yellow());
    }
    for region in &result.data {
        println!(
            "{} {} bytes at offset {}",
            "Data:".dimmed(),
            region.size,
            region.offset
        );
    }

    println!("{} {}", "Frames:".dimmed(), result.frames);
    println!("{} {:.3} s", "Duration:".dimmed(), result.duration_secs);

    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str, options: DecodeOptions) -> Result<ExitCode> {
    let (output, code) = match inspect(Path::new(input), options) {
        Ok(info) => (
            InfoOutput::success(InfoResult::new(input, &info)),
            ExitCode::SUCCESS,
        ),
        Err(e) => (InfoOutput::failure(vec![e.to_json(input)]), ExitCode::from(1)),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(code)
}
