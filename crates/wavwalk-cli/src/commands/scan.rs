//! Scan command implementation
//!
//! Walks a directory tree and checks every `.wav` file it finds.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;
use wavwalk_core::DecodeOptions;

use super::inspect;
use super::json_output::{error_codes, InfoResult, JsonError, ScanEntry, ScanOutput};

/// Collects `.wav` files under `dir`, sorted by path.
fn find_wav_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk: {}", dir.display()))?;
        let is_wav = entry
            .path()
            .extension()
            .map(|e| e.eq_ignore_ascii_case("wav"))
            .unwrap_or(false);
        if entry.file_type().is_file() && is_wav {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Checks every file and returns one entry per file.
fn scan_files(files: &[PathBuf], options: DecodeOptions) -> Vec<ScanEntry> {
    files
        .iter()
        .map(|path| {
            let file = path.display().to_string();
            match inspect(path, options) {
                Ok(info) => ScanEntry {
                    result: Some(InfoResult::new(file.as_str(), &info)),
                    file,
                    success: true,
                    error: None,
                },
                Err(e) => ScanEntry {
                    error: Some(e.to_json(&file)),
                    file,
                    success: false,
                    result: None,
                },
            }
        })
        .collect()
}

/// Report for a directory that could not be walked at all.
fn walk_failure(input_dir: &str, error: &anyhow::Error) -> ScanOutput {
    ScanOutput {
        success: false,
        files_scanned: 0,
        passed: 0,
        failed: 0,
        results: Vec::new(),
        errors: vec![
            JsonError::new(error_codes::DIR_WALK, format!("{:#}", error)).with_file(input_dir),
        ],
    }
}

/// Run the scan command
///
/// # Arguments
/// * `input_dir` - Directory to search recursively
/// * `json` - Whether to output machine-readable JSON
/// * `options` - Decoder options
///
/// # Returns
/// Exit code: 0 if every file walked cleanly, 1 otherwise
pub fn run(input_dir: &str, json: bool, options: DecodeOptions) -> Result<ExitCode> {
    let dir = Path::new(input_dir);

    let files = match find_wav_files(dir) {
        Ok(files) => files,
        Err(e) if json => {
            let output = walk_failure(input_dir, &e);
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    if !json {
        println!(
            "{} {} ({} .wav files)",
            "Scanning:".cyan().bold(),
            input_dir,
            files.len()
        );
    }

    let results = scan_files(&files, options);
    let passed = results.iter().filter(|r| r.success).count();
    let failed = results.len() - passed;

    if json {
        let output = ScanOutput {
            success: failed == 0,
            files_scanned: results.len(),
            passed,
            failed,
            results,
            errors: Vec::new(),
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        for entry in &results {
            match (&entry.result, &entry.error) {
                (Some(result), _) => {
                    let detail = match result.format {
                        Some(f) => format!(
                            "{} ch, {} Hz, {:.2} s",
                            f.channels, f.sample_rate, result.duration_secs
                        ),
                        None => "no format chunk".to_string(),
                    };
                    println!("  {} {} {}", "ok".green(), entry.file, detail.dimmed());
                }
                (None, Some(error)) => {
                    println!(
                        "  {} {} {}",
                        "FAIL".red().bold(),
                        entry.file,
                        format!("[{}] {}", error.code, error.message).dimmed()
                    );
                }
                (None, None) => {}
            }
        }

        let summary = format!("{} passed, {} failed", passed, failed);
        if failed == 0 {
            println!("\n{} {}", "Scan PASSED".green().bold(), summary.dimmed());
        } else {
            println!("\n{} {}", "Scan FAILED".red().bold(), summary.dimmed());
        }
    }

    if failed == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
