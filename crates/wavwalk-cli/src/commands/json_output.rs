//! JSON output types for machine-readable CLI output.
//!
//! Used by the `--json` flag on `info` and `scan`. Every envelope carries a
//! `success` flag and a list of structured errors with stable codes.

use serde::Serialize;
use wavwalk_core::{DataRegion, PcmFormat, WavError, WavInfo};

/// Error codes for CLI operations.
///
/// CLI_XXX for CLI-level errors; decoder errors pass through their WAV_XXX code.
pub mod error_codes {
    /// File could not be opened or read
    pub const FILE_READ: &str = "CLI_001";
    /// Directory traversal failed
    pub const DIR_WALK: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "WAV_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Creates an error from a decoder failure.
    pub fn from_wav(error: &WavError) -> Self {
        Self::new(error.code(), error.to_string())
    }

    /// Sets the file path.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// What `info` reports for one file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InfoResult {
    /// Input file path
    pub input: String,
    /// PCM format, when a `fmt ` chunk was found
    pub format: Option<PcmFormat>,
    /// Data regions in file order
    pub data: Vec<DataRegion>,
    /// Whole frames in the first data region
    pub frames: u64,
    /// Duration of the first data region in seconds
    pub duration_secs: f64,
}

impl InfoResult {
    /// Builds the report from a probe result.
    pub fn new(input: impl Into<String>, info: &WavInfo) -> Self {
        Self {
            input: input.into(),
            format: info.format,
            data: info.data.clone(),
            frames: info.frame_count(),
            duration_secs: info.duration_secs(),
        }
    }
}

/// Envelope for `info --json`.
#[derive(Debug, Clone, Serialize)]
pub struct InfoOutput {
    /// Whether the file walked cleanly
    pub success: bool,
    /// Errors, empty on success
    pub errors: Vec<JsonError>,
    /// The report, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InfoResult>,
}

impl InfoOutput {
    /// Creates a successful output.
    pub fn success(result: InfoResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// One line of a `scan` report.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    /// File path
    pub file: String,
    /// Whether the file walked cleanly
    pub success: bool,
    /// The report, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InfoResult>,
    /// The failure, present otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

/// Envelope for `scan --json`.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutput {
    /// True when every file walked cleanly
    pub success: bool,
    /// Number of `.wav` files visited
    pub files_scanned: usize,
    /// Files that walked cleanly
    pub passed: usize,
    /// Files that failed
    pub failed: usize,
    /// Per-file results, sorted by path
    pub results: Vec<ScanEntry>,
    /// Errors not tied to a single file
    pub errors: Vec<JsonError>,
}
