//! CLI command implementations

pub mod extract;
pub mod info;
pub mod json_output;
pub mod scan;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use wavwalk_core::{DecodeOptions, Decoder, StreamSource, WavError, WavInfo};

use json_output::{error_codes, JsonError};

/// Opens a file as a seekable byte source.
pub(crate) fn open_source(path: &Path) -> io::Result<StreamSource<BufReader<File>>> {
    StreamSource::new(BufReader::new(File::open(path)?))
}

/// Why a file could not be inspected.
#[derive(Debug)]
pub(crate) enum InspectError {
    Open(io::Error),
    Decode(WavError),
}

impl InspectError {
    pub(crate) fn to_json(&self, file: &str) -> JsonError {
        let error = match self {
            InspectError::Open(e) => {
                JsonError::new(error_codes::FILE_READ, format!("Failed to open file: {}", e))
            }
            InspectError::Decode(e) => JsonError::from_wav(e),
        };
        error.with_file(file)
    }
}

impl std::fmt::Display for InspectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectError::Open(e) => write!(f, "failed to open file: {}", e),
            InspectError::Decode(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InspectError {}

/// Opens and probes one file.
pub(crate) fn inspect(path: &Path, options: DecodeOptions) -> Result<WavInfo, InspectError> {
    let mut source = open_source(path).map_err(InspectError::Open)?;
    Decoder::new(options)
        .probe(&mut source)
        .map_err(InspectError::Decode)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    /// Writes a 16-bit PCM file with hound and returns its path.
    pub fn write_wav(dir: &Path, name: &str, channels: u16, rate: u32, frames: usize) -> PathBuf {
        let path = dir.join(name);
        let spec = hound::WavSpec {
            channels,
            sample_rate: rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..frames * channels as usize {
            writer.write_sample((i % 1000) as i16).unwrap();
        }
        writer.finalize().unwrap();
        path
    }
}
