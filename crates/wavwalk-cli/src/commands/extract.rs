//! Extract command implementation
//!
//! Copies the raw payload of the first `data` chunk into a file. The bytes
//! are pulled through the byte source from inside the data notification.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, warn};
use wavwalk_core::{
    ByteSource, ChunkSink, DataRegion, DecodeOptions, Decoder, Flow, PcmFormat, WavError,
};

use super::open_source;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Writes the first data payload it is shown.
struct PayloadWriter<W: Write> {
    out: W,
    format: Option<PcmFormat>,
    region: Option<DataRegion>,
    written: u64,
    write_error: Option<io::Error>,
}

impl<W: Write> PayloadWriter<W> {
    fn new(out: W) -> Self {
        Self {
            out,
            format: None,
            region: None,
            written: 0,
            write_error: None,
        }
    }

    fn copy(&mut self, size: u32, source: &mut dyn ByteSource) -> io::Result<()> {
        let mut buf = vec![0u8; COPY_BUFFER_SIZE];
        let mut left = size as usize;
        while left > 0 {
            let want = left.min(buf.len());
            let n = match source.read(&mut buf[..want]) {
                Ok(0) => {
                    warn!(missing = left, "stream ended inside data payload");
                    break;
                }
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.out.write_all(&buf[..n])?;
            self.written += n as u64;
            left -= n;
        }
        Ok(())
    }
}

impl<W: Write> ChunkSink for PayloadWriter<W> {
    fn on_format(&mut self, format: &PcmFormat) -> Flow {
        self.format = Some(*format);
        Flow::Continue
    }

    fn on_data(&mut self, region: DataRegion, source: &mut dyn ByteSource) -> Flow {
        if self.region.is_some() {
            debug!(offset = region.offset, "ignoring additional data chunk");
            return Flow::Continue;
        }
        self.region = Some(region);
        match self.copy(region.size, source) {
            Ok(()) => Flow::Continue,
            Err(e) => {
                self.write_error = Some(e);
                Flow::Abort
            }
        }
    }

    fn on_error(&mut self, error: &WavError) {
        debug!(%error, "extract stopped");
    }
}

/// Run the extract command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `output` - Path the payload bytes are written to
/// * `options` - Decoder options
///
/// # Returns
/// Exit code: 0 success
pub fn run(input: &str, output: &str, options: DecodeOptions) -> Result<ExitCode> {
    println!("{} {}", "Extracting:".cyan().bold(), input);

    let mut source =
        open_source(Path::new(input)).with_context(|| format!("Failed to open file: {}", input))?;
    let out = File::create(output).with_context(|| format!("Failed to create: {}", output))?;
    let mut sink = PayloadWriter::new(BufWriter::new(out));

    let result = Decoder::new(options).decode(&mut source, &mut sink);
    if let Some(e) = sink.write_error.take() {
        return Err(anyhow::Error::new(e).context(format!("Failed to write to: {}", output)));
    }
    result.with_context(|| format!("Failed to walk: {}", input))?;

    let Some(region) = sink.region else {
        bail!("No data chunk found in {}", input);
    };
    sink.out
        .flush()
        .with_context(|| format!("Failed to write to: {}", output))?;

    if let Some(format) = sink.format {
        println!(
            "{} {} ch, {} Hz, {} bit",
            "Format:".dimmed(),
            format.channels,
            format.sample_rate,
            format.bits_per_sample
        );
    }
    if sink.written < u64::from(region.size) {
        println!(
            "{} payload declares {} bytes but only {} were present",
            "!".yellow(),
            region.size,
            sink.written
        );
    }
    println!(
        "{} {} bytes to {}",
        "Extracted".green().bold(),
        sink.written,
        output
    );

    Ok(ExitCode::SUCCESS)
}
