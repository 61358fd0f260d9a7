//! One-call summary of a WAVE stream built on the chunk walker.

use serde::Serialize;

use crate::decoder::Decoder;
use crate::error::{WavError, WavResult};
use crate::header::PcmFormat;
use crate::sink::{ChunkSink, DataRegion, Flow};
use crate::source::ByteSource;

/// What a completed walk found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WavInfo {
    /// The PCM format reported, if any.
    pub format: Option<PcmFormat>,
    /// Every data region, in file order.
    pub data: Vec<DataRegion>,
}

impl WavInfo {
    /// Payload bytes across all data regions.
    pub fn data_bytes(&self) -> u64 {
        self.data.iter().map(|region| u64::from(region.size)).sum()
    }

    /// Whole frames in the first data region, or 0 without a usable format.
    pub fn frame_count(&self) -> u64 {
        match (self.format, self.data.first()) {
            (Some(format), Some(region)) if format.frame_size > 0 => {
                u64::from(region.size) / u64::from(format.frame_size)
            }
            _ => 0,
        }
    }

    /// Playback length of the first data region in seconds.
    pub fn duration_secs(&self) -> f64 {
        match self.format {
            Some(format) if format.sample_rate > 0 => {
                self.frame_count() as f64 / f64::from(format.sample_rate)
            }
            _ => 0.0,
        }
    }
}

#[derive(Default)]
struct Collector {
    info: WavInfo,
}

impl ChunkSink for Collector {
    fn on_format(&mut self, format: &PcmFormat) -> Flow {
        self.info.format = Some(*format);
        Flow::Continue
    }

    fn on_data(&mut self, region: DataRegion, _source: &mut dyn ByteSource) -> Flow {
        self.info.data.push(region);
        Flow::Continue
    }

    fn on_error(&mut self, _error: &WavError) {}
}

impl Decoder {
    /// Walks `source` and collects the format and data regions.
    pub fn probe<S: ByteSource>(&self, source: &mut S) -> WavResult<WavInfo> {
        let mut collector = Collector::default();
        self.decode(source, &mut collector)?;
        Ok(collector.info)
    }
}

/// Walks `source` with default options and collects what it finds.
pub fn probe<S: ByteSource>(source: &mut S) -> WavResult<WavInfo> {
    Decoder::default().probe(source)
}
