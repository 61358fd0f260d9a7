//! Notification capability: what the decoder tells its caller.

use serde::Serialize;

use crate::error::WavError;
use crate::header::PcmFormat;
use crate::source::ByteSource;

/// Whether traversal should go on after a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep walking chunks.
    Continue,
    /// Stop with [`WavError::CallerAborted`].
    Abort,
}

impl From<bool> for Flow {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Flow::Continue
        } else {
            Flow::Abort
        }
    }
}

/// Location of a `data` chunk payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DataRegion {
    /// Absolute offset of the first payload byte.
    pub offset: u64,
    /// Declared payload size in bytes.
    pub size: u32,
}

impl DataRegion {
    /// Absolute offset one past the last payload byte.
    pub fn end(&self) -> u64 {
        self.offset + u64::from(self.size)
    }
}

/// Receives events from the decoder in file order.
pub trait ChunkSink {
    /// Called once, for the first PCM `fmt ` chunk.
    fn on_format(&mut self, format: &PcmFormat) -> Flow;

    /// Called for each `data` chunk.
    ///
    /// `source` is positioned at `region.offset`. The sink may read as much of
    /// the payload as it likes; the decoder repositions before the next chunk.
    fn on_data(&mut self, region: DataRegion, source: &mut dyn ByteSource) -> Flow;

    /// Called once with the error that is about to be returned.
    fn on_error(&mut self, error: &WavError);
}

/// A [`ChunkSink`] assembled from closures.
///
/// ```
/// use wavwalk_core::{decode, FnSink, Flow, SliceSource};
///
/// let bytes = b"RIFF\x04\x00\x00\x00WAVE";
/// let mut sink = FnSink::new(
///     |_format| Flow::Continue,
///     |_region, _source| Flow::Continue,
///     |error| eprintln!("{error}"),
/// );
/// assert!(decode(&mut SliceSource::new(bytes), &mut sink).is_err());
/// ```
pub struct FnSink<F, D, E> {
    format: F,
    data: D,
    error: E,
}

impl<F, D, E> FnSink<F, D, E>
where
    F: FnMut(&PcmFormat) -> Flow,
    D: FnMut(DataRegion, &mut dyn ByteSource) -> Flow,
    E: FnMut(&WavError),
{
    /// Creates a sink from format, data and error handlers.
    pub fn new(format: F, data: D, error: E) -> Self {
        Self {
            format,
            data,
            error,
        }
    }
}

impl<F, D, E> ChunkSink for FnSink<F, D, E>
where
    F: FnMut(&PcmFormat) -> Flow,
    D: FnMut(DataRegion, &mut dyn ByteSource) -> Flow,
    E: FnMut(&WavError),
{
    fn on_format(&mut self, format: &PcmFormat) -> Flow {
        (self.format)(format)
    }

    fn on_data(&mut self, region: DataRegion, source: &mut dyn ByteSource) -> Flow {
        (self.data)(region, source)
    }

    fn on_error(&mut self, error: &WavError) {
        (self.error)(error)
    }
}
