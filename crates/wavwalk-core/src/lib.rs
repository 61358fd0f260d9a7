//! wavwalk core
//!
//! A streaming walker for RIFF/WAVE containers. It validates the container
//! header, steps through the chunk list, decodes the PCM `fmt ` chunk and
//! reports where each `data` payload lives. It never owns the bytes: reads
//! and seeks go through a caller-supplied [`ByteSource`], and everything it
//! learns is pushed to a [`ChunkSink`] as it is found.
//!
//! # Example
//!
//! ```
//! use wavwalk_core::{probe, SliceSource};
//!
//! let mut wav = Vec::new();
//! wav.extend_from_slice(b"RIFF");
//! wav.extend_from_slice(&40u32.to_le_bytes());
//! wav.extend_from_slice(b"WAVE");
//! wav.extend_from_slice(b"fmt \x10\x00\x00\x00");
//! wav.extend_from_slice(&[1, 0, 1, 0, 0x40, 0x1f, 0, 0, 0x80, 0x3e, 0, 0, 2, 0, 16, 0]);
//! wav.extend_from_slice(b"data\x04\x00\x00\x00");
//! wav.extend_from_slice(&[0, 0, 0, 0]);
//!
//! let info = probe(&mut SliceSource::new(&wav)).unwrap();
//! assert_eq!(info.format.unwrap().sample_rate, 8000);
//! assert_eq!(info.frame_count(), 2);
//! ```
//!
//! # Crate Structure
//!
//! - [`decoder`] - The chunk traversal engine and its options
//! - [`header`] - Fixed-size header windows and little-endian field decoding
//! - [`source`] - The byte-source capability and slice/stream adapters
//! - [`sink`] - Notifications delivered to the caller
//! - [`probe`](mod@probe) - A collecting sink for one-call summaries
//! - [`error`] - Error taxonomy

pub mod decoder;
pub mod error;
pub mod header;
pub mod probe;
pub mod sink;
pub mod source;

// Re-export main types at crate root
pub use decoder::{decode, DecodeOptions, Decoder};
pub use error::{ErrorKind, WavError, WavResult};
pub use header::{FourCc, PcmFormat, PCM_FORMAT_TAG};
pub use probe::{probe, WavInfo};
pub use sink::{ChunkSink, DataRegion, Flow, FnSink};
pub use source::{ByteSource, SliceSource, StreamSource};
