//! Fixed-size header windows and their little-endian field layouts.
//!
//! Offsets within each window:
//!
//! ```text
//! ContainerHeader (12 bytes)    ChunkHeader (8 bytes)    FormatDescriptor (16 bytes)
//!   0  id           "RIFF"        0  id                    0  format tag      u16
//!   4  declared size u32          4  size   u32            2  channels        u16
//!   8  format       "WAVE"                                 4  sample rate     u32
//!                                                          8  byte rate       u32
//!                                                         12  frame size      u16
//!                                                         14  bits per sample u16
//! ```

use std::fmt;

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::error::WavError;

/// Format tag for uncompressed linear PCM.
pub const PCM_FORMAT_TAG: u16 = 1;

/// A four-character chunk identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    /// Outer container tag.
    pub const RIFF: FourCc = FourCc(*b"RIFF");
    /// RIFF form type for audio.
    pub const WAVE: FourCc = FourCc(*b"WAVE");
    /// Format-description chunk.
    pub const FMT: FourCc = FourCc(*b"fmt ");
    /// Payload chunk.
    pub const DATA: FourCc = FourCc(*b"data");

    fn read(bytes: &[u8]) -> Self {
        let mut id = [0u8; 4];
        id.copy_from_slice(&bytes[..4]);
        FourCc(id)
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc(\"{}\")", self)
    }
}

/// The RIFF header at the start of every WAVE stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Expected to be `RIFF`.
    pub id: FourCc,
    /// Byte count following the `id` and `declared_size` fields.
    pub declared_size: u32,
    /// Expected to be `WAVE`.
    pub format: FourCc,
}

impl ContainerHeader {
    /// Encoded size in bytes.
    pub const SIZE: usize = 12;

    /// Smallest declared size that is rejected; a valid file needs more room
    /// than the form type plus a bare `fmt ` chunk.
    pub const MIN_DECLARED_SIZE: u32 = 36;

    /// Decodes the header from its on-disk bytes.
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        Self {
            id: FourCc::read(&bytes[0..4]),
            declared_size: LittleEndian::read_u32(&bytes[4..8]),
            format: FourCc::read(&bytes[8..12]),
        }
    }

    /// Checks the magic tags and declared size.
    pub fn validate(&self) -> Result<(), WavError> {
        if self.id != FourCc::RIFF {
            return Err(WavError::malformed("not a RIFF file"));
        }
        if self.declared_size <= Self::MIN_DECLARED_SIZE {
            return Err(WavError::malformed(
                "invalid RIFF file (header size too small)",
            ));
        }
        if self.format != FourCc::WAVE {
            return Err(WavError::malformed("not a WAVE file"));
        }
        Ok(())
    }

    /// Absolute offset one past the last byte the container claims.
    pub fn end(&self) -> u64 {
        8 + u64::from(self.declared_size)
    }
}

/// The id and size prefix of every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Chunk identifier.
    pub id: FourCc,
    /// Payload size in bytes, excluding this header and any padding.
    pub size: u32,
}

impl ChunkHeader {
    /// Encoded size in bytes.
    pub const SIZE: usize = 8;

    /// Decodes the header from its on-disk bytes.
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        Self {
            id: FourCc::read(&bytes[0..4]),
            size: LittleEndian::read_u32(&bytes[4..8]),
        }
    }
}

/// The leading 16 bytes of a `fmt ` chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Codec identifier; [`PCM_FORMAT_TAG`] for linear PCM.
    pub format_tag: u16,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
    /// Average bytes per second.
    pub byte_rate: u32,
    /// Bytes per frame (block align).
    pub frame_size: u16,
    /// Bits per sample for a single channel.
    pub bits_per_sample: u16,
}

impl FormatDescriptor {
    /// Encoded size in bytes.
    pub const SIZE: usize = 16;

    /// Decodes the descriptor from its on-disk bytes.
    pub fn from_bytes(bytes: &[u8; Self::SIZE]) -> Self {
        Self {
            format_tag: LittleEndian::read_u16(&bytes[0..2]),
            channels: LittleEndian::read_u16(&bytes[2..4]),
            sample_rate: LittleEndian::read_u32(&bytes[4..8]),
            byte_rate: LittleEndian::read_u32(&bytes[8..12]),
            frame_size: LittleEndian::read_u16(&bytes[12..14]),
            bits_per_sample: LittleEndian::read_u16(&bytes[14..16]),
        }
    }

    /// True for linear PCM.
    pub fn is_pcm(&self) -> bool {
        self.format_tag == PCM_FORMAT_TAG
    }

    /// The subset of fields reported to a sink.
    pub fn pcm(&self) -> PcmFormat {
        PcmFormat {
            channels: self.channels,
            sample_rate: self.sample_rate,
            frame_size: self.frame_size,
            bits_per_sample: self.bits_per_sample,
        }
    }
}

/// PCM parameters reported through [`ChunkSink::on_format`](crate::ChunkSink::on_format).
///
/// `frame_size` is normally `channels * bits_per_sample / 8` but may be larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PcmFormat {
    /// Number of channels (samples per frame).
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
    /// Bytes per frame.
    pub frame_size: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
}
