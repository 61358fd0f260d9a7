//! Chunk traversal engine.
//!
//! Reads the container header, then walks chunk headers one by one from a
//! logical cursor, dispatching `fmt ` and `data` chunks to a [`ChunkSink`]
//! and skipping everything else. The cursor advances by the header size
//! plus the declared chunk size whether or not the chunk was recognized.

use std::io;

use tracing::{debug, trace, warn};

use crate::error::{WavError, WavResult};
use crate::header::{ChunkHeader, ContainerHeader, FormatDescriptor, FourCc, PcmFormat};
use crate::sink::{ChunkSink, DataRegion, Flow};
use crate::source::{read_full, ByteSource};


/// Traversal settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Skip the pad byte after odd-sized chunks.
    ///
    /// Off by default: the cursor advances by exactly `8 + size`, which
    /// misreads files that follow the RIFF word-alignment rule when an odd
    /// chunk precedes `fmt ` or `data`.
    pub align_chunks: bool,
}

impl DecodeOptions {
    /// Sets [`DecodeOptions::align_chunks`].
    pub fn align_chunks(mut self, align: bool) -> Self {
        self.align_chunks = align;
        self
    }
}

/// A reusable, stateless WAVE chunk walker.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder with the given options.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// The options this decoder was built with.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Walks one WAVE container from `source`, reporting to `sink`.
    ///
    /// On failure the error is passed to [`ChunkSink::on_error`] and then
    /// returned. Reaching the declared container end, or failing to seek to
    /// the next chunk header, ends the walk successfully.
    pub fn decode<S, K>(&self, source: &mut S, sink: &mut K) -> WavResult<()>
    where
        S: ByteSource,
        K: ChunkSink + ?Sized,
    {
        self.walk(source, sink).inspect_err(|error| {
            debug!(code = error.code(), %error, "decode failed");
            sink.on_error(error);
        })
    }

    fn walk<S, K>(&self, source: &mut S, sink: &mut K) -> WavResult<()>
    where
        S: ByteSource,
        K: ChunkSink + ?Sized,
    {
        let header = read_window(source)
            .map(|bytes| ContainerHeader::from_bytes(&bytes))
            .map_err(|short| WavError::malformed(short.describe("could not read RIFF header")))?;
        header.validate()?;

        let end = header.end();
        debug!(declared_size = header.declared_size, end, "container header");

        let mut cursor = ContainerHeader::SIZE as u64;
        let mut format_seen = false;
        while cursor < end {
            let Ok(offset) = u32::try_from(cursor) else {
                warn!(cursor, "next chunk lies beyond 32-bit offsets, stopping");
                break;
            };
            if !source.seek(offset) {
                warn!(offset, end, "stream ends before declared container end");
                break;
            }

            let chunk = read_window(source)
                .map(|bytes| ChunkHeader::from_bytes(&bytes))
                .map_err(|short| {
                    WavError::truncated(short.describe("could not read chunk header"))
                })?;
            debug!(tag = %chunk.id, size = chunk.size, offset, "chunk");

            match chunk.id {
                FourCc::FMT => {
                    let format = self.format_chunk(source)?;
                    if format_seen {
                        trace!("repeated fmt chunk, not reported");
                    } else {
                        format_seen = true;
                        if sink.on_format(&format) == Flow::Abort {
                            return Err(WavError::aborted("format rejected by caller"));
                        }
                    }
                }
                FourCc::DATA => {
                    let region = DataRegion {
                        offset: cursor + ChunkHeader::SIZE as u64,
                        size: chunk.size,
                    };
                    if sink.on_data(region, &mut *source) == Flow::Abort {
                        return Err(WavError::aborted("data chunk rejected by caller"));
                    }
                }
                _ => trace!(tag = %chunk.id, "skipping chunk"),
            }

            cursor += self.advance(&chunk);
        }

        trace!(cursor, end, "walk finished");
        Ok(())
    }

    /// Reads and checks the descriptor of a `fmt ` chunk.
    fn format_chunk<S: ByteSource>(&self, source: &mut S) -> WavResult<PcmFormat> {
        let fmt = read_window(source)
            .map(|bytes| FormatDescriptor::from_bytes(&bytes))
            .map_err(|short| WavError::truncated(short.describe("could not read format chunk")))?;

        if !fmt.is_pcm() {
            return Err(WavError::UnsupportedCodec {
                format_tag: fmt.format_tag,
            });
        }

        let format = fmt.pcm();
        debug!(
            channels = format.channels,
            sample_rate = format.sample_rate,
            frame_size = format.frame_size,
            bits_per_sample = format.bits_per_sample,
            "pcm format"
        );
        Ok(format)
    }

    /// Distance from one chunk header to the next.
    fn advance(&self, chunk: &ChunkHeader) -> u64 {
        let size = u64::from(chunk.size);
        let pad = if self.options.align_chunks { size & 1 } else { 0 };
        ChunkHeader::SIZE as u64 + size + pad
    }
}

/// Walks one WAVE container with default options.
pub fn decode<S, K>(source: &mut S, sink: &mut K) -> WavResult<()>
where
    S: ByteSource,
    K: ChunkSink + ?Sized,
{
    Decoder::default().decode(source, sink)
}

/// Why a fixed-size window could not be filled.
enum ShortRead {
    Eof { got: usize, want: usize },
    Io(io::Error),
}

impl ShortRead {
    fn describe(&self, what: &str) -> String {
        match self {
            ShortRead::Eof { got, want } => format!("{what} (got {got} of {want} bytes)"),
            ShortRead::Io(e) => format!("{what}: {e}"),
        }
    }
}

fn read_window<S: ByteSource + ?Sized, const N: usize>(
    source: &mut S,
) -> Result<[u8; N], ShortRead> {
    let mut buf = [0u8; N];
    match read_full(source, &mut buf) {
        Ok(n) if n == N => Ok(buf),
        Ok(got) => Err(ShortRead::Eof { got, want: N }),
        Err(e) => Err(ShortRead::Io(e)),
    }
}
