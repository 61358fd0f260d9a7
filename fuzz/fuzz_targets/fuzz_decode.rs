//! Fuzz target for the chunk walker.
//!
//! Feeds arbitrary bytes through both byte-source adapters, with and without
//! chunk alignment, to catch panics, overflow, or non-terminating walks.
//!
//! Run with: `cargo +nightly fuzz run fuzz_decode`

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use wavwalk_core::{
    ByteSource, ChunkSink, DataRegion, DecodeOptions, Decoder, Flow, PcmFormat, SliceSource,
    StreamSource, WavError,
};

/// Reads a little of each payload and counts errors.
#[derive(Default)]
struct Nibbler {
    errors: usize,
}

impl ChunkSink for Nibbler {
    fn on_format(&mut self, _format: &PcmFormat) -> Flow {
        Flow::Continue
    }

    fn on_data(&mut self, region: DataRegion, source: &mut dyn ByteSource) -> Flow {
        let mut buf = [0u8; 32];
        let want = (region.size as usize).min(buf.len());
        let _ = source.read(&mut buf[..want]);
        Flow::Continue
    }

    fn on_error(&mut self, _error: &WavError) {
        self.errors += 1;
    }
}

fuzz_target!(|data: &[u8]| {
    for align in [false, true] {
        let decoder = Decoder::new(DecodeOptions::default().align_chunks(align));

        let mut sink = Nibbler::default();
        let result = decoder.decode(&mut SliceSource::new(data), &mut sink);
        assert_eq!(sink.errors, usize::from(result.is_err()));

        if let Ok(mut source) = StreamSource::new(Cursor::new(data)) {
            let mut stream_sink = Nibbler::default();
            let stream_result = decoder.decode(&mut source, &mut stream_sink);
            assert_eq!(result, stream_result);
        }
    }

    // Same bytes behind a valid magic prefix reach the chunk loop.
    if data.len() >= 12 {
        let mut modified = data.to_vec();
        modified[0..4].copy_from_slice(b"RIFF");
        modified[8..12].copy_from_slice(b"WAVE");
        let _ = wavwalk_core::probe(&mut SliceSource::new(&modified));
    }
});
