//! Cross-checks against files written by an independent encoder (hound).

use std::io::{self, Cursor};

use pretty_assertions::assert_eq;
use wavwalk_core::{
    decode, probe, ByteSource, ChunkSink, DataRegion, Flow, PcmFormat, StreamSource, WavError,
};

fn hound_wav(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

/// Copies each data payload out of the source while walking.
#[derive(Default)]
struct PayloadCopier {
    format: Option<PcmFormat>,
    payload: Vec<u8>,
    errors: Vec<String>,
}

impl ChunkSink for PayloadCopier {
    fn on_format(&mut self, format: &PcmFormat) -> Flow {
        self.format = Some(*format);
        Flow::Continue
    }

    fn on_data(&mut self, region: DataRegion, source: &mut dyn ByteSource) -> Flow {
        let mut buf = vec![0u8; region.size as usize];
        let mut filled = 0;
        while filled < buf.len() {
            match source.read(&mut buf[filled..]) {
                Ok(0) | Err(_) => return Flow::Abort,
                Ok(n) => filled += n,
            }
        }
        self.payload.extend_from_slice(&buf);
        Flow::Continue
    }

    fn on_error(&mut self, error: &WavError) {
        self.errors.push(error.to_string());
    }
}

#[test]
fn test_hound_stereo_format() {
    let samples: Vec<i16> = (0..200).map(|i| (i * 97) as i16).collect();
    let wav = hound_wav(2, 44100, &samples);

    let mut source = StreamSource::new(Cursor::new(wav)).unwrap();
    let info = probe(&mut source).unwrap();

    assert_eq!(
        info.format,
        Some(PcmFormat {
            channels: 2,
            sample_rate: 44100,
            frame_size: 4,
            bits_per_sample: 16,
        })
    );
    assert_eq!(info.data.len(), 1);
    assert_eq!(info.data_bytes(), 400);
    assert_eq!(info.frame_count(), 100);
}

#[test]
fn test_hound_payload_matches_samples() {
    let samples: Vec<i16> = vec![0, 1, -1, i16::MAX, i16::MIN, 1234, -4321];
    let wav = hound_wav(1, 22050, &samples);

    let mut source = StreamSource::new(Cursor::new(wav)).unwrap();
    let mut sink = PayloadCopier::default();
    decode(&mut source, &mut sink).unwrap();

    let decoded: Vec<i16> = sink
        .payload
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    assert_eq!(decoded, samples);
    assert_eq!(sink.format.map(|f| f.sample_rate), Some(22050));
    assert!(sink.errors.is_empty());
}

#[test]
fn test_hound_file_truncated_mid_payload() {
    let samples: Vec<i16> = (0..64).collect();
    let mut wav = hound_wav(1, 8000, &samples);
    wav.truncate(wav.len() - 10);

    // The payload is short, but the walker only reports where it starts.
    let mut source = StreamSource::new(Cursor::new(wav)).unwrap();
    let info = probe(&mut source).unwrap();
    assert_eq!(info.data_bytes(), 128);
}

/// A stream that refuses every read after construction.
struct Broken;

impl io::Read for Broken {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "device unplugged"))
    }
}

impl io::Seek for Broken {
    fn seek(&mut self, _pos: io::SeekFrom) -> io::Result<u64> {
        Ok(0)
    }
}

#[test]
fn test_stream_read_failure_reports_once() {
    let mut source = StreamSource::new(Broken).unwrap();
    let mut sink = PayloadCopier::default();

    let err = decode(&mut source, &mut sink).unwrap_err();

    assert!(err.to_string().contains("device unplugged"));
    assert_eq!(sink.errors.len(), 1);
}
