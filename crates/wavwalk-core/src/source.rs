//! Byte-source capability consumed by the decoder.
//!
//! The decoder never owns the bytes it walks. It reads fixed windows and
//! seeks to absolute offsets through [`ByteSource`], so the same traversal
//! works over memory, files, or anything else that can be positioned.

use std::io::{self, Read, Seek, SeekFrom};

/// Sequential reads plus absolute seeks.
///
/// The trait is object safe; sinks receive the source as `&mut dyn ByteSource`
/// when a data chunk is found.
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes, returning how many were read.
    ///
    /// `Ok(0)` signals end of stream.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Moves the read position to `offset` bytes from the start.
    ///
    /// Returns `false` when the offset is unreachable, e.g. past the end of
    /// the stream.
    fn seek(&mut self, offset: u32) -> bool;
}

impl<T: ByteSource + ?Sized> ByteSource for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn seek(&mut self, offset: u32) -> bool {
        (**self).seek(offset)
    }
}

/// Fills `buf` with repeated reads until it is full or the source runs dry.
///
/// Returns the number of bytes placed in `buf`; anything less than
/// `buf.len()` means the stream ended early.
pub(crate) fn read_full<S: ByteSource + ?Sized>(
    source: &mut S,
    buf: &mut [u8],
) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// An in-memory byte source over a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Creates a source positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet read.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let rest = self.remaining();
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        Ok(n)
    }

    fn seek(&mut self, offset: u32) -> bool {
        let offset = offset as usize;
        if offset >= self.data.len() {
            return false;
        }
        self.pos = offset;
        true
    }
}

/// A byte source over any std stream, such as a [`std::fs::File`].
///
/// `std::io::Seek` allows positioning past the end of a stream, so the
/// length is captured once on construction and seeks at or beyond it are
/// refused.
#[derive(Debug)]
pub struct StreamSource<R> {
    inner: R,
    len: u64,
}

impl<R: Read + Seek> StreamSource<R> {
    /// Wraps `inner`, leaving its current position unchanged.
    pub fn new(mut inner: R) -> io::Result<Self> {
        let pos = inner.stream_position()?;
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(pos))?;
        Ok(Self { inner, len })
    }

    /// Stream length captured on construction.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// True when the stream held no bytes on construction.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows the wrapped stream.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> ByteSource for StreamSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }

    fn seek(&mut self, offset: u32) -> bool {
        if u64::from(offset) >= self.len {
            return false;
        }
        self.inner.seek(SeekFrom::Start(u64::from(offset))).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most one byte per read.
    struct Trickle<'a>(SliceSource<'a>);

    impl ByteSource for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let end = buf.len().min(1);
            self.0.read(&mut buf[..end])
        }

        fn seek(&mut self, offset: u32) -> bool {
            self.0.seek(offset)
        }
    }

    #[test]
    fn test_slice_source_reads_and_seeks() {
        let data = [1u8, 2, 3, 4, 5];
        let mut src = SliceSource::new(&data);
        let mut buf = [0u8; 2];

        assert_eq!(src.read(&mut buf).unwrap(), 2);
        assert_eq!(buf, [1, 2]);
        assert!(src.seek(4));
        assert_eq!(src.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], 5);
        assert_eq!(src.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn test_slice_source_refuses_offsets_without_bytes() {
        let data = [0u8; 4];
        let mut src = SliceSource::new(&data);
        assert!(src.seek(3));
        assert!(!src.seek(4));
        assert!(!src.seek(u32::MAX));
        // A refused seek leaves the position alone.
        assert_eq!(src.position(), 3);
    }

    #[test]
    fn test_stream_source_refuses_past_end() {
        let mut src = StreamSource::new(Cursor::new(vec![0u8; 10])).unwrap();
        assert_eq!(src.len(), 10);
        assert!(src.seek(9));
        assert!(!src.seek(10));
        assert!(!src.seek(1000));
    }

    #[test]
    fn test_stream_source_keeps_initial_position() {
        let mut cursor = Cursor::new(vec![7u8, 8, 9]);
        cursor.set_position(1);
        let mut src = StreamSource::new(cursor).unwrap();
        let mut buf = [0u8; 1];
        src.read(&mut buf).unwrap();
        assert_eq!(buf[0], 8);
        assert_eq!(src.into_inner().position(), 2);
    }

    #[test]
    fn test_read_full_gathers_partial_reads() {
        let data = [9u8; 12];
        let mut src = Trickle(SliceSource::new(&data));
        let mut buf = [0u8; 12];
        assert_eq!(read_full(&mut src, &mut buf).unwrap(), 12);
        assert_eq!(buf, data);
    }

    #[test]
    fn test_read_full_reports_short_count() {
        let data = [1u8; 5];
        let mut src = SliceSource::new(&data);
        let mut buf = [0u8; 8];
        assert_eq!(read_full(&mut src, &mut buf).unwrap(), 5);
    }
}
