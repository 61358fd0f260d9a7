//! Error types for the chunk walker.

use thiserror::Error;

/// Result type for decoding operations.
pub type WavResult<T> = Result<T, WavError>;

/// Coarse classification of a [`WavError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Container header missing, wrong magic tags, or declared size too small.
    MalformedContainer,
    /// A `fmt ` chunk was found but it does not describe PCM audio.
    UnsupportedCodec,
    /// A chunk header or `fmt ` payload could not be read in full.
    TruncatedChunk,
    /// The sink declined to continue after a format or data notification.
    CallerAborted,
}

/// Errors that stop a WAVE traversal.
///
/// Every variant is reported to [`ChunkSink::on_error`](crate::ChunkSink::on_error)
/// exactly once before it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WavError {
    /// The 12-byte container header is unreadable or invalid.
    #[error("malformed container: {reason}")]
    MalformedContainer {
        /// What was wrong with the header.
        reason: String,
    },

    /// The format chunk names a codec other than PCM.
    #[error("not a PCM file (format tag {format_tag})")]
    UnsupportedCodec {
        /// The format tag found in the `fmt ` chunk.
        format_tag: u16,
    },

    /// A header window ended before it was filled.
    #[error("truncated chunk: {reason}")]
    TruncatedChunk {
        /// Which read came up short.
        reason: String,
    },

    /// The sink returned [`Flow::Abort`](crate::Flow::Abort).
    #[error("aborted: {reason}")]
    CallerAborted {
        /// Which notification was declined.
        reason: String,
    },
}

impl WavError {
    /// Creates a malformed container error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedContainer {
            reason: reason.into(),
        }
    }

    /// Creates a truncated chunk error.
    pub fn truncated(reason: impl Into<String>) -> Self {
        Self::TruncatedChunk {
            reason: reason.into(),
        }
    }

    /// Creates a caller aborted error.
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self::CallerAborted {
            reason: reason.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WavError::MalformedContainer { .. } => ErrorKind::MalformedContainer,
            WavError::UnsupportedCodec { .. } => ErrorKind::UnsupportedCodec,
            WavError::TruncatedChunk { .. } => ErrorKind::TruncatedChunk,
            WavError::CallerAborted { .. } => ErrorKind::CallerAborted,
        }
    }

    /// Returns a stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::MalformedContainer => "WAV_001",
            ErrorKind::UnsupportedCodec => "WAV_002",
            ErrorKind::TruncatedChunk => "WAV_003",
            ErrorKind::CallerAborted => "WAV_004",
        }
    }

    /// True when the traversal stopped because the sink asked it to.
    pub fn is_caller_abort(&self) -> bool {
        self.kind() == ErrorKind::CallerAborted
    }
}
