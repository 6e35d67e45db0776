//! Contains the [BenchError] enum that every fallible operation in the harness returns
//!
//! Errors are never retried or suppressed, the first one aborts the benchmark run.

use std::fmt::{self, Display, Formatter};
use std::io;

/// Convenience alias used throughout the crate
pub type BenchResult<T> = Result<T, BenchError>;

/// The kind of storage failure behind a [BenchError::Io]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IoFailure {
    /// No artifact exists for the requested key.
    NotFound,
    /// The artifact exists but could not be read.
    ReadFailure,
    /// The artifact could not be written.
    WriteFailure,
}

impl Display for IoFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IoFailure::NotFound => write!(f, "not found"),
            IoFailure::ReadFailure => write!(f, "read failure"),
            IoFailure::WriteFailure => write!(f, "write failure"),
        }
    }
}

/// All the ways a benchmark run can fail.
#[derive(Debug)]
pub enum BenchError {
    /// The codec rejected or could not serialize the fixture.
    Encode {
        /// Display name of the codec.
        codec: &'static str,
        /// Description from the underlying codec library.
        reason: String,
    },
    /// The bytes were malformed, truncated, or did not match the expected shape.
    Decode {
        /// Display name of the codec.
        codec: &'static str,
        /// Description from the underlying codec library.
        reason: String,
    },
    /// Storing or fetching an artifact failed.
    Io {
        /// Key of the artifact.
        key: String,
        /// What went wrong.
        kind: IoFailure,
        /// The underlying OS error.
        source: io::Error,
    },
    /// Invalid configuration, e.g. a trial count of zero.
    Config(String),
}

impl BenchError {
    pub(crate) fn encode(codec: &'static str, reason: impl Display) -> Self {
        BenchError::Encode {
            codec,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn decode(codec: &'static str, reason: impl Display) -> Self {
        BenchError::Decode {
            codec,
            reason: reason.to_string(),
        }
    }

    /// Builds an [BenchError::Io] from an [io::Error] raised while fetching `key`.
    ///
    /// [io::ErrorKind::NotFound] maps to [IoFailure::NotFound], anything else is a [IoFailure::ReadFailure].
    pub fn fetch_failed(key: &str, source: io::Error) -> Self {
        let kind = if source.kind() == io::ErrorKind::NotFound {
            IoFailure::NotFound
        } else {
            IoFailure::ReadFailure
        };
        BenchError::Io {
            key: key.to_owned(),
            kind,
            source,
        }
    }

    /// Builds an [BenchError::Io] from an [io::Error] raised while storing `key`.
    pub fn store_failed(key: &str, source: io::Error) -> Self {
        BenchError::Io {
            key: key.to_owned(),
            kind: IoFailure::WriteFailure,
            source,
        }
    }

    /// The [IoFailure] kind if this is a storage error.
    pub fn io_failure(&self) -> Option<IoFailure> {
        match self {
            BenchError::Io { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl Display for BenchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::Encode { codec, reason } => {
                write!(f, "{codec} serialization failed: {reason}")
            }
            BenchError::Decode { codec, reason } => {
                write!(f, "{codec} deserialization failed: {reason}")
            }
            BenchError::Io { key, kind, source } => {
                write!(f, "Artifact '{key}' {kind}: {source}")
            }
            BenchError::Config(msg) => write!(f, "Invalid config: {msg}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fetch_not_found_maps_to_not_found() {
        let err = BenchError::fetch_failed(
            "json",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.io_failure(), Some(IoFailure::NotFound));
        assert_eq!(err.to_string(), "Artifact 'json' not found: no such file");
    }

    #[test]
    fn fetch_other_error_maps_to_read_failure() {
        let err = BenchError::fetch_failed(
            "xml",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.io_failure(), Some(IoFailure::ReadFailure));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn codec_errors_name_the_codec() {
        let err = BenchError::decode("YAML", "unexpected end of stream");
        assert_eq!(
            err.to_string(),
            "YAML deserialization failed: unexpected end of stream"
        );
        assert_eq!(err.io_failure(), None);
        assert!(BenchError::encode("XML", "unsupported")
            .to_string()
            .starts_with("XML serialization failed"));
    }
}
