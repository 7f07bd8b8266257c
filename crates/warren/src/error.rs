//! Unified error type for the Warren binaries.

use warren_clock::ClockError;
use warren_codec::CodecError;
use warren_graph::GraphError;

/// Top-level error that wraps all layer-specific errors.
///
/// The binaries deal with this single type; `#[from]` on each variant lets
/// `?` convert layer errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum WarrenError {
    /// A graph-level error (builder input, structural invariant).
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A codec-level error (room files, rooms directory).
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A clock-level error (timekeeper gone).
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// Console or filesystem I/O outside the codec.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_graph_error() {
        let err: WarrenError = GraphError::TooFewRooms(2).into();
        assert!(matches!(err, WarrenError::Graph(_)));
        assert!(err.to_string().contains("at least 4 rooms"));
    }

    #[test]
    fn test_from_codec_error() {
        let err: WarrenError = CodecError::MissingField("ROOM TYPE").into();
        assert!(matches!(err, WarrenError::Codec(_)));
        assert!(err.to_string().contains("ROOM TYPE"));
    }

    #[test]
    fn test_from_clock_error() {
        let err: WarrenError = ClockError::Unavailable.into();
        assert!(matches!(err, WarrenError::Clock(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WarrenError = io.into();
        assert!(matches!(err, WarrenError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
