//! Error types for the codec layer.

use std::path::PathBuf;

use warren_graph::GraphError;

/// Errors from reading, writing, or locating room files.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Room data missing or unreadable. Fatal for the player: a run cannot
    /// continue with a partial room set.
    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required line never appeared in a room file.
    #[error("room file is missing its {0} line")]
    MissingField(&'static str),

    /// A line that starts like a known field but cannot be parsed.
    #[error("unparsable room-file line {0:?}")]
    MalformedLine(String),

    /// A connection names a room that is not part of the loaded set.
    #[error("room {room:?} connects to unknown room {neighbor:?}")]
    UnknownNeighbor { room: String, neighbor: String },

    /// A structural violation in the decoded graph, including an
    /// unrecognized room-type token.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// No directory matching the rooms prefix was found.
    #[error("no rooms directory matching {prefix:?} under {base:?}")]
    NoRoomsDir { base: PathBuf, prefix: &'static str },
}
