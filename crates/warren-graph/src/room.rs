//! Room identity and the per-room record.

use std::fmt;
use std::str::FromStr;

use crate::GraphError;

/// Smallest graph that can satisfy the three-connection floor — a room
/// cannot connect to itself, so degree 3 needs at least three other rooms.
pub const MIN_ROOMS: usize = 4;

/// Longest supported room name.
pub const MAX_NAME_LEN: usize = 16;

// ---------------------------------------------------------------------------
// RoomId
// ---------------------------------------------------------------------------

/// A room's index within its owning [`RoomGraph`](crate::RoomGraph).
///
/// Adjacency is stored as `RoomId`s rather than references, resolved
/// through the owning graph. Ids are only meaningful relative to the graph
/// that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// RoomKind
// ---------------------------------------------------------------------------

/// The role a room plays in the dungeon.
///
/// Exactly one room per graph is `Start` and exactly one is `End`;
/// everything else is `Mid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomKind {
    Start,
    Mid,
    End,
}

impl RoomKind {
    /// The token used in room files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "START_ROOM",
            Self::Mid => "MID_ROOM",
            Self::End => "END_ROOM",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the on-disk token. Anything other than the three known tokens is
/// an error — a room with an unrecognized type must never load as some
/// default kind.
impl FromStr for RoomKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "START_ROOM" => Ok(Self::Start),
            "MID_ROOM" => Ok(Self::Mid),
            "END_ROOM" => Ok(Self::End),
            other => Err(GraphError::UnknownRoomKind(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A single room: a named graph node with a kind and its outbound
/// connections.
///
/// Neighbor order is insertion order during a build and file order during a
/// load; it is display-relevant only (the prompt lists connections in this
/// order) and carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Position of this room in the owning graph.
    pub id: RoomId,
    /// Unique display name, at most [`MAX_NAME_LEN`] bytes.
    pub name: String,
    /// Start, Mid, or End.
    pub kind: RoomKind,
    /// Ids of connected rooms. No duplicates, never contains `id` itself.
    pub neighbors: Vec<RoomId>,
}

impl Room {
    /// A room with no connections yet.
    pub fn new(id: RoomId, name: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            neighbors: Vec::new(),
        }
    }

    /// Number of outbound connections.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether this room already connects to `other`.
    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.neighbors.contains(&other)
    }
}
