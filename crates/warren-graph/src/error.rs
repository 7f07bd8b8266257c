//! Error types for the graph layer.

use crate::RoomId;

/// Errors from graph construction and validation.
///
/// [`RoomGraph::new`](crate::RoomGraph::new) reports one variant per
/// violated invariant, so a malformed room-file set fails with a message
/// that names the offending room.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Fewer rooms than the degree bounds can be satisfied with.
    #[error("a graph needs at least 4 rooms, got {0}")]
    TooFewRooms(usize),

    /// The builder was asked for more rooms than its name pool holds.
    #[error("room count {wanted} exceeds the name pool size {have}")]
    PoolExhausted { wanted: usize, have: usize },

    /// Two rooms (or two pool entries) share a name.
    #[error("duplicate room name {0:?}")]
    DuplicateName(String),

    /// A room has an empty name.
    #[error("room {0} has an empty name")]
    EmptyName(RoomId),

    /// A room name exceeds the supported length.
    #[error("room name {0:?} is too long")]
    NameTooLong(String),

    /// A room's id does not match its position in the graph.
    #[error("room at index {expected} carries id {found}")]
    IdMismatch { expected: usize, found: RoomId },

    /// The graph does not contain exactly one START_ROOM.
    #[error("expected exactly one START_ROOM, found {0}")]
    StartCount(usize),

    /// The graph does not contain exactly one END_ROOM.
    #[error("expected exactly one END_ROOM, found {0}")]
    EndCount(usize),

    /// A room lists itself as a neighbor.
    #[error("room {0} connects to itself")]
    SelfConnection(RoomId),

    /// A room lists the same neighbor twice.
    #[error("duplicate connection from {0} to {1}")]
    DuplicateConnection(RoomId, RoomId),

    /// A connection with no matching reverse edge.
    #[error("connection from {0} to {1} has no reverse edge")]
    AsymmetricConnection(RoomId, RoomId),

    /// A neighbor id that is not part of the graph.
    #[error("room {room} connects to {neighbor}, which is not in the graph")]
    NeighborOutOfRange { room: RoomId, neighbor: RoomId },

    /// A room's connection count is outside `3..=N-1`.
    #[error("room {room} has {degree} connections, expected 3..={max}")]
    DegreeOutOfBounds {
        room: RoomId,
        degree: usize,
        max: usize,
    },

    /// A room-type token that is none of START_ROOM, MID_ROOM, END_ROOM.
    #[error("unknown room type {0:?}")]
    UnknownRoomKind(String),

    /// The random build exhausted its candidate-draw budget.
    #[error("graph build stalled before reaching minimum degree")]
    BuildStalled,
}
