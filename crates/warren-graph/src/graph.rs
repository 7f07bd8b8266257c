//! The owned room collection and its invariants.

use crate::room::{MAX_NAME_LEN, MIN_ROOMS};
use crate::{GraphError, Room, RoomId, RoomKind};

/// An immutable set of connected rooms for one play session.
///
/// Constructed once per run — randomly by
/// [`GraphBuilder`](crate::GraphBuilder) in the generator, or from room
/// files by the codec in the player — and never mutated afterwards.
/// Navigation only moves a current-location id around; the graph itself
/// stays fixed.
///
/// [`RoomGraph::new`] checks every structural invariant (unique names, one
/// Start and one End, degree bounds, symmetric edges, no self or duplicate
/// edges) and refuses malformed input. Connectivity is an emergent property
/// of the builder's minimum-degree loop and is not re-verified here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGraph {
    rooms: Vec<Room>,
    start: RoomId,
    end: RoomId,
}

impl RoomGraph {
    /// Assembles a graph from finished rooms, validating all invariants.
    pub fn new(rooms: Vec<Room>) -> Result<Self, GraphError> {
        let (start, end) = validate(&rooms)?;
        Ok(Self { rooms, start, end })
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The room with the given id.
    ///
    /// # Panics
    /// Panics if `id` did not come from this graph.
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    /// Linear-scan lookup by exact name. O(N), fine at N ≤ 10.
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name == name)
    }

    /// The rooms connected to `id`, in stored order.
    pub fn neighbors(&self, id: RoomId) -> impl Iterator<Item = &Room> {
        self.rooms[id.0].neighbors.iter().map(|&n| &self.rooms[n.0])
    }

    /// The unique START_ROOM.
    pub fn start(&self) -> &Room {
        &self.rooms[self.start.0]
    }

    /// The unique END_ROOM.
    pub fn end(&self) -> &Room {
        &self.rooms[self.end.0]
    }
}

/// Checks the full invariant set; returns the start and end ids.
fn validate(rooms: &[Room]) -> Result<(RoomId, RoomId), GraphError> {
    if rooms.len() < MIN_ROOMS {
        return Err(GraphError::TooFewRooms(rooms.len()));
    }
    let n = rooms.len();

    for (i, room) in rooms.iter().enumerate() {
        if room.id.0 != i {
            return Err(GraphError::IdMismatch {
                expected: i,
                found: room.id,
            });
        }
        if room.name.is_empty() {
            return Err(GraphError::EmptyName(room.id));
        }
        if room.name.len() > MAX_NAME_LEN {
            return Err(GraphError::NameTooLong(room.name.clone()));
        }
        if rooms[..i].iter().any(|other| other.name == room.name) {
            return Err(GraphError::DuplicateName(room.name.clone()));
        }
    }

    let starts = rooms.iter().filter(|r| r.kind == RoomKind::Start).count();
    if starts != 1 {
        return Err(GraphError::StartCount(starts));
    }
    let ends = rooms.iter().filter(|r| r.kind == RoomKind::End).count();
    if ends != 1 {
        return Err(GraphError::EndCount(ends));
    }

    let max_degree = n - 1;
    for room in rooms {
        let degree = room.degree();
        if !(3..=max_degree).contains(&degree) {
            return Err(GraphError::DegreeOutOfBounds {
                room: room.id,
                degree,
                max: max_degree,
            });
        }
        for (j, &neighbor) in room.neighbors.iter().enumerate() {
            if neighbor.0 >= n {
                return Err(GraphError::NeighborOutOfRange {
                    room: room.id,
                    neighbor,
                });
            }
            if neighbor == room.id {
                return Err(GraphError::SelfConnection(room.id));
            }
            if room.neighbors[..j].contains(&neighbor) {
                return Err(GraphError::DuplicateConnection(room.id, neighbor));
            }
            if !rooms[neighbor.0].is_connected_to(room.id) {
                return Err(GraphError::AsymmetricConnection(room.id, neighbor));
            }
        }
    }

    // Positions of start and end are unconstrained here; the builder always
    // produces them at 0 and N-1, but a loaded file set may not.
    let start = rooms
        .iter()
        .position(|r| r.kind == RoomKind::Start)
        .map(RoomId);
    let end = rooms
        .iter()
        .position(|r| r.kind == RoomKind::End)
        .map(RoomId);
    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        // Unreachable: the counts above guarantee both exist.
        _ => Err(GraphError::StartCount(starts)),
    }
}
