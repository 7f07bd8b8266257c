//! Randomized construction of a degree-bounded connected room graph.
//!
//! The build draws a random subset of names from a pool, then adds random
//! bidirectional edges until every room has at least three connections.
//! Connectivity falls out of that loop for single-digit room counts: by the
//! time the last room reaches degree three the edge set is dense enough
//! that disconnected components do not occur in practice. No explicit
//! connectivity pass is run.

use rand::Rng;

use crate::room::MIN_ROOMS;
use crate::{GraphError, Room, RoomGraph, RoomId, RoomKind};

/// Rooms per graph unless overridden.
pub const DEFAULT_ROOM_COUNT: usize = 7;

/// Every build draws its room names from this pool.
const NAME_POOL: [&str; 10] = [
    "Altuve",
    "Beltran",
    "Bregman",
    "Correa",
    "Gattis",
    "Gonzalez",
    "Gurriel",
    "Keuchel",
    "Springer",
    "Verlander",
];

/// Candidate-draw budget across one build. The reject-and-resample loops
/// cannot stall for any valid room count, but a budget turns the
/// theoretical hang into [`GraphError::BuildStalled`].
const MAX_DRAWS: usize = 100_000;

/// Builds a random [`RoomGraph`]: shuffled names from the pool, Start at
/// the first drawn position, End at the last, and random symmetric edges
/// until every room has at least three connections.
///
/// ```
/// use warren_graph::GraphBuilder;
///
/// let graph = GraphBuilder::new().build().unwrap();
/// assert_eq!(graph.len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    room_count: usize,
    pool: Vec<String>,
}

impl GraphBuilder {
    /// A builder with the default pool and room count.
    pub fn new() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            pool: NAME_POOL.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    /// Sets the number of rooms to build. Must be at least
    /// [`MIN_ROOMS`](crate::MIN_ROOMS) and at most the pool size.
    pub fn with_rooms(mut self, count: usize) -> Self {
        self.room_count = count;
        self
    }

    /// Replaces the name pool.
    pub fn with_pool<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pool = names.into_iter().map(Into::into).collect();
        self
    }

    /// Builds with the thread-local RNG.
    pub fn build(&self) -> Result<RoomGraph, GraphError> {
        self.build_with_rng(&mut rand::rng())
    }

    /// Builds with a caller-supplied RNG. A seeded RNG makes the draw —
    /// and therefore the whole graph — deterministic.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RoomGraph, GraphError> {
        if self.room_count < MIN_ROOMS {
            return Err(GraphError::TooFewRooms(self.room_count));
        }
        if self.room_count > self.pool.len() {
            return Err(GraphError::PoolExhausted {
                wanted: self.room_count,
                have: self.pool.len(),
            });
        }
        for (i, name) in self.pool.iter().enumerate() {
            if self.pool[..i].contains(name) {
                return Err(GraphError::DuplicateName(name.clone()));
            }
        }

        let mut names = self.pool.clone();
        shuffle(&mut names, rng);
        names.truncate(self.room_count);

        let count = self.room_count;
        let mut rooms: Vec<Room> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                // Type is fixed by draw position: first is Start, last is
                // End, the rest are Mid.
                let kind = if i == 0 {
                    RoomKind::Start
                } else if i == count - 1 {
                    RoomKind::End
                } else {
                    RoomKind::Mid
                };
                Room::new(RoomId(i), name, kind)
            })
            .collect();

        let mut draws = 0usize;
        let mut edges = 0usize;
        while !min_degree_met(&rooms) {
            add_random_connection(&mut rooms, rng, &mut draws)?;
            edges += 1;
        }

        tracing::debug!(rooms = count, edges, "room graph assembled");
        RoomGraph::new(rooms)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform forward Fisher–Yates: element `i` swaps with a uniformly chosen
/// index in `i..n`.
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let j = rng.random_range(i..n);
        items.swap(i, j);
    }
}

fn min_degree_met(rooms: &[Room]) -> bool {
    rooms.iter().all(|room| room.degree() >= 3)
}

/// One edge insertion: draw room A with spare capacity, then room B with
/// spare capacity that is neither A nor already connected to A, and link
/// them both ways. Failed draws are simply retried against `draws`.
fn add_random_connection<R: Rng + ?Sized>(
    rooms: &mut [Room],
    rng: &mut R,
    draws: &mut usize,
) -> Result<(), GraphError> {
    let n = rooms.len();
    let max_degree = n - 1;

    let a = loop {
        *draws += 1;
        if *draws > MAX_DRAWS {
            return Err(GraphError::BuildStalled);
        }
        let candidate = rng.random_range(0..n);
        if rooms[candidate].degree() < max_degree {
            break candidate;
        }
    };

    let b = loop {
        *draws += 1;
        if *draws > MAX_DRAWS {
            return Err(GraphError::BuildStalled);
        }
        let candidate = rng.random_range(0..n);
        if candidate != a
            && rooms[candidate].degree() < max_degree
            && !rooms[a].is_connected_to(RoomId(candidate))
        {
            break candidate;
        }
    };

    rooms[a].neighbors.push(RoomId(b));
    rooms[b].neighbors.push(RoomId(a));
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_shuffle_is_deterministic_for_a_fixed_seed() {
        let mut first: Vec<u32> = (0..10).collect();
        let mut second: Vec<u32> = (0..10).collect();
        shuffle(&mut first, &mut StdRng::seed_from_u64(7));
        shuffle(&mut second, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut items: Vec<u32> = (0..10).collect();
        shuffle(&mut items, &mut StdRng::seed_from_u64(42));
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_handles_trivial_lengths() {
        let mut empty: Vec<u32> = vec![];
        shuffle(&mut empty, &mut StdRng::seed_from_u64(0));
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut StdRng::seed_from_u64(0));
        assert_eq!(single, [9]);
    }

    #[test]
    fn test_build_is_deterministic_for_a_fixed_seed() {
        let builder = GraphBuilder::new();
        let first = builder.build_with_rng(&mut StdRng::seed_from_u64(3)).unwrap();
        let second = builder.build_with_rng(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_build_assigns_kinds_by_position() {
        let graph = GraphBuilder::new()
            .build_with_rng(&mut StdRng::seed_from_u64(11))
            .unwrap();
        assert_eq!(graph.start().id, RoomId(0));
        assert_eq!(graph.end().id, RoomId(6));
        for room in &graph.rooms()[1..6] {
            assert_eq!(room.kind, RoomKind::Mid);
        }
    }

    #[test]
    fn test_build_rejects_too_few_rooms() {
        let err = GraphBuilder::new()
            .with_rooms(3)
            .build_with_rng(&mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, GraphError::TooFewRooms(3)));
    }

    #[test]
    fn test_build_rejects_room_count_beyond_pool() {
        let err = GraphBuilder::new()
            .with_rooms(11)
            .build_with_rng(&mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::PoolExhausted {
                wanted: 11,
                have: 10
            }
        ));
    }

    #[test]
    fn test_build_rejects_duplicate_pool_names() {
        let err = GraphBuilder::new()
            .with_rooms(4)
            .with_pool(["Altuve", "Altuve", "Correa", "Springer"])
            .build_with_rng(&mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateName(_)));
    }

    #[test]
    fn test_build_at_minimum_size_is_the_complete_graph() {
        // N = 4 forces K4: degree floor 3 equals the degree ceiling.
        let graph = GraphBuilder::new()
            .with_rooms(4)
            .build_with_rng(&mut StdRng::seed_from_u64(5))
            .unwrap();
        for room in graph.rooms() {
            assert_eq!(room.degree(), 3);
        }
    }
}
