//! Room-graph model and randomized builder for Warren.
//!
//! A [`RoomGraph`] is a fixed-size, connected set of named rooms with
//! degree-bounded adjacency. It is built once per session — randomly by
//! [`GraphBuilder`] in the generator, or from room files by the codec in
//! the player — and never mutated afterwards.
//!
//! # Key types
//!
//! - [`Room`] / [`RoomId`] / [`RoomKind`] — the per-room record
//! - [`RoomGraph`] — the owned collection, invariant-checked on construction
//! - [`GraphBuilder`] — degree-bounded random connected graph construction

mod builder;
mod error;
mod graph;
mod room;

pub use builder::{DEFAULT_ROOM_COUNT, GraphBuilder};
pub use error::GraphError;
pub use graph::RoomGraph;
pub use room::{MAX_NAME_LEN, MIN_ROOMS, Room, RoomId, RoomKind};
