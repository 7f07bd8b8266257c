//! # Warren
//!
//! A two-phase room-graph adventure. `warren-generate` builds a random,
//! connected dungeon of rooms and writes it to per-room text files;
//! `warren-play` loads the newest room set and runs the navigation prompt,
//! with a background timekeeper task answering `time` requests.
//!
//! The layers live in their own crates:
//!
//! - [`warren_graph`] — room model and randomized builder
//! - [`warren_codec`] — room-file codec and directory store
//! - [`warren_clock`] — the timekeeper handoff
//!
//! This crate adds the navigation state machine ([`Game`]) and the unified
//! [`WarrenError`], and ships the two binaries.

mod error;
mod game;

pub use error::WarrenError;
pub use game::{Game, REJECTION, TIME_COMMAND, Turn};
