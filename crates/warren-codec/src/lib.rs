//! Room-file codec and rooms-directory store for Warren.
//!
//! The generator serializes a [`RoomGraph`](warren_graph::RoomGraph) to one
//! plain-text file per room inside a freshly created directory; the player
//! finds the newest such directory and reconstructs the graph from it.
//!
//! # Key functions
//!
//! - [`encode_room`] / [`parse_room`] — one room to/from its text form
//! - [`write_rooms`] / [`load_graph`] — a whole graph to/from a directory
//! - [`create_rooms_dir`] / [`newest_rooms_dir`] — the directory store

mod codec;
mod dir;
mod error;

pub use codec::{RoomRecord, encode_room, load_graph, parse_room, room_file_name, write_rooms};
pub use dir::{ROOMS_DIR_PREFIX, create_rooms_dir, newest_rooms_dir};
pub use error::CodecError;
