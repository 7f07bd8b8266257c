//! Encoding and decoding of the room-file text format.
//!
//! One file per room, canonical write order:
//!
//! ```text
//! ROOM NAME: Gurriel
//! CONNECTION 1: Altuve
//! CONNECTION 2: Keuchel
//! CONNECTION 3: Correa
//! ROOM TYPE: MID_ROOM
//! ```
//!
//! The writer always emits that exact order; the reader dispatches on line
//! prefixes instead of line offsets, so any number of connection lines may
//! appear anywhere relative to the other fields. Files carry neighbor
//! *names*; ids are assigned by file index when a whole directory is
//! loaded, and the assembled graph is re-validated by
//! [`RoomGraph::new`](warren_graph::RoomGraph::new).

use std::fs;
use std::path::Path;

use warren_graph::{Room, RoomGraph, RoomId, RoomKind};

use crate::CodecError;

const NAME_PREFIX: &str = "ROOM NAME:";
const CONNECTION_PREFIX: &str = "CONNECTION";
const TYPE_PREFIX: &str = "ROOM TYPE:";

/// The fixed room-index naming scheme shared by generator and player.
pub fn room_file_name(index: usize) -> String {
    format!("room{index}")
}

/// One decoded room file: everything except resolved neighbor ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    pub name: String,
    pub kind: RoomKind,
    /// Neighbor names in file order.
    pub connections: Vec<String>,
}

/// Renders one room in the canonical field order, connections 1-indexed.
pub fn encode_room(graph: &RoomGraph, id: RoomId) -> String {
    let room = graph.room(id);
    let mut out = format!("{NAME_PREFIX} {}\n", room.name);
    for (i, neighbor) in graph.neighbors(id).enumerate() {
        out.push_str(&format!("{CONNECTION_PREFIX} {}: {}\n", i + 1, neighbor.name));
    }
    out.push_str(&format!("{TYPE_PREFIX} {}\n", room.kind));
    out
}

/// Parses one room file.
///
/// Lines are matched by prefix; unrecognized lines are skipped. Name and
/// type lines are both required, and an unknown room-type token is an
/// error — a room must never silently load under a default kind.
pub fn parse_room(text: &str) -> Result<RoomRecord, CodecError> {
    let mut name = None;
    let mut kind = None;
    let mut connections = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(NAME_PREFIX) {
            name = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(TYPE_PREFIX) {
            kind = Some(rest.trim().parse::<RoomKind>()?);
        } else if line.starts_with(CONNECTION_PREFIX) {
            // CONNECTION <k>: <name> — the index is display-only, file
            // order is what counts.
            let target = line
                .split_once(':')
                .map(|(_, target)| target.trim())
                .filter(|target| !target.is_empty())
                .ok_or_else(|| CodecError::MalformedLine(line.to_string()))?;
            connections.push(target.to_string());
        }
    }

    Ok(RoomRecord {
        name: name.ok_or(CodecError::MissingField("ROOM NAME"))?,
        kind: kind.ok_or(CodecError::MissingField("ROOM TYPE"))?,
        connections,
    })
}

/// Writes every room of `graph` into `dir` using the fixed naming scheme.
pub fn write_rooms(dir: &Path, graph: &RoomGraph) -> Result<(), CodecError> {
    for room in graph.rooms() {
        let path = dir.join(room_file_name(room.id.0));
        fs::write(&path, encode_room(graph, room.id)).map_err(|source| CodecError::Io {
            path: path.clone(),
            source,
        })?;
    }
    tracing::info!(dir = %dir.display(), rooms = graph.len(), "room files written");
    Ok(())
}

/// Loads a whole graph from `dir`.
///
/// Reads `room0`, `room1`, ... until the first missing index, resolves
/// connection names to ids, and assembles through `RoomGraph::new` — so a
/// truncated or tampered room set fails with a specific error rather than
/// loading half a dungeon.
pub fn load_graph(dir: &Path) -> Result<RoomGraph, CodecError> {
    let mut records: Vec<RoomRecord> = Vec::new();
    loop {
        let path = dir.join(room_file_name(records.len()));
        if !path.is_file() {
            break;
        }
        let text = fs::read_to_string(&path).map_err(|source| CodecError::Io {
            path: path.clone(),
            source,
        })?;
        records.push(parse_room(&text)?);
    }

    let mut rooms = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let mut room = Room::new(RoomId(i), record.name.clone(), record.kind);
        for target in &record.connections {
            let id = records
                .iter()
                .position(|other| &other.name == target)
                .ok_or_else(|| CodecError::UnknownNeighbor {
                    room: record.name.clone(),
                    neighbor: target.clone(),
                })?;
            room.neighbors.push(RoomId(id));
        }
        rooms.push(room);
    }

    let graph = RoomGraph::new(rooms)?;
    tracing::info!(dir = %dir.display(), rooms = graph.len(), "room graph loaded");
    Ok(graph)
}
