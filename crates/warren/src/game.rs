//! The navigation state machine.
//!
//! `Game` is pure state — no console, no clock, no filesystem. The player
//! binary feeds it one line at a time and acts on the returned [`Turn`];
//! tests drive it the same way.

use warren_graph::{Room, RoomGraph, RoomId, RoomKind};

/// What the player literally types to ask for the current time.
pub const TIME_COMMAND: &str = "time";

/// Fixed rejection line for unknown or unreachable room names.
pub const REJECTION: &str = "HUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN.";

/// Outcome of one submitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Moved to a connected room.
    Moved,
    /// Moved into the End room; the session is over.
    Finished,
    /// The player asked for the current time.
    TimeRequested,
    /// Unknown name, or a room not connected to the current location.
    Rejected,
}

/// One play session: the loaded graph plus the player's position, the
/// path walked so far, and a step count. The graph itself never changes;
/// only the location id moves.
pub struct Game {
    graph: RoomGraph,
    location: RoomId,
    /// Names of rooms moved into, in order (End included, Start not).
    path: Vec<String>,
    steps: usize,
}

impl Game {
    /// Starts a session at the graph's Start room.
    pub fn new(graph: RoomGraph) -> Self {
        let location = graph.start().id;
        Self {
            graph,
            location,
            path: Vec::new(),
            steps: 0,
        }
    }

    /// The room the player is currently in.
    pub fn location(&self) -> &Room {
        self.graph.room(self.location)
    }

    /// Steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Rooms moved into so far, in order.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Whether the player has reached the End room.
    pub fn is_won(&self) -> bool {
        self.location().kind == RoomKind::End
    }

    /// Renders the prompt for the current location.
    pub fn prompt(&self) -> String {
        let here = self.location();
        let mut out = format!("\nCURRENT LOCATION: {}\n", here.name);
        out.push_str("POSSIBLE CONNECTIONS: ");
        let count = here.degree();
        for (i, neighbor) in self.graph.neighbors(self.location).enumerate() {
            out.push_str(&neighbor.name);
            out.push_str(if i == count - 1 { ".\n" } else { ", " });
        }
        out.push_str("WHERE TO? >");
        out
    }

    /// Applies one line of player input.
    ///
    /// Accepts the literal [`TIME_COMMAND`] or the exact name of a room
    /// connected to the current location; everything else is rejected and
    /// the caller re-prompts.
    pub fn submit(&mut self, input: &str) -> Turn {
        let input = input.trim();
        if input == TIME_COMMAND {
            return Turn::TimeRequested;
        }

        let Some(destination) = self.graph.find_by_name(input) else {
            tracing::debug!(input, "rejected: no such room");
            return Turn::Rejected;
        };
        if !self.graph.room(self.location).is_connected_to(destination.id) {
            tracing::debug!(input, "rejected: not connected to current location");
            return Turn::Rejected;
        }

        let (id, name) = (destination.id, destination.name.clone());
        self.location = id;
        self.path.push(name);
        self.steps += 1;

        if self.is_won() { Turn::Finished } else { Turn::Moved }
    }

    /// Renders the victory banner, step count, and the path walked.
    pub fn victory_summary(&self) -> String {
        let mut out = String::from("\nYOU HAVE FOUND THE END ROOM. CONGRATULATIONS!\n");
        out.push_str(&format!(
            "YOU TOOK {} STEPS. YOUR PATH TO VICTORY WAS:\n",
            self.steps
        ));
        for name in &self.path {
            out.push_str(name);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five rooms where the End room is deliberately NOT connected to
    /// Start, so the unreachable-room rejection has something to reject.
    ///
    /// Altuve(S) — Bregman, Correa, Gattis; Verlander(E) — Bregman,
    /// Correa, Gattis.
    fn pentagon() -> RoomGraph {
        let names = ["Altuve", "Bregman", "Correa", "Gattis", "Verlander"];
        let mut rooms: Vec<Room> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let kind = match i {
                    0 => RoomKind::Start,
                    4 => RoomKind::End,
                    _ => RoomKind::Mid,
                };
                Room::new(RoomId(i), *name, kind)
            })
            .collect();
        let edges = [
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (1, 3),
            (2, 3),
            (1, 4),
            (2, 4),
            (3, 4),
        ];
        for (a, b) in edges {
            rooms[a].neighbors.push(RoomId(b));
            rooms[b].neighbors.push(RoomId(a));
        }
        RoomGraph::new(rooms).unwrap()
    }

    #[test]
    fn test_session_starts_at_the_start_room() {
        let game = Game::new(pentagon());
        assert_eq!(game.location().name, "Altuve");
        assert_eq!(game.steps(), 0);
        assert!(!game.is_won());
    }

    #[test]
    fn test_prompt_renders_location_and_connections() {
        let game = Game::new(pentagon());
        assert_eq!(
            game.prompt(),
            "\nCURRENT LOCATION: Altuve\n\
             POSSIBLE CONNECTIONS: Bregman, Correa, Gattis.\n\
             WHERE TO? >"
        );
    }

    #[test]
    fn test_moving_to_a_neighbor_updates_location_and_path() {
        let mut game = Game::new(pentagon());
        assert_eq!(game.submit("Bregman"), Turn::Moved);
        assert_eq!(game.location().name, "Bregman");
        assert_eq!(game.path(), ["Bregman"]);
        assert_eq!(game.steps(), 1);
    }

    #[test]
    fn test_unknown_room_is_rejected() {
        let mut game = Game::new(pentagon());
        assert_eq!(game.submit("Narnia"), Turn::Rejected);
        assert_eq!(game.location().name, "Altuve");
        assert_eq!(game.steps(), 0);
    }

    #[test]
    fn test_known_but_unconnected_room_is_rejected() {
        let mut game = Game::new(pentagon());
        // Verlander exists but is not a neighbor of Altuve.
        assert_eq!(game.submit("Verlander"), Turn::Rejected);
        assert_eq!(game.location().name, "Altuve");
    }

    #[test]
    fn test_time_command_does_not_move_the_player() {
        let mut game = Game::new(pentagon());
        assert_eq!(game.submit("time"), Turn::TimeRequested);
        assert_eq!(game.location().name, "Altuve");
        assert_eq!(game.steps(), 0);
        assert!(game.path().is_empty());
    }

    #[test]
    fn test_input_is_trimmed() {
        let mut game = Game::new(pentagon());
        assert_eq!(game.submit("  time \n"), Turn::TimeRequested);
        assert_eq!(game.submit(" Bregman\n"), Turn::Moved);
    }

    #[test]
    fn test_reaching_the_end_room_finishes_the_session() {
        let mut game = Game::new(pentagon());
        assert_eq!(game.submit("Bregman"), Turn::Moved);
        assert_eq!(game.submit("Verlander"), Turn::Finished);
        assert!(game.is_won());
        assert_eq!(game.steps(), 2);
        assert_eq!(game.path(), ["Bregman", "Verlander"]);
    }

    #[test]
    fn test_victory_summary_lists_the_walk() {
        let mut game = Game::new(pentagon());
        game.submit("Correa");
        game.submit("Verlander");
        assert_eq!(
            game.victory_summary(),
            "\nYOU HAVE FOUND THE END ROOM. CONGRATULATIONS!\n\
             YOU TOOK 2 STEPS. YOUR PATH TO VICTORY WAS:\n\
             Correa\n\
             Verlander\n"
        );
    }
}
