//! Player: load the newest room set and run the navigation prompt.
//!
//! Two threads of control: this loop (blocking on console input) and the
//! timekeeper task spawned at startup. The timekeeper is never joined —
//! process exit tears it down.

use std::io::Write as _;
use std::path::Path;

use tokio::io::{AsyncBufReadExt, BufReader};
use warren::{Game, REJECTION, Turn, WarrenError};
use warren_clock::spawn_clock;
use warren_codec::{load_graph, newest_rooms_dir};

#[tokio::main]
async fn main() -> Result<(), WarrenError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = newest_rooms_dir(Path::new("."))?;
    let graph = load_graph(&dir)?;
    let clock = spawn_clock();
    let mut game = Game::new(graph);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", game.prompt());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // stdin closed mid-game; there is nothing left to prompt.
            return Ok(());
        };

        match game.submit(&line) {
            Turn::Moved => {}
            Turn::Finished => break,
            Turn::TimeRequested => {
                let stamp = clock.now().await?;
                println!("\n{stamp}");
            }
            Turn::Rejected => println!("\n{REJECTION}"),
        }
    }

    print!("{}", game.victory_summary());
    Ok(())
}
