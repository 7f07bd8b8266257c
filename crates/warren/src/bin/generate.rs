//! Generator: build a random room graph and write it to a fresh rooms
//! directory under the current working directory.

use std::path::Path;

use warren::WarrenError;
use warren_codec::{create_rooms_dir, write_rooms};
use warren_graph::GraphBuilder;

fn main() -> Result<(), WarrenError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let graph = GraphBuilder::new().build()?;

    let dir = match create_rooms_dir(Path::new(".")) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Failed to create directory for room files.");
            return Err(err.into());
        }
    };
    write_rooms(&dir, &graph)?;

    Ok(())
}
