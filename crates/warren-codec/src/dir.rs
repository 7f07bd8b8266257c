//! The rooms-directory store: create on generate, pick newest on play.

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use std::{fs, process};

use crate::CodecError;

/// Every rooms directory carries this prefix in its name.
pub const ROOMS_DIR_PREFIX: &str = "warren.rooms";

/// Creates a fresh rooms directory under `base`, named with the prefix and
/// the current process id.
///
/// Fails if the directory cannot be created (including if it already
/// exists) — the generator treats that as fatal.
pub fn create_rooms_dir(base: &Path) -> Result<PathBuf, CodecError> {
    let path = base.join(format!("{ROOMS_DIR_PREFIX}.{}", process::id()));
    fs::create_dir(&path).map_err(|source| CodecError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(dir = %path.display(), "rooms directory created");
    Ok(path)
}

/// Picks the newest rooms directory under `base`.
///
/// Newest means the greatest modification time among directories whose name
/// contains [`ROOMS_DIR_PREFIX`]. Equal modification times are broken by
/// the lexicographically-last name, so the result never depends on
/// filesystem scan order.
pub fn newest_rooms_dir(base: &Path) -> Result<PathBuf, CodecError> {
    let entries = fs::read_dir(base).map_err(|source| CodecError::Io {
        path: base.to_path_buf(),
        source,
    })?;

    let mut newest: Option<(SystemTime, String)> = None;
    for entry in entries {
        let entry = entry.map_err(|source| CodecError::Io {
            path: base.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.contains(ROOMS_DIR_PREFIX) {
            continue;
        }
        let metadata = entry.metadata().map_err(|source| CodecError::Io {
            path: entry.path(),
            source,
        })?;
        if !metadata.is_dir() {
            continue;
        }
        let modified = metadata.modified().map_err(|source| CodecError::Io {
            path: entry.path(),
            source,
        })?;

        // Tuple order: mtime first, name as the tie-break.
        let candidate = (modified, name);
        if newest.as_ref().is_none_or(|current| candidate > *current) {
            newest = Some(candidate);
        }
    }

    match newest {
        Some((_, name)) => {
            let path = base.join(name);
            tracing::debug!(dir = %path.display(), "newest rooms directory selected");
            Ok(path)
        }
        None => Err(CodecError::NoRoomsDir {
            base: base.to_path_buf(),
            prefix: ROOMS_DIR_PREFIX,
        }),
    }
}
