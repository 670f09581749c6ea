//! Sprite images on disk.
//!
//! Files live at `<static_root>/<cache_dir>/sprite/pokemon/<id>.png`. Callers
//! get the web path relative to `static_root`, e.g. `/.cache/sprite/pokemon/20.png`.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use pokecard_core::constants::{SPRITE_DIR, SPRITE_EXTENSION};
use pokecard_core::errors::{PokecardResult, StorageError};

use crate::to_io_err;

const SPRITE_KIND: &str = "pokemon";

/// Distinguishes temp files of concurrent writers within the process.
static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct SpriteTree {
    static_root: PathBuf,
    cache_dir: String,
}

impl SpriteTree {
    pub fn new(static_root: impl Into<PathBuf>, cache_dir: impl Into<String>) -> Self {
        Self {
            static_root: static_root.into(),
            cache_dir: cache_dir.into(),
        }
    }

    fn dir(&self) -> PathBuf {
        self.static_root
            .join(&self.cache_dir)
            .join(SPRITE_DIR)
            .join(SPRITE_KIND)
    }

    fn file_name(pokemon_id: u32) -> String {
        format!("{pokemon_id}.{SPRITE_EXTENSION}")
    }

    /// Location of the sprite file on disk.
    pub fn file_path(&self, pokemon_id: u32) -> PathBuf {
        self.dir().join(Self::file_name(pokemon_id))
    }

    /// Web path of the sprite, always with forward slashes.
    pub fn web_path(&self, pokemon_id: u32) -> String {
        let cache_dir = self.cache_dir.trim_matches('/');
        format!(
            "/{cache_dir}/{SPRITE_DIR}/{SPRITE_KIND}/{}",
            Self::file_name(pokemon_id)
        )
    }

    /// Web path of an existing sprite, or `NotFound` if it has not been cached.
    pub fn load(&self, pokemon_id: u32) -> PokecardResult<String> {
        let path = self.file_path(pokemon_id);
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(self.web_path(pokemon_id)),
            Ok(_) => Err(not_found(pokemon_id)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(not_found(pokemon_id)),
            Err(e) => Err(to_io_err(&path, e)),
        }
    }

    /// Write sprite bytes through a temp file and return the web path.
    pub fn store(&self, pokemon_id: u32, bytes: &[u8]) -> PokecardResult<String> {
        let dir = self.dir();
        std::fs::create_dir_all(&dir).map_err(|e| to_io_err(&dir, e))?;

        let path = self.file_path(pokemon_id);
        write_replace(&path, bytes)?;
        Ok(self.web_path(pokemon_id))
    }
}

fn not_found(pokemon_id: u32) -> pokecard_core::PokecardError {
    StorageError::NotFound {
        category: "sprite".to_string(),
        key: pokemon_id.to_string(),
    }
    .into()
}

/// Hidden sibling of `path`, unique per process and per call.
pub(crate) fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(
        ".{name}.{}.{}.tmp",
        std::process::id(),
        TMP_SEQ.fetch_add(1, Ordering::Relaxed)
    ))
}

/// Write `bytes` to a fresh temp sibling, then rename it over `path`.
///
/// Concurrent writers never share a temp file; the last rename wins.
pub(crate) fn write_replace(path: &Path, bytes: &[u8]) -> PokecardResult<()> {
    let tmp = temp_sibling(path);
    if let Err(e) = std::fs::write(&tmp, bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(to_io_err(&tmp, e));
    }
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        to_io_err(path, e)
    })
}
