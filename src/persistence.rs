//! Best-effort high-score persistence.
//!
//! The store is advisory: a missing or corrupt value loads as 0 and a failed
//! write is logged and swallowed. Gameplay never sees a persistence error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Storage key for the single persisted scalar.
pub const HIGH_SCORE_KEY: &str = "high_score";

/// Key-value persistence boundary consumed by the engine.
pub trait ScoreStore {
    /// Read the bytes stored under `key`, or `None` when absent/unreadable.
    fn read(&self, key: &str) -> Option<Vec<u8>>;
    /// Write `bytes` under `key`.
    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()>;
}

/// File-backed store: one JSON file per key under `~/.gridplay/`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store under `~/.gridplay/`, creating the directory if needed.
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;
        Self::at(home_dir.join(".gridplay"))
    }

    /// Store under an explicit directory, creating it if needed.
    pub fn at(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl ScoreStore for FileStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
        fs::write(self.path_for(key), bytes)
    }
}

/// In-memory store for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl ScoreStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// On-disk shape of the high-score record.
#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// Load the persisted high score, defaulting to 0 on any read or parse
/// failure.
pub fn load_high_score<S: ScoreStore>(store: &S) -> u32 {
    let Some(bytes) = store.read(HIGH_SCORE_KEY) else {
        return 0;
    };
    match serde_json::from_slice::<HighScoreRecord>(&bytes) {
        Ok(record) => record.high_score,
        Err(e) => {
            log::warn!("ignoring unparseable high-score record: {e}");
            0
        }
    }
}

/// Persist the high score best-effort. Write failures are logged and
/// swallowed; persistence never blocks gameplay.
pub fn save_high_score<S: ScoreStore>(store: &mut S, value: u32) {
    let record = HighScoreRecord { high_score: value };
    let bytes = match serde_json::to_vec(&record) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("could not encode high score: {e}");
            return;
        }
    };
    if let Err(e) = store.write(HIGH_SCORE_KEY, &bytes) {
        log::warn!("high-score save skipped: {e}");
    }
}
