//! High score persistence
//!
//! The session only needs a key/value contract: read the best score once at
//! startup, write it back at most once when a session ends with a record.

use std::collections::HashMap;

use crate::Result;

/// External key/value store for the best score
pub trait HighScoreStore {
    /// Stored score, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<u32>;

    fn set(&mut self, key: &str, score: u32) -> Result<()>;
}

/// In-memory store (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scores: HashMap<String, u32>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(key: &str, score: u32) -> Self {
        let mut store = Self::new();
        store.scores.insert(key.to_string(), score);
        store
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.scores.get(key).copied()
    }

    fn set(&mut self, key: &str, score: u32) -> Result<()> {
        self.scores.insert(key.to_string(), score);
        self.writes += 1;
        Ok(())
    }
}

/// JSON file of key -> score (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
    scores: HashMap<String, u32>,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    /// Open a store. A missing or corrupt file starts empty.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let scores = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scores) => {
                    log::info!("Loaded high scores from {}", path.display());
                    scores
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt high score file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high score file at {}, starting fresh", path.display());
                HashMap::new()
            }
            Err(e) => {
                log::warn!("Cannot read high score file {}: {}", path.display(), e);
                HashMap::new()
            }
        };
        Self { path, scores }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HighScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<u32> {
        self.scores.get(key).copied()
    }

    fn set(&mut self, key: &str, score: u32) -> Result<()> {
        self.scores.insert(key.to_string(), score);
        let json = serde_json::to_string_pretty(&self.scores)?;
        std::fs::write(&self.path, json)?;
        log::info!("High scores saved to {}", self.path.display());
        Ok(())
    }
}

/// Browser LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighScoreStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<u32> {
        let value = Self::storage()?.get_item(key).ok()??;
        value.trim().parse().ok()
    }

    fn set(&mut self, key: &str, score: u32) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| crate::Error::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, &score.to_string())
            .map_err(|e| crate::Error::Storage(format!("{:?}", e)))?;
        log::info!("High score {} saved", score);
        Ok(())
    }
}
