//! Persistence collaborator for the high score
//!
//! The session only needs a tiny key-value interface. Two stores ship with the crate:
//! an in-memory map for tests and embedding, and a JSON file under the user's config
//! directory (XDG config or ~/.config/block-blast).

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

const APP_DIR: &str = "block-blast";
const FILENAME: &str = "scores.json";

/// Key-value storage surviving across sessions
pub trait ScoreStore {
    /// Stored value for `key`, `Ok(None)` if nothing was stored yet
    fn get(&self, key: &str) -> Result<Option<u32>>;

    fn set(&mut self, key: &str, value: u32) -> Result<()>;
}

/// Volatile store backed by a map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store persisting all keys as one JSON object in a file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location (see [`JsonFileStore::default_path`])
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// `$XDG_CONFIG_HOME/block-blast/scores.json`, falling back to
    /// `$HOME/.config/block-blast/scores.json`, then the current directory.
    pub fn default_path() -> PathBuf {
        let base = match std::env::var("XDG_CONFIG_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
            _ => std::env::var("HOME")
                .map(|h| PathBuf::from(h).join(".config"))
                .unwrap_or_else(|_| PathBuf::from(".")),
        };
        base.join(APP_DIR).join(FILENAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, `None` if the file does not exist yet
    fn read_contents(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading {}", self.path.display())),
        }
    }

    fn parse(&self, content: &str) -> Result<BTreeMap<String, u32>> {
        serde_json::from_str(content).with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl ScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        match self.read_contents()? {
            Some(content) => Ok(self.parse(&content)?.get(key).copied()),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        // Read failures abort; only unparsable contents are replaced.
        let mut values = match self.read_contents()? {
            Some(content) => self.parse(&content).unwrap_or_else(|err| {
                warn!(error = %err, "replacing unreadable score file");
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };
        values.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", 300).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(300));
    }

    #[test]
    fn default_path_ends_with_app_file() {
        let path = JsonFileStore::default_path();
        assert!(path.ends_with("block-blast/scores.json"));
    }
}
