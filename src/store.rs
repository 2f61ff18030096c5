//! High score persistence on disk.
//!
//! The file is a small JSON object, `{"high_score": N}`, kept under the user's
//! config directory. A missing or unreadable file counts as a high score of 0;
//! the game never fails because of it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::PersistenceStore;

const APP_DIR: &str = "tetris-1984";
const FILENAME: &str = "highscore.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// JSON file backed high score store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_CONFIG_HOME/tetris-1984/highscore.json`, falling back to
    /// `~/.config` and then the working directory.
    pub fn default_path() -> PathBuf {
        let base = match std::env::var("XDG_CONFIG_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
            _ => std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|_| PathBuf::from(".")),
        };
        base.join(APP_DIR).join(FILENAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<u32> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file yet");
                return Ok(0);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read {}", self.path.display()))
            }
        };
        let file: HighScoreFile = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(file.high_score)
    }

    fn write(&self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let json = serde_json::to_vec(&HighScoreFile { high_score })?;
        fs::write(&self.path, json).with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl PersistenceStore for FileStore {
    fn load_high_score(&self) -> u32 {
        self.read().unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "ignoring unreadable high score");
            0
        })
    }

    fn save_high_score(&mut self, score: u32) {
        if let Err(err) = self.write(score) {
            warn!(error = %format!("{err:#}"), "could not save high score");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tetris-1984-store-{}-{name}", std::process::id()))
            .join(FILENAME)
    }

    #[test]
    fn missing_file_is_zero() {
        let store = FileStore::new(scratch_path("missing"));
        assert_eq!(store.load_high_score(), 0);
    }

    #[test]
    fn save_then_load() {
        let path = scratch_path("roundtrip");
        let mut store = FileStore::new(&path);
        store.save_high_score(4321);
        assert_eq!(FileStore::new(&path).load_high_score(), 4321);

        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"{"high_score":4321}"#);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_is_zero() {
        let path = scratch_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert_eq!(FileStore::new(&path).load_high_score(), 0);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
