//! High-score persistence.
//!
//! The only thing that survives between sessions is a single number.

use std::path::PathBuf;

use crate::Result;

/// Where the best score lives between sessions.
pub trait HighScoreStore {
    /// The stored score, or 0 when there is none or it cannot be read.
    fn load(&self) -> u32;
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Plain decimal text in a file.
#[derive(Debug, Clone)]
pub struct FileHighScore {
    path: PathBuf,
}

impl FileHighScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.seagull_son_score`, or the current directory without `$HOME`.
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".seagull_son_score")
    }
}

impl HighScoreStore for FileHighScore {
    fn load(&self) -> u32 {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        std::fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}
