//! Bot state that survives restarts, stored as a small JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_COLOR: &str = "default";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to write state file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotState {
    #[serde(default)]
    pub auto_quote_enabled: bool,
    #[serde(default = "default_color")]
    pub current_color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for BotState {
    fn default() -> Self {
        Self {
            auto_quote_enabled: false,
            current_color: default_color(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state file. A missing or unreadable file yields the default
    /// state, which is written back immediately.
    pub fn load(&self) -> Result<BotState, StateError> {
        let parsed = fs::read_to_string(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str::<BotState>(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(state) => Ok(state),
            Err(reason) => {
                warn!(path = %self.path.display(), %reason, "starting from default state");
                let state = BotState::default();
                self.save(&state)?;
                Ok(state)
            }
        }
    }

    pub fn save(&self, state: &BotState) -> Result<(), StateError> {
        let text = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, text).map_err(|source| StateError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            auto_quote = state.auto_quote_enabled,
            color = %state.current_color,
            "state saved"
        );
        Ok(())
    }
}
