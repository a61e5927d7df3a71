//! On-disk settings and score records.
//!
//! Settings live in `settings.toml`, player records in `scores.json`, both
//! under one data directory. Loading never fails: a missing or unreadable
//! file falls back to defaults so a corrupt record cannot lock the player
//! out of the game.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_gridtoe::{GameConfig, Mark, Player};
use tracing::{debug, info, instrument, warn};

/// File name of the stored settings.
pub const SETTINGS_FILE: &str = "settings.toml";

/// File name of the stored player records.
pub const SCORES_FILE: &str = "scores.json";

/// Both seats' records, first seat first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SavedScores {
    players: [Player; 2],
}

/// File-backed store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Creates a store rooted at `dir`. The directory is created on first save.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The data directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads stored settings, or defaults when absent or invalid.
    #[instrument(skip(self))]
    pub fn load_settings(&self) -> GameConfig {
        match self.read_settings() {
            Ok(Some(config)) => {
                debug!("Settings loaded");
                config
            }
            Ok(None) => {
                debug!("No stored settings, using defaults");
                GameConfig::default()
            }
            Err(e) => {
                warn!(error = %e, "Stored settings unusable, using defaults");
                GameConfig::default()
            }
        }
    }

    /// Writes `config` to `settings.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the directory or file cannot be written.
    #[instrument(skip(self, config))]
    pub fn save_settings(&self, config: &GameConfig) -> Result<(), StoreError> {
        let text = toml::to_string_pretty(config)?;
        self.write(SETTINGS_FILE, &text)?;
        info!("Settings saved");
        Ok(())
    }

    /// Loads stored player records, or fresh players when absent or invalid.
    #[instrument(skip(self))]
    pub fn load_players(&self) -> [Player; 2] {
        match self.read_players() {
            Ok(Some(players)) => {
                debug!("Scores loaded");
                players
            }
            Ok(None) => {
                debug!("No stored scores, starting fresh");
                default_players()
            }
            Err(e) => {
                warn!(error = %e, "Stored scores unusable, starting fresh");
                default_players()
            }
        }
    }

    /// Writes both players' records to `scores.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the directory or file cannot be written.
    #[instrument(skip(self, players))]
    pub fn save_players(&self, players: &[Player; 2]) -> Result<(), StoreError> {
        let saved = SavedScores {
            players: players.clone(),
        };
        let text = serde_json::to_string_pretty(&saved)?;
        self.write(SCORES_FILE, &text)?;
        debug!("Scores saved");
        Ok(())
    }

    fn read_settings(&self) -> Result<Option<GameConfig>, StoreError> {
        let Some(text) = self.read(SETTINGS_FILE)? else {
            return Ok(None);
        };
        let config: GameConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(Some(config))
    }

    fn read_players(&self) -> Result<Option<[Player; 2]>, StoreError> {
        let Some(text) = self.read(SCORES_FILE)? else {
            return Ok(None);
        };
        let saved: SavedScores = serde_json::from_str(&text)?;
        Ok(Some(saved.players))
    }

    fn read(&self, name: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.dir.join(name)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, name: &str, text: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(name), text)?;
        Ok(())
    }
}

fn default_players() -> [Player; 2] {
    [Player::for_mark(Mark::First), Player::for_mark(Mark::Second)]
}
