//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PLATFORMER_FPS` | 30 | Tick rate, clamped to 1..=240 |
//! | `PLATFORMER_LEVEL` | unset | ASCII level file (built-in demo level otherwise) |
//! | `PLATFORMER_KEY_RELEASE_MS` | 150 | Held-key timeout for terminals without release events |
//! | `PLATFORMER_CELL_PX` | `16x32` | World pixels per terminal cell, `WxH` |
//! | `PLATFORMER_RESPAWN` | true | Restart the level when the player falls out |
//! | `PLATFORMER_LOG_PATH` | unset | File that receives log output |
//!
//! Missing values fall back to the default. Unparsable values fall back too,
//! and are returned as [`ConfigError`]s so the caller can log them once its
//! logger is installed.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::FPS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid cell size {0:?}: expected WxH, e.g. 16x32")]
    CellSize(String),

    #[error("invalid {key} value {value:?}: expected a whole number")]
    Number { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub fps: u32,
    pub level_path: Option<PathBuf>,
    pub key_release_timeout_ms: u32,
    /// World pixels per terminal cell (width, height).
    pub cell_px: (u16, u16),
    pub respawn: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            level_path: None,
            key_release_timeout_ms: 150,
            cell_px: (16, 32),
            respawn: true,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    ///
    /// Values that fail to parse are replaced by their default and reported.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let defaults = Self::default();
        let mut errors = Vec::new();

        let fps = parse_number(&lookup, "PLATFORMER_FPS", &mut errors)
            .map(|v| v.clamp(1, 240))
            .unwrap_or(defaults.fps);

        let key_release_timeout_ms =
            parse_number(&lookup, "PLATFORMER_KEY_RELEASE_MS", &mut errors)
                .unwrap_or(defaults.key_release_timeout_ms);

        let cell_px = match lookup("PLATFORMER_CELL_PX") {
            Some(s) => Self::parse_cell_px(&s).unwrap_or_else(|e| {
                errors.push(e);
                defaults.cell_px
            }),
            None => defaults.cell_px,
        };

        let respawn = lookup("PLATFORMER_RESPAWN")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(defaults.respawn);

        let config = Self {
            fps,
            level_path: non_empty_path(lookup("PLATFORMER_LEVEL")),
            key_release_timeout_ms,
            cell_px,
            respawn,
            log_path: non_empty_path(lookup("PLATFORMER_LOG_PATH")),
        };
        (config, errors)
    }

    /// Parse a `WxH` cell size. Both parts must be positive.
    pub fn parse_cell_px(s: &str) -> Result<(u16, u16), ConfigError> {
        let err = || ConfigError::CellSize(s.to_string());
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(err)?;
        let w: u16 = w.trim().parse().map_err(|_| err())?;
        let h: u16 = h.trim().parse().map_err(|_| err())?;
        if w == 0 || h == 0 {
            return Err(err());
        }
        Ok((w, h))
    }

    /// Milliseconds per tick.
    pub fn tick_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }
}

fn parse_number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    errors: &mut Vec<ConfigError>,
) -> Option<u32> {
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(ConfigError::Number { key, value });
            None
        }
    }
}

fn non_empty_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
