//! Level module - tile-grid layouts
//!
//! A level is a player start position plus the set of ground tiles, both in
//! tile coordinates. Levels can be built in code or parsed from an ASCII grid:
//!
//! ```text
//! ....................
//! ..........P.........
//! .....#####..........
//! ....................
//! ####################
//! ```
//!
//! | Char | Meaning |
//! |------|---------|
//! | `#` | ground tile |
//! | `P` | player start |
//! | `.` or space | empty |
//!
//! Row 0 is the first line; column 0 the first character.

use std::path::Path;

use thiserror::Error;

/// Level parsing/loading errors.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error("level has no player start ('P')")]
    MissingPlayer,

    #[error("level has a second player start at line {line}, column {column}")]
    DuplicatePlayer { line: usize, column: usize },

    #[error("unknown tile {ch:?} at line {line}, column {column}")]
    UnknownTile { ch: char, line: usize, column: usize },
}

/// Player start and ground layout, in tile coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub player_start: (i32, i32),
    pub ground: Vec<(i32, i32)>,
}

impl Default for Level {
    /// The demo layout: a full-width floor on row 12 and a short platform on row 9.
    fn default() -> Self {
        let mut ground: Vec<(i32, i32)> = (0..20).map(|x| (x, 12)).collect();
        ground.extend((5..10).map(|x| (x, 9)));
        Self {
            player_start: (10, 10),
            ground,
        }
    }
}

impl Level {
    /// Parse an ASCII tile grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_platformer_core::Level;
    ///
    /// let level = Level::parse("..P\n###").unwrap();
    /// assert_eq!(level.player_start, (2, 0));
    /// assert_eq!(level.ground, vec![(0, 1), (1, 1), (2, 1)]);
    /// ```
    pub fn parse(src: &str) -> Result<Self, LevelError> {
        let mut player_start = None;
        let mut ground = Vec::new();

        for (row, line) in src.lines().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let (x, y) = (col as i32, row as i32);
                match ch {
                    '#' => ground.push((x, y)),
                    'P' => {
                        if player_start.is_some() {
                            return Err(LevelError::DuplicatePlayer {
                                line: row + 1,
                                column: col + 1,
                            });
                        }
                        player_start = Some((x, y));
                    }
                    '.' | ' ' | '\r' => {}
                    _ => {
                        return Err(LevelError::UnknownTile {
                            ch,
                            line: row + 1,
                            column: col + 1,
                        })
                    }
                }
            }
        }

        let player_start = player_start.ok_or(LevelError::MissingPlayer)?;
        Ok(Self {
            player_start,
            ground,
        })
    }

    /// Read and parse a level file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let src = std::fs::read_to_string(path)?;
        Self::parse(&src)
    }
}
