use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::types::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub y_velocity: f32,
    pub standing: bool,
}

impl PlayerSnapshot {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

impl From<&Player> for PlayerSnapshot {
    fn from(value: &Player) -> Self {
        let r = value.rect();
        Self {
            x: r.x,
            y: r.y,
            w: r.w,
            h: r.h,
            y_velocity: value.y_velocity,
            standing: value.standing,
        }
    }
}

/// Plain-data view of the world, for HUDs and traces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub paused: bool,
    pub player: PlayerSnapshot,
    pub ground_tiles: usize,
}
