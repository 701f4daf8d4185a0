//! World module - owns every entity and runs the frame update
//!
//! The world holds three kinds of entities: the player, the static ground
//! tiles and any number of generic sprites (decoration, drawn but never
//! collided with). Updating the world updates the player against every
//! ground tile; drawing it means walking [`World::draw_list`], which yields
//! sprites in layer order.

use crate::ground::GroundTile;
use crate::level::Level;
use crate::player::{Player, PlayerEvents};
use crate::snapshot::{PlayerSnapshot, WorldSnapshot};
use crate::sprite::Sprite;
use crate::types::{InputState, PlayerAction, GROUND_LAYER, PLAYER_LAYER, WINDOW_HEIGHT};

/// Complete simulation state.
#[derive(Debug, Clone)]
pub struct World {
    level: Level,
    player: Player,
    ground: Vec<GroundTile>,
    sprites: Vec<Sprite>,
    paused: bool,
    frame: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(Level::default())
    }
}

impl World {
    /// Build a world from a level layout.
    pub fn new(level: Level) -> Self {
        let (px, py) = level.player_start;
        let ground = level
            .ground
            .iter()
            .map(|&(x, y)| GroundTile::new(x, y))
            .collect();

        Self {
            player: Player::new(px, py),
            ground,
            sprites: Vec::new(),
            paused: false,
            frame: 0,
            level,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ground(&self) -> &[GroundTile] {
        &self.ground
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Number of frames simulated since the last (re)start.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Add a generic sprite. It is drawn on its layer but never collided with.
    ///
    /// `sprites` stays sorted by layer, insertion order within a layer.
    pub fn add_sprite(&mut self, sprite: Sprite) {
        let at = self.sprites.partition_point(|s| s.layer <= sprite.layer);
        self.sprites.insert(at, sprite);
    }

    /// Advance one frame with the given held keys.
    ///
    /// Does nothing while paused.
    pub fn update(&mut self, input: InputState) -> PlayerEvents {
        if self.paused {
            return PlayerEvents::default();
        }

        let events = self.player.update(input, &self.ground);
        self.frame += 1;

        if events.jumped {
            log::debug!("frame {}: jump from y={}", self.frame, self.player.rect().y);
        }
        if events.landed {
            log::debug!(
                "frame {}: landed at ({}, {})",
                self.frame,
                self.player.rect().x,
                self.player.rect().bottom()
            );
        }
        log::trace!(
            "frame {}: player={:?} vy={} standing={}",
            self.frame,
            self.player.rect(),
            self.player.y_velocity,
            self.player.standing
        );

        events
    }

    /// Apply a one-shot action. Held actions are ignored here; they reach the
    /// world through [`World::update`].
    pub fn apply_action(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::Pause => {
                self.paused = !self.paused;
                log::info!("{}", if self.paused { "paused" } else { "resumed" });
            }
            PlayerAction::Restart => self.restart(),
            PlayerAction::MoveLeft | PlayerAction::MoveRight | PlayerAction::Jump => {}
        }
    }

    /// Put the player back at the level start. Generic sprites are kept.
    pub fn restart(&mut self) {
        let (px, py) = self.level.player_start;
        self.player = Player::new(px, py);
        self.paused = false;
        self.frame = 0;
        log::info!("level restarted");
    }

    /// True once the player has dropped entirely below the bottom of the window.
    pub fn player_fell_out(&self) -> bool {
        self.player.rect().top() >= WINDOW_HEIGHT
    }

    /// Every sprite in draw order: ascending layer, insertion order within a layer.
    ///
    /// Ground tiles are inserted first, then generic sprites, then the player.
    ///
    /// Ground tiles are always on [`GROUND_LAYER`] and the player on
    /// [`PLAYER_LAYER`], so merging them into the sorted generic sprites only
    /// takes two split points. Nothing is allocated.
    pub fn draw_list(&self) -> impl DoubleEndedIterator<Item = &Sprite> + '_ {
        let below_ground = self.sprites.partition_point(|s| s.layer < GROUND_LAYER);
        let up_to_player = self.sprites.partition_point(|s| s.layer <= PLAYER_LAYER);
        let (under, rest) = self.sprites.split_at(below_ground);
        let (between, over) = rest.split_at(up_to_player - below_ground);

        under
            .iter()
            .chain(self.ground.iter().map(|g| &g.sprite))
            .chain(between)
            .chain(std::iter::once(&self.player.sprite))
            .chain(over)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            frame: self.frame,
            paused: self.paused,
            player: PlayerSnapshot::from(&self.player),
            ground_tiles: self.ground.len(),
        }
    }
}
