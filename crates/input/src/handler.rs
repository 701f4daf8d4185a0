//! Held-key tracking for terminal environments.
//!
//! The simulation samples which keys are *held* once per frame. Terminals
//! only report presses (and auto-repeats) unless they support the keyboard
//! enhancement protocol, so a key is treated as released once no press or
//! repeat has been seen for `key_release_timeout_ms`. When the terminal does
//! report releases, the timeout is disabled.
//!
//! A press is latched until the next sample, so a tap shorter than one frame
//! still reaches the simulation.

use arrayvec::ArrayVec;
use crossterm::event::KeyEvent;

use crate::map::{action_for_code, handle_key_event};
use crate::types::{InputState, PlayerAction};

// Long enough to bridge the gap between a terminal's first key event and its
// auto-repeat on most setups.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Capacity of the one-shot action queue between two frames.
const MAX_PENDING_ACTIONS: usize = 8;

#[derive(Debug, Clone, Copy, Default)]
struct KeyHold {
    held: bool,
    latched: bool,
    age_ms: u32,
}

impl KeyHold {
    fn press(&mut self) {
        self.held = true;
        self.latched = true;
        self.age_ms = 0;
    }

    fn release(&mut self) {
        self.held = false;
        self.age_ms = 0;
    }

    fn sample(&mut self) -> bool {
        let active = self.held || self.latched;
        self.latched = false;
        active
    }
}

/// Tracks held keys and queued one-shot actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: KeyHold,
    right: KeyHold,
    jump: KeyHold,
    pending: ArrayVec<PlayerAction, MAX_PENDING_ACTIONS>,
    release_events: bool,
    key_release_timeout_ms: u32,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: KeyHold::default(),
            right: KeyHold::default(),
            jump: KeyHold::default(),
            pending: ArrayVec::new(),
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Declare whether the terminal reports key releases.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    fn hold_for(&mut self, action: PlayerAction) -> Option<&mut KeyHold> {
        match action {
            PlayerAction::MoveLeft => Some(&mut self.left),
            PlayerAction::MoveRight => Some(&mut self.right),
            PlayerAction::Jump => Some(&mut self.jump),
            PlayerAction::Pause | PlayerAction::Restart => None,
        }
    }

    /// Record a key press. Returns the mapped action, if any.
    ///
    /// One-shot actions are queued for [`InputHandler::take_actions`].
    /// Ctrl/Alt chords are ignored.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<PlayerAction> {
        let action = handle_key_event(key)?;
        if action.is_held() {
            if let Some(hold) = self.hold_for(action) {
                hold.press();
            }
        } else {
            let _ = self.pending.try_push(action);
        }
        Some(action)
    }

    /// Record an auto-repeat. Keeps held keys alive; never re-queues one-shots.
    pub fn handle_key_repeat(&mut self, key: KeyEvent) {
        let Some(action) = handle_key_event(key) else {
            return;
        };
        if let Some(hold) = self.hold_for(action) {
            hold.held = true;
            hold.age_ms = 0;
        }
    }

    /// Record a key release. Modifiers are not checked, so a key pressed
    /// alone and released with Ctrl down still stops being held.
    pub fn handle_key_release(&mut self, key: KeyEvent) {
        let Some(action) = action_for_code(key.code) else {
            return;
        };
        if let Some(hold) = self.hold_for(action) {
            hold.release();
        }
    }

    /// Advance key timers by `elapsed_ms` and sample the held keys for this frame.
    pub fn update(&mut self, elapsed_ms: u32) -> InputState {
        let timeout = self.key_release_timeout_ms;
        let auto_release = !self.release_events;
        for hold in [&mut self.left, &mut self.right, &mut self.jump] {
            if !hold.held {
                continue;
            }
            hold.age_ms = hold.age_ms.saturating_add(elapsed_ms);
            if auto_release && hold.age_ms > timeout {
                hold.release();
            }
        }

        InputState {
            left: self.left.sample(),
            right: self.right.sample(),
            jump: self.jump.sample(),
        }
    }

    /// Drain the one-shot actions pressed since the last call.
    pub fn take_actions(&mut self) -> ArrayVec<PlayerAction, MAX_PENDING_ACTIONS> {
        std::mem::take(&mut self.pending)
    }

    /// Forget every held key and queued action.
    pub fn reset(&mut self) {
        self.left = KeyHold::default();
        self.right = KeyHold::default();
        self.jump = KeyHold::default();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn press_is_held_until_timeout() {
        let mut input = InputHandler::new().with_key_release_timeout_ms(100);
        input.handle_key_press(key(KeyCode::Left));

        assert!(input.update(33).left);
        assert!(input.update(33).left);
        assert!(input.update(33).left);
        // 132ms since the press.
        assert!(!input.update(33).left);
    }

    #[test]
    fn repeat_keeps_key_alive() {
        let mut input = InputHandler::new().with_key_release_timeout_ms(100);
        input.handle_key_press(key(KeyCode::Right));
        for _ in 0..20 {
            input.handle_key_repeat(key(KeyCode::Right));
            assert!(input.update(33).right);
        }
    }

    #[test]
    fn release_ends_hold_immediately() {
        let mut input = InputHandler::new();
        input.handle_key_press(key(KeyCode::Char(' ')));
        assert!(input.update(10).jump);
        input.handle_key_release(key(KeyCode::Char(' ')));
        assert!(!input.update(10).jump);
    }

    #[test]
    fn tap_between_frames_is_seen_once() {
        let mut input = InputHandler::new().with_release_events(true);
        input.handle_key_press(key(KeyCode::Char(' ')));
        input.handle_key_release(key(KeyCode::Char(' ')));
        assert!(input.update(33).jump);
        assert!(!input.update(33).jump);
    }

    #[test]
    fn release_events_disable_timeout() {
        let mut input = InputHandler::new()
            .with_release_events(true)
            .with_key_release_timeout_ms(50);
        input.handle_key_press(key(KeyCode::Left));
        for _ in 0..30 {
            assert!(input.update(33).left);
        }
    }

    #[test]
    fn one_shot_actions_are_queued_not_held() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.handle_key_press(key(KeyCode::Char('p'))),
            Some(PlayerAction::Pause)
        );
        input.handle_key_press(key(KeyCode::Char('r')));
        assert_eq!(input.update(33), InputState::NONE);

        let actions = input.take_actions();
        assert_eq!(
            actions.as_slice(),
            &[PlayerAction::Pause, PlayerAction::Restart]
        );
        assert!(input.take_actions().is_empty());
    }

    #[test]
    fn repeat_does_not_requeue_one_shots() {
        let mut input = InputHandler::new();
        input.handle_key_press(key(KeyCode::Char('p')));
        input.handle_key_repeat(key(KeyCode::Char('p')));
        input.handle_key_repeat(key(KeyCode::Char('p')));
        assert_eq!(input.take_actions().len(), 1);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut input = InputHandler::new();
        assert_eq!(input.handle_key_press(key(KeyCode::Char('x'))), None);
        assert_eq!(input.update(16), InputState::NONE);
    }

    #[test]
    fn queue_overflow_drops_extra_actions() {
        let mut input = InputHandler::new();
        for _ in 0..(MAX_PENDING_ACTIONS + 4) {
            input.handle_key_press(key(KeyCode::Char('p')));
        }
        assert_eq!(input.take_actions().len(), MAX_PENDING_ACTIONS);
    }

    #[test]
    fn reset_clears_everything() {
        let mut input = InputHandler::new();
        input.handle_key_press(key(KeyCode::Left));
        input.handle_key_press(key(KeyCode::Char('p')));
        input.reset();
        assert_eq!(input.update(1), InputState::NONE);
        assert!(input.take_actions().is_empty());
    }

    #[test]
    fn ctrl_chords_are_neither_held_nor_queued() {
        let mut input = InputHandler::new();
        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key_press(ctrl_r), None);
        assert_eq!(input.handle_key_press(ctrl_a), None);
        input.handle_key_repeat(ctrl_a);

        assert_eq!(input.update(33), InputState::NONE);
        assert!(input.take_actions().is_empty());
    }

    #[test]
    fn release_with_modifier_still_releases() {
        let mut input = InputHandler::new().with_release_events(true);
        input.handle_key_press(key(KeyCode::Char('a')));
        assert!(input.update(33).left);
        input.handle_key_release(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert!(!input.update(33).left);
    }
}
