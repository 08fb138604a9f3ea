//! Keyboard input state
//!
//! Key listeners only write here; the tick loop only reads, once per tick,
//! through [`InputState::take_tick_input`]. Movement is level-triggered (held
//! means moving), jump is edge-triggered (one impulse per press).
//!
//! Held keys are tracked per physical key. Aliases ('a' and ArrowLeft) are
//! folded into one [`Intent`] only when the tick snapshot is taken.

use std::collections::HashSet;

/// Physical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    A,
    D,
}

/// What a key asks the player to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Left,
    Right,
    Jump,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. 'a'/'d' only count when
    /// `wasd_keys` is on.
    pub fn from_dom_key(key: &str, wasd_keys: bool) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            " " => Some(Key::Space),
            "a" if wasd_keys => Some(Key::A),
            "d" if wasd_keys => Some(Key::D),
            _ => None,
        }
    }

    pub fn intent(self) -> Intent {
        match self {
            Key::ArrowLeft | Key::A => Intent::Left,
            Key::ArrowRight | Key::D => Intent::Right,
            Key::Space => Intent::Jump,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// One-shot jump impulse
    pub jump: bool,
}

/// Held keys plus a pending jump impulse
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    jump_pending: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Auto-repeat presses of a key already held are not
    /// new edges, so holding jump never queues a second impulse.
    pub fn press(&mut self, key: Key, player_airborne: bool) {
        let newly_pressed = self.held.insert(key);
        if key.intent() == Intent::Jump && newly_pressed && !player_airborne {
            self.jump_pending = true;
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Any key with this intent is down
    pub fn wants(&self, intent: Intent) -> bool {
        self.held.iter().any(|k| k.intent() == intent)
    }

    pub fn jump_pending(&self) -> bool {
        self.jump_pending
    }

    /// Snapshot for the next tick. Consumes the jump impulse.
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.wants(Intent::Left),
            right: self.wants(Intent::Right),
            jump: self.jump_pending,
        };
        self.jump_pending = false;
        input
    }

    /// Forget everything (on start/restart, or when focus is lost)
    pub fn reset(&mut self) {
        self.held.clear();
        self.jump_pending = false;
    }
}
