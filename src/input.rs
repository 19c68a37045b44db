/// Maps raw key events to a per-frame movement intent.
///
/// Instead of acting on each key event individually, a `key_frame` map
/// records the frame number of the last press/repeat event for every key;
/// a key counts as held while that timestamp is fresh.  This works on two
/// classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events — keys drop out on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence,
///   which is shorter than the OS repeat interval, so an actively held key
///   never lapses.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEventKind};

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  The OS key-repeat rate is ≥ 15 Hz, so a window of
/// 4 frames at 60 FPS is always refreshed before expiry.
pub const HOLD_WINDOW: u64 = 4;

/// What the player is asking for this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Continuous key-held state, sampled once per tick.
#[derive(Debug, Default)]
pub struct InputSampler {
    key_frame: HashMap<KeyCode, u64>,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event observed on `frame`.
    pub fn record(&mut self, code: KeyCode, kind: KeyEventKind, frame: u64) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&code);
            }
        }
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    /// Collapse the held-key map into this frame's intent.
    pub fn sample(&self, frame: u64) -> Intent {
        let left = self.is_held(KeyCode::Left, frame)
            || self.is_held(KeyCode::Char('a'), frame)
            || self.is_held(KeyCode::Char('A'), frame);
        let right = self.is_held(KeyCode::Right, frame)
            || self.is_held(KeyCode::Char('d'), frame)
            || self.is_held(KeyCode::Char('D'), frame);
        let jump = self.is_held(KeyCode::Up, frame)
            || self.is_held(KeyCode::Char('w'), frame)
            || self.is_held(KeyCode::Char('W'), frame)
            || self.is_held(KeyCode::Char(' '), frame);
        Intent { left, right, jump }
    }
}
