//! Frame-scoped keyboard state machine.
//!
//! Per key the state tracks: currently down, released this frame, the
//! frame of the last *accepted* press, and an optional cooldown in frames.
//! The loop calls [`InputState::advance`] once per frame boundary before
//! draining platform events; actors query during the update pass.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::input::keys::Key;

/// Keyboard state for the current frame, owned by the game loop and handed
/// to actors through the frame context.
pub struct InputState {
    down: HashSet<Key>,
    released: HashSet<Key>,
    /// Keys whose edge press has already been reported and not yet released.
    consumed: HashSet<Key>,
    /// Frame index of the last accepted press, per key. Cooldowns count
    /// from accepted presses, not raw ones.
    last_accepted: HashMap<Key, u64>,
    cooldowns: HashMap<Key, u64>,
    frame: u64,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            down: HashSet::new(),
            released: HashSet::new(),
            consumed: HashSet::new(),
            last_accepted: HashMap::new(),
            cooldowns: HashMap::new(),
            frame: 0,
        }
    }

    /// Current frame index.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Install or replace a cooldown for a key, in frames. A cooldown of C
    /// means at least C frames must elapse between two accepted presses.
    pub fn set_cooldown(&mut self, key: Key, frames: u64) {
        self.cooldowns.insert(key, frames);
    }

    /// Route a raw key-down event. Unmapped codes are ignored.
    pub fn key_down(&mut self, code: u32) {
        match Key::from_code(code) {
            Some(key) => {
                self.down.insert(key);
            }
            None => debug!("ignoring unmapped key code {code}"),
        }
    }

    /// Route a raw key-up event. Unmapped codes are ignored.
    pub fn key_up(&mut self, code: u32) {
        if let Some(key) = Key::from_code(code) {
            self.down.remove(&key);
            self.released.insert(key);
        }
    }

    /// Frame boundary bookkeeping. For every key released since the last
    /// boundary: clear its edge-consumed flag, and clear its last-accepted
    /// entry once the cooldown has elapsed (an early release keeps the
    /// cooldown armed). Then bump the frame counter.
    pub fn advance(&mut self) {
        let released: Vec<Key> = self.released.drain().collect();
        for key in released {
            self.consumed.remove(&key);
            if let Some(&accepted) = self.last_accepted.get(&key) {
                let cooldown = self.cooldowns.get(&key).copied().unwrap_or(0);
                if self.frame - accepted >= cooldown {
                    self.last_accepted.remove(&key);
                }
            }
        }
        self.frame += 1;
    }

    /// Level-sensing query: true while the key is held, gated by its
    /// cooldown. A successful query records the current frame as the new
    /// accepted press; a cooldown-blocked one records nothing, so the
    /// press is delayed rather than lost.
    pub fn is_key_pressed(&mut self, key: Key) -> bool {
        if !self.down.contains(&key) {
            return false;
        }
        if let Some(&accepted) = self.last_accepted.get(&key) {
            let cooldown = self.cooldowns.get(&key).copied().unwrap_or(0);
            if self.frame - accepted < cooldown {
                return false;
            }
        }
        self.last_accepted.insert(key, self.frame);
        true
    }

    /// Edge-sensing query: true exactly once per physical press-to-release
    /// cycle, no matter how many frames the key is held.
    pub fn was_key_just_pressed(&mut self, key: Key) -> bool {
        self.down.contains(&key) && self.consumed.insert(key)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: u32 = 32;

    #[test]
    fn unmapped_codes_are_ignored() {
        let mut input = InputState::new();
        input.key_down(9999);
        input.key_up(9999);
        assert!(!input.is_key_pressed(Key::Space));
    }

    #[test]
    fn level_query_reports_while_held() {
        let mut input = InputState::new();
        input.key_down(SPACE);
        assert!(input.is_key_pressed(Key::Space));
        input.advance();
        assert!(input.is_key_pressed(Key::Space));
        input.key_up(SPACE);
        assert!(!input.is_key_pressed(Key::Space));
    }

    #[test]
    fn edge_query_fires_once_per_press() {
        let mut input = InputState::new();
        input.key_down(SPACE);
        assert!(input.was_key_just_pressed(Key::Space));
        // Held for 100 more frames: never fires again.
        for _ in 0..100 {
            input.advance();
            assert!(!input.was_key_just_pressed(Key::Space));
        }
        // Release, then press again next frame: fires exactly once more.
        input.key_up(SPACE);
        input.advance();
        input.key_down(SPACE);
        assert!(input.was_key_just_pressed(Key::Space));
        assert!(!input.was_key_just_pressed(Key::Space));
    }

    #[test]
    fn cooldown_gates_held_key() {
        let mut input = InputState::new();
        input.set_cooldown(Key::Space, 5);
        input.key_down(SPACE);
        assert!(input.is_key_pressed(Key::Space)); // accepted at frame F

        input.advance(); // F + 1
        assert!(!input.is_key_pressed(Key::Space));
        for _ in 0..3 {
            input.advance();
            assert!(!input.is_key_pressed(Key::Space));
        }
        input.advance(); // F + 5
        assert!(input.is_key_pressed(Key::Space));
    }

    #[test]
    fn cooldown_survives_early_release() {
        let mut input = InputState::new();
        input.set_cooldown(Key::Space, 5);
        input.key_down(SPACE);
        assert!(input.is_key_pressed(Key::Space)); // accepted at frame 0

        // Release and re-press well inside the cooldown window.
        input.key_up(SPACE);
        input.advance(); // frame 1; cooldown not elapsed, bookkeeping kept
        input.key_down(SPACE);
        assert!(!input.is_key_pressed(Key::Space));

        for _ in 0..3 {
            input.advance();
            assert!(!input.is_key_pressed(Key::Space));
        }
        input.advance(); // frame 5
        assert!(input.is_key_pressed(Key::Space));
    }

    #[test]
    fn held_key_fires_every_cooldown_interval() {
        let mut input = InputState::new();
        input.set_cooldown(Key::Space, 30);
        input.key_down(SPACE);
        let mut accepted = 0;
        for _ in 0..70 {
            if input.is_key_pressed(Key::Space) {
                accepted += 1;
            }
            input.advance();
        }
        assert_eq!(accepted, 3); // frames 0, 30 and 60
    }
}
