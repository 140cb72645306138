//! Headless collaborators: a draw-command-recording surface, a scripted
//! event source, a silent audio device and an immediate pacer. These back
//! the engine's own tests, the demo smoke binaries, and any host that
//! wants to drive games without a window.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

use crate::api::types::Color;
use crate::audio::AudioDevice;
use crate::core::time::FramePacer;
use crate::error::EngineError;
use crate::input::queue::{EventSource, PlatformEvent};
use crate::render::surface::Surface;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        size: u32,
        color: Color,
        background: Color,
    },
    Present,
}

/// A [`Surface`] that records every call instead of rasterizing.
///
/// Clones share the same command log, so a test can keep one handle while
/// the game loop owns the other.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    commands: Rc<RefCell<Vec<DrawCmd>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the commands recorded so far.
    pub fn commands(&self) -> Vec<DrawCmd> {
        self.commands.borrow().clone()
    }

    /// Commands recorded since the last `Clear` (the current frame).
    pub fn last_frame(&self) -> Vec<DrawCmd> {
        let commands = self.commands.borrow();
        let start = commands
            .iter()
            .rposition(|c| matches!(c, DrawCmd::Clear(_)))
            .unwrap_or(0);
        commands[start..].to_vec()
    }

    pub fn reset(&self) {
        self.commands.borrow_mut().clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.borrow_mut().push(DrawCmd::Clear(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.borrow_mut().push(DrawCmd::Rect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        size: u32,
        color: Color,
        background: Color,
    ) {
        self.commands.borrow_mut().push(DrawCmd::Text {
            x,
            y,
            text: text.to_string(),
            size,
            color,
            background,
        });
    }

    fn present(&mut self) {
        self.commands.borrow_mut().push(DrawCmd::Present);
    }
}

/// An [`EventSource`] that replays a pre-scripted batch of events per
/// frame. Once the script runs out it yields `Quit`, so a scripted
/// session always terminates.
pub struct ScriptedEvents {
    frames: VecDeque<Vec<PlatformEvent>>,
}

impl ScriptedEvents {
    pub fn new(frames: Vec<Vec<PlatformEvent>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// A script of `frames` empty event batches.
    pub fn idle(frames: usize) -> Self {
        Self::new(vec![Vec::new(); frames])
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<PlatformEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![PlatformEvent::Quit])
    }
}

/// An [`AudioDevice`] that accepts everything and plays nothing.
pub struct NullAudio;

impl AudioDevice for NullAudio {
    fn load(&mut self, _name: &str, _path: &Path) -> Result<(), EngineError> {
        Ok(())
    }

    fn play(&mut self, _name: &str, _looped: bool) {}

    fn stop(&mut self, _name: &str) {}

    fn set_volume(&mut self, _name: &str, _volume: f32) {}
}

/// A [`FramePacer`] that never blocks.
pub struct Immediate;

impl FramePacer for Immediate {
    fn wait(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_shares_its_log_across_clones() {
        let handle = RecordingSurface::new();
        let mut surface = handle.clone();
        surface.clear(Color::BLACK);
        surface.fill_rect(1.0, 2.0, 3.0, 4.0, Color::RED);
        surface.present();
        assert_eq!(
            handle.commands(),
            vec![
                DrawCmd::Clear(Color::BLACK),
                DrawCmd::Rect {
                    x: 1.0,
                    y: 2.0,
                    width: 3.0,
                    height: 4.0,
                    color: Color::RED
                },
                DrawCmd::Present,
            ]
        );
    }

    #[test]
    fn last_frame_starts_at_the_latest_clear() {
        let handle = RecordingSurface::new();
        let mut surface = handle.clone();
        surface.clear(Color::BLACK);
        surface.present();
        surface.clear(Color::BLACK);
        surface.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE);
        surface.present();
        assert_eq!(handle.last_frame().len(), 3);
    }

    #[test]
    fn exhausted_script_yields_quit() {
        let mut events = ScriptedEvents::new(vec![vec![PlatformEvent::KeyDown(32)]]);
        assert_eq!(events.poll(), vec![PlatformEvent::KeyDown(32)]);
        assert_eq!(events.poll(), vec![PlatformEvent::Quit]);
        assert_eq!(events.poll(), vec![PlatformEvent::Quit]);
    }
}
