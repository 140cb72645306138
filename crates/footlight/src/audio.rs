use std::path::Path;

use crate::error::EngineError;

/// The audio collaborator. Sounds are registered under string names at
/// startup and addressed by name afterwards; playback calls with an
/// unknown name are no-ops, not errors, so a typo in an asset name never
/// crashes a game. Load failures are startup errors.
pub trait AudioDevice {
    /// Register a sound under `name`. Fails if the asset cannot be read.
    fn load(&mut self, name: &str, path: &Path) -> Result<(), EngineError>;

    /// Play a loaded sound, optionally looping until stopped.
    fn play(&mut self, name: &str, looped: bool);

    /// Stop a playing sound.
    fn stop(&mut self, name: &str);

    /// Set the volume of a loaded sound, clamped to `0.0..=1.0`.
    fn set_volume(&mut self, name: &str, volume: f32);
}
