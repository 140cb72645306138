/// Unique identifier for an actor within a world.
/// Ids are assigned by the world on insertion and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u32);

/// Type tag carried by every actor, used to filter collision queries.
/// Games declare their tags as constants:
///
/// ```
/// use footlight::Tag;
/// const BALL: Tag = Tag("ball");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub &'static str);

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A small numeric message from actor code to the owning [`Game`].
///
/// Actors push these into the frame context; the loop routes them to
/// [`Game::on_event`] after the update pass. `kind` identifies the event,
/// `a` and `b` carry arbitrary payload.
///
/// [`Game`]: crate::Game
/// [`Game::on_event`]: crate::Game::on_event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameEvent {
    pub kind: u32,
    pub a: f32,
    pub b: f32,
}

impl GameEvent {
    /// Create an event with no payload.
    pub fn new(kind: u32) -> Self {
        Self { kind, a: 0.0, b: 0.0 }
    }

    /// Create an event carrying two payload values.
    pub fn with(kind: u32, a: f32, b: f32) -> Self {
        Self { kind, a, b }
    }
}
