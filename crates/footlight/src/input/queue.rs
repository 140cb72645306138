/// Platform events the engine understands. They carry no game semantics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// The host asked the game to close.
    Quit,
    /// A key went down (raw platform key code).
    KeyDown(u32),
    /// A key went up (raw platform key code).
    KeyUp(u32),
    /// The pointer moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A pointer button went down at world coordinates (x, y).
    PointerDown { button: u8, x: f32, y: f32 },
    /// A pointer button went up.
    PointerUp { button: u8 },
}

/// Source of platform events, polled once per frame by the game loop.
/// Implemented by windowing adapters and by the headless backend.
pub trait EventSource {
    /// All events that arrived since the previous poll.
    fn poll(&mut self) -> Vec<PlatformEvent>;
}

/// A plain buffered event queue. Hosts push events in; the loop drains
/// them each frame.
pub struct EventQueue {
    events: Vec<PlatformEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: PlatformEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for EventQueue {
    fn poll(&mut self) -> Vec<PlatformEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
