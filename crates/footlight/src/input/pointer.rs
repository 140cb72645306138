/// Last-known pointer position and button state, mutated only by the
/// event bridge in the game loop.
pub struct PointerState {
    x: f32,
    y: f32,
    /// Buttons 1..=3 (left, middle, right).
    buttons: [bool; 3],
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            buttons: [false; 3],
        }
    }

    pub(crate) fn on_move(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub(crate) fn on_down(&mut self, button: u8, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        if let Some(slot) = self.slot(button) {
            self.buttons[slot] = true;
        }
    }

    pub(crate) fn on_up(&mut self, button: u8) {
        if let Some(slot) = self.slot(button) {
            self.buttons[slot] = false;
        }
    }

    fn slot(&self, button: u8) -> Option<usize> {
        (1..=3).contains(&button).then(|| button as usize - 1)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Whether a button is currently down. Unknown button ids report false.
    pub fn is_button_down(&self, button: u8) -> bool {
        self.slot(button).map(|s| self.buttons[s]).unwrap_or(false)
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
