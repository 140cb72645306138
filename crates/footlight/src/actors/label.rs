use crate::api::types::{Color, Tag};
use crate::core::actor::{Actor, ActorCtx};
use crate::core::body::Body;
use crate::render::surface::Surface;

/// Tag carried by every [`Label`].
pub const LABEL: Tag = Tag("footlight:label");

/// A built-in text actor for scores and messages. It has no behavior of
/// its own; games hold its id and call [`Label::set_text`].
pub struct Label {
    body: Body,
    text: String,
    font_size: u32,
    text_color: Color,
    background: Color,
}

impl Label {
    pub fn new(
        x: f32,
        y: f32,
        text: impl Into<String>,
        font_size: u32,
        text_color: Color,
        background: Color,
    ) -> Self {
        let text = text.into();
        let body = Body::new(x, y, extent(&text, font_size), font_size as f32, text_color);
        Self {
            body,
            text,
            font_size,
            text_color,
            background,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.body.size.x = extent(&self.text, self.font_size);
    }
}

/// Rough width of rendered text; the real extent is the text renderer's
/// business, this only keeps the body plausible for positioning.
fn extent(text: &str, font_size: u32) -> f32 {
    (text.chars().count().max(1) as f32) * font_size as f32 * 0.5
}

impl Actor for Label {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn tag(&self) -> Tag {
        LABEL
    }

    fn act(&mut self, _ctx: &mut ActorCtx<'_>) {}

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_text(
            self.body.pos.x,
            self.body.pos.y,
            &self.text,
            self.font_size,
            self.text_color,
            self.background,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::headless::{DrawCmd, RecordingSurface};

    #[test]
    fn draws_text_not_a_rectangle() {
        let label = Label::new(350.0, 20.0, "0 - 0", 30, Color::WHITE, Color::BLACK);
        let handle = RecordingSurface::new();
        let mut surface = handle.clone();
        label.draw(&mut surface);
        match &handle.commands()[0] {
            DrawCmd::Text { text, size, .. } => {
                assert_eq!(text, "0 - 0");
                assert_eq!(*size, 30);
            }
            other => panic!("expected a text command, got {other:?}"),
        }
    }

    #[test]
    fn set_text_updates_extent() {
        let mut label = Label::new(0.0, 0.0, "hi", 30, Color::WHITE, Color::BLACK);
        let narrow = label.body().size.x;
        label.set_text("a much longer message");
        assert!(label.body().size.x > narrow);
        assert_eq!(label.text(), "a much longer message");
    }
}
