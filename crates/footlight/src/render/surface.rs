use crate::api::types::Color;

/// The rendering collaborator. The engine never rasterizes anything
/// itself; worlds and actors describe a frame through these calls and an
/// adapter over some platform toolkit carries them out.
///
/// Call pattern per frame: one `clear`, any number of `fill_rect` /
/// `draw_text` in draw order (later calls paint on top), one `present`.
pub trait Surface {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        size: u32,
        color: Color,
        background: Color,
    );

    fn present(&mut self);
}
