use glam::Vec2;

/// The drawing operations a tick needs from the host.
///
/// The browser implementation wraps a 2D canvas context; tests record calls instead.
pub trait Surface {
    /// Set the backing store size in pixels.
    fn resize(&mut self, width: f32, height: f32);
    fn clear(&mut self, width: f32, height: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, rgb: [u8; 3], alpha: f32, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
}
