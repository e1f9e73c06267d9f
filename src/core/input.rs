use crate::constants::POINTER_SENTINEL;
use crate::core::tier::Viewport;
use glam::Vec2;

/// Last known pointer position in canvas-local pixels.
///
/// Starts at an off-canvas sentinel and keeps its last value once input stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: POINTER_SENTINEL[0],
            y: POINTER_SENTINEL[1],
        }
    }
}

impl PointerState {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Record a client-space event position relative to the canvas' on-screen top-left corner.
    #[inline]
    pub fn set_from_client(&mut self, client_x: f32, client_y: f32, left: f32, top: f32) {
        let local = client_to_canvas(Vec2::new(client_x, client_y), Vec2::new(left, top));
        self.x = local.x;
        self.y = local.y;
    }

    pub fn is_sentinel(&self) -> bool {
        self.x == POINTER_SENTINEL[0] && self.y == POINTER_SENTINEL[1]
    }
}

#[inline]
pub fn client_to_canvas(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

/// State written by host event callbacks and read by the tick.
///
/// Callbacks only ever touch these two slots; particle state belongs to the tick alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputSlots {
    pub pointer: PointerState,
    pub pending_viewport: Option<Viewport>,
}

impl InputSlots {
    /// Queue a resize; a burst of resize events collapses into the latest one.
    #[inline]
    pub fn request_resize(&mut self, viewport: Viewport) {
        self.pending_viewport = Some(viewport);
    }
}
