// Surface double that records every drawing call in order.

use crate::core::surface::Surface;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Resize(f32, f32),
    Clear(f32, f32),
    Line {
        from: Vec2,
        to: Vec2,
        rgb: [u8; 3],
        alpha: f32,
        width: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        rgb: [u8; 3],
        alpha: f32,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn lines(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Line { .. }))
            .collect()
    }

    pub fn lines_with_width(&self, width: f32) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Line { width: w, .. } if *w == width))
            .count()
    }

    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Circle { .. }))
            .count()
    }

    pub fn resizes(&self) -> Vec<(f32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Resize(w, h) => Some((*w, *h)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.calls.push(Call::Resize(width, height));
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(Call::Clear(width, height));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, rgb: [u8; 3], alpha: f32, line_width: f32) {
        self.calls.push(Call::Line {
            from,
            to,
            rgb,
            alpha,
            width: line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.calls.push(Call::Circle {
            center,
            radius,
            rgb,
            alpha,
        });
    }
}
