use crate::constants::*;
use crate::core::particle::{attract, ColorId, Particle};
use crate::core::surface::Surface;
use crate::core::tier::SimulationConfig;
use glam::Vec2;

/// Stroke opacity for an edge of length `dist`, fading linearly to zero at `threshold`.
///
/// Returns `None` at or beyond the threshold (the boundary is exclusive).
#[inline]
pub fn edge_opacity(dist: f32, threshold: f32, max_alpha: f32) -> Option<f32> {
    (dist < threshold).then(|| max_alpha * (1.0 - dist / threshold))
}

/// Draw particle-particle and particle-pointer edges for one frame.
///
/// Edges are emitted in particle-index order. A particle within pointer range also gets
/// the attraction nudge here, after its own edges are drawn; the dot drawn afterwards
/// shows the nudged position.
pub fn render_connections<S: Surface + ?Sized>(
    particles: &mut [Particle],
    pointer: Vec2,
    config: &SimulationConfig,
    surface: &mut S,
) {
    for i in 0..particles.len() {
        let p = particles[i];

        for other in &particles[i + 1..] {
            let dist = p.pos.distance(other.pos);
            if let Some(alpha) =
                edge_opacity(dist, config.connection_distance, PARTICLE_EDGE_MAX_ALPHA)
            {
                surface.stroke_line(p.pos, other.pos, p.color.rgb(), alpha, PARTICLE_EDGE_WIDTH);
            }
        }

        let dist = p.pos.distance(pointer);
        if let Some(alpha) = edge_opacity(
            dist,
            config.pointer_influence_distance,
            POINTER_EDGE_MAX_ALPHA,
        ) {
            surface.stroke_line(
                p.pos,
                pointer,
                ColorId::AccentB.rgb(),
                alpha,
                POINTER_EDGE_WIDTH,
            );
            particles[i] = attract(p, pointer, config.pointer_influence_distance);
        }
    }
}
