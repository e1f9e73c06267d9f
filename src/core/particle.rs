use crate::constants::*;
use crate::core::tier::Viewport;
use glam::Vec2;
use rand::Rng;

/// Color identity fixed at spawn time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorId {
    AccentA,
    AccentB,
}

impl ColorId {
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ColorId::AccentA => ACCENT_A_RGB,
            ColorId::AccentB => ACCENT_B_RGB,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: ColorId,
}

/// Spawn a particle uniformly over the viewport with a slow random drift.
///
/// Degenerate (zero-sized) viewports are accepted; every particle then starts at the origin.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Viewport) -> Particle {
    let pos = Vec2::new(rng.gen::<f32>() * bounds.width, rng.gen::<f32>() * bounds.height);
    let vel = Vec2::new(
        (rng.gen::<f32>() - 0.5) * 2.0 * SPAWN_SPEED_MAX,
        (rng.gen::<f32>() - 0.5) * 2.0 * SPAWN_SPEED_MAX,
    );
    let radius = RADIUS_MIN + rng.gen::<f32>() * RADIUS_SPAN;
    let color = if rng.gen::<f32>() > ACCENT_B_THRESHOLD {
        ColorId::AccentB
    } else {
        ColorId::AccentA
    };
    Particle {
        pos,
        vel,
        radius,
        color,
    }
}

pub fn populate<R: Rng + ?Sized>(rng: &mut R, bounds: Viewport, count: usize) -> Vec<Particle> {
    (0..count).map(|_| spawn(rng, bounds)).collect()
}

/// One integration step: drift by the velocity, then reflect on any axis that left the bounds.
///
/// Positions are not clamped, so a particle may sit just outside for a frame after bouncing.
#[inline]
pub fn update(mut p: Particle, bounds: Viewport) -> Particle {
    p.pos += p.vel;
    if p.pos.x < 0.0 || p.pos.x > bounds.width {
        p.vel.x = -p.vel.x;
    }
    if p.pos.y < 0.0 || p.pos.y > bounds.height {
        p.vel.y = -p.vel.y;
    }
    p
}

/// Nudge a particle toward the pointer when it is inside the influence ring
/// but outside the dead zone around the pointer itself.
#[inline]
pub fn attract(mut p: Particle, pointer: Vec2, influence_distance: f32) -> Particle {
    let delta = p.pos - pointer;
    let dist = delta.length();
    if dist < influence_distance && dist > ATTRACTION_DEAD_ZONE {
        p.pos -= delta * ATTRACTION_FACTOR;
    }
    p
}
