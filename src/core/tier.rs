use crate::constants::*;

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn tier(&self) -> Tier {
        Tier::for_width(self.width)
    }
}

/// Device-capability bucket chosen from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Compact,
    Standard,
}

impl Tier {
    #[inline]
    pub fn for_width(width: f32) -> Self {
        if width < COMPACT_WIDTH_THRESHOLD {
            Tier::Compact
        } else {
            Tier::Standard
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Compact => "compact",
            Tier::Standard => "standard",
        }
    }

    pub fn config(self) -> SimulationConfig {
        match self {
            Tier::Compact => SimulationConfig {
                particle_count: COMPACT_PARTICLE_COUNT,
                connection_distance: COMPACT_CONNECTION_DISTANCE,
                pointer_influence_distance: COMPACT_POINTER_DISTANCE,
            },
            Tier::Standard => SimulationConfig {
                particle_count: STANDARD_PARTICLE_COUNT,
                connection_distance: STANDARD_CONNECTION_DISTANCE,
                pointer_influence_distance: STANDARD_POINTER_DISTANCE,
            },
        }
    }
}

/// Per-tier simulation parameters. Always derived as a whole from a [`Tier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub connection_distance: f32,
    pub pointer_influence_distance: f32,
}

/// Tier lookup used at mount and on every resize.
#[inline]
pub fn config_for_width(width: f32) -> SimulationConfig {
    Tier::for_width(width).config()
}
