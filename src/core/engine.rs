use crate::constants::PARTICLE_FILL_ALPHA;
use crate::core::connections::render_connections;
use crate::core::input::{InputSlots, PointerState};
use crate::core::particle::{self, Particle};
use crate::core::surface::Surface;
use crate::core::tier::{SimulationConfig, Tier, Viewport};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns all particle-field state for one mount.
///
/// The tick is the only reader and writer of the particle collection. Host callbacks
/// communicate through [`InputSlots`], which [`FieldEngine::frame`] drains at the start
/// of each tick.
pub struct FieldEngine<R: Rng> {
    viewport: Viewport,
    tier: Tier,
    config: SimulationConfig,
    particles: Vec<Particle>,
    rng: R,
    state: LoopState,
    frames: u64,
}

impl<R: Rng> FieldEngine<R> {
    /// Populate for `viewport` and enter the running state.
    pub fn new(viewport: Viewport, mut rng: R) -> Self {
        let tier = viewport.tier();
        let config = tier.config();
        let particles = particle::populate(&mut rng, viewport, config.particle_count);
        log::info!(
            "[field] start tier={} particles={} viewport={}x{}",
            tier.name(),
            particles.len(),
            viewport.width,
            viewport.height
        );
        Self {
            viewport,
            tier,
            config,
            particles,
            rng,
            state: LoopState::Running,
            frames: 0,
        }
    }

    /// Size the surface to the viewport, then populate and start.
    pub fn mount<S: Surface + ?Sized>(viewport: Viewport, rng: R, surface: &mut S) -> Self {
        surface.resize(viewport.width, viewport.height);
        Self::new(viewport, rng)
    }

    /// Full reinit: tier, config and a fresh population for the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        let tier = viewport.tier();
        if tier != self.tier {
            log::info!("[field] tier {} -> {}", self.tier.name(), tier.name());
        }
        self.viewport = viewport;
        self.tier = tier;
        self.config = tier.config();
        self.particles = particle::populate(&mut self.rng, viewport, self.config.particle_count);
    }

    /// One scheduled frame. Returns `false` once stopped, in which case nothing is touched.
    pub fn frame<S: Surface + ?Sized>(&mut self, slots: &mut InputSlots, surface: &mut S) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        if let Some(viewport) = slots.pending_viewport.take() {
            surface.resize(viewport.width, viewport.height);
            self.resize(viewport);
        }
        self.tick(slots.pointer, surface);
        true
    }

    /// Clear, integrate, draw edges, draw particles. Runs regardless of loop state.
    pub fn tick<S: Surface + ?Sized>(&mut self, pointer: PointerState, surface: &mut S) {
        surface.clear(self.viewport.width, self.viewport.height);

        let bounds = self.viewport;
        for p in self.particles.iter_mut() {
            *p = particle::update(*p, bounds);
        }

        render_connections(&mut self.particles, pointer.pos(), &self.config, surface);

        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, p.color.rgb(), PARTICLE_FILL_ALPHA);
        }
        self.frames += 1;
    }

    /// Terminal transition; later frames are no-ops.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            log::info!("[field] stopped after {} frames", self.frames);
            self.state = LoopState::Stopped;
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
