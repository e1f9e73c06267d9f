// Particle-field tuning constants shared by the simulation core and the web frontend.

// Device tiers
pub const COMPACT_WIDTH_THRESHOLD: f32 = 768.0; // viewports narrower than this are compact

pub const COMPACT_PARTICLE_COUNT: usize = 30;
pub const COMPACT_CONNECTION_DISTANCE: f32 = 100.0;
pub const COMPACT_POINTER_DISTANCE: f32 = 120.0;

pub const STANDARD_PARTICLE_COUNT: usize = 90;
pub const STANDARD_CONNECTION_DISTANCE: f32 = 150.0;
pub const STANDARD_POINTER_DISTANCE: f32 = 200.0;

// Particle spawn ranges
pub const SPAWN_SPEED_MAX: f32 = 0.25; // per-axis velocity is drawn from [-max, max]
pub const RADIUS_MIN: f32 = 1.5;
pub const RADIUS_SPAN: f32 = 2.0; // radius in [RADIUS_MIN, RADIUS_MIN + RADIUS_SPAN]
pub const ACCENT_B_THRESHOLD: f32 = 0.6; // uniform draw above this picks accent B (~40%)

// Pointer attraction
pub const ATTRACTION_FACTOR: f32 = 0.02; // fraction of the pointer delta applied per tick
pub const ATTRACTION_DEAD_ZONE: f32 = 50.0; // no nudge when closer than this

// Stroke and fill styling
pub const PARTICLE_EDGE_MAX_ALPHA: f32 = 0.2;
pub const POINTER_EDGE_MAX_ALPHA: f32 = 0.5;
pub const PARTICLE_EDGE_WIDTH: f32 = 1.0;
pub const POINTER_EDGE_WIDTH: f32 = 1.5;
pub const PARTICLE_FILL_ALPHA: f32 = 0.8;

// Palette
pub const ACCENT_A_RGB: [u8; 3] = [82, 39, 255]; // purple
pub const ACCENT_B_RGB: [u8; 3] = [0, 242, 255]; // cyan

// Input
pub const POINTER_SENTINEL: [f32; 2] = [-1000.0, -1000.0]; // off-canvas until real input arrives

// Frame budget diagnostics
pub const FRAME_BUDGET_MS: f64 = 16.0;
pub const BUDGET_LOG_INTERVAL_FRAMES: u64 = 300;

// Mounting
pub const DEFAULT_CANVAS_ID: &str = "particle-canvas";
