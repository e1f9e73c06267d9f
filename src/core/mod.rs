pub mod connections;
pub mod engine;
pub mod input;
pub mod particle;
pub mod surface;
pub mod tier;

pub use engine::FieldEngine;
pub use input::InputSlots;
pub use surface::Surface;
pub use tier::Viewport;
