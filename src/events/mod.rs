pub mod pointer;
pub mod resize;

pub use pointer::{wire_pointer_tracking, PointerWiring};
pub use resize::wire_resize;
