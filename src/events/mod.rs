pub mod pointer;
pub mod resize;
pub mod scroll;

pub use pointer::wire_pointer_handlers;
pub use resize::wire_resize;
pub use scroll::{evaluate_scroll, wire_scroll, ScrollActivity};
