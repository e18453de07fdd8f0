pub mod color;
pub mod constants;
pub mod content;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod nebula;
pub mod particles;
pub mod planets;
pub mod scroll;
pub mod starfield;
pub mod state;
pub mod surface;

pub use color::Rgba;
pub use error::{PortfolioError, Result};
pub use frame::{FrameClock, FrameTime, RenderTick};
pub use state::{PageState, SectionId, Viewport};
pub use surface::{BlendMode, GradientStop, Surface2d};
