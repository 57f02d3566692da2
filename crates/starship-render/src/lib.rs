pub mod camera;
pub mod entity;
pub mod framebuffer;
pub mod raster;
pub mod target;

pub use camera::{Camera, ScreenPoint};
pub use entity::{Entity, Ship};
pub use framebuffer::{Framebuffer, FramebufferError};
pub use raster::{rasterize_model, RasterStats};
pub use target::{DrawCommand, DrawList, DrawTarget, ScreenRect};
