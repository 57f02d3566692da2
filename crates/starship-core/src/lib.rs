pub mod constants;
pub mod error;
pub mod model;
pub mod transform;
pub mod types;

pub use error::CoreError;
pub use model::{Bounds, VoxelModel};
pub use transform::Transform;
pub use types::{Color, Voxel, VoxelType};
