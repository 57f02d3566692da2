pub mod error;
pub mod format;
pub mod load;
pub mod save;

pub use error::PersistError;
pub use format::VoxelRecord;
pub use load::{decode, load_model};
pub use save::{encode, save_model};
