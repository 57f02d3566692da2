use thiserror::Error;

/// Errors raised by core voxel types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown voxel type code {0}")]
    UnknownVoxelType(u8),
}
