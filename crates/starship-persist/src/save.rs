use std::path::Path;

use starship_core::constants::{MODEL_HEADER_BYTES, VOXEL_RECORD_BYTES};
use starship_core::VoxelModel;

use crate::error::PersistError;
use crate::format::VoxelRecord;

/// Serialize a model into the voxel file format.
///
/// Layout: voxel count (u32) followed by one 19-byte record per voxel,
/// in storage order.
pub fn encode(model: &VoxelModel) -> Vec<u8> {
    let count = model.len() as u32;
    let mut output = Vec::with_capacity(MODEL_HEADER_BYTES + model.len() * VOXEL_RECORD_BYTES);

    output.extend_from_slice(bytemuck::bytes_of(&count));
    for voxel in model {
        output.extend_from_slice(bytemuck::bytes_of(&VoxelRecord::from(voxel)));
    }

    output
}

/// Write a model to disk, replacing any existing file.
pub fn save_model(model: &VoxelModel, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    let bytes = encode(model);
    std::fs::write(path, &bytes).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "Saved {} voxels ({} bytes) to {}",
        model.len(),
        bytes.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starship_core::{Color, Voxel, VoxelType};

    #[test]
    fn test_encode_empty_model() {
        let data = encode(&VoxelModel::new());
        assert_eq!(data, 0u32.to_ne_bytes().to_vec());
    }

    #[test]
    fn test_encode_layout() {
        let mut model = VoxelModel::new();
        model.add_voxel(Voxel::new(1, -2, 3, VoxelType::Engine, Color::new(9, 8, 7, 6)));
        model.add_voxel(Voxel::new(4, 5, 6, VoxelType::Hull, Color::WHITE).with_health(0.5));

        let data = encode(&model);
        assert_eq!(data.len(), 4 + 2 * 19);
        assert_eq!(&data[0..4], &2u32.to_ne_bytes());

        // First record
        assert_eq!(&data[4..6], &1i16.to_ne_bytes());
        assert_eq!(&data[6..8], &(-2i16).to_ne_bytes());
        assert_eq!(&data[8..10], &3i16.to_ne_bytes());
        assert_eq!(data[10], VoxelType::Engine.code());
        assert_eq!(&data[11..15], &[9, 8, 7, 6]);
        assert_eq!(&data[15..23], &1.0f64.to_ne_bytes());

        // Second record starts right after, no padding
        assert_eq!(&data[23..25], &4i16.to_ne_bytes());
        assert_eq!(&data[34..42], &0.5f64.to_ne_bytes());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("no-such-dir").join("ship.bin");
        let result = save_model(&VoxelModel::new(), &path);
        assert!(matches!(result, Err(PersistError::Io { .. })));
    }
}
