use std::path::Path;

use starship_core::constants::{MODEL_HEADER_BYTES, VOXEL_RECORD_BYTES};
use starship_core::{Voxel, VoxelModel};

use crate::error::PersistError;
use crate::format::VoxelRecord;

/// Parse a model from raw file bytes.
///
/// The input must hold the full count header and every declared record.
/// Records that decode to empty voxels are dropped the same way
/// `VoxelModel::add_voxel` drops them, and records with an unknown type code
/// are skipped with a warning. Bytes past the last record are ignored.
pub fn decode(bytes: &[u8]) -> Result<VoxelModel, PersistError> {
    if bytes.len() < MODEL_HEADER_BYTES {
        return Err(PersistError::TruncatedFile {
            expected: MODEL_HEADER_BYTES,
            actual: bytes.len(),
        });
    }

    let count: u32 = bytemuck::pod_read_unaligned(&bytes[..MODEL_HEADER_BYTES]);
    let count = count as usize;

    // Validate the whole record table before touching it
    let table_end = count
        .checked_mul(VOXEL_RECORD_BYTES)
        .and_then(|size| size.checked_add(MODEL_HEADER_BYTES))
        .unwrap_or(usize::MAX);
    if bytes.len() < table_end {
        return Err(PersistError::TruncatedFile {
            expected: table_end,
            actual: bytes.len(),
        });
    }

    let records: &[VoxelRecord] = bytemuck::cast_slice(&bytes[MODEL_HEADER_BYTES..table_end]);

    let mut model = VoxelModel::with_capacity(count);
    let mut unreadable = 0;
    for (index, record) in records.iter().enumerate() {
        match Voxel::try_from(*record) {
            Ok(voxel) => model.add_voxel(voxel),
            Err(e) => {
                log::warn!("Skipping voxel record {index}: {e}");
                unreadable += 1;
            }
        }
    }

    let dropped = count - unreadable - model.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} empty voxel records while decoding");
    }

    Ok(model)
}

/// Read and parse a model file from disk.
pub fn load_model(path: impl AsRef<Path>) -> Result<VoxelModel, PersistError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let model = decode(&bytes)?;
    log::debug!("Loaded {} voxels from {}", model.len(), path.display());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::{self, encode};
    use starship_core::{Color, VoxelType};

    fn sample_model() -> VoxelModel {
        let mut model = VoxelModel::new();
        model.add_voxel(Voxel::new(0, 0, 0, VoxelType::Hull, Color::WHITE));
        model.add_voxel(Voxel::new(5, 5, 5, VoxelType::Hull, Color::rgb(255, 0, 0)));
        model.add_voxel(
            Voxel::new(-32768, 32767, -1, VoxelType::System, Color::new(1, 2, 3, 128))
                .with_health(0.125),
        );
        // Duplicate coordinate, different payload
        model.add_voxel(Voxel::new(5, 5, 5, VoxelType::Thruster, Color::rgb(0, 0, 255)));
        model
    }

    #[test]
    fn test_save_load_roundtrip() {
        let model = sample_model();
        let loaded = decode(&encode(&model)).expect("decode should succeed");
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ship.bin");

        let model = sample_model();
        save::save_model(&model, &path).expect("save should succeed");
        let loaded = load_model(&path).expect("load should succeed");

        assert_eq!(loaded.voxels(), model.voxels());
    }

    #[test]
    fn test_load_empty_model() {
        let loaded = decode(&0u32.to_ne_bytes()).expect("decode should succeed");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_missing_file_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = load_model(dir.path().join("missing.bin"));
        assert!(matches!(result, Err(PersistError::Io { .. })));
    }

    #[test]
    fn test_truncated_mid_record_rejected() {
        // Declares 2 records but the second one is cut short
        let mut data = encode(&sample_model());
        data[0..4].copy_from_slice(&2u32.to_ne_bytes());
        data.truncate(4 + 19 + 10);

        let result = decode(&data);
        assert!(matches!(
            result,
            Err(PersistError::TruncatedFile {
                expected: 42,
                actual: 33
            })
        ));
    }

    #[test]
    fn test_file_too_small_for_header() {
        let result = decode(&[1, 0]);
        assert!(matches!(
            result,
            Err(PersistError::TruncatedFile {
                expected: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_huge_count_does_not_overflow() {
        let data = u32::MAX.to_ne_bytes();
        let result = decode(&data);
        assert!(matches!(result, Err(PersistError::TruncatedFile { .. })));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let model = sample_model();
        let mut data = encode(&model);
        data.extend_from_slice(&[0xAB; 7]);
        let loaded = decode(&data).expect("decode should succeed");
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_empty_records_dropped_on_load() {
        let live = Voxel::new(1, 1, 1, VoxelType::Hull, Color::WHITE);
        let dead = Voxel::new(2, 2, 2, VoxelType::Hull, Color::WHITE).with_health(0.0);
        let air = Voxel::new(3, 3, 3, VoxelType::Empty, Color::WHITE);

        let mut data = 3u32.to_ne_bytes().to_vec();
        for v in [&dead, &live, &air] {
            data.extend_from_slice(bytemuck::bytes_of(&VoxelRecord::from(v)));
        }

        let loaded = decode(&data).expect("decode should succeed");
        assert_eq!(loaded.voxels(), &[live]);
    }

    #[test]
    fn test_unknown_type_code_skipped() {
        let model = sample_model();
        let mut data = encode(&model);
        // Type byte of the second record
        data[4 + 19 + 6] = 99;

        let loaded = decode(&data).expect("decode should succeed");
        let mut expected = model.voxels().to_vec();
        expected.remove(1);
        assert_eq!(loaded.voxels(), expected.as_slice());
    }
}
