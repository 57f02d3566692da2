use starship_core::constants::VOXEL_RECORD_BYTES;
use starship_core::{Color, CoreError, Voxel, VoxelType};

/// One voxel as laid out on disk. 19 bytes, packed, host byte order.
///
/// Field order: x, y, z (i16), type code (u8), r, g, b, a (u8), health (f64).
/// The file format carries no version tag, so this layout must not change.
#[repr(C, packed)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VoxelRecord {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub kind: u8,
    pub color: [u8; 4],
    pub health: f64,
}

impl From<&Voxel> for VoxelRecord {
    fn from(v: &Voxel) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            kind: v.kind.code(),
            color: v.color.to_array(),
            health: v.health,
        }
    }
}

impl TryFrom<VoxelRecord> for Voxel {
    type Error = CoreError;

    fn try_from(record: VoxelRecord) -> Result<Self, Self::Error> {
        let color = record.color;
        let [r, g, b, a] = color;
        Ok(Voxel::new(
            record.x,
            record.y,
            record.z,
            VoxelType::try_from(record.kind)?,
            Color::new(r, g, b, a),
        )
        .with_health(record.health))
    }
}

const _: () = assert!(std::mem::size_of::<VoxelRecord>() == VOXEL_RECORD_BYTES);
