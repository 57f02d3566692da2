//! Voxel-to-square rasterization.
//!
//! Each voxel becomes one screen-aligned square. Its center is the projected
//! voxel position. Its side is twice the screen-space X distance between that
//! point and a second point offset half a voxel along local X. Squares are
//! emitted in model storage order with no depth sorting, so later voxels
//! paint over earlier ones.

use glam::{DMat4, DVec3};
use starship_core::constants::VOXEL_HALF_EXTENT;
use starship_core::VoxelModel;

use crate::camera::Camera;
use crate::target::{DrawCommand, DrawTarget, ScreenRect};

/// Per-call counts, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    /// Squares emitted to the target.
    pub drawn: u32,
    /// Voxels skipped (behind the eye or depth outside (0, 1)).
    pub culled: u32,
}

impl std::ops::AddAssign for RasterStats {
    fn add_assign(&mut self, other: Self) {
        self.drawn += other.drawn;
        self.culled += other.culled;
    }
}

/// Draw every voxel of `model`, placed by `model_matrix`, as seen by `camera`.
///
/// A voxel is skipped when its center is not in front of the camera, when
/// its NDC depth is outside the open interval (0, 1), or when the size probe
/// point is not in front of the camera. Skipping never affects other voxels.
pub fn rasterize_model(
    model: &VoxelModel,
    model_matrix: &DMat4,
    camera: &Camera,
    target: &mut dyn DrawTarget,
) -> RasterStats {
    let mut stats = RasterStats::default();
    let (width, height) = target.size();
    if width == 0 || height == 0 {
        stats.culled = model.len() as u32;
        return stats;
    }

    let view_proj = camera.view_projection(width, height);
    let probe_offset = DVec3::new(VOXEL_HALF_EXTENT, 0.0, 0.0);

    for voxel in model {
        let local = voxel.local_position();

        let world = model_matrix.transform_point3(local);
        let Some(center) = camera.project(&view_proj, world, width, height) else {
            stats.culled += 1;
            continue;
        };
        // NaN depth fails this test too
        if !(center.depth > 0.0 && center.depth < 1.0) {
            stats.culled += 1;
            continue;
        }

        let probe_world = model_matrix.transform_point3(local + probe_offset);
        let Some(probe) = camera.project(&view_proj, probe_world, width, height) else {
            stats.culled += 1;
            continue;
        };

        let size = (probe.x - center.x).abs() * 2.0;
        target.fill_rect(&DrawCommand {
            rect: ScreenRect::centered_square(center.x, center.y, size),
            color: voxel.color,
        });
        stats.drawn += 1;
    }

    stats
}
