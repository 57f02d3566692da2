//! Single source of truth for shared constants.
//! Camera optics, voxel sizing and file layout live here so the renderer,
//! the persistence layer and the tools agree on them.

/// Vertical field of view of the camera, in degrees.
pub const CAMERA_FOV_Y_DEG: f64 = 60.0;

/// Near clip plane distance (world units).
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clip plane distance (world units).
pub const CAMERA_FAR: f64 = 1000.0;

/// Pitch limit in radians. Pitch is clamped to [-PITCH_LIMIT, PITCH_LIMIT].
pub const PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_2;

/// Offset along local X used to measure a voxel's on-screen size.
/// The projected distance is doubled to get the square's side length.
pub const VOXEL_HALF_EXTENT: f64 = 0.5;

/// Health of a freshly built voxel.
pub const FULL_HEALTH: f64 = 1.0;

/// Size of the voxel count header in a model file.
pub const MODEL_HEADER_BYTES: usize = 4;

/// Size of one packed voxel record in a model file:
/// 3 x i16 position + u8 type + 4 x u8 color + f64 health.
pub const VOXEL_RECORD_BYTES: usize = 19;

/// Target frame rate of the host loop.
pub const TARGET_FPS: u32 = 60;
