use glam::{DMat4, DVec3, DVec4};
use starship_core::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, PITCH_LIMIT};

/// A point projected into the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Pixels from the left edge.
    pub x: f64,
    /// Pixels from the top edge.
    pub y: f64,
    /// NDC depth, -1 at the near plane and 1 at the far plane.
    pub depth: f64,
}

/// Free-flying perspective camera driven by Euler angles.
///
/// At zero yaw and pitch the camera looks down +Z with +Y up.
/// Pitch is clamped by `rotate` only; yaw and roll accumulate without
/// wrapping, so callers must not assume they stay within [-PI, PI].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: DVec3,
    pitch: f64,
    yaw: f64,
    roll: f64,
    fov_y_rad: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: DVec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            fov_y_rad: CAMERA_FOV_Y_DEG.to_radians(),
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    pub fn fov_y_rad(&self) -> f64 {
        self.fov_y_rad
    }

    /// Assign orientation directly. No clamping.
    pub fn set_rotation(&mut self, pitch: f64, yaw: f64, roll: f64) {
        self.pitch = pitch;
        self.yaw = yaw;
        self.roll = roll;
    }

    /// Turn to face `target`. Roll is always reset to zero.
    ///
    /// If `target` coincides with the camera position there is no direction
    /// to face, and the current orientation is left untouched.
    pub fn look_at(&mut self, target: DVec3) {
        let Some(dir) = (target - self.position).try_normalize() else {
            log::trace!(
                "look_at target {target} has no direction from {}; keeping orientation",
                self.position
            );
            return;
        };

        self.yaw = dir.x.atan2(dir.z);
        self.pitch = (-dir.y).clamp(-1.0, 1.0).asin();
        self.roll = 0.0;
    }

    /// World-to-eye transform: undo the camera's rotation (X, then Y, then Z)
    /// and translation.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::from_rotation_x(-self.pitch)
            * DMat4::from_rotation_y(-self.yaw)
            * DMat4::from_rotation_z(-self.roll)
            * DMat4::from_translation(-self.position)
    }

    /// Symmetric perspective projection with NDC depth in [-1, 1].
    ///
    /// The eye looks down +Z, so the GL right-handed matrix is applied after
    /// mirroring Z.
    pub fn projection_matrix(&self, width: u32, height: u32) -> DMat4 {
        let aspect = width as f64 / height as f64;
        DMat4::perspective_rh_gl(self.fov_y_rad, aspect, CAMERA_NEAR, CAMERA_FAR)
            * DMat4::from_scale(DVec3::new(1.0, 1.0, -1.0))
    }

    pub fn view_projection(&self, width: u32, height: u32) -> DMat4 {
        self.projection_matrix(width, height) * self.view_matrix()
    }

    /// Project a world-space point into a `width` x `height` viewport with
    /// the origin at the top-left.
    ///
    /// Returns `None` when the point is behind or on the eye plane
    /// (clip w <= 0) or the viewport has no area. Depth is reported as raw
    /// NDC z and is not range-checked here.
    pub fn world_to_screen(&self, world: DVec3, width: u32, height: u32) -> Option<ScreenPoint> {
        if width == 0 || height == 0 {
            return None;
        }
        self.project(&self.view_projection(width, height), world, width, height)
    }

    /// Same as `world_to_screen`, reusing a precomputed view-projection matrix.
    pub(crate) fn project(
        &self,
        view_proj: &DMat4,
        world: DVec3,
        width: u32,
        height: u32,
    ) -> Option<ScreenPoint> {
        let clip = *view_proj * DVec4::new(world.x, world.y, world.z, 1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * width as f64,
            y: (1.0 - ndc.y) * 0.5 * height as f64,
            depth: ndc.z,
        })
    }

    /// Move along the view direction implied by yaw and pitch. Roll is ignored.
    pub fn move_forward(&mut self, distance: f64) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.position += DVec3::new(sin_yaw * cos_pitch, -sin_pitch, cos_yaw * cos_pitch) * distance;
    }

    /// Strafe in the horizontal plane.
    pub fn move_right(&mut self, distance: f64) {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.position += DVec3::new(cos_yaw, 0.0, -sin_yaw) * distance;
    }

    pub fn move_up(&mut self, distance: f64) {
        self.position.y += distance;
    }

    /// Add to all three angles, then clamp pitch to [-PI/2, PI/2].
    pub fn rotate(&mut self, delta_pitch: f64, delta_yaw: f64, delta_roll: f64) {
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw += delta_yaw;
        self.roll += delta_roll;
    }
}
