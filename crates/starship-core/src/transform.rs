use glam::{DMat4, DVec3};

/// Placement of an entity in the world: translation, Euler rotation
/// (radians, applied X then Y then Z in local space) and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DVec3,
    pub scale: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: DVec3) {
        self.rotation = rotation;
    }

    pub fn scale(&self) -> DVec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: DVec3) {
        self.scale = scale;
    }

    /// translate * rotX * rotY * rotZ * scale
    pub fn model_matrix(&self) -> DMat4 {
        DMat4::from_translation(self.position)
            * DMat4::from_rotation_x(self.rotation.x)
            * DMat4::from_rotation_y(self.rotation.y)
            * DMat4::from_rotation_z(self.rotation.z)
            * DMat4::from_scale(self.scale)
    }
}
