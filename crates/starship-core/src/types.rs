use glam::{DVec3, I16Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::FULL_HEALTH;
use crate::error::CoreError;

/// Role of a voxel within a ship. Stored as a u8 code on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum VoxelType {
    #[default]
    Empty = 0,
    Hull = 1,
    Engine = 2,
    Thruster = 3,
    Weapon = 4,
    Armor = 5,
    System = 6,
}

impl VoxelType {
    /// On-disk code for this type.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for VoxelType {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Hull),
            2 => Ok(Self::Engine),
            3 => Ok(Self::Thruster),
            4 => Ok(Self::Weapon),
            5 => Ok(Self::Armor),
            6 => Ok(Self::System),
            other => Err(CoreError::UnknownVoxelType(other)),
        }
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque_alpha")]
    pub a: u8,
}

fn opaque_alpha() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A single grid-aligned voxel in model-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voxel {
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub kind: VoxelType,
    pub color: Color,
    /// 0.0 to 1.0. A voxel at or below zero health counts as empty.
    pub health: f64,
}

impl Voxel {
    /// Create a voxel at full health.
    pub fn new(x: i16, y: i16, z: i16, kind: VoxelType, color: Color) -> Self {
        Self {
            x,
            y,
            z,
            kind,
            color,
            health: FULL_HEALTH,
        }
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    /// Empty voxels are never stored in a model.
    pub fn is_empty(&self) -> bool {
        self.kind == VoxelType::Empty || self.health <= 0.0
    }

    pub fn position(&self) -> I16Vec3 {
        I16Vec3::new(self.x, self.y, self.z)
    }

    /// Grid position as a real-valued model-space point.
    pub fn local_position(&self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64)
    }

    pub fn is_at(&self, x: i16, y: i16, z: i16) -> bool {
        self.x == x && self.y == y && self.z == z
    }
}

impl Default for Voxel {
    fn default() -> Self {
        Self::new(0, 0, 0, VoxelType::Empty, Color::BLACK)
    }
}
