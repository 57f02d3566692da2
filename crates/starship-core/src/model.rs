use glam::I16Vec3;

use crate::types::Voxel;

/// Axis-aligned bounds of a model's voxel coordinates (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min: I16Vec3,
    pub max: I16Vec3,
}

/// Insertion-ordered collection of non-empty voxels forming one object.
///
/// Order is the draw order: voxels added later paint over earlier ones.
/// Coordinates are not required to be unique. Lookups and removals scan
/// linearly, which is fine for ships of a few thousand voxels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoxelModel {
    voxels: Vec<Voxel>,
}

impl VoxelModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            voxels: Vec::with_capacity(capacity),
        }
    }

    /// Append a voxel. Empty voxels (type Empty or health <= 0) are dropped.
    pub fn add_voxel(&mut self, voxel: Voxel) {
        if !voxel.is_empty() {
            self.voxels.push(voxel);
        }
    }

    /// Remove every voxel at the given coordinate.
    pub fn remove_voxel(&mut self, x: i16, y: i16, z: i16) {
        self.voxels.retain(|v| !v.is_at(x, y, z));
    }

    /// First voxel stored at the given coordinate.
    pub fn get_voxel(&self, x: i16, y: i16, z: i16) -> Option<&Voxel> {
        self.voxels.iter().find(|v| v.is_at(x, y, z))
    }

    /// Component-wise min/max over stored coordinates.
    /// An empty model reports a degenerate (0,0,0)-(0,0,0) box.
    pub fn bounds(&self) -> Bounds {
        let Some(first) = self.voxels.first() else {
            return Bounds::default();
        };

        self.voxels.iter().fold(
            Bounds {
                min: first.position(),
                max: first.position(),
            },
            |b, v| Bounds {
                min: b.min.min(v.position()),
                max: b.max.max(v.position()),
            },
        )
    }

    pub fn voxels(&self) -> &[Voxel] {
        &self.voxels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Voxel> {
        self.voxels.iter()
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    pub fn clear(&mut self) {
        self.voxels.clear();
    }
}

impl<'a> IntoIterator for &'a VoxelModel {
    type Item = &'a Voxel;
    type IntoIter = std::slice::Iter<'a, Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.iter()
    }
}
