use starship_core::{Transform, VoxelModel};

use crate::camera::Camera;
use crate::raster::{rasterize_model, RasterStats};
use crate::target::DrawTarget;

/// Something that lives in the scene, advances over time and can draw itself.
pub trait Entity {
    fn transform(&self) -> &Transform;

    fn transform_mut(&mut self) -> &mut Transform;

    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f64);

    fn draw(&self, camera: &Camera, target: &mut dyn DrawTarget) -> RasterStats;
}

/// A voxel ship placed in the world.
///
/// The ship borrows its model, so the model must outlive every ship that
/// renders it. Several ships may share one model.
pub struct Ship<'a> {
    model: &'a VoxelModel,
    transform: Transform,
    /// Rotation speed about the ship's Y axis, radians per second.
    spin: f64,
}

impl<'a> Ship<'a> {
    pub fn new(model: &'a VoxelModel) -> Self {
        Self {
            model,
            transform: Transform::default(),
            spin: 0.0,
        }
    }

    pub fn with_spin(mut self, spin: f64) -> Self {
        self.spin = spin;
        self
    }

    pub fn model(&self) -> &'a VoxelModel {
        self.model
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }
}

impl Entity for Ship<'_> {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn update(&mut self, dt: f64) {
        self.transform.rotation.y += self.spin * dt;
    }

    fn draw(&self, camera: &Camera, target: &mut dyn DrawTarget) -> RasterStats {
        rasterize_model(self.model, &self.transform.model_matrix(), camera, target)
    }
}
