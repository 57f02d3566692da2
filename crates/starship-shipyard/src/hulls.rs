use starship_core::{Color, Voxel, VoxelModel, VoxelType};

/// Colors used by the reference starship.
pub mod palette {
    use starship_core::Color;

    pub const HULL: Color = Color::rgb(200, 200, 210);
    pub const DETAIL: Color = Color::rgb(180, 180, 190);
    pub const BUSSARD: Color = Color::rgb(255, 100, 100);
    pub const WARP_GRILL: Color = Color::rgb(100, 200, 255);
    pub const DEFLECTOR: Color = Color::rgb(120, 180, 255);
}

/// Dimensions of the reference starship, in voxels.
#[derive(Debug, Clone, Copy)]
pub struct StarshipLayout {
    pub saucer_radius: i32,
    pub saucer_thickness: i32,
    pub neck_length: i32,
    pub hull_length: i32,
    pub hull_radius: i32,
    pub pylon_length: i32,
    pub nacelle_length: i32,
    pub nacelle_radius: i32,
    pub nacelle_drop: i32,
}

impl Default for StarshipLayout {
    fn default() -> Self {
        Self {
            saucer_radius: 14,
            saucer_thickness: 3,
            neck_length: 5,
            hull_length: 20,
            hull_radius: 4,
            pylon_length: 12,
            nacelle_length: 18,
            nacelle_radius: 2,
            nacelle_drop: -10,
        }
    }
}

impl StarshipLayout {
    /// Y offset where the secondary hull starts.
    fn hull_start_y(&self) -> i32 {
        self.saucer_radius + 2
    }

    /// Z of the secondary hull's axis.
    fn hull_axis_z(&self) -> i32 {
        -self.neck_length - self.hull_radius
    }
}

/// Accumulates voxels into a model, narrowing i32 construction
/// coordinates to the i16 grid.
struct HullBuilder {
    model: VoxelModel,
}

impl HullBuilder {
    fn new() -> Self {
        Self {
            model: VoxelModel::new(),
        }
    }

    fn put(&mut self, x: i32, y: i32, z: i32, kind: VoxelType, color: Color) {
        debug_assert!(
            [x, y, z].iter().all(|c| i16::try_from(*c).is_ok()),
            "voxel ({x}, {y}, {z}) outside the i16 grid"
        );
        self.model
            .add_voxel(Voxel::new(x as i16, y as i16, z as i16, kind, color));
    }

    /// Every (a, b) offset inside a disc of the given radius.
    fn disc(radius: i32) -> impl Iterator<Item = (i32, i32)> {
        (-radius..=radius).flat_map(move |b| {
            (-radius..=radius)
                .filter(move |a| ((a * a + b * b) as f64).sqrt() <= radius as f64)
                .map(move |a| (a, b))
        })
    }
}

/// Build the reference starship: saucer, neck, secondary hull with a
/// deflector dish, and two nacelles on pylons.
pub fn build_starship() -> VoxelModel {
    build_starship_with(&StarshipLayout::default())
}

pub fn build_starship_with(layout: &StarshipLayout) -> VoxelModel {
    let mut builder = HullBuilder::new();
    saucer(&mut builder, layout);
    neck(&mut builder, layout);
    secondary_hull(&mut builder, layout);
    for side in [-1, 1] {
        nacelle_assembly(&mut builder, layout, side);
    }
    builder.model
}

/// Flat disc in the XY plane, stacked along +Z, topped by a two-voxel bridge.
fn saucer(builder: &mut HullBuilder, layout: &StarshipLayout) {
    for (x, y) in HullBuilder::disc(layout.saucer_radius) {
        for z in 0..layout.saucer_thickness {
            builder.put(x, y, z, VoxelType::Hull, palette::HULL);
        }
    }

    let top = layout.saucer_thickness;
    builder.put(0, 0, top, VoxelType::Hull, palette::DETAIL);
    builder.put(0, 1, top, VoxelType::Hull, palette::DETAIL);
}

/// Three-voxel-wide strut hanging below the saucer's rear edge.
fn neck(builder: &mut HullBuilder, layout: &StarshipLayout) {
    let rear = layout.saucer_radius - 2;
    for z in -layout.neck_length..0 {
        for dy in -1..=1 {
            builder.put(0, rear + dy, z, VoxelType::Hull, palette::DETAIL);
        }
    }
}

/// Cylinder running along +Y, with the deflector dish painted over its front cap.
fn secondary_hull(builder: &mut HullBuilder, layout: &StarshipLayout) {
    let start_y = layout.hull_start_y();
    let axis_z = layout.hull_axis_z();

    for (x, dz) in HullBuilder::disc(layout.hull_radius) {
        for k in 0..layout.hull_length {
            builder.put(x, start_y + k, axis_z + dz, VoxelType::Hull, palette::HULL);
        }
    }

    for (x, dz) in HullBuilder::disc(layout.hull_radius - 1) {
        builder.put(x, start_y, axis_z + dz, VoxelType::System, palette::DEFLECTOR);
    }
}

/// One pylon plus its nacelle. `side` is -1 for port, +1 for starboard.
fn nacelle_assembly(builder: &mut HullBuilder, layout: &StarshipLayout, side: i32) {
    let hull_end_y = layout.hull_start_y() + layout.hull_length;

    for i in 0..layout.pylon_length {
        builder.put(
            side * (layout.saucer_radius / 2 + i / 2),
            hull_end_y - layout.pylon_length + i,
            layout.nacelle_drop + i / 3,
            VoxelType::Hull,
            palette::DETAIL,
        );
    }

    let center_x = side * (layout.saucer_radius / 2 + layout.pylon_length / 2);
    let center_z = layout.nacelle_drop + layout.pylon_length / 3;
    let grill_y = hull_end_y + layout.nacelle_length / 2;

    for (dx, dz) in HullBuilder::disc(layout.nacelle_radius) {
        let x = center_x + dx;
        let z = center_z + dz;
        for k in 0..layout.nacelle_length {
            // Front ring is the glowing bussard collector
            let (kind, color) = if k == 0 {
                (VoxelType::System, palette::BUSSARD)
            } else {
                (VoxelType::Engine, palette::HULL)
            };
            builder.put(x, hull_end_y + k, z, kind, color);
        }
        builder.put(x, grill_y, z, VoxelType::Thruster, palette::WARP_GRILL);
    }
}
