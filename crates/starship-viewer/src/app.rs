use starship_core::{Color, VoxelModel};
use starship_render::{Camera, Entity, Framebuffer, RasterStats, Ship};

use crate::config::ViewerConfig;
use crate::frame_clock::FrameClock;
use crate::input::{InputState, ScriptedKey, Speeds};

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    FrameLimit,
}

/// Totals for one run of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub stop: StopReason,
    /// Raster counts of the last presented frame.
    pub last_frame: RasterStats,
}

/// Main application struct. Owns the camera, the ship and the frame buffer;
/// borrows the voxel model the ship renders.
pub struct Application<'a> {
    camera: Camera,
    ship: Ship<'a>,
    framebuffer: Framebuffer,
    clock: FrameClock,
    input: InputState,
    script: Vec<ScriptedKey>,
    speeds: Speeds,
    clear_color: Color,
    frame_limit: u64,
    frames_presented: u64,
}

impl<'a> Application<'a> {
    pub fn new(model: &'a VoxelModel, config: &ViewerConfig) -> Self {
        let mut ship = Ship::new(model).with_spin(config.ship_spin);
        ship.transform_mut().set_position(config.ship_position());

        let mut camera = Camera::new();
        camera.set_position(config.camera_position());
        camera.look_at(ship.transform().position());

        let clock = if config.realtime {
            FrameClock::new(config.target_fps)
        } else {
            FrameClock::unpaced(config.target_fps)
        };

        Self {
            camera,
            ship,
            framebuffer: Framebuffer::new(config.width, config.height),
            clock,
            input: InputState::new(),
            script: config.script.clone(),
            speeds: config.speeds(),
            clear_color: config.clear_color,
            frame_limit: config.frames,
            frames_presented: 0,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn ship(&self) -> &Ship<'a> {
        &self.ship
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Run frames until a scripted Quit or the frame limit.
    pub fn run(&mut self) -> RunSummary {
        let mut last_frame = RasterStats::default();
        let stop = loop {
            let frame = self.frames_presented;
            if self.frame_limit > 0 && frame >= self.frame_limit {
                break StopReason::FrameLimit;
            }

            self.input.load_frame(&self.script, frame);
            if self.input.quit_requested() {
                break StopReason::Quit;
            }

            let dt = self.clock.tick();
            last_frame = self.step(dt);
        };

        log::debug!(
            "Stopped after {} frames ({stop:?})",
            self.frames_presented
        );
        RunSummary {
            frames: self.frames_presented,
            stop,
            last_frame,
        }
    }

    /// Advance one frame of `dt` seconds: input, update, render, present.
    pub fn step(&mut self, dt: f64) -> RasterStats {
        self.input.apply(&mut self.camera, dt, self.speeds);
        self.ship.update(dt);
        let stats = self.render_frame();
        self.present(stats);
        stats
    }

    fn render_frame(&mut self) -> RasterStats {
        self.framebuffer.clear(self.clear_color);
        self.ship.draw(&self.camera, &mut self.framebuffer)
    }

    fn present(&mut self, stats: RasterStats) {
        self.frames_presented += 1;
        log::debug!(
            "frame {}: {} drawn, {} culled",
            self.frames_presented,
            stats.drawn,
            stats.culled
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use glam::DVec3;
    use starship_core::{Voxel, VoxelType};

    fn small_model() -> VoxelModel {
        let mut model = VoxelModel::new();
        for x in -2..=2 {
            model.add_voxel(Voxel::new(x, 0, 0, VoxelType::Hull, Color::WHITE));
        }
        model.add_voxel(Voxel::new(0, 1, 0, VoxelType::Engine, Color::rgb(255, 0, 0)));
        model
    }

    fn headless(frames: u64) -> ViewerConfig {
        ViewerConfig {
            width: 160,
            height: 120,
            frames,
            realtime: false,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn test_startup_looks_at_ship() {
        let model = small_model();
        let app = Application::new(&model, &headless(1));

        assert_eq!(app.camera().position(), DVec3::new(0.0, 10.0, -30.0));
        assert_eq!(app.ship().transform().position(), DVec3::new(0.0, 0.0, 20.0));
        assert_eq!(app.camera().roll(), 0.0);

        let p = app
            .camera()
            .world_to_screen(DVec3::new(0.0, 0.0, 20.0), 160, 120)
            .expect("ship in view");
        assert!((p.x - 80.0).abs() < 1e-6 && (p.y - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_run_stops_at_frame_limit() {
        let model = small_model();
        let mut app = Application::new(&model, &headless(5));
        let summary = app.run();

        assert_eq!(summary.stop, StopReason::FrameLimit);
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.last_frame.drawn, 6);
        // Five frames of spin at 0.5 rad/s and 60 Hz
        let expected = 0.5 * 5.0 / 60.0;
        assert!((app.ship().transform().rotation().y - expected).abs() < 1e-15);
    }

    #[test]
    fn test_scripted_quit() {
        let model = small_model();
        let mut config = headless(0);
        config.script.push(ScriptedKey {
            frame: 3,
            key: Key::Quit,
            hold: 1,
        });
        let mut app = Application::new(&model, &config);
        let summary = app.run();

        assert_eq!(summary.stop, StopReason::Quit);
        assert_eq!(summary.frames, 3);
    }

    #[test]
    fn test_scripted_movement() {
        let model = small_model();
        let mut config = headless(2);
        config.camera_position = [0.0, 0.0, 0.0];
        config.script.push(ScriptedKey {
            frame: 0,
            key: Key::W,
            hold: 2,
        });
        let mut app = Application::new(&model, &config);
        app.run();

        // Two frames at 10 units/s toward the ship on +Z
        let z = app.camera().position().z;
        assert!((z - 20.0 / 60.0).abs() < 1e-15, "z {z}");
    }

    #[test]
    fn test_frame_is_cleared_and_drawn() {
        let model = small_model();
        let mut config = headless(1);
        config.clear_color = Color::rgb(0, 0, 40);
        let mut app = Application::new(&model, &config);
        app.run();

        let fb = app.framebuffer();
        assert_eq!(fb.pixel(0, 0), Some(Color::rgb(0, 0, 40)));
        let lit = (0..fb.height())
            .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| fb.pixel(x, y) == Some(Color::WHITE))
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn test_step_counts_presented_frames() {
        let model = small_model();
        let mut app = Application::new(&model, &headless(0));
        app.step(0.1);
        app.step(0.1);
        assert_eq!(app.frames_presented(), 2);
    }
}
