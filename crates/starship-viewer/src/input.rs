use serde::{Deserialize, Serialize};
use starship_render::Camera;

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    A,
    D,
    Up,
    Down,
    Left,
    Right,
    Quit,
}

/// Camera speeds, in units per second and radians per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speeds {
    pub move_speed: f64,
    pub turn_speed: f64,
}

/// Apply one held key to the camera for a frame lasting `dt` seconds.
pub fn apply_key(camera: &mut Camera, key: Key, dt: f64, speeds: Speeds) {
    let step = speeds.move_speed * dt;
    let turn = speeds.turn_speed * dt;
    match key {
        Key::W => camera.move_forward(step),
        Key::S => camera.move_forward(-step),
        Key::A => camera.move_right(-step),
        Key::D => camera.move_right(step),
        Key::Up => camera.rotate(turn, 0.0, 0.0),
        Key::Down => camera.rotate(-turn, 0.0, 0.0),
        Key::Left => camera.rotate(0.0, turn, 0.0),
        Key::Right => camera.rotate(0.0, -turn, 0.0),
        Key::Quit => {}
    }
}

/// A key held down for `hold` frames starting at `frame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedKey {
    pub frame: u64,
    pub key: Key,
    #[serde(default = "single_frame")]
    pub hold: u64,
}

fn single_frame() -> u64 {
    1
}

impl ScriptedKey {
    fn is_held_at(&self, frame: u64) -> bool {
        frame >= self.frame && frame - self.frame < self.hold
    }
}

/// Keys held during the current frame, read each frame by the application.
#[derive(Debug, Default)]
pub struct InputState {
    held: Vec<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held set with the script's keys for `frame`.
    pub fn load_frame(&mut self, script: &[ScriptedKey], frame: u64) {
        self.held.clear();
        for event in script.iter().filter(|e| e.is_held_at(frame)) {
            if !self.held.contains(&event.key) {
                self.held.push(event.key);
            }
        }
    }

    pub fn held(&self) -> &[Key] {
        &self.held
    }

    pub fn quit_requested(&self) -> bool {
        self.held.contains(&Key::Quit)
    }

    /// Apply every held key, in the order they were first pressed.
    pub fn apply(&self, camera: &mut Camera, dt: f64, speeds: Speeds) {
        for &key in &self.held {
            apply_key(camera, key, dt, speeds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use starship_core::constants::PITCH_LIMIT;

    const SPEEDS: Speeds = Speeds {
        move_speed: 10.0,
        turn_speed: 1.0,
    };

    fn assert_vec_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_forward_and_back() {
        let mut camera = Camera::new();
        apply_key(&mut camera, Key::W, 0.5, SPEEDS);
        assert_vec_close(camera.position(), DVec3::new(0.0, 0.0, 5.0));
        apply_key(&mut camera, Key::S, 0.25, SPEEDS);
        assert_vec_close(camera.position(), DVec3::new(0.0, 0.0, 2.5));
    }

    #[test]
    fn test_strafe() {
        let mut camera = Camera::new();
        apply_key(&mut camera, Key::D, 0.1, SPEEDS);
        assert_vec_close(camera.position(), DVec3::new(1.0, 0.0, 0.0));
        apply_key(&mut camera, Key::A, 0.2, SPEEDS);
        assert_vec_close(camera.position(), DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_turn_keys() {
        let mut camera = Camera::new();
        apply_key(&mut camera, Key::Up, 0.5, SPEEDS);
        assert!((camera.pitch() - 0.5).abs() < 1e-12);
        apply_key(&mut camera, Key::Down, 0.2, SPEEDS);
        assert!((camera.pitch() - 0.3).abs() < 1e-12);
        apply_key(&mut camera, Key::Left, 0.4, SPEEDS);
        assert!((camera.yaw() - 0.4).abs() < 1e-12);
        apply_key(&mut camera, Key::Right, 1.0, SPEEDS);
        assert!((camera.yaw() + 0.6).abs() < 1e-12);
        assert_eq!(camera.roll(), 0.0);
    }

    #[test]
    fn test_holding_up_clamps_pitch() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            apply_key(&mut camera, Key::Up, 1.0 / 60.0, SPEEDS);
        }
        assert_eq!(camera.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn test_quit_does_not_move_camera() {
        let mut camera = Camera::new();
        apply_key(&mut camera, Key::Quit, 1.0, SPEEDS);
        assert_eq!(camera.position(), DVec3::ZERO);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn test_script_hold_window() {
        let script = [
            ScriptedKey {
                frame: 2,
                key: Key::W,
                hold: 3,
            },
            ScriptedKey {
                frame: 3,
                key: Key::Left,
                hold: 1,
            },
            ScriptedKey {
                frame: 3,
                key: Key::W,
                hold: 1,
            },
        ];
        let mut input = InputState::new();

        input.load_frame(&script, 1);
        assert!(input.held().is_empty());

        input.load_frame(&script, 3);
        assert_eq!(input.held(), &[Key::W, Key::Left]);

        input.load_frame(&script, 4);
        assert_eq!(input.held(), &[Key::W]);

        input.load_frame(&script, 5);
        assert!(input.held().is_empty());
    }

    #[test]
    fn test_quit_requested() {
        let script = [ScriptedKey {
            frame: 0,
            key: Key::Quit,
            hold: 1,
        }];
        let mut input = InputState::new();
        input.load_frame(&script, 0);
        assert!(input.quit_requested());
        input.load_frame(&script, 1);
        assert!(!input.quit_requested());
    }
}
