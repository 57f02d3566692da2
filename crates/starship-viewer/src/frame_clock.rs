use std::time::{Duration, Instant};

/// Fixed-rate frame pacing.
///
/// A paced clock sleeps out the remainder of each frame and reports the real
/// elapsed time. An unpaced clock never sleeps and reports the nominal frame
/// time, which keeps headless runs deterministic.
pub struct FrameClock {
    /// Nominal frame length in seconds.
    nominal_dt: f64,
    frame_time: Duration,
    last: Instant,
    paced: bool,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        let nominal_dt = 1.0 / target_fps.max(1) as f64;
        Self {
            nominal_dt,
            frame_time: Duration::from_secs_f64(nominal_dt),
            last: Instant::now(),
            paced: true,
        }
    }

    pub fn unpaced(target_fps: u32) -> Self {
        Self {
            paced: false,
            ..Self::new(target_fps)
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Exactly 1 / target_fps, without the nanosecond rounding of `frame_time`.
    pub fn nominal_dt(&self) -> f64 {
        self.nominal_dt
    }

    pub fn is_paced(&self) -> bool {
        self.paced
    }

    /// Finish the current frame and return its length in seconds.
    pub fn tick(&mut self) -> f64 {
        if !self.paced {
            return self.nominal_dt;
        }

        let elapsed = self.last.elapsed();
        if elapsed < self.frame_time {
            std::thread::sleep(self.frame_time - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaced_reports_nominal_frame_time() {
        let mut clock = FrameClock::unpaced(60);
        assert!(!clock.is_paced());
        for _ in 0..3 {
            assert_eq!(clock.tick(), 1.0 / 60.0);
        }
        assert_eq!(clock.nominal_dt(), 1.0 / 60.0);
    }

    #[test]
    fn test_zero_fps_is_one_hertz() {
        let clock = FrameClock::unpaced(0);
        assert_eq!(clock.frame_time(), Duration::from_secs(1));
    }

    #[test]
    fn test_paced_tick_waits_for_frame() {
        let mut clock = FrameClock::new(200);
        let start = Instant::now();
        let dt = clock.tick();
        assert!(dt >= 0.005 - 1e-4, "dt {dt}");
        assert!(start.elapsed() >= Duration::from_millis(4));
    }
}
