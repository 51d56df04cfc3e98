use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps frames (and therefore generations) at a fixed rate.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    /// `max_fps` must be positive.
    pub fn new(max_fps: u32) -> Self {
        Self {
            target_frametime: Self::frametime(max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    fn frametime(max_fps: u32) -> Duration {
        Duration::from_secs_f64(1. / max_fps as f64)
    }

    pub fn target_frametime(&self) -> Duration {
        self.target_frametime
    }

    /// Smoothed number of frames per second actually achieved, 0 before the first frame.
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    /// Time left before the current frame has lasted `target_frametime`.
    pub fn remaining(&self) -> Duration {
        self.target_frametime
            .saturating_sub(self.frame_timer.elapsed())
    }

    pub fn sleep(&mut self) {
        let wait = self.remaining();
        if !wait.is_zero() {
            sleep(wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::FpsLimiter;
    use std::time::{Duration, Instant};

    #[test]
    fn test_target_frametime() {
        assert_eq!(FpsLimiter::new(1).target_frametime(), Duration::from_secs(1));
        assert_eq!(
            FpsLimiter::new(4).target_frametime(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_sleep_holds_the_rate() {
        let mut limiter = FpsLimiter::new(50);
        assert_eq!(limiter.fps(), 0.);
        let timer = Instant::now();
        for _ in 0..3 {
            limiter.sleep();
        }
        assert!(timer.elapsed() >= Duration::from_millis(60));
        assert!(limiter.fps() > 0.);
    }
}
