use std::time::{Duration, Instant};

/// The frame pacer collaborator: blocks the whole loop until the next
/// frame boundary. Fixed target rate, no variable-timestep interpolation.
pub trait FramePacer {
    fn wait(&mut self);
}

/// Wall-clock pacer that sleeps out the remainder of each frame budget.
pub struct FrameClock {
    interval: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        assert!(fps > 0, "target fps must be positive");
        let interval = Duration::from_secs_f64(1.0 / f64::from(fps));
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FramePacer for FrameClock {
    fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.interval;
        } else {
            // Frame overran its budget; restart pacing from here rather
            // than accumulating debt.
            self.next = now + self.interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_matches_target_rate() {
        let clock = FrameClock::new(50);
        assert_eq!(clock.interval(), Duration::from_millis(20));
    }

    #[test]
    fn wait_blocks_until_the_frame_boundary() {
        let mut clock = FrameClock::new(100);
        let start = Instant::now();
        clock.wait();
        clock.wait();
        // Two 10ms frames; allow generous slack above, none below.
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_fps_is_rejected() {
        let _ = FrameClock::new(0);
    }
}
