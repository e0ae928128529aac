use std::time::Instant;

/// Timing handed to the per-frame update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started
    pub elapsed: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, elapsed: f32, delta: f32) -> Self {
        Self {
            number,
            elapsed,
            delta,
        }
    }
}

/// Scene clock - elapsed time since mount plus per-frame delta
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
        }
    }

    /// Advance one frame and report its timing
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo::new(
            self.frame_number,
            now.duration_since(self.start).as_secs_f32(),
            now.duration_since(self.last_tick).as_secs_f32(),
        );
        self.last_tick = now;
        self.frame_number += 1;
        info
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
