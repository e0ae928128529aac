//! Self-contained timers - each accumulates delta time and decides when to fire

/// Countdown timer - fires once after duration
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start countdown
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Tick with delta, returns true if completed
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Get progress [0, 1]
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Frame rate meter, refreshed once per interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    interval: f32,
    frames: u32,
    accumulated: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            frames: 0,
            accumulated: 0.0,
            fps: 0.0,
        }
    }

    /// Count a frame, returns true when the reading was refreshed
    pub fn tick(&mut self, delta: f32) -> bool {
        self.frames += 1;
        self.accumulated += delta;

        if self.accumulated >= self.interval {
            self.fps = self.frames as f32 / self.accumulated;
            self.frames = 0;
            self.accumulated = 0.0;
            true
        } else {
            false
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
