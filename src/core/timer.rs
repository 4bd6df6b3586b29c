/// Fixed rate timer - fires at specific Hz
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    interval: f32,
    accumulator: f32,
}

impl FixedHz {
    /// Create timer that fires at given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            true
        } else {
            false
        }
    }
}

/// Once-per-second frame statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSample {
    /// Frames rendered during the last second
    pub fps: u32,
    /// Whole seconds since the counter started
    pub seconds: u64,
    /// Frames rendered since the counter started
    pub frames: u64,
}

/// Frame counter reporting a [`StatsSample`] once per second
#[derive(Debug, Clone)]
pub struct FrameStats {
    timer: FixedHz,
    frames: u64,
    frames_this_second: u32,
    seconds: u64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            timer: FixedHz::new(1.0),
            frames: 0,
            frames_this_second: 0,
            seconds: 0,
        }
    }

    /// Count one frame; returns a sample whenever a second boundary is crossed
    pub fn tick(&mut self, delta: f32) -> Option<StatsSample> {
        self.frames += 1;
        self.frames_this_second += 1;

        if !self.timer.tick(delta) {
            return None;
        }

        self.seconds += 1;
        let sample = StatsSample {
            fps: self.frames_this_second,
            seconds: self.seconds,
            frames: self.frames,
        };
        self.frames_this_second = 0;
        Some(sample)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
