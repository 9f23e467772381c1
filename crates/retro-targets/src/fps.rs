use std::time::Instant;

/// Frames-per-second diagnostic.
///
/// One counter for the life of the process, started (or reset) when the
/// capture loop begins; the per-frame pipeline itself stays pure.
#[derive(Debug)]
pub struct FrameRateCounter {
    started: Instant,
    frames: u64,
}

impl FrameRateCounter {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            frames: 0,
        }
    }

    /// Restart the measurement window.
    pub fn reset(&mut self) {
        self.started = Instant::now();
        self.frames = 0;
    }

    /// Count one processed frame; returns the running total.
    pub fn tick(&mut self) -> u64 {
        self.frames += 1;
        self.frames
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average rate since the window started; zero before the first tick.
    pub fn fps(&self) -> f64 {
        let secs = self.started.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

impl Default for FrameRateCounter {
    fn default() -> Self {
        Self::start()
    }
}
