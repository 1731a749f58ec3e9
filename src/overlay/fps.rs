// SPDX-License-Identifier: MPL-2.0
//! Frame rate meter fed by the host's animation-frame callback.

use crate::buffer::CircularBuffer;
use crate::domain::editing::FpsWindow;
use std::time::Instant;

/// Rolling average of the frame rate over the last `window` frames.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    frames: CircularBuffer<Instant>,
}

impl FpsMeter {
    #[must_use]
    pub fn new(window: FpsWindow) -> Self {
        Self {
            frames: CircularBuffer::new(window.value()),
        }
    }

    /// Records a frame presented at `at`. Timestamps going backwards reset the meter.
    pub fn record_frame(&mut self, at: Instant) {
        if self.frames.last().is_some_and(|last| at < *last) {
            self.frames.clear();
        }
        self.frames.push(at);
    }

    /// Frames per second over the sampled window; `None` with fewer than two
    /// samples or no elapsed time.
    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        let first = self.frames.first()?;
        let last = self.frames.last()?;
        let elapsed = last.duration_since(*first).as_secs_f64();
        if self.frames.len() < 2 || elapsed <= 0.0 {
            return None;
        }
        Some((self.frames.len() - 1) as f64 / elapsed)
    }

    /// Number of frames currently sampled.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.frames.len()
    }

    pub fn reset(&mut self) {
        self.frames.clear();
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new(FpsWindow::default())
    }
}
