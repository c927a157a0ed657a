//! Frame pacing for the terminal host.

use std::time::{Duration, Instant};

use snowfall_core::FrameScheduler;

/// How long to wait for input when no frame has been requested.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Tracks when the next frame is due and whether one was requested.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
    requested: bool,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_frame: Instant::now(),
            requested: false,
        }
    }

    /// Clear the pending request before drawing.
    pub fn begin_frame(&mut self) {
        self.requested = false;
    }

    /// Schedule the next deadline one interval after `now`.
    pub fn frame_presented(&mut self, now: Instant) {
        self.next_frame = now + self.interval;
    }

    /// Time to keep waiting for input before drawing again.
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.requested {
            self.next_frame.saturating_duration_since(now)
        } else {
            IDLE_POLL
        }
    }
}

impl FrameScheduler for FramePacer {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}
