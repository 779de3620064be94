//! Fixed-step frame clock.
//!
//! The clock decides *when* the next frame runs; the game session decides
//! *whether* one is wanted. The binary arms the clock when play begins and
//! disarms it as soon as a frame returns [`FrameRequest::Halt`].
//!
//! [`FrameRequest::Halt`]: crate::game::FrameRequest::Halt

use super::config::TimingConfig;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    max_catch_up: u32,
    /// Deadline of the next frame, `None` while stopped.
    next_due: Option<Instant>,
}

impl FrameClock {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            interval: Duration::from_millis(timing.frame_interval_ms.max(1)),
            max_catch_up: timing.max_catch_up_frames.max(1),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the clock. The first frame is due immediately.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of frames that have come due by `now`, consuming them.
    ///
    /// After a stall longer than `max_catch_up` frames the backlog is
    /// dropped instead of replayed.
    pub fn due_frames(&mut self, now: Instant) -> u32 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        let behind = now.duration_since(due).as_nanos() / self.interval.as_nanos();
        let frames = behind.saturating_add(1);

        if frames > self.max_catch_up as u128 {
            self.next_due = Some(now + self.interval);
            self.max_catch_up
        } else {
            let frames = frames as u32;
            self.next_due = Some(due + self.interval * frames);
            frames
        }
    }

    /// How long the input poll may block before the next frame is due.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.next_due {
            Some(due) => due.saturating_duration_since(now),
            None => idle,
        }
    }
}
