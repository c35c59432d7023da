//! One-shot countdown timers owned by the boost controller.
//!
//! [`Countdown`] wraps a [`bevy::time::Timer`] in `TimerMode::Once` behind the
//! narrow contract the controller needs: `start`, `stop`, `time_left`, and a
//! poll-based `tick` that reports expiry **exactly once** per `start` unless
//! `stop` is called first.  Polling (rather than a callback registry) matches
//! Bevy's frame-tick model: the controller ticks both of its timers from the
//! `Update` schedule.

use bevy::time::{Timer, TimerMode};
use std::time::Duration;

/// A re-armable one-shot countdown.
///
/// Construction leaves the countdown idle: `tick` returns `false` and
/// `time_left` returns `0.0` until `start` is called.
#[derive(Debug, Clone)]
pub struct Countdown {
    timer: Timer,
    /// `true` from `start` until expiry or `stop`.  Gates the expiry report so
    /// a finished `bevy::time::Timer` can never signal twice.
    armed: bool,
}

impl Countdown {
    /// Create an idle countdown whose configured duration is `secs`.
    pub fn from_seconds(secs: f32) -> Self {
        let mut timer = Timer::from_seconds(secs.max(0.0), TimerMode::Once);
        // A zero-duration Timer is born finished; keep the idle state inert.
        timer.pause();
        Self {
            timer,
            armed: false,
        }
    }

    /// Change the configured duration without starting the countdown.
    ///
    /// Any running countdown is cancelled: the next expiry can only come from
    /// a `start` issued after this call.
    pub fn set_duration(&mut self, secs: f32) {
        self.stop();
        self.timer.set_duration(Duration::from_secs_f32(secs.max(0.0)));
    }

    /// The configured duration in seconds.
    pub fn duration(&self) -> f32 {
        self.timer.duration().as_secs_f32()
    }

    /// (Re)start the countdown at `secs` seconds.
    ///
    /// Restarting an already-running countdown resets the elapsed time; the
    /// previous run's expiry is discarded.
    pub fn start(&mut self, secs: f32) {
        self.timer.set_duration(Duration::from_secs_f32(secs.max(0.0)));
        self.timer.reset();
        self.timer.unpause();
        self.armed = true;
    }

    /// Cancel the countdown.  A stopped countdown never reports expiry.
    pub fn stop(&mut self) {
        self.timer.reset();
        self.timer.pause();
        self.armed = false;
    }

    /// Whether the countdown is running (started and not yet expired/stopped).
    pub fn is_running(&self) -> bool {
        self.armed
    }

    /// Seconds remaining; `0.0` when idle.
    pub fn time_left(&self) -> f32 {
        if self.armed {
            self.timer.remaining_secs()
        } else {
            0.0
        }
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// Returns `true` on the single tick in which the countdown expires.  A
    /// countdown started with duration `0.0` expires on the first tick after
    /// `start`, never inside `start` itself.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.timer.tick(Duration::from_secs_f32(dt.max(0.0)));
        if self.timer.is_finished() {
            self.armed = false;
            self.timer.pause();
            return true;
        }
        false
    }
}
