//! The boost activation/cooldown state machine.
//!
//! [`BoostController`] owns everything the ability needs at runtime: a
//! validated [`BoostConfig`] copy, the use counter, the active/cooling flags,
//! and two one-shot [`Countdown`] timers.  It is a plain-Rust struct behind a
//! Bevy `Component` derive, so the whole state machine is unit-testable
//! without an `App`; the systems in [`crate::systems`] are thin adapters that
//! feed it input, frame time, and an [`EffectSink`].
//!
//! ## States
//!
//! Three logical states, encoded by two flags that are never both set:
//!
//! - **Idle** — neither `boost_active` nor `is_cooling_down`.
//! - **Boosting** — `boost_active`; ends on boost-timer expiry or
//!   [`deactivate`](BoostController::deactivate).
//! - **CoolingDown** — `is_cooling_down`; entered when an activation attempt
//!   finds the use cap reached; ends on cooldown-timer expiry.
//!
//! `current_uses` counts activations since the last cooldown reset and resets
//! to 0 exactly when a cooldown starts or ends.  Natural boost expiry does not
//! start a cooldown by itself; the cooldown begins on the first `activate`
//! call that finds the cap reached.
//!
//! All transitions happen synchronously inside `activate` / `deactivate` /
//! `tick` on the game's update thread; nothing here blocks or suspends.

use crate::config::BoostConfig;
use crate::effects::EffectSink;
use crate::timer::Countdown;
use bevy::prelude::*;

/// Point-in-time snapshot of the controller, for HUDs and debugging.
///
/// Produced by [`BoostController::status`]; reading it has no side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostStatus {
    /// A boost is currently active.
    pub active: bool,
    /// The forced cooldown is currently running.
    pub cooling_down: bool,
    /// Activations since the last cooldown reset.
    pub current_uses: u32,
    /// Configured usage cap.
    pub max_uses: u32,
    /// Seconds of cooldown remaining; `0.0` unless `cooling_down`.
    pub cooldown_remaining: f32,
    /// Seconds of boost remaining; `0.0` unless `active`.
    pub boost_remaining: f32,
}

/// Per-entity jump-boost state machine.
///
/// Attach one to each boost-capable entity; controllers share nothing, so no
/// locking discipline is needed beyond Bevy's usual exclusive component
/// access.  Dropping the component releases both timers.
#[derive(Component, Debug, Clone)]
pub struct BoostController {
    config: BoostConfig,
    current_uses: u32,
    boost_active: bool,
    is_cooling_down: bool,
    boost_timer: Countdown,
    cooldown_timer: Countdown,
}

impl Default for BoostController {
    fn default() -> Self {
        Self::from_config(&BoostConfig::default())
    }
}

impl BoostController {
    /// Build a controller in the `Idle` state from `config`.
    ///
    /// An invalid config is replaced by the compiled defaults, exactly as in
    /// [`configure`](Self::configure).
    pub fn from_config(config: &BoostConfig) -> Self {
        let config = config.clone().sanitized();
        Self {
            boost_timer: Countdown::from_seconds(config.boost_duration),
            cooldown_timer: Countdown::from_seconds(config.cooldown_time),
            config,
            current_uses: 0,
            boost_active: false,
            is_cooling_down: false,
        }
    }

    /// The active (always valid) configuration.
    pub fn config(&self) -> &BoostConfig {
        &self.config
    }

    /// Replace the configuration, substituting the compiled defaults if `cfg`
    /// is invalid.
    ///
    /// Both timers are re-armed to the new durations without being started,
    /// and the machine returns to `Idle` with a zeroed use counter: a config
    /// swap mid-boost or mid-cooldown would otherwise leave a timer running
    /// against a duration that no longer exists.
    pub fn configure(&mut self, cfg: BoostConfig) {
        self.config = cfg.sanitized();
        self.boost_timer.set_duration(self.config.boost_duration);
        self.cooldown_timer.set_duration(self.config.cooldown_time);
        self.current_uses = 0;
        self.boost_active = false;
        self.is_cooling_down = false;
    }

    /// Attempt to start a boost.  Returns `true` iff a boost started.
    ///
    /// Guards, evaluated in order:
    /// 1. cooling down → refused, no state change;
    /// 2. already boosting → refused (no stacking or extension);
    /// 3. use cap reached → refused, and the forced cooldown starts;
    /// 4. otherwise the boost starts: the use counter increments, the boost
    ///    timer restarts at `boost_duration`, and the visual/audio triggers
    ///    fire per the config flags.
    pub fn activate(&mut self, effects: &mut dyn EffectSink) -> bool {
        if self.is_cooling_down {
            return false;
        }
        if self.boost_active {
            return false;
        }
        if self.current_uses >= self.config.max_uses {
            self.start_cooldown();
            return false;
        }

        self.boost_active = true;
        self.current_uses += 1;
        self.boost_timer.start(self.config.boost_duration);

        if self.config.visual_effect {
            effects.trigger_visual(self.config.particle_color);
        }
        if self.config.boost_sound {
            effects.trigger_audio();
        }
        true
    }

    /// End the current boost early.  Returns `false` if no boost was active.
    ///
    /// The only path that ends a boost before its timer expires.  Leaves
    /// `current_uses` and the cooldown state untouched.  There is no
    /// counterpart for cancelling a cooldown.
    pub fn deactivate(&mut self) -> bool {
        if !self.boost_active {
            return false;
        }
        self.boost_active = false;
        self.boost_timer.stop();
        true
    }

    /// Enter the forced cooldown.  Idempotent.
    ///
    /// Zeroes the use counter and (re)starts the cooldown timer at
    /// `cooldown_time`.  Called internally when an activation attempt finds
    /// the cap reached; also callable by external policy.  Any running boost
    /// is ended first so the two phases never overlap.
    pub fn start_cooldown(&mut self) {
        self.deactivate();
        self.is_cooling_down = true;
        self.current_uses = 0;
        self.cooldown_timer.start(self.config.cooldown_time);
    }

    /// Advance both timers by `dt` seconds and resolve any expiry.
    ///
    /// Boost expiry clears `boost_active` and nothing else — a naturally
    /// expired boost does not start a cooldown and does not refund uses.
    /// Cooldown expiry clears `is_cooling_down` and re-asserts the zeroed use
    /// counter.  Each timer reports expiry at most once per start, so no
    /// further guards are needed here.
    pub fn tick(&mut self, dt: f32) {
        if self.boost_timer.tick(dt) {
            self.boost_active = false;
        }
        if self.cooldown_timer.tick(dt) {
            self.is_cooling_down = false;
            self.current_uses = 0;
        }
    }

    /// Snapshot the controller state.  Pure read.
    pub fn status(&self) -> BoostStatus {
        BoostStatus {
            active: self.boost_active,
            cooling_down: self.is_cooling_down,
            current_uses: self.current_uses,
            max_uses: self.config.max_uses,
            cooldown_remaining: if self.is_cooling_down {
                self.cooldown_timer.time_left()
            } else {
                0.0
            },
            boost_remaining: if self.boost_active {
                self.boost_timer.time_left()
            } else {
                0.0
            },
        }
    }
}
