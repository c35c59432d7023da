//! Jump-boost ability plugin for Bevy + Rapier2D games.
//!
//! A self-contained feature module: add [`JumpBoostPlugin`] to an `App`,
//! attach a [`BoostController`] (plus [`BoostControlled`] and an
//! `ExternalImpulse`) to any jump-capable entity, and that entity gains a
//! temporary jump boost governed by a configurable multiplier, duration,
//! usage cap, and cooldown — tunable at runtime from `assets/boost.toml`.
//!
//! ## Module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`controller`] | The activation/cooldown state machine ([`BoostController`]) |
//! | [`timer`] | One-shot [`Countdown`] timers owned by the controller |
//! | [`effects`] | [`EffectSink`] trigger interface, messages, and particles |
//! | [`config`] | [`BoostConfig`] resource, validation, TOML loading |
//! | [`systems`] | Input intent pipeline, ticking, jump impulse, plugin wiring |
//! | [`constants`] | Authoritative default tunables |
//! | [`error`] | Configuration validation errors |
//!
//! All public items are re-exported at this level so hosts can use flat
//! `jumpboost::*` imports without knowing the sub-module layout.

pub mod config;
pub mod constants;
pub mod controller;
pub mod effects;
pub mod error;
pub mod systems;
pub mod timer;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use config::{load_boost_config, BoostConfig};
pub use controller::{BoostController, BoostStatus};
pub use effects::{
    BoostAudioEffect, BoostParticle, BoostVisualEffect, EffectSink, MessageEffectSink,
    NullEffectSink,
};
pub use error::{BoostError, BoostResult};
pub use systems::{BoostControlled, BoostIntent, JumpBoostPlugin};
pub use timer::Countdown;
