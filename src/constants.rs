//! Centralised boost and effect constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! These are the **authoritative defaults**: [`crate::config::BoostConfig`]
//! mirrors every gameplay constant and may override it at runtime from
//! `assets/boost.toml`.

// ── Boost: Core Tunables ──────────────────────────────────────────────────────

/// Jump-height scale factor applied while the boost is active.
///
/// `1.0` is a no-op.  Tested range: 1.2–3.0; values above ~4.0 launch the
/// player clear off most level geometry.
pub const BOOST_MULTIPLIER: f32 = 1.5;

/// Seconds a boost lasts once activated.
///
/// Short windows (≤ 1.0 s) make the ability feel like a timed pulse; longer
/// values turn it into a sustained buff.  Must be strictly positive.
pub const BOOST_DURATION: f32 = 0.5;

/// Consecutive activations allowed before the forced cooldown kicks in.
pub const MAX_USES: u32 = 3;

/// Seconds the forced cooldown lasts after the usage cap is reached.
///
/// Zero is allowed: the cooldown then clears on the next frame's tick, which
/// effectively removes the lockout while still resetting the use counter.
pub const COOLDOWN_TIME: f32 = 5.0;

// ── Boost: Effect Flags ───────────────────────────────────────────────────────

/// Whether activation fires the visual particle burst.
pub const VISUAL_EFFECT: bool = true;

/// Whether activation fires the sound trigger.
pub const BOOST_SOUND: bool = true;

/// Base colour of the boost particles (sRGB, 0–1 per channel).
pub const PARTICLE_COLOR: [f32; 3] = [1.0, 0.85, 0.3];

/// When `true`, every jump attempts a boost activation automatically; when
/// `false`, the boost key must be pressed explicitly.
pub const AUTO_ACTIVATE: bool = false;

// ── Jump ──────────────────────────────────────────────────────────────────────

/// Base upward impulse applied on an unboosted jump.
///
/// A boosted jump applies `JUMP_IMPULSE * boost_multiplier` instead.
pub const JUMP_IMPULSE: f32 = 260.0;

// ── Particles ─────────────────────────────────────────────────────────────────

/// Number of particles in the activation burst.
pub const BURST_PARTICLE_COUNT: usize = 14;

/// Lifetime (s) of a single boost particle.
pub const PARTICLE_LIFETIME: f32 = 0.45;

/// Initial particle speed range (u/s); each particle picks a random value in
/// `[PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX]`.
pub const PARTICLE_SPEED_MIN: f32 = 30.0;
pub const PARTICLE_SPEED_MAX: f32 = 90.0;

/// Drawn radius (world units) of a boost particle.
pub const PARTICLE_RADIUS: f32 = 1.6;

/// Interval (s) between aura emissions while a boost is active.
pub const AURA_EMIT_INTERVAL: f32 = 0.06;

/// Particles emitted per aura pulse.
pub const AURA_PARTICLE_COUNT: usize = 3;
