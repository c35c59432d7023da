//! Runtime boost configuration loaded from `assets/boost.toml`.
//!
//! [`BoostConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_boost_config`] reads
//! `assets/boost.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! ## Validation
//!
//! A loaded config must satisfy `boost_multiplier > 0 ∧ boost_duration > 0 ∧
//! max_uses ≥ 1 ∧ cooldown_time ≥ 0`.  A config that violates the predicate is
//! **replaced wholesale** by the compiled defaults — never partially patched,
//! never surfaced as an error to gameplay code.  The rejected field is logged.
//!
//! ## Usage in systems
//!
//! Add `config: Res<BoostConfig>` to any system parameter list.  Controllers
//! take a copy at construction (`BoostController::from_config`) and are
//! re-configured by `sync_controller_config_system` whenever the resource
//! changes.

use crate::constants::*;
use crate::error::{
    validate_boost_duration, validate_boost_multiplier, validate_cooldown_time, validate_max_uses,
    BoostResult,
};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable boost configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`.  Override any subset by setting the value in
/// `assets/boost.toml`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoostConfig {
    // ── State machine ────────────────────────────────────────────────────────
    /// Jump-height scale factor while boosted.  Must be > 0.
    pub boost_multiplier: f32,
    /// Seconds a boost lasts once activated.  Must be > 0.
    pub boost_duration: f32,
    /// Consecutive activations allowed before the forced cooldown.  Must be ≥ 1.
    pub max_uses: u32,
    /// Seconds a forced cooldown lasts.  Must be ≥ 0.
    pub cooldown_time: f32,

    // ── Effects ──────────────────────────────────────────────────────────────
    /// Fire the particle burst on activation.
    pub visual_effect: bool,
    /// Fire the sound trigger on activation.
    pub boost_sound: bool,
    /// Particle colour (sRGB, 0–1 per channel).  Cosmetic only.
    pub particle_color: [f32; 3],

    // ── Input behaviour ──────────────────────────────────────────────────────
    /// Attempt a boost activation on every jump, without the explicit boost
    /// key.  Read by the input layer; the state machine itself never consults
    /// this flag.
    pub auto_activate: bool,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            boost_multiplier: BOOST_MULTIPLIER,
            boost_duration: BOOST_DURATION,
            max_uses: MAX_USES,
            cooldown_time: COOLDOWN_TIME,
            visual_effect: VISUAL_EFFECT,
            boost_sound: BOOST_SOUND,
            particle_color: PARTICLE_COLOR,
            auto_activate: AUTO_ACTIVATE,
        }
    }
}

impl BoostConfig {
    /// Check every field against its valid range, reporting the first
    /// violation.
    pub fn validate(&self) -> BoostResult<()> {
        validate_boost_multiplier(self.boost_multiplier)?;
        validate_boost_duration(self.boost_duration)?;
        validate_max_uses(self.max_uses)?;
        validate_cooldown_time(self.cooldown_time)?;
        Ok(())
    }

    /// Return `self` if valid, otherwise the compiled defaults.
    ///
    /// This is the single recovery path for bad configuration: gameplay code
    /// only ever sees a valid config.
    pub fn sanitized(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!("[boost] rejected config ({e}); using compiled defaults");
                Self::default()
            }
        }
    }
}

/// Startup system: attempt to load `assets/boost.toml` and overwrite the
/// [`BoostConfig`] resource with any values present in the file.
///
/// Missing keys retain their compiled defaults.  TOML parse errors and
/// out-of-range values fall back to the full default config; neither aborts
/// the game.  A missing file is silently ignored (defaults are already in
/// place from `insert_resource`).
pub fn load_boost_config(mut config: ResMut<BoostConfig>) {
    let path = "assets/boost.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<BoostConfig>(&contents) {
            Ok(loaded) => {
                *config = loaded.sanitized();
                info!("[boost] loaded config from {path}");
            }
            Err(e) => {
                warn!("[boost] failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            info!("[boost] no {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BoostConfig::default().validate().is_ok());
    }

    #[test]
    fn sanitized_keeps_valid_config() {
        let cfg = BoostConfig {
            boost_multiplier: 2.0,
            max_uses: 5,
            ..Default::default()
        };
        assert_eq!(cfg.clone().sanitized(), cfg);
    }

    #[test]
    fn sanitized_replaces_invalid_multiplier() {
        let cfg = BoostConfig {
            boost_multiplier: 0.0,
            ..Default::default()
        };
        assert_eq!(cfg.sanitized(), BoostConfig::default());
    }

    #[test]
    fn sanitized_replaces_invalid_duration() {
        let cfg = BoostConfig {
            boost_duration: -1.0,
            ..Default::default()
        };
        assert_eq!(cfg.sanitized(), BoostConfig::default());
    }

    #[test]
    fn sanitized_replaces_zero_use_cap() {
        let cfg = BoostConfig {
            max_uses: 0,
            ..Default::default()
        };
        assert_eq!(cfg.sanitized(), BoostConfig::default());
    }

    #[test]
    fn zero_cooldown_is_valid() {
        let cfg = BoostConfig {
            cooldown_time: 0.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_cooldown_is_rejected() {
        let cfg = BoostConfig {
            cooldown_time: -0.1,
            ..Default::default()
        };
        assert_eq!(cfg.sanitized(), BoostConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_keys() {
        let cfg: BoostConfig = toml::from_str("max_uses = 2\ncooldown_time = 3.0\n").unwrap();
        assert_eq!(cfg.max_uses, 2);
        assert_eq!(cfg.cooldown_time, 3.0);
        assert_eq!(cfg.boost_multiplier, BOOST_MULTIPLIER);
        assert_eq!(cfg.boost_duration, BOOST_DURATION);
    }
}
