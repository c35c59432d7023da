//! Input, ticking, and jump systems, plus the [`JumpBoostPlugin`] wiring.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`boost_intent_clear_system`] — resets [`BoostIntent`] to zero.
//! 2. [`keyboard_to_boost_intent_system`] — translates key presses into intent.
//! 3. [`boost_tick_system`] — advances every controller's timers by frame time.
//! 4. [`apply_boost_intent_system`] — converts intent into `activate` calls.
//! 5. [`boosted_jump_system`] — applies the (possibly boosted) jump impulse.
//!
//! The **input abstraction layer** ([`BoostIntent`]) makes the pipeline fully
//! testable: tests populate the resource directly and run only the apply/jump
//! steps, with no input device or window.
//!
//! Timer expiry is resolved inside `boost_tick_system`, strictly before the
//! activation step of the same frame, so an expiry and an `activate` call for
//! the same controller never interleave.

use crate::config::{load_boost_config, BoostConfig};
use crate::constants::JUMP_IMPULSE;
use crate::controller::BoostController;
use crate::effects::{
    boost_audio_relay_system, boost_aura_particle_system, boost_burst_particle_system,
    particle_gizmo_system, particle_update_system, BoostAudioEffect, BoostVisualEffect,
    MessageEffectSink,
};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker for entities driven by the shared keyboard [`BoostIntent`].
///
/// Hosts that drive controllers programmatically (AI, replays) can skip the
/// marker and call [`BoostController::activate`] themselves.
#[derive(Component, Debug, Clone, Copy)]
pub struct BoostControlled;

// ── Input abstraction ─────────────────────────────────────────────────────────

/// Aggregated boost input for the current frame, derived from all sources.
///
/// Input systems write to this resource each frame after it is cleared;
/// [`apply_boost_intent_system`] and [`boosted_jump_system`] read it.  Tests
/// populate it directly to drive the ability without a real input device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoostIntent {
    /// A jump was requested this frame.
    pub jump: bool,
    /// An explicit boost activation was requested this frame.
    pub boost: bool,
}

/// Clear [`BoostIntent`] at the start of every frame.
///
/// Must run before any system that writes intent.
pub fn boost_intent_clear_system(mut intent: ResMut<BoostIntent>) {
    *intent = BoostIntent::default();
}

/// Translate key presses into [`BoostIntent`].
///
/// - **Space** → `jump`
/// - **Left Shift** → `boost`
pub fn keyboard_to_boost_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<BoostIntent>,
) {
    if keys.just_pressed(KeyCode::Space) {
        intent.jump = true;
    }
    if keys.just_pressed(KeyCode::ShiftLeft) {
        intent.boost = true;
    }
}

// ── Core systems ──────────────────────────────────────────────────────────────

/// Advance every controller's boost and cooldown timers by frame time.
pub fn boost_tick_system(time: Res<Time>, mut q: Query<&mut BoostController>) {
    let dt = time.delta_secs();
    for mut controller in q.iter_mut() {
        controller.tick(dt);
    }
}

/// Convert this frame's [`BoostIntent`] into `activate` calls.
///
/// An explicit boost request always attempts activation.  A plain jump also
/// attempts one when the controller's `auto_activate` flag is set, so the
/// boost lands on the same frame as the jump impulse (this system is ordered
/// before [`boosted_jump_system`]).
pub fn apply_boost_intent_system(
    intent: Res<BoostIntent>,
    mut q: Query<(&Transform, &mut BoostController), With<BoostControlled>>,
    mut visual: MessageWriter<BoostVisualEffect>,
    mut audio: MessageWriter<BoostAudioEffect>,
) {
    if !intent.boost && !intent.jump {
        return;
    }

    for (transform, mut controller) in q.iter_mut() {
        let requested = intent.boost || (intent.jump && controller.config().auto_activate);
        if !requested {
            continue;
        }

        let mut sink = MessageEffectSink {
            visual: &mut visual,
            audio: &mut audio,
            origin: transform.translation.truncate(),
        };
        if controller.activate(&mut sink) {
            debug!(
                "[boost] activated (use {}/{})",
                controller.status().current_uses,
                controller.status().max_uses
            );
        }
    }
}

/// Apply the upward jump impulse, scaled by the boost multiplier while a
/// boost is active.
pub fn boosted_jump_system(
    intent: Res<BoostIntent>,
    mut q: Query<(&mut ExternalImpulse, &BoostController), With<BoostControlled>>,
) {
    if !intent.jump {
        return;
    }

    for (mut impulse, controller) in q.iter_mut() {
        let multiplier = if controller.status().active {
            controller.config().boost_multiplier
        } else {
            1.0
        };
        impulse.impulse += Vec2::Y * JUMP_IMPULSE * multiplier;
    }
}

/// Push a changed [`BoostConfig`] resource into every live controller.
///
/// Fires on the first `Update` frame (where the `Startup` write from
/// `load_boost_config` is visible, reaching controllers spawned before it)
/// and whenever the host swaps the config at runtime.  Reconfiguring resets
/// each controller to `Idle` (see [`BoostController::configure`]).
pub fn sync_controller_config_system(
    config: Res<BoostConfig>,
    mut q: Query<&mut BoostController>,
) {
    if !config.is_changed() {
        return;
    }
    for mut controller in q.iter_mut() {
        controller.configure(config.clone());
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Drop-in jump-boost ability.
///
/// Registers the config resource (overridable from `assets/boost.toml`), the
/// effect messages, and the full input → tick → activate → jump pipeline.
/// The host spawns boost-capable entities with a [`BoostController`] (plus
/// [`BoostControlled`] and an `ExternalImpulse` for keyboard-driven jumping);
/// despawning such an entity tears the ability down, since the controller
/// owns both of its timers by value.  The plugin's registry identifier is its
/// type path, as for any Bevy plugin.
pub struct JumpBoostPlugin;

impl Plugin for JumpBoostPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoostConfig>()
            .init_resource::<BoostIntent>()
            .add_message::<BoostVisualEffect>()
            .add_message::<BoostAudioEffect>()
            .add_systems(Startup, load_boost_config)
            .add_systems(
                Update,
                (
                    boost_intent_clear_system,
                    keyboard_to_boost_intent_system,
                    boost_tick_system,
                    apply_boost_intent_system,
                    boosted_jump_system,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    sync_controller_config_system,
                    boost_burst_particle_system,
                    boost_aura_particle_system,
                    particle_update_system,
                    particle_gizmo_system,
                    boost_audio_relay_system,
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── helpers ───────────────────────────────────────────────────────────────

    /// Build a minimal Bevy `App` with just the resources and messages needed
    /// to test the intent → activate → jump pipeline, without Rapier's physics
    /// stepping, input devices, or rendering.
    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<BoostIntent>();
        app.insert_resource(BoostConfig::default());
        app.add_message::<BoostVisualEffect>();
        app.add_message::<BoostAudioEffect>();
        app.add_systems(
            Update,
            (apply_boost_intent_system, boosted_jump_system).chain(),
        );
        app
    }

    fn spawn_test_subject(app: &mut App, config: &BoostConfig) -> Entity {
        app.world_mut()
            .spawn((
                BoostControlled,
                BoostController::from_config(config),
                Transform::default(),
                ExternalImpulse::default(),
            ))
            .id()
    }

    fn run_frame(app: &mut App, intent: BoostIntent) {
        app.insert_resource(intent);
        app.update();
    }

    fn impulse_y(app: &App, entity: Entity) -> f32 {
        app.world().get::<ExternalImpulse>(entity).unwrap().impulse.y
    }

    fn controller(app: &App, entity: Entity) -> &BoostController {
        app.world().get::<BoostController>(entity).unwrap()
    }

    // ── apply_boost_intent_system ─────────────────────────────────────────────

    #[test]
    fn explicit_boost_intent_activates_controller() {
        let mut app = build_test_app();
        let entity = spawn_test_subject(&mut app, &BoostConfig::default());

        run_frame(
            &mut app,
            BoostIntent {
                boost: true,
                jump: false,
            },
        );

        let status = controller(&app, entity).status();
        assert!(status.active);
        assert_eq!(status.current_uses, 1);
    }

    #[test]
    fn plain_jump_does_not_activate_without_auto_activate() {
        let mut app = build_test_app();
        let entity = spawn_test_subject(&mut app, &BoostConfig::default());

        run_frame(
            &mut app,
            BoostIntent {
                jump: true,
                boost: false,
            },
        );

        assert!(!controller(&app, entity).status().active);
    }

    #[test]
    fn auto_activate_boosts_on_plain_jump() {
        let mut app = build_test_app();
        let cfg = BoostConfig {
            auto_activate: true,
            ..Default::default()
        };
        let entity = spawn_test_subject(&mut app, &cfg);

        run_frame(
            &mut app,
            BoostIntent {
                jump: true,
                boost: false,
            },
        );

        assert!(controller(&app, entity).status().active);
    }

    #[test]
    fn activation_writes_visual_and_audio_messages() {
        let mut app = build_test_app();
        spawn_test_subject(&mut app, &BoostConfig::default());

        run_frame(
            &mut app,
            BoostIntent {
                boost: true,
                jump: false,
            },
        );

        let visuals = app
            .world_mut()
            .resource_mut::<Messages<BoostVisualEffect>>()
            .drain()
            .collect::<Vec<_>>();
        assert_eq!(visuals.len(), 1);
        let audios = app
            .world_mut()
            .resource_mut::<Messages<BoostAudioEffect>>()
            .drain()
            .count();
        assert_eq!(audios, 1);
    }

    // ── boosted_jump_system ───────────────────────────────────────────────────

    #[test]
    fn unboosted_jump_applies_base_impulse() {
        let mut app = build_test_app();
        let entity = spawn_test_subject(&mut app, &BoostConfig::default());

        run_frame(
            &mut app,
            BoostIntent {
                jump: true,
                boost: false,
            },
        );

        assert!((impulse_y(&app, entity) - JUMP_IMPULSE).abs() < 1e-3);
    }

    #[test]
    fn boosted_jump_scales_impulse_by_multiplier() {
        let mut app = build_test_app();
        let cfg = BoostConfig {
            auto_activate: true,
            boost_multiplier: 2.0,
            ..Default::default()
        };
        let entity = spawn_test_subject(&mut app, &cfg);

        // Activation is ordered before the jump step, so the boost applies to
        // the very jump that triggered it.
        run_frame(
            &mut app,
            BoostIntent {
                jump: true,
                boost: false,
            },
        );

        assert!((impulse_y(&app, entity) - JUMP_IMPULSE * 2.0).abs() < 1e-3);
    }

    #[test]
    fn jump_during_cooldown_applies_base_impulse() {
        let mut app = build_test_app();
        let cfg = BoostConfig {
            auto_activate: true,
            ..Default::default()
        };
        let entity = spawn_test_subject(&mut app, &cfg);

        app.world_mut()
            .get_mut::<BoostController>(entity)
            .unwrap()
            .start_cooldown();

        run_frame(
            &mut app,
            BoostIntent {
                jump: true,
                boost: false,
            },
        );

        assert!(!controller(&app, entity).status().active);
        assert!((impulse_y(&app, entity) - JUMP_IMPULSE).abs() < 1e-3);
    }

    // ── sync_controller_config_system ─────────────────────────────────────────

    #[test]
    fn config_resource_change_reconfigures_controllers() {
        let mut app = build_test_app();
        app.add_systems(Update, sync_controller_config_system);
        let entity = spawn_test_subject(&mut app, &BoostConfig::default());
        app.update(); // first frame syncs the initial resource value

        app.insert_resource(BoostConfig {
            max_uses: 7,
            ..Default::default()
        });
        app.update();

        assert_eq!(controller(&app, entity).status().max_uses, 7);
    }

    #[test]
    fn startup_loaded_config_reaches_preexisting_controllers() {
        let mut app = build_test_app();
        app.add_systems(Update, sync_controller_config_system);
        // Stand-in for `load_boost_config`: rewrite the resource in `Startup`,
        // exactly as a successful `assets/boost.toml` load does.
        app.add_systems(Startup, |mut config: ResMut<BoostConfig>| {
            config.max_uses = 7;
        });
        let entity = spawn_test_subject(&mut app, &BoostConfig::default());

        app.update();

        assert_eq!(
            controller(&app, entity).status().max_uses,
            7,
            "controllers spawned before the first frame must pick up the startup-loaded config"
        );
    }
}
