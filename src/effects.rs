//! Boost effect triggering: the sink interface, Bevy messages, and particles.
//!
//! ## Design
//!
//! The controller fires effects through the narrow [`EffectSink`] trait —
//! `trigger_visual(color)` and `trigger_audio()`, fire-and-forget, no return
//! value consumed.  The production sink ([`MessageEffectSink`]) converts those
//! calls into Bevy messages; downstream systems turn the messages into
//! particle bursts and (in the host game) sound playback.  Tests substitute a
//! recording sink, so the state machine can be exercised with no `App` at all.
//!
//! | System                       | Schedule | Purpose                               |
//! |------------------------------|----------|---------------------------------------|
//! | `boost_burst_particle_system`| Update   | Spawn a burst per `BoostVisualEffect` |
//! | `boost_audio_relay_system`   | Update   | Log `BoostAudioEffect` for the host   |
//! | `boost_aura_particle_system` | Update   | Trickle particles while boost active  |
//! | `particle_update_system`     | Update   | Move, age, and despawn particles      |
//! | `particle_gizmo_system`      | Update   | Draw particles as fading circles      |
//!
//! Particles are drawn with `Gizmos` circles rather than meshes: a boost burst
//! is a handful of short-lived dots, not worth a mesh/material pipeline.

use crate::constants::{
    AURA_PARTICLE_COUNT, BURST_PARTICLE_COUNT, PARTICLE_LIFETIME, PARTICLE_RADIUS,
    PARTICLE_SPEED_MAX, PARTICLE_SPEED_MIN,
};
use bevy::prelude::*;
use rand::Rng;

// ── Sink interface ────────────────────────────────────────────────────────────

/// Fire-and-forget effect triggers invoked by the boost controller.
///
/// Implementations own no state relevant to the state machine's correctness;
/// the controller never reads anything back.
pub trait EffectSink {
    /// Fire the visual effect (particle burst) in the given colour.
    fn trigger_visual(&mut self, color: [f32; 3]);
    /// Fire the activation sound.
    fn trigger_audio(&mut self);
}

/// Sink that discards every trigger.  Useful for headless callers that want
/// the state machine without any effect plumbing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEffectSink;

impl EffectSink for NullEffectSink {
    fn trigger_visual(&mut self, _color: [f32; 3]) {}
    fn trigger_audio(&mut self) {}
}

// ── Messages ──────────────────────────────────────────────────────────────────

/// A boost activation requested its particle burst at `position`.
#[derive(Message, Debug, Clone, Copy)]
pub struct BoostVisualEffect {
    /// World-space origin of the burst.
    pub position: Vec2,
    /// Burst colour (sRGB, 0–1 per channel).
    pub color: [f32; 3],
}

/// A boost activation requested its sound cue.
///
/// Audio decoding/playback is the host game's concern; this module only
/// raises the trigger.
#[derive(Message, Debug, Clone, Copy)]
pub struct BoostAudioEffect;

/// Production [`EffectSink`]: converts triggers into Bevy messages.
///
/// Built inside a system from its `MessageWriter` parameters plus the world
/// position of the activating entity.
pub struct MessageEffectSink<'a, 'b, 'w1, 'w2> {
    pub visual: &'a mut MessageWriter<'w1, BoostVisualEffect>,
    pub audio: &'b mut MessageWriter<'w2, BoostAudioEffect>,
    /// World-space position attached to visual triggers.
    pub origin: Vec2,
}

impl EffectSink for MessageEffectSink<'_, '_, '_, '_> {
    fn trigger_visual(&mut self, color: [f32; 3]) {
        self.visual.write(BoostVisualEffect {
            position: self.origin,
            color,
        });
    }

    fn trigger_audio(&mut self) {
        self.audio.write(BoostAudioEffect);
    }
}

/// Test sink that records every trigger in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingEffectSink {
    pub visual_calls: Vec<[f32; 3]>,
    pub audio_calls: u32,
}

#[cfg(test)]
impl EffectSink for RecordingEffectSink {
    fn trigger_visual(&mut self, color: [f32; 3]) {
        self.visual_calls.push(color);
    }

    fn trigger_audio(&mut self) {
        self.audio_calls += 1;
    }
}

// ── Particle entity ───────────────────────────────────────────────────────────

/// Short-lived visual particle entity, drawn as a fading gizmo circle.
#[derive(Component, Debug)]
pub struct BoostParticle {
    /// World-space velocity (u/s).
    pub velocity: Vec2,
    /// Time alive so far (s).
    pub age: f32,
    /// Total lifetime (s); entity is despawned when `age >= lifetime`.
    pub lifetime: f32,
    /// Base colour (sRGB, 0–1 per channel); alpha fades with age.
    pub color: [f32; 3],
}

/// Spawn `count` particles radiating from `origin` with randomised direction,
/// speed, and lifetime jitter.
pub fn spawn_boost_particles(commands: &mut Commands, origin: Vec2, color: [f32; 3], count: usize) {
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        let angle = rng.gen_range(0.0_f32..std::f32::consts::TAU);
        let speed = rng.gen_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        let velocity = Vec2::from_angle(angle) * speed;
        let lifetime = PARTICLE_LIFETIME * rng.gen_range(0.7_f32..1.3_f32);
        let offset = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));

        commands.spawn((
            BoostParticle {
                velocity,
                age: 0.0,
                lifetime,
                color,
            },
            Transform::from_translation((origin + offset).extend(0.5)),
        ));
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Spawn a particle burst for every [`BoostVisualEffect`] raised this frame.
pub fn boost_burst_particle_system(
    mut commands: Commands,
    mut bursts: MessageReader<BoostVisualEffect>,
) {
    for burst in bursts.read() {
        spawn_boost_particles(
            &mut commands,
            burst.position,
            burst.color,
            BURST_PARTICLE_COUNT,
        );
    }
}

/// Drain [`BoostAudioEffect`] messages and log them.
///
/// Host games that want actual playback should read the message themselves;
/// this relay only guarantees the queue is consumed in a headless setup.
pub fn boost_audio_relay_system(mut cues: MessageReader<BoostAudioEffect>) {
    for _ in cues.read() {
        debug!("[boost] audio cue");
    }
}

/// Trickle aura particles from every entity whose boost is currently active.
///
/// The aura stops on its own when the boost ends (timer expiry or explicit
/// deactivation) since emission is keyed off the live controller state; no
/// separate "effect off" signal exists.
pub fn boost_aura_particle_system(
    mut commands: Commands,
    time: Res<Time>,
    mut emit_timer: Local<f32>,
    q_boosted: Query<(&Transform, &crate::controller::BoostController)>,
) {
    use crate::constants::AURA_EMIT_INTERVAL;

    *emit_timer -= time.delta_secs();
    if *emit_timer > 0.0 {
        return;
    }
    *emit_timer = AURA_EMIT_INTERVAL;

    for (transform, controller) in q_boosted.iter() {
        if !controller.status().active || !controller.config().visual_effect {
            continue;
        }
        let pos = transform.translation.truncate();
        spawn_boost_particles(
            &mut commands,
            pos,
            controller.config().particle_color,
            AURA_PARTICLE_COUNT,
        );
    }
}

/// Move, age, and despawn expired particles.
pub fn particle_update_system(
    mut commands: Commands,
    time: Res<Time>,
    mut q_particles: Query<(Entity, &mut BoostParticle, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (entity, mut particle, mut transform) in q_particles.iter_mut() {
        particle.age += dt;
        if particle.age >= particle.lifetime {
            commands.entity(entity).despawn();
            continue;
        }
        let delta = particle.velocity * dt;
        transform.translation += delta.extend(0.0);
        // Slight drag so bursts read as puffs instead of shrapnel.
        particle.velocity *= 1.0 - (2.5 * dt).min(1.0);
    }
}

/// Draw each live particle as a circle whose alpha fades linearly with age.
pub fn particle_gizmo_system(mut gizmos: Gizmos, q_particles: Query<(&BoostParticle, &Transform)>) {
    for (particle, transform) in q_particles.iter() {
        let alpha = (1.0 - particle.age / particle.lifetime).clamp(0.0, 1.0);
        let [r, g, b] = particle.color;
        gizmos.circle_2d(
            transform.translation.truncate(),
            PARTICLE_RADIUS,
            Color::srgba(r, g, b, alpha),
        );
    }
}
