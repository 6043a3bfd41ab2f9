//! Per-frame actor animation.
//!
//! [`advance`] is the pure state machine: it moves an actor's clock forward,
//! persists the logical part of its motion rule into the record and returns
//! the [`Motion`] the presentation layer should show. The ECS system then
//! applies that motion to the bound node. Bobbing only ever touches the node;
//! walking X/Z and spinning yaw are written to the record as well.

use bevy::math::Vec3;
use bevy::prelude::*;

use crate::actor::{Actor, AnimationKind};
use crate::constants::{
    FRAME_STEP, IDLE_BOB_AMPLITUDE, IDLE_BOB_RATE, SPIN_STEP, WALK_BOB_AMPLITUDE, WALK_BOB_RATE,
    WALK_STEP, WAVE_AMPLITUDE, WAVE_ARM_INDEX, WAVE_RATE,
};
use crate::presenter::{euler_to_quat, ActorBinding, ActorPresenter, ActorVisualRoot};
use crate::store::ActorStore;
use crate::visual::PartSpec;

/// Elapsed seconds shared by every animated subsystem for the current frame.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct GalleryClock {
    /// Seconds since the gallery started.
    pub elapsed: f32,
}

/// Presentation change produced by one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Set the node height; the record is untouched.
    Bob {
        /// Node height to display.
        y: f32,
    },
    /// Shift the node along X/Z by `step` and set its height.
    Stride {
        /// Horizontal displacement already applied to the record.
        step: Vec3,
        /// Node height to display.
        y: f32,
    },
    /// Replace the node rotation.
    Turn {
        /// Euler rotation copied from the record.
        rotation: Vec3,
    },
    /// Roll the arm slot of the visual around Z.
    Wave {
        /// Roll angle in radians.
        roll: f32,
    },
}

/// Advances `actor` by one tick at shared clock `time`.
///
/// Shorthand for [`tick_clock`] followed by [`apply_motion`]. Returns `None`
/// and leaves the record untouched when the speed is not a positive finite
/// number.
///
/// # Examples
/// ```
/// use bevy::math::Vec3;
/// use vernissage::actor::{Actor, ActorId, ActorKind, AnimationKind};
/// use vernissage::animation::{advance, Motion};
///
/// let mut actor = Actor::new(ActorId::from_index(0), ActorKind::Robot, Vec3::ZERO);
/// actor.animation.kind = AnimationKind::Spin;
/// let motion = advance(&mut actor, 0.0);
/// assert_eq!(motion, Some(Motion::Turn { rotation: Vec3::new(0.0, 0.05, 0.0) }));
/// ```
pub fn advance(actor: &mut Actor, time: f32) -> Option<Motion> {
    tick_clock(actor).then(|| apply_motion(actor, time))
}

/// Moves the actor's animation clock forward by one scaled frame step.
///
/// Returns `false` without touching the clock when the speed is not a
/// positive finite number.
pub fn tick_clock(actor: &mut Actor) -> bool {
    let speed = actor.animation.speed;
    if !speed.is_finite() || speed <= 0.0 {
        return false;
    }
    actor.animation.time += FRAME_STEP * speed;
    true
}

/// Applies the motion rule of the actor's animation at shared clock `time`.
///
/// Walking X/Z and spinning yaw are persisted into the record; the returned
/// [`Motion`] is what the bound node should show.
pub fn apply_motion(actor: &mut Actor, time: f32) -> Motion {
    match actor.animation.kind {
        AnimationKind::Idle => Motion::Bob {
            y: actor.position.y + (time * IDLE_BOB_RATE).sin() * IDLE_BOB_AMPLITUDE,
        },
        AnimationKind::Walk => {
            let yaw = actor.yaw();
            let step = Vec3::new(yaw.cos() * WALK_STEP, 0.0, yaw.sin() * WALK_STEP);
            actor.position.x += step.x;
            actor.position.z += step.z;
            Motion::Stride {
                step,
                y: actor.position.y + (time * WALK_BOB_RATE).sin() * WALK_BOB_AMPLITUDE,
            }
        }
        AnimationKind::Spin => {
            actor.rotation.y += SPIN_STEP;
            Motion::Turn {
                rotation: actor.rotation,
            }
        }
        AnimationKind::Wave => Motion::Wave {
            roll: (time * WAVE_RATE).sin() * WAVE_AMPLITUDE,
        },
    }
}

/// Writes the shared clock from Bevy's [`Time`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn advance_clock_system(time: Res<Time>, mut clock: ResMut<GalleryClock>) {
    clock.elapsed = time.elapsed_secs();
}

/// Advances every actor and presents its motion on the bound node.
///
/// With a presenter installed, an actor whose binding is missing or whose
/// node is gone only has its clock ticked: its record keeps position and
/// rotation so it never moves without a node to show it. Without a
/// presenter the gallery runs headless and every motion rule applies to the
/// records alone.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn animate_actors_system(
    clock: Res<GalleryClock>,
    mut store: ResMut<ActorStore>,
    presenter: Option<Res<ActorPresenter>>,
    mut transforms: Query<&mut Transform>,
    visuals: Query<&Children, With<ActorVisualRoot>>,
    parts: Query<&PartSpec>,
) {
    for actor in store.all_mut() {
        if !tick_clock(actor) {
            continue;
        }
        let Some(presenter) = presenter.as_ref() else {
            apply_motion(actor, clock.elapsed);
            continue;
        };
        let Some(binding) = presenter
            .binding(&actor.id)
            .filter(|binding| transforms.contains(binding.node))
        else {
            continue;
        };
        let motion = apply_motion(actor, clock.elapsed);
        present(motion, binding, &mut transforms, &visuals, &parts);
    }
}

fn present(
    motion: Motion,
    binding: ActorBinding,
    transforms: &mut Query<&mut Transform>,
    visuals: &Query<&Children, With<ActorVisualRoot>>,
    parts: &Query<&PartSpec>,
) {
    match motion {
        Motion::Bob { y } => {
            if let Ok(mut node) = transforms.get_mut(binding.node) {
                node.translation.y = y;
            }
        }
        Motion::Stride { step, y } => {
            if let Ok(mut node) = transforms.get_mut(binding.node) {
                node.translation.x += step.x;
                node.translation.z += step.z;
                node.translation.y = y;
            }
        }
        Motion::Turn { rotation } => {
            if let Ok(mut node) = transforms.get_mut(binding.node) {
                node.rotation = euler_to_quat(rotation);
            }
        }
        Motion::Wave { roll } => {
            // Visuals with three or fewer children have no arm slot.
            let Some(&arm) = visuals
                .get(binding.visual)
                .ok()
                .and_then(|children| <[Entity]>::get(children, WAVE_ARM_INDEX))
            else {
                return;
            };
            let base = parts.get(arm).map_or(Vec3::ZERO, |part| part.rotation);
            if let Ok(mut limb) = transforms.get_mut(arm) {
                limb.rotation = euler_to_quat(Vec3::new(base.x, base.y, roll));
            }
        }
    }
}
