//! Control surface operations behind the actor panel.
//!
//! Every operation takes exclusive [`World`] access and runs to completion
//! between frames. They are total: acting on a missing selection or an actor
//! that has since been removed does nothing and reports `false`/`None`.

use bevy::math::Vec3;
use bevy::prelude::*;
use log::debug;
use rand::Rng;

use crate::actor::{Actor, ActorId, ActorKind, ActorPatch, Animation, AnimationKind};
use crate::constants::{
    CONTROL_SPEED_STEP, MAX_CONTROL_SPEED, MIN_CONTROL_SPEED, ROTATE_STEP, SPAWN_HALF_EXTENT,
    SPAWN_HEIGHT,
};
use crate::manager::ActorWorldExt;
use crate::random::GalleryRng;
use crate::store::ActorStore;

/// Selection and spawn settings of the actor panel.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ControlPanel {
    /// Actor targeted by animation, speed, rotate and delete controls.
    pub selected: Option<ActorId>,
    /// Species the spawn button creates.
    pub spawn_kind: ActorKind,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            selected: None,
            spawn_kind: ActorKind::Humanoid,
        }
    }
}

/// Direction of a rotate button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise, `-π/4`.
    Left,
    /// Clockwise, `+π/4`.
    Right,
}

impl Turn {
    /// Signed yaw delta of the press.
    #[must_use]
    pub const fn angle(self) -> f32 {
        match self {
            Self::Left => -ROTATE_STEP,
            Self::Right => ROTATE_STEP,
        }
    }
}

/// Row of the actor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorListEntry {
    /// Actor identifier.
    pub id: ActorId,
    /// Actor species.
    pub kind: ActorKind,
    /// Display text, e.g. `"ROBOT 1"`.
    pub label: String,
    /// Whether this row is the current selection.
    pub selected: bool,
}

/// State of the animation controls for the current selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlsState {
    /// Whether the controls accept input.
    pub enabled: bool,
    /// Animation shown in the selector.
    pub animation: AnimationKind,
    /// Value shown on the speed slider.
    pub speed: f32,
}

impl Default for ControlsState {
    fn default() -> Self {
        Self {
            enabled: false,
            animation: AnimationKind::Idle,
            speed: 1.0,
        }
    }
}

/// Snaps `speed` onto the slider domain.
///
/// Returns `None` for non-finite input.
///
/// # Examples
/// ```
/// use vernissage::control::snap_speed;
/// assert_eq!(snap_speed(1.3), Some(1.5));
/// assert_eq!(snap_speed(9.0), Some(3.0));
/// assert_eq!(snap_speed(f32::NAN), None);
/// ```
#[must_use]
pub fn snap_speed(speed: f32) -> Option<f32> {
    if !speed.is_finite() {
        return None;
    }
    let stepped = (speed / CONTROL_SPEED_STEP).round() * CONTROL_SPEED_STEP;
    Some(stepped.clamp(MIN_CONTROL_SPEED, MAX_CONTROL_SPEED))
}

/// Spawns `kind` at a random spot on the floor.
pub fn spawn_random(world: &mut World, kind: ActorKind) -> ActorId {
    let position = match world.get_resource_mut::<GalleryRng>() {
        Some(mut rng) => random_floor_spot(&mut rng.0),
        None => random_floor_spot(&mut rand::rng()),
    };
    world.create_actor(kind, position)
}

/// Spawns the panel's current spawn kind at a random spot.
pub fn spawn_selected_kind(world: &mut World) -> ActorId {
    let kind = world
        .get_resource::<ControlPanel>()
        .map_or(ActorKind::Humanoid, |panel| panel.spawn_kind);
    spawn_random(world, kind)
}

fn random_floor_spot<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
        SPAWN_HEIGHT,
        rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT),
    )
}

/// Selects `id` if it names a live actor.
pub fn select(world: &mut World, id: &ActorId) -> bool {
    let live = world
        .get_resource::<ActorStore>()
        .is_some_and(|store| store.contains(id));
    if live {
        world.get_resource_or_init::<ControlPanel>().selected = Some(id.clone());
        debug!("selected actor {id}");
    }
    live
}

/// Clears the current selection.
pub fn clear_selection(world: &mut World) {
    if let Some(mut panel) = world.get_resource_mut::<ControlPanel>() {
        panel.selected = None;
    }
}

/// Currently selected live actor, if any.
#[must_use]
pub fn selected(world: &World) -> Option<ActorId> {
    let id = world.get_resource::<ControlPanel>()?.selected.clone()?;
    world
        .get_resource::<ActorStore>()
        .is_some_and(|store| store.contains(&id))
        .then_some(id)
}

/// Removes the selected actor and clears the selection.
pub fn delete_selected(world: &mut World) -> Option<ActorId> {
    let id = selected(world)?;
    world.remove_actor(&id);
    clear_selection(world);
    Some(id)
}

/// Switches the selected actor to `kind`, keeping its speed and clock.
pub fn set_selected_animation(world: &mut World, kind: AnimationKind) -> bool {
    with_selected_animation(world, |animation| animation.kind = kind)
}

/// Sets the selected actor's speed, snapped to the slider domain.
pub fn set_selected_speed(world: &mut World, speed: f32) -> bool {
    let Some(snapped) = snap_speed(speed) else {
        return false;
    };
    with_selected_animation(world, |animation| animation.speed = snapped)
}

fn with_selected_animation(
    world: &mut World,
    edit: impl FnOnce(&mut Animation),
) -> bool {
    let Some(id) = selected(world) else {
        return false;
    };
    let Some(mut animation) = world
        .get_resource::<ActorStore>()
        .and_then(|store| store.get(&id))
        .map(|actor| actor.animation)
    else {
        return false;
    };
    edit(&mut animation);
    world.update_actor(&id, ActorPatch::animation(animation))
}

/// Turns the selected actor by a quarter of a right angle.
pub fn rotate_selected(world: &mut World, turn: Turn) -> bool {
    let Some(id) = selected(world) else {
        return false;
    };
    let Some(mut rotation) = world
        .get_resource::<ActorStore>()
        .and_then(|store| store.get(&id))
        .map(|actor| actor.rotation)
    else {
        return false;
    };
    rotation.y += turn.angle();
    world.update_actor(&id, ActorPatch::rotation(rotation))
}

/// Rows of the actor list in store order.
#[must_use]
pub fn actor_list(world: &World) -> Vec<ActorListEntry> {
    let current = selected(world);
    world
        .get_resource::<ActorStore>()
        .map(|store| {
            store
                .all()
                .iter()
                .map(|actor| ActorListEntry {
                    id: actor.id.clone(),
                    kind: actor.kind,
                    label: list_label(actor),
                    selected: current.as_ref() == Some(&actor.id),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Actor list text: upper-case species and allocation number.
fn list_label(actor: &Actor) -> String {
    format!("{} {}", actor.kind.name().to_ascii_uppercase(), actor.id.number())
}

/// Animation controls reflecting the current selection.
#[must_use]
pub fn controls_state(world: &World) -> ControlsState {
    selected(world)
        .and_then(|id| {
            world
                .get_resource::<ActorStore>()
                .and_then(|store| store.get(&id))
                .map(|actor| ControlsState {
                    enabled: true,
                    animation: actor.animation.kind,
                    speed: actor.animation.speed,
                })
        })
        .unwrap_or_default()
}
