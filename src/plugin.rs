//! Bevy plugin wiring the gallery's resources and per-frame systems.

use bevy::ecs::prelude::On;
use bevy::math::Vec3;
use bevy::prelude::*;
use log::{debug, info};
use rand::seq::IndexedRandom;

use crate::actor::{ActorKind, ActorPatch, Animation, AnimationKind};
use crate::ambience::{drift_dust_system, pulse_lights_system, DustField, LightRig};
use crate::animation::{advance_clock_system, animate_actors_system, GalleryClock};
use crate::config::GalleryConfig;
use crate::constants::SPAWN_HEIGHT;
use crate::control::ControlPanel;
use crate::manager::{ActorRemoved, ActorSpawned, ActorWorldExt};
use crate::presenter::{ActorNode, ActorPresenter, ActorVisualRoot, NodeVisibility};
use crate::random::GalleryRng;
use crate::store::ActorStore;

/// Actors placed in the four corners of the room at startup.
pub const SHOWCASE: [(ActorKind, Vec3); 4] = [
    (ActorKind::Humanoid, Vec3::new(-4.0, SPAWN_HEIGHT, -4.0)),
    (ActorKind::Robot, Vec3::new(4.0, SPAWN_HEIGHT, -4.0)),
    (ActorKind::Alien, Vec3::new(-4.0, SPAWN_HEIGHT, 4.0)),
    (ActorKind::Creature, Vec3::new(4.0, SPAWN_HEIGHT, 4.0)),
];

/// Ordered stages of the gallery frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GallerySet {
    /// Copies Bevy time into [`GalleryClock`].
    Clock,
    /// Lights and dust.
    Ambience,
    /// Actor animation.
    Actors,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_actor_spawned(event: On<ActorSpawned>) {
    let ActorSpawned { id, kind } = event.event();
    debug!("observer: {kind} actor {id} joined the gallery");
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_actor_removed(event: On<ActorRemoved>) {
    debug!("observer: actor {} left the gallery", event.event().id);
}

/// Spawns the showcase actors and any configured extras.
///
/// Each showcase actor starts with a randomly chosen animation.
pub fn seed_gallery_system(world: &mut World) {
    let config = world
        .get_resource::<GalleryConfig>()
        .cloned()
        .unwrap_or_default();

    if config.initial_actors {
        for (kind, position) in SHOWCASE {
            let id = world.create_actor(kind, position);
            let animation = random_animation(world);
            world.update_actor(&id, ActorPatch::animation(Animation::of_kind(animation)));
        }
    }
    for spawn in &config.spawns {
        world.create_actor(spawn.kind, spawn.position);
    }

    let count = world.get_resource::<ActorStore>().map_or(0, ActorStore::len);
    info!("gallery opened with {count} actors");
}

fn random_animation(world: &mut World) -> AnimationKind {
    let choice = match world.get_resource_mut::<GalleryRng>() {
        Some(mut rng) => AnimationKind::ALL.choose(&mut rng.0).copied(),
        None => AnimationKind::ALL.choose(&mut rand::rng()).copied(),
    };
    choice.unwrap_or_default()
}

/// Installs the actor subsystem, ambient animators and control panel.
///
/// Insert a [`GalleryConfig`] before adding the plugin to override the
/// defaults; the RNG is seeded from it.
#[derive(Default)]
pub struct GalleryPlugin;

impl Plugin for GalleryPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ActorNode>()
            .register_type::<ActorVisualRoot>()
            .register_type::<NodeVisibility>();
        app.add_observer(log_actor_spawned);
        app.add_observer(log_actor_removed);

        app.init_resource::<GalleryConfig>();
        app.init_resource::<ActorStore>();
        app.init_resource::<ActorPresenter>();
        app.init_resource::<GalleryClock>();
        app.init_resource::<ControlPanel>();
        app.init_resource::<LightRig>();

        let world = app.world_mut();
        if !world.contains_resource::<GalleryRng>() {
            let seed = world.resource::<GalleryConfig>().seed;
            world.insert_resource(GalleryRng::from_seed_option(seed));
        }
        if !world.contains_resource::<DustField>() {
            let dust = DustField::with_default_count(&mut world.resource_mut::<GalleryRng>().0);
            world.insert_resource(dust);
        }

        app.configure_sets(
            Update,
            (GallerySet::Clock, GallerySet::Ambience, GallerySet::Actors).chain(),
        );
        app.add_systems(Startup, seed_gallery_system);
        app.add_systems(Update, advance_clock_system.in_set(GallerySet::Clock));
        app.add_systems(
            Update,
            (pulse_lights_system, drift_dust_system).in_set(GallerySet::Ambience),
        );
        app.add_systems(Update, animate_actors_system.in_set(GallerySet::Actors));
    }
}
