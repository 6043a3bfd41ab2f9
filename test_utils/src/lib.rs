//! Utility helpers for tests.
//!
//! Builders for gallery worlds and apps plus assertions over actor records
//! and their scene nodes.

use approx::relative_eq;
use bevy::math::Vec3;
use bevy::prelude::*;
use vernissage::presenter::ActorVisualRoot;
use vernissage::{ActorId, ActorPresenter, ActorStore, GalleryConfig, GalleryPlugin};

/// Tolerance used by the float assertions in this crate.
pub const EPSILON: f32 = 1e-5;

/// A bare world with an empty store and a presenter installed.
#[must_use]
pub fn presented_world() -> World {
    let mut world = World::new();
    world.init_resource::<ActorStore>();
    world.init_resource::<ActorPresenter>();
    world
}

/// A headless-time app running [`GalleryPlugin`] with `config`.
///
/// Startup has not run yet; call `app.update()` to open the gallery.
#[must_use]
pub fn gallery_app(config: GalleryConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(config);
    app.add_plugins(GalleryPlugin);
    app
}

/// Configuration with a fixed seed and no showcase actors.
#[must_use]
pub fn empty_config(seed: u64) -> GalleryConfig {
    GalleryConfig {
        seed: Some(seed),
        initial_actors: false,
        ..GalleryConfig::default()
    }
}

/// Assert that two vectors match component-wise within [`EPSILON`].
///
/// # Panics
/// Panics with both vectors when any component differs.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3) {
    let near = relative_eq!(actual.x, expected.x, epsilon = EPSILON)
        && relative_eq!(actual.y, expected.y, epsilon = EPSILON)
        && relative_eq!(actual.z, expected.z, epsilon = EPSILON);
    assert!(near, "expected {expected:?}, got {actual:?}");
}

/// Transform of the node bound to `id`, if any.
#[must_use]
pub fn node_transform(world: &World, id: &ActorId) -> Option<Transform> {
    let node = world.get_resource::<ActorPresenter>()?.node_for(id)?;
    world.get::<Transform>(node).copied()
}

/// Transform of child `index` of the visual root bound to `id`.
#[must_use]
pub fn part_transform(world: &World, id: &ActorId, index: usize) -> Option<Transform> {
    let binding = world.get_resource::<ActorPresenter>()?.binding(id)?;
    world.get::<ActorVisualRoot>(binding.visual)?;
    let children = world.get::<Children>(binding.visual)?;
    let part = *<[Entity]>::get(children, index)?;
    world.get::<Transform>(part).copied()
}

/// Number of live entities carrying component `C`.
pub fn count_with<C: Component>(world: &mut World) -> usize {
    let mut query = world.query_filtered::<(), With<C>>();
    query.iter(world).count()
}
