//! Integration tests for actor creation, update and removal across the store
//! and the presenter.

use std::sync::{Arc, Mutex};

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use rstest::{fixture, rstest};
use test_utils::{assert_vec3_near, count_with, node_transform, presented_world};
use vernissage::presenter::{ActorNode, ActorVisualRoot, NodeVisibility};
use vernissage::visual::PartSpec;
use vernissage::{
    ActorId, ActorKind, ActorPatch, ActorPresenter, ActorRemoved, ActorSpawned, ActorStore,
    ActorWorldExt, DEFAULT_PICK_RADIUS,
};

#[fixture]
fn world() -> World {
    presented_world()
}

#[rstest]
fn ids_are_sequential_and_never_reused(mut world: World) {
    let first = world.create_actor(ActorKind::Humanoid, Vec3::ZERO);
    let second = world.create_actor(ActorKind::Robot, Vec3::ZERO);
    assert!(world.remove_actor(&second));
    let third = world.create_actor(ActorKind::Alien, Vec3::ZERO);

    assert_eq!(first.as_str(), "actor-0");
    assert_eq!(second.as_str(), "actor-1");
    assert_eq!(third.as_str(), "actor-2");
}

#[rstest]
#[case::humanoid(ActorKind::Humanoid, 6)]
#[case::robot(ActorKind::Robot, 5)]
#[case::alien(ActorKind::Alien, 8)]
#[case::creature(ActorKind::Creature, 9)]
#[case::statue(ActorKind::Statue, 3)]
fn creation_binds_one_node_with_species_parts(
    mut world: World,
    #[case] kind: ActorKind,
    #[case] parts: usize,
) {
    let id = world.create_actor(kind, Vec3::new(2.0, 0.5, -1.0));

    assert_eq!(world.resource::<ActorPresenter>().len(), 1);
    assert_eq!(count_with::<ActorNode>(&mut world), 1);
    assert_eq!(count_with::<ActorVisualRoot>(&mut world), 1);
    assert_eq!(count_with::<PartSpec>(&mut world), parts);
    let node = node_transform(&world, &id).unwrap_or_else(|| panic!("node missing"));
    assert_vec3_near(node.translation, Vec3::new(2.0, 0.5, -1.0));
}

#[rstest]
fn removal_despawns_whole_hierarchy_and_is_idempotent(mut world: World) {
    let id = world.create_actor(ActorKind::Creature, Vec3::ZERO);
    let keep = world.create_actor(ActorKind::Statue, Vec3::ONE);

    assert!(world.remove_actor(&id));
    assert!(!world.remove_actor(&id));

    assert!(world.resource::<ActorStore>().get(&id).is_none());
    assert!(world.resource::<ActorPresenter>().node_for(&id).is_none());
    assert_eq!(count_with::<ActorNode>(&mut world), 1);
    assert_eq!(count_with::<PartSpec>(&mut world), 3);
    assert!(world.resource::<ActorPresenter>().node_for(&keep).is_some());
}

#[rstest]
fn update_mirrors_only_patched_fields(mut world: World) {
    let id = world.create_actor(ActorKind::Robot, Vec3::ZERO);
    let node = world
        .resource::<ActorPresenter>()
        .node_for(&id)
        .unwrap_or_else(|| panic!("node missing"));
    // Drift the node away from the record to observe what gets copied back.
    if let Some(mut transform) = world.get_mut::<Transform>(node) {
        transform.translation = Vec3::splat(9.0);
    }

    assert!(world.update_actor(&id, ActorPatch::scale(Vec3::splat(2.0))));
    let transform = world.get::<Transform>(node).copied().unwrap_or_default();
    assert_vec3_near(transform.scale, Vec3::splat(2.0));
    assert_vec3_near(transform.translation, Vec3::splat(9.0));

    assert!(world.update_actor(&id, ActorPatch::visible(false)));
    assert_eq!(world.get::<NodeVisibility>(node), Some(&NodeVisibility(false)));
}

#[rstest]
fn update_of_unknown_id_changes_nothing(mut world: World) {
    let id = world.create_actor(ActorKind::Alien, Vec3::ONE);
    let before = world.resource::<ActorStore>().get(&id).cloned();
    assert!(!world.update_actor(&ActorId::from("actor-99"), ActorPatch::position(Vec3::ZERO)));
    assert_eq!(world.resource::<ActorStore>().get(&id).cloned(), before);
}

#[rstest]
fn proximity_pick_returns_first_created_match(mut world: World) {
    let first = world.create_actor(ActorKind::Humanoid, Vec3::new(0.5, 0.0, 0.0));
    world.create_actor(ActorKind::Robot, Vec3::new(0.1, 0.0, 0.0));

    let store = world.resource::<ActorStore>();
    let picked = store.find_near(Vec3::ZERO, DEFAULT_PICK_RADIUS);
    assert_eq!(picked.map(|actor| &actor.id), Some(&first));
    assert!(store.find_near(Vec3::new(0.0, 0.0, 5.0), DEFAULT_PICK_RADIUS).is_none());
}

#[derive(Resource, Default, Clone)]
struct Journal(Arc<Mutex<Vec<String>>>);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must take On<T> by value."
)]
fn record_spawn(event: On<ActorSpawned>, journal: Res<Journal>) {
    if let Ok(mut entries) = journal.0.lock() {
        entries.push(format!("spawned {}", event.event().id));
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must take On<T> by value."
)]
fn record_removal(event: On<ActorRemoved>, journal: Res<Journal>) {
    if let Ok(mut entries) = journal.0.lock() {
        entries.push(format!("removed {}", event.event().id));
    }
}

#[rstest]
fn lifecycle_events_reach_observers(mut world: World) {
    let journal = Journal::default();
    world.insert_resource(journal.clone());
    world.add_observer(record_spawn);
    world.add_observer(record_removal);

    let id = world.create_actor(ActorKind::Statue, Vec3::ZERO);
    world.remove_actor(&id);
    world.remove_actor(&id);

    let entries = journal.0.lock().map(|e| e.clone()).unwrap_or_default();
    assert_eq!(entries, vec!["spawned actor-0", "removed actor-0"]);
}
