//! Synchronous actor lifecycle operations over a Bevy [`World`].
//!
//! Each call mutates the [`ActorStore`] and, when an [`ActorPresenter`] is
//! installed, its scene node in the same call. Without a presenter the store
//! runs headless and visual work is skipped.

use bevy::math::Vec3;
use bevy::prelude::*;
use log::info;

use crate::actor::{ActorId, ActorKind, ActorPatch};
use crate::presenter::ActorPresenter;
use crate::random::GalleryRng;
use crate::store::ActorStore;
use crate::visual::{build_visual, VisualBlueprint};

/// Triggered after an actor has been created and bound.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ActorSpawned {
    /// Identifier of the new actor.
    pub id: ActorId,
    /// Species of the new actor.
    pub kind: ActorKind,
}

/// Triggered after an actor and its node have been removed.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ActorRemoved {
    /// Identifier of the removed actor.
    pub id: ActorId,
}

/// Actor lifecycle operations available on a [`World`].
pub trait ActorWorldExt {
    /// Creates an actor at `position` and binds its visual.
    fn create_actor(&mut self, kind: ActorKind, position: Vec3) -> ActorId;

    /// Merges `patch` into the actor and mirrors transform fields onto its
    /// node. Returns `false` when `id` is unknown.
    fn update_actor(&mut self, id: &ActorId, patch: ActorPatch) -> bool;

    /// Removes the actor record and its node together. Returns `false` when
    /// `id` is unknown.
    fn remove_actor(&mut self, id: &ActorId) -> bool;
}

impl ActorWorldExt for World {
    fn create_actor(&mut self, kind: ActorKind, position: Vec3) -> ActorId {
        let actor = self
            .get_resource_or_init::<ActorStore>()
            .create(kind, position)
            .clone();

        if self.contains_resource::<ActorPresenter>() {
            let blueprint = blueprint_for(self, kind);
            self.resource_scope(|world, mut presenter: Mut<ActorPresenter>| {
                presenter.bind(world, &actor, &blueprint);
            });
        }

        info!("spawned {kind} actor {} at {position:?}", actor.id);
        self.trigger(ActorSpawned {
            id: actor.id.clone(),
            kind,
        });
        actor.id
    }

    fn update_actor(&mut self, id: &ActorId, patch: ActorPatch) -> bool {
        let updated = {
            let Some(mut store) = self.get_resource_mut::<ActorStore>() else {
                return false;
            };
            if !store.update(id, &patch) {
                return false;
            }
            if !patch.touches_transform() {
                return true;
            }
            store.get(id).cloned()
        };
        let Some(actor) = updated else {
            return true;
        };
        self.try_resource_scope(|world, presenter: Mut<ActorPresenter>| {
            presenter.mirror(world, &actor, &patch);
        });
        true
    }

    fn remove_actor(&mut self, id: &ActorId) -> bool {
        let removed = self
            .get_resource_mut::<ActorStore>()
            .and_then(|mut store| store.remove(id))
            .is_some();
        self.try_resource_scope(|world, mut presenter: Mut<ActorPresenter>| {
            presenter.unbind(world, id);
        });
        if removed {
            info!("removed actor {id}");
            self.trigger(ActorRemoved { id: id.clone() });
        }
        removed
    }
}

fn blueprint_for(world: &mut World, kind: ActorKind) -> VisualBlueprint {
    match world.get_resource_mut::<GalleryRng>() {
        Some(mut rng) => build_visual(kind, &mut rng.0),
        None => build_visual(kind, &mut rand::rng()),
    }
}
