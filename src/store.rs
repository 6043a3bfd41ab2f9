//! Canonical actor storage and identifier allocation.
//!
//! The store owns every [`Actor`] record in creation order. It knows nothing
//! about visuals; [`crate::manager::ActorWorldExt`] pairs each mutation with
//! the matching presenter call.

use bevy::math::Vec3;
use bevy::prelude::Resource;
use log::debug;

use crate::actor::{Actor, ActorId, ActorKind, ActorPatch};

/// Resource holding all live actors in store order.
#[derive(Resource, Debug, Default)]
pub struct ActorStore {
    actors: Vec<Actor>,
    next_index: u64,
}

impl ActorStore {
    /// Allocates a fresh identifier and appends a default record.
    ///
    /// The allocation counter increments unconditionally and never goes back,
    /// so identifiers are not reused after removal.
    ///
    /// # Examples
    /// ```
    /// use bevy::math::Vec3;
    /// use vernissage::actor::ActorKind;
    /// use vernissage::store::ActorStore;
    ///
    /// let mut store = ActorStore::default();
    /// let id = store.create(ActorKind::Robot, Vec3::ZERO).id.clone();
    /// assert_eq!(id.as_str(), "actor-0");
    /// ```
    #[expect(
        clippy::indexing_slicing,
        reason = "The slot was pushed on the line above, so it is in bounds."
    )]
    pub fn create(&mut self, kind: ActorKind, position: Vec3) -> &Actor {
        let id = ActorId::from_index(self.next_index);
        self.next_index += 1;
        debug!("creating {kind} actor {id} at {position:?}");
        let index = self.actors.len();
        self.actors.push(Actor::new(id, kind, position));
        &self.actors[index]
    }

    /// Merges `patch` into the matching record.
    ///
    /// Returns `false` without side effects when `id` is unknown.
    pub fn update(&mut self, id: &ActorId, patch: &ActorPatch) -> bool {
        self.get_mut(id).is_some_and(|actor| {
            actor.apply(patch);
            true
        })
    }

    /// Deletes the matching record, keeping the order of the rest.
    pub fn remove(&mut self, id: &ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|actor| &actor.id == id)?;
        debug!("removing actor {id}");
        Some(self.actors.remove(index))
    }

    /// Returns the first actor in store order strictly within `radius` of
    /// `point`.
    ///
    /// This is a proximity pick: an earlier actor wins over a closer later
    /// one.
    #[must_use]
    pub fn find_near(&self, point: Vec3, radius: f32) -> Option<&Actor> {
        self.actors
            .iter()
            .find(|actor| actor.position.distance(point) < radius)
    }

    /// All actors in store order.
    #[must_use]
    pub fn all(&self) -> &[Actor] {
        &self.actors
    }

    /// Mutable access to all actors in store order.
    pub fn all_mut(&mut self) -> &mut [Actor] {
        &mut self.actors
    }

    /// Looks up an actor by identifier.
    #[must_use]
    pub fn get(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.iter().find(|actor| &actor.id == id)
    }

    /// Looks up an actor by identifier for mutation.
    pub fn get_mut(&mut self, id: &ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|actor| &actor.id == id)
    }

    /// Whether an actor with `id` is live.
    #[must_use]
    pub fn contains(&self, id: &ActorId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the store holds no actors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Index the next created actor will receive.
    #[must_use]
    pub const fn next_index(&self) -> u64 {
        self.next_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{Animation, AnimationKind};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> ActorStore {
        ActorStore::default()
    }

    #[rstest]
    fn ids_are_sequential_from_zero(mut store: ActorStore) {
        let ids: Vec<String> = (0..4)
            .map(|_| store.create(ActorKind::Humanoid, Vec3::ZERO).id.to_string())
            .collect();
        assert_eq!(ids, ["actor-0", "actor-1", "actor-2", "actor-3"]);
    }

    #[rstest]
    fn ids_are_not_reused_after_removal(mut store: ActorStore) {
        let first = store.create(ActorKind::Alien, Vec3::ZERO).id.clone();
        assert!(store.remove(&first).is_some());
        let second = store.create(ActorKind::Alien, Vec3::ZERO).id.clone();
        assert_ne!(first, second);
        assert_eq!(second.as_str(), "actor-1");
        assert_eq!(store.next_index(), 2);
    }

    #[rstest]
    fn update_unknown_id_is_noop(mut store: ActorStore) {
        store.create(ActorKind::Robot, Vec3::ONE);
        let before = store.all().to_vec();
        assert!(!store.update(&ActorId::from("actor-9"), &ActorPatch::visible(false)));
        assert_eq!(store.all(), before.as_slice());
    }

    #[rstest]
    fn update_merges_animation(mut store: ActorStore) {
        let id = store.create(ActorKind::Robot, Vec3::ONE).id.clone();
        let animation = Animation {
            kind: AnimationKind::Walk,
            speed: 2.0,
            time: 0.0,
        };
        assert!(store.update(&id, &ActorPatch::animation(animation)));
        assert_eq!(store.get(&id).map(|actor| actor.animation), Some(animation));
    }

    #[rstest]
    fn remove_preserves_order(mut store: ActorStore) {
        let ids: Vec<ActorId> = (0..3)
            .map(|_| store.create(ActorKind::Statue, Vec3::ZERO).id.clone())
            .collect();
        let [first, middle, last] = ids.as_slice() else {
            panic!("expected three actors, got {}", ids.len());
        };
        store.remove(middle);
        let remaining: Vec<&ActorId> = store.all().iter().map(|actor| &actor.id).collect();
        assert_eq!(remaining, [first, last]);
        assert!(store.remove(middle).is_none());
    }

    #[rstest]
    fn find_near_prefers_store_order_over_distance(mut store: ActorStore) {
        let far = store.create(ActorKind::Humanoid, Vec3::new(0.8, 0.0, 0.0)).id.clone();
        store.create(ActorKind::Robot, Vec3::new(0.1, 0.0, 0.0));
        let hit = store.find_near(Vec3::ZERO, 1.0).map(|actor| actor.id.clone());
        assert_eq!(hit, Some(far));
    }

    #[rstest]
    fn find_near_radius_is_exclusive(mut store: ActorStore) {
        store.create(ActorKind::Creature, Vec3::new(1.0, 0.0, 0.0));
        assert!(store.find_near(Vec3::ZERO, 1.0).is_none());
        assert!(store.find_near(Vec3::ZERO, 1.01).is_some());
    }
}
