//! Presentation binding between actor records and scene nodes.
//!
//! `ActorPresenter` keeps one container node per live actor id. The node
//! carries the actor's transform and visibility; its single child is the
//! visual root whose ordered children are the blueprint parts. The presenter
//! never owns actor state: it holds `Entity` handles only and copies values
//! out of the store when asked to.

use bevy::math::{EulerRot, Quat, Vec3};
use bevy::prelude::*;
use hashbrown::HashMap;
use log::{debug, warn};

use crate::actor::{Actor, ActorId, ActorPatch};
use crate::visual::VisualBlueprint;

/// Marker on the container node of an actor, naming the bound actor.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(Component)]
pub struct ActorNode(pub ActorId);

/// Marker on the visual root spawned beneath an [`ActorNode`].
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct ActorVisualRoot;

/// Display flag mirrored from [`Actor::visible`].
#[derive(Component, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct NodeVisibility(pub bool);

impl Default for NodeVisibility {
    fn default() -> Self {
        Self(true)
    }
}

/// Entity handles bound to one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorBinding {
    /// Container node holding the actor transform.
    pub node: Entity,
    /// Visual root whose children are the blueprint parts.
    pub visual: Entity,
}

/// Converts XYZ Euler angles into a rotation.
///
/// # Examples
/// ```
/// use bevy::math::{Quat, Vec3};
/// use vernissage::presenter::euler_to_quat;
///
/// assert_eq!(euler_to_quat(Vec3::ZERO), Quat::IDENTITY);
/// ```
#[must_use]
pub fn euler_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, euler.x, euler.y, euler.z)
}

/// Builds the node transform matching an actor record.
#[must_use]
pub fn node_transform(actor: &Actor) -> Transform {
    Transform::from_translation(actor.position)
        .with_rotation(euler_to_quat(actor.rotation))
        .with_scale(actor.scale)
}

/// Resource mapping actor ids to their scene nodes.
#[derive(Resource, Debug, Default)]
pub struct ActorPresenter {
    bindings: HashMap<ActorId, ActorBinding>,
}

impl ActorPresenter {
    /// Spawns the node hierarchy for `actor` and records the binding.
    ///
    /// A previous binding for the same id is despawned first so at most one
    /// node exists per actor.
    pub fn bind(
        &mut self,
        world: &mut World,
        actor: &Actor,
        blueprint: &VisualBlueprint,
    ) -> ActorBinding {
        if let Some(stale) = self.bindings.remove(&actor.id) {
            warn!("actor {} was already bound to {:?}; replacing", actor.id, stale.node);
            despawn_if_live(world, stale.node);
        }

        let node = world
            .spawn((
                ActorNode(actor.id.clone()),
                Name::new(actor.id.to_string()),
                node_transform(actor),
                NodeVisibility(actor.visible),
            ))
            .id();
        let visual = world
            .spawn((ActorVisualRoot, Transform::default(), ChildOf(node)))
            .id();
        for part in &blueprint.parts {
            world.spawn((
                part.clone(),
                Name::new(part.name),
                Transform::from_translation(part.translation)
                    .with_rotation(euler_to_quat(part.rotation))
                    .with_scale(part.scale),
                ChildOf(visual),
            ));
        }

        debug!(
            "bound actor {} to node {node:?} with {} parts",
            actor.id,
            blueprint.len()
        );
        let binding = ActorBinding { node, visual };
        self.bindings.insert(actor.id.clone(), binding);
        binding
    }

    /// Copies the transform fields present in `patch` from `actor` onto its
    /// node.
    ///
    /// Fields absent from the patch are left as they are on the node, even if
    /// the record differs. Returns `false` when no live node is bound.
    pub fn mirror(&self, world: &mut World, actor: &Actor, patch: &ActorPatch) -> bool {
        let Some(binding) = self.bindings.get(&actor.id) else {
            return false;
        };
        let Ok(mut node) = world.get_entity_mut(binding.node) else {
            return false;
        };

        if let Some(mut transform) = node.get_mut::<Transform>() {
            if patch.position.is_some() {
                transform.translation = actor.position;
            }
            if patch.rotation.is_some() {
                transform.rotation = euler_to_quat(actor.rotation);
            }
            if patch.scale.is_some() {
                transform.scale = actor.scale;
            }
        }
        if patch.visible.is_some() {
            if let Some(mut visibility) = node.get_mut::<NodeVisibility>() {
                visibility.0 = actor.visible;
            }
        }
        true
    }

    /// Despawns the node bound to `id` and forgets the binding.
    ///
    /// Returns `false` when nothing was bound.
    pub fn unbind(&mut self, world: &mut World, id: &ActorId) -> bool {
        let Some(binding) = self.bindings.remove(id) else {
            return false;
        };
        despawn_if_live(world, binding.node);
        debug!("unbound actor {id}");
        true
    }

    /// Handles bound to `id`, if any.
    #[must_use]
    pub fn binding(&self, id: &ActorId) -> Option<ActorBinding> {
        self.bindings.get(id).copied()
    }

    /// Container node bound to `id`, if any.
    #[must_use]
    pub fn node_for(&self, id: &ActorId) -> Option<Entity> {
        self.bindings.get(id).map(|binding| binding.node)
    }

    /// Number of live bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn despawn_if_live(world: &mut World, entity: Entity) {
    if let Ok(node) = world.get_entity_mut(entity) {
        node.despawn();
    }
}
