//! Serializable view of the actor store for diagnostics.

use serde::Serialize;

use crate::actor::{Actor, ActorKind, AnimationKind};
use crate::store::ActorStore;

/// Point-in-time copy of one actor record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorSnapshot {
    /// Identifier text, e.g. `"actor-0"`.
    pub id: String,
    /// Species.
    pub kind: ActorKind,
    /// World position.
    pub position: [f32; 3],
    /// Euler rotation in radians.
    pub rotation: [f32; 3],
    /// Per-axis scale.
    pub scale: [f32; 3],
    /// Visibility flag.
    pub visible: bool,
    /// Animation state at capture time.
    pub animation: AnimationSnapshot,
}

/// Animation part of an [`ActorSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationSnapshot {
    /// Active animation.
    pub kind: AnimationKind,
    /// Playback speed multiplier.
    pub speed: f32,
    /// Animation clock.
    pub time: f32,
}

impl From<&Actor> for ActorSnapshot {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.to_string(),
            kind: actor.kind,
            position: actor.position.to_array(),
            rotation: actor.rotation.to_array(),
            scale: actor.scale.to_array(),
            visible: actor.visible,
            animation: AnimationSnapshot {
                kind: actor.animation.kind,
                speed: actor.animation.speed,
                time: actor.animation.time,
            },
        }
    }
}

impl ActorSnapshot {
    /// Copies every record in store order.
    #[must_use]
    pub fn capture(store: &ActorStore) -> Vec<Self> {
        store.all().iter().map(Self::from).collect()
    }
}

/// Renders snapshots as pretty-printed JSON.
///
/// # Errors
/// Returns the serializer error if a value cannot be encoded.
pub fn to_json(snapshots: &[ActorSnapshot]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    fn json_lists_actors_in_store_order() -> serde_json::Result<()> {
        let mut store = ActorStore::default();
        store.create(ActorKind::Alien, Vec3::new(-4.0, 0.5, 4.0));
        store.create(ActorKind::Statue, Vec3::ZERO);

        let json = to_json(&ActorSnapshot::capture(&store))?;
        let value: Value = serde_json::from_str(&json)?;

        assert_eq!(value[0]["id"], "actor-0");
        assert_eq!(value[0]["kind"], "alien");
        assert_eq!(value[0]["position"][2], 4.0);
        assert_eq!(value[0]["animation"]["kind"], "idle");
        assert_eq!(value[1]["kind"], "statue");
        Ok(())
    }

    #[rstest]
    fn empty_store_renders_empty_array() -> serde_json::Result<()> {
        let json = to_json(&ActorSnapshot::capture(&ActorStore::default()))?;
        assert_eq!(json, "[]");
        Ok(())
    }
}
