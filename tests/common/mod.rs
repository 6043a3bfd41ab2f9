//! Shared builders and assertions for gallery app integration tests.

use anyhow::{Context, Result};
use bevy::prelude::*;
use vernissage::{
    Actor, ActorId, ActorKind, ActorPatch, ActorPresenter, ActorStore, ActorWorldExt, Animation,
    AnimationKind,
};

/// Builder for test `App` instances running the gallery plugin.
pub struct GalleryTestAppBuilder {
    app: App,
}

impl GalleryTestAppBuilder {
    /// Create an app with `MinimalPlugins`, a fixed seed and no showcase.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app: test_utils::gallery_app(test_utils::empty_config(17)),
        }
    }

    /// Create an actor with `animation` before the first frame.
    #[must_use]
    pub fn with_actor(
        mut self,
        kind: ActorKind,
        position: Vec3,
        animation: AnimationKind,
    ) -> (Self, ActorId) {
        let world = self.app.world_mut();
        let id = world.create_actor(kind, position);
        world.update_actor(&id, ActorPatch::animation(Animation::of_kind(animation)));
        (self, id)
    }

    /// Build and return the configured `App`.
    #[must_use]
    pub fn build(self) -> App {
        self.app
    }
}

impl Default for GalleryTestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Assertion helpers over gallery state.
pub struct GalleryAssertions;

impl GalleryAssertions {
    /// Fetch the stored record for `id`.
    pub fn actor(app: &App, id: &ActorId) -> Result<Actor> {
        app.world()
            .resource::<ActorStore>()
            .get(id)
            .cloned()
            .with_context(|| format!("actor {id} missing from store"))
    }

    /// Fetch the node transform bound to `id`.
    pub fn node(app: &App, id: &ActorId) -> Result<Transform> {
        let node = app
            .world()
            .resource::<ActorPresenter>()
            .node_for(id)
            .with_context(|| format!("actor {id} has no node"))?;
        app.world()
            .get::<Transform>(node)
            .copied()
            .context("node lost its Transform")
    }
}
