#![cfg(feature = "test-support")]
//! Shared fixture for gallery plugin behavioural tests.
//!
//! Owns a `ThreadSafeApp` running `GalleryPlugin` and makes sure
//! `app.finish()` / `app.cleanup()` run exactly once before the first tick.

use std::sync::MutexGuard;

use bevy::prelude::*;
use vernissage::{ActorId, ActorStore, GalleryConfig};

use crate::thread_safe_app::{lock_app, share, SharedApp, ThreadSafeApp};

#[derive(Resource, Debug, Default)]
struct PluginsFinalized;

/// A gallery app that can be ticked from rspec closures.
#[derive(Debug, Clone)]
pub struct GalleryFixture {
    app: SharedApp,
}

impl GalleryFixture {
    /// Builds a headless gallery app for `config`.
    #[must_use]
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            app: share(test_utils::gallery_app(config)),
        }
    }

    /// Locks the underlying `App` for direct inspection or mutation.
    pub fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        lock_app(&self.app)
    }

    /// Advances the application by a single frame.
    pub fn tick(&self) {
        let mut app = self.app_guard();
        if app.world().get_resource::<PluginsFinalized>().is_none() {
            app.finish();
            app.cleanup();
            app.insert_resource(PluginsFinalized);
        }
        app.update();
    }

    /// Ids of every stored actor in creation order.
    pub fn actor_ids(&self) -> Vec<ActorId> {
        let app = self.app_guard();
        app.world()
            .resource::<ActorStore>()
            .all()
            .iter()
            .map(|actor| actor.id.clone())
            .collect()
    }
}
