#![cfg_attr(docsrs, feature(doc_cfg))]
//! Actor subsystem of a walkable virtual art gallery.
//!
//! The [`store::ActorStore`] is the single source of truth for actor records.
//! The presenter mirrors those records onto scene nodes, the animation driver
//! advances them every frame, and the control panel edits them between
//! frames. [`GalleryPlugin`] wires all of it into a Bevy app.
pub mod actor;
pub mod ambience;
pub mod animation;
pub mod config;
pub mod constants;
pub mod control;
pub mod logging;
pub mod manager;
pub mod plugin;
pub mod presenter;
pub mod random;
pub mod snapshot;
pub mod store;
pub mod visual;
pub use constants::*;

// Re-export commonly used items
pub use actor::{Actor, ActorId, ActorKind, ActorPatch, Animation, AnimationKind};
pub use animation::GalleryClock;
pub use config::{Args, GalleryConfig, SpawnSpec};
pub use control::ControlPanel;
pub use logging::init as init_logging;
pub use manager::{ActorRemoved, ActorSpawned, ActorWorldExt};
pub use plugin::{GalleryPlugin, GallerySet};
pub use presenter::ActorPresenter;
pub use random::GalleryRng;
pub use store::ActorStore;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use vernissage::prelude::*;
    //! ```

    pub use crate::control::{ActorListEntry, ControlsState, Turn};
    pub use crate::snapshot::ActorSnapshot;
    pub use crate::{
        ActorId, ActorKind, ActorPatch, ActorStore, ActorWorldExt, AnimationKind, GalleryConfig,
        GalleryPlugin,
    };
}
