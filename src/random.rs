//! Shared random source for visuals, ambience and seeding.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Resource wrapping the gallery's random number generator.
///
/// Seed it to make spawn placement, tentacle tilt and dust layout
/// reproducible across runs.
#[derive(Resource, Debug)]
pub struct GalleryRng(pub StdRng);

impl GalleryRng {
    /// Deterministic generator for `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is provided, otherwise from entropy.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl Default for GalleryRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
