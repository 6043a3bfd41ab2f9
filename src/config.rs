//! Command-line arguments and validated gallery configuration.

use std::num::ParseFloatError;
use std::str::FromStr;

use bevy::math::Vec3;
use bevy::prelude::Resource;
use clap::Parser;
use thiserror::Error;

use crate::actor::{ActorKind, ParseKindError};

/// A virtual art gallery populated by animated actors.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Seed for spawn placement, visuals and dust layout
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run this many frames and exit instead of looping forever
    #[arg(long, value_name = "N")]
    pub frames: Option<u32>,

    /// Start with an empty gallery
    #[arg(long)]
    pub no_initial_actors: bool,

    /// Spawn an extra actor, e.g. `robot@1,0.5,-2` (repeatable)
    #[arg(long = "spawn", value_name = "KIND@X,Y,Z")]
    pub spawns: Vec<SpawnSpec>,

    /// Log every actor as JSON before exiting
    #[arg(long)]
    pub dump_actors: bool,
}

/// Failure to parse a `--spawn` argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnSpecError {
    /// No `@` between kind and coordinates.
    #[error("expected KIND@X,Y,Z, got `{0}`")]
    MissingSeparator(String),
    /// Unknown actor kind.
    #[error(transparent)]
    Kind(#[from] ParseKindError),
    /// Wrong number of coordinates.
    #[error("expected 3 coordinates, got {0}")]
    Arity(usize),
    /// A coordinate is not a number.
    #[error("invalid coordinate `{value}`: {source}")]
    Coordinate {
        /// Offending text.
        value: String,
        /// Underlying parse failure.
        source: ParseFloatError,
    },
    /// A coordinate is infinite or NaN.
    #[error("coordinate `{0}` is not finite")]
    NonFinite(String),
}

/// An actor requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSpec {
    /// Species to create.
    pub kind: ActorKind,
    /// Starting position.
    pub position: Vec3,
}

impl FromStr for SpawnSpec {
    type Err = SpawnSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, coords) = s
            .split_once('@')
            .ok_or_else(|| SpawnSpecError::MissingSeparator(s.to_owned()))?;
        let kind = name.trim().to_ascii_lowercase().parse::<ActorKind>()?;
        let values = coords
            .split(',')
            .map(parse_coordinate)
            .collect::<Result<Vec<f32>, _>>()?;
        let [x, y, z] = values.as_slice() else {
            return Err(SpawnSpecError::Arity(values.len()));
        };
        Ok(Self {
            kind,
            position: Vec3::new(*x, *y, *z),
        })
    }
}

fn parse_coordinate(text: &str) -> Result<f32, SpawnSpecError> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<f32>()
        .map_err(|source| SpawnSpecError::Coordinate {
            value: trimmed.to_owned(),
            source,
        })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SpawnSpecError::NonFinite(trimmed.to_owned()))
    }
}

/// Invalid combination of command-line options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `--frames 0` would exit before anything runs.
    #[error("--frames must be at least 1")]
    ZeroFrames,
    /// `--dump-actors` needs a run that ends on its own.
    #[error("--dump-actors requires --frames")]
    DumpWithoutFrames,
}

/// Validated runtime configuration, inserted as a resource by the plugin.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// RNG seed; entropy when `None`.
    pub seed: Option<u64>,
    /// Frame budget; unbounded when `None`.
    pub frames: Option<u32>,
    /// Whether to seed the four showcase actors at startup.
    pub initial_actors: bool,
    /// Extra actors spawned after the showcase.
    pub spawns: Vec<SpawnSpec>,
    /// Whether to log a JSON snapshot on exit.
    pub dump_actors: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frames: None,
            initial_actors: true,
            spawns: Vec::new(),
            dump_actors: false,
        }
    }
}

impl GalleryConfig {
    /// Builds a configuration from parsed arguments.
    ///
    /// # Errors
    /// Propagates [`GalleryConfig::validate`] failures.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let config = Self {
            seed: args.seed,
            frames: args.frames,
            initial_actors: !args.no_initial_actors,
            spawns: args.spawns.clone(),
            dump_actors: args.dump_actors,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks option combinations.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroFrames`] when the frame budget is zero and
    /// [`ConfigError::DumpWithoutFrames`] when a dump is requested from an
    /// endless run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.frames {
            Some(0) => Err(ConfigError::ZeroFrames),
            None if self.dump_actors => Err(ConfigError::DumpWithoutFrames),
            _ => Ok(()),
        }
    }
}
