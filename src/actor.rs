//! Actor data model shared by the store, presenter and animation driver.
//!
//! Species and animation kinds are closed enums; every consumer matches on
//! them exhaustively.
use std::fmt;
use std::str::FromStr;

use bevy::math::Vec3;
use bevy::prelude::Reflect;
use serde::Serialize;
use thiserror::Error;

/// Stable identifier of an actor, of the form `actor-<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct ActorId(String);

impl ActorId {
    /// Prefix shared by every allocated identifier.
    pub const PREFIX: &'static str = "actor-";

    /// Builds the identifier for the given allocation index.
    ///
    /// # Examples
    /// ```
    /// use vernissage::actor::ActorId;
    /// assert_eq!(ActorId::from_index(3).as_str(), "actor-3");
    /// ```
    #[must_use]
    pub fn from_index(index: u64) -> Self {
        Self(format!("{}{index}", Self::PREFIX))
    }

    /// Borrows the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Allocation number after the prefix, e.g. `"3"` for `actor-3`.
    ///
    /// Identifiers built from foreign text without the prefix are returned
    /// whole.
    #[must_use]
    pub fn number(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Error returned when a kind name is not part of its closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {family} `{name}`; expected one of: {expected}")]
pub struct ParseKindError {
    /// Which family of kinds was being parsed.
    pub family: &'static str,
    /// The rejected input.
    pub name: String,
    /// Comma separated list of accepted names.
    pub expected: String,
}

impl ParseKindError {
    fn new(family: &'static str, name: &str, accepted: &[&str]) -> Self {
        Self {
            family,
            name: name.to_owned(),
            expected: accepted.join(", "),
        }
    }
}

/// Species of an actor. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    /// Two-armed figure with a cylindrical body.
    Humanoid,
    /// Boxy metal figure with a glowing eye.
    Robot,
    /// Cone-bodied figure with tentacles.
    Alien,
    /// Four-legged round creature.
    Creature,
    /// Stone figure on a pedestal.
    Statue,
}

impl ActorKind {
    /// Every species, in control-surface order.
    pub const ALL: [Self; 5] = [
        Self::Humanoid,
        Self::Robot,
        Self::Alien,
        Self::Creature,
        Self::Statue,
    ];

    /// Lowercase machine name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Humanoid => "humanoid",
            Self::Robot => "robot",
            Self::Alien => "alien",
            Self::Creature => "creature",
            Self::Statue => "statue",
        }
    }

    /// Label shown by the control surface.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Humanoid => "Humanoid",
            Self::Robot => "Robot",
            Self::Alien => "Alien",
            Self::Creature => "Creature",
            Self::Statue => "Statue",
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActorKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                ParseKindError::new("actor kind", s, &Self::ALL.map(Self::name))
            })
    }
}

/// Motion rule applied to an actor each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// Gentle presentation-only float.
    #[default]
    Idle,
    /// Forward steps along the current yaw.
    Walk,
    /// Continuous yaw rotation.
    Spin,
    /// Arm swing on multi-limbed visuals.
    Wave,
}

impl AnimationKind {
    /// Every animation kind, in control-surface order.
    pub const ALL: [Self; 4] = [Self::Idle, Self::Walk, Self::Spin, Self::Wave];

    /// Lowercase machine name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Spin => "spin",
            Self::Wave => "wave",
        }
    }

    /// Label shown by the control surface.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle (Floating)",
            Self::Walk => "Walk",
            Self::Spin => "Spin",
            Self::Wave => "Wave",
        }
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                ParseKindError::new("animation kind", s, &Self::ALL.map(Self::name))
            })
    }
}

/// Per-actor animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Active motion rule.
    pub kind: AnimationKind,
    /// Positive multiplier on the clock increment.
    pub speed: f32,
    /// Local clock; only ever increases.
    pub time: f32,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            kind: AnimationKind::Idle,
            speed: 1.0,
            time: 0.0,
        }
    }
}

impl Animation {
    /// Returns a fresh animation of `kind` at unit speed.
    #[must_use]
    pub fn of_kind(kind: AnimationKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }
}

/// Canonical record of a spawned actor.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Unique identifier.
    pub id: ActorId,
    /// Species; immutable after creation.
    pub kind: ActorKind,
    /// World-space position.
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
    /// Display flag.
    pub visible: bool,
    /// Animation state.
    pub animation: Animation,
    /// Reserved interaction tags; no behaviour reads them yet.
    pub interactions: Vec<String>,
}

impl Actor {
    /// Builds a record with default transform and idle animation.
    #[must_use]
    pub fn new(id: ActorId, kind: ActorKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            visible: true,
            animation: Animation::default(),
            interactions: Vec::new(),
        }
    }

    /// Heading around the vertical axis.
    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.rotation.y
    }

    /// Overwrites every field present in `patch`.
    pub fn apply(&mut self, patch: &ActorPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(animation) = patch.animation {
            self.animation = animation;
        }
        if let Some(interactions) = &patch.interactions {
            self.interactions.clone_from(interactions);
        }
    }
}

/// Partial update merged field by field into an [`Actor`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActorPatch {
    /// Replacement position.
    pub position: Option<Vec3>,
    /// Replacement Euler rotation.
    pub rotation: Option<Vec3>,
    /// Replacement scale.
    pub scale: Option<Vec3>,
    /// Replacement display flag.
    pub visible: Option<bool>,
    /// Replacement animation state.
    pub animation: Option<Animation>,
    /// Replacement interaction tags.
    pub interactions: Option<Vec<String>>,
}

impl ActorPatch {
    /// Patch replacing only the position.
    #[must_use]
    pub fn position(position: Vec3) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Patch replacing only the rotation.
    #[must_use]
    pub fn rotation(rotation: Vec3) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    /// Patch replacing only the scale.
    #[must_use]
    pub fn scale(scale: Vec3) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    /// Patch replacing only the display flag.
    #[must_use]
    pub fn visible(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Self::default()
        }
    }

    /// Patch replacing only the animation state.
    #[must_use]
    pub fn animation(animation: Animation) -> Self {
        Self {
            animation: Some(animation),
            ..Self::default()
        }
    }

    /// Whether any field touched by the presenter is present.
    #[must_use]
    pub const fn touches_transform(&self) -> bool {
        self.position.is_some()
            || self.rotation.is_some()
            || self.scale.is_some()
            || self.visible.is_some()
    }
}
