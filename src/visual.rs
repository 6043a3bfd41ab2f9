//! Per-species visual blueprints built from primitive shapes.
//!
//! A blueprint is an ordered list of parts; the order is significant because
//! the wave animation addresses an arm by its child index. Construction is
//! pure apart from the alien tentacle tilt, which draws from the supplied RNG.

use bevy::math::Vec3;
use bevy::prelude::Component;
use rand::Rng;

use crate::actor::ActorKind;

/// Primitive solid a part is drawn with. Dimensions are in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Capped cylinder along the local Y axis.
    Cylinder {
        /// Radius of the top cap.
        radius_top: f32,
        /// Radius of the bottom cap.
        radius_bottom: f32,
        /// Height along Y.
        height: f32,
    },
    /// Sphere centred on the part origin.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
    /// Cone with its apex up the local Y axis.
    Cone {
        /// Base radius.
        radius: f32,
        /// Height along Y.
        height: f32,
    },
    /// Axis-aligned box.
    Cuboid {
        /// Full extents along X, Y and Z.
        size: Vec3,
    },
}

/// Emissive glow applied on top of the base colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emissive {
    /// Packed `0xRRGGBB` glow colour.
    pub color: u32,
    /// Glow strength.
    pub intensity: f32,
}

/// Surface description for a part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSpec {
    /// Packed `0xRRGGBB` base colour.
    pub color: u32,
    /// Metalness in `[0, 1]`.
    pub metalness: f32,
    /// Roughness in `[0, 1]`.
    pub roughness: f32,
    /// Optional glow.
    pub emissive: Option<Emissive>,
}

impl MaterialSpec {
    /// Plain material with no glow.
    #[must_use]
    pub const fn new(color: u32, metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            metalness,
            roughness,
            emissive: None,
        }
    }

    /// Adds a glow to the material.
    #[must_use]
    pub const fn glowing(mut self, color: u32, intensity: f32) -> Self {
        self.emissive = Some(Emissive { color, intensity });
        self
    }
}

const SKIN: MaterialSpec = MaterialSpec::new(0x8b_4513, 0.1, 0.8);
const STEEL: MaterialSpec = MaterialSpec::new(0xc0_c0c0, 0.9, 0.2);
const EYE_LAMP: MaterialSpec = MaterialSpec::new(0xff_0000, 0.0, 1.0).glowing(0xff_0000, 0.8);
const ALIEN_HIDE: MaterialSpec = MaterialSpec::new(0x00_ff00, 0.3, 0.5).glowing(0x00_aa00, 0.3);
const FUR: MaterialSpec = MaterialSpec::new(0xff_6b6b, 0.2, 0.7);
const STONE: MaterialSpec = MaterialSpec::new(0x80_8080, 0.0, 0.9);
const PLACEHOLDER: MaterialSpec = MaterialSpec::new(0x4a_90e2, 0.0, 1.0);

/// Upper bound (exclusive) of the random tentacle tilt, in radians.
pub const TENTACLE_MAX_TILT: f32 = 0.3;

/// One child of a visual root.
///
/// Spawned parts carry this as a component so the driver can restore the
/// base pose of a limb when it overrides a single Euler axis.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PartSpec {
    /// Descriptive part name, e.g. `"right_arm"`.
    pub name: &'static str,
    /// Shape of the part.
    pub primitive: Primitive,
    /// Surface of the part.
    pub material: MaterialSpec,
    /// Offset from the visual root.
    pub translation: Vec3,
    /// XYZ Euler angles relative to the visual root.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl PartSpec {
    fn new(name: &'static str, primitive: Primitive, material: MaterialSpec) -> Self {
        Self {
            name,
            primitive,
            material,
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    const fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.translation = Vec3::new(x, y, z);
        self
    }

    const fn rolled(mut self, z: f32) -> Self {
        self.rotation.z = z;
        self
    }

    const fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// Ordered part list describing one actor visual.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualBlueprint {
    /// Parts in child order.
    pub parts: Vec<PartSpec>,
}

impl VisualBlueprint {
    /// Number of parts, i.e. children of the spawned visual root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the blueprint has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Part at child `index`, if any.
    #[must_use]
    pub fn part(&self, index: usize) -> Option<&PartSpec> {
        self.parts.get(index)
    }
}

const fn cylinder(radius_top: f32, radius_bottom: f32, height: f32) -> Primitive {
    Primitive::Cylinder {
        radius_top,
        radius_bottom,
        height,
    }
}

const fn sphere(radius: f32) -> Primitive {
    Primitive::Sphere { radius }
}

const fn cuboid(x: f32, y: f32, z: f32) -> Primitive {
    Primitive::Cuboid {
        size: Vec3::new(x, y, z),
    }
}

/// Builds the blueprint for `kind`.
///
/// # Examples
/// ```
/// use vernissage::actor::ActorKind;
/// use vernissage::visual::build_visual;
///
/// let humanoid = build_visual(ActorKind::Humanoid, &mut rand::rng());
/// assert_eq!(humanoid.part(3).map(|part| part.name), Some("right_arm"));
/// ```
pub fn build_visual<R: Rng + ?Sized>(kind: ActorKind, rng: &mut R) -> VisualBlueprint {
    let parts = match kind {
        ActorKind::Humanoid => humanoid(),
        ActorKind::Robot => robot(),
        ActorKind::Alien => alien(rng),
        ActorKind::Creature => creature(),
        ActorKind::Statue => statue(),
    };
    VisualBlueprint { parts }
}

/// Builds the blueprint for a species given by name.
///
/// Unknown names fall back to a single box placeholder instead of failing.
pub fn build_visual_by_name<R: Rng + ?Sized>(name: &str, rng: &mut R) -> VisualBlueprint {
    name.parse::<ActorKind>().map_or_else(
        |_| placeholder(),
        |kind| build_visual(kind, rng),
    )
}

/// Single box used when the species is not recognised.
#[must_use]
pub fn placeholder() -> VisualBlueprint {
    VisualBlueprint {
        parts: vec![PartSpec::new("placeholder", cuboid(0.6, 1.8, 0.4), PLACEHOLDER)],
    }
}

fn humanoid() -> Vec<PartSpec> {
    let arm = cylinder(0.08, 0.08, 0.6);
    let leg = cylinder(0.1, 0.1, 0.5);
    vec![
        PartSpec::new("body", cylinder(0.2, 0.25, 0.8), SKIN).at(0.0, 0.4, 0.0),
        PartSpec::new("head", sphere(0.18), SKIN).at(0.0, 1.2, 0.0),
        PartSpec::new("left_arm", arm, SKIN).at(-0.32, 0.65, 0.0).rolled(0.3),
        PartSpec::new("right_arm", arm, SKIN).at(0.32, 0.65, 0.0).rolled(-0.3),
        PartSpec::new("left_leg", leg, SKIN).at(-0.12, 0.0, 0.0),
        PartSpec::new("right_leg", leg, SKIN).at(0.12, 0.0, 0.0),
    ]
}

fn robot() -> Vec<PartSpec> {
    let arm = cuboid(0.1, 0.7, 0.1);
    vec![
        PartSpec::new("torso", cuboid(0.3, 0.8, 0.3), STEEL).at(0.0, 0.4, 0.0),
        PartSpec::new("head", cuboid(0.25, 0.3, 0.25), STEEL).at(0.0, 1.1, 0.0),
        PartSpec::new("eye", sphere(0.05), EYE_LAMP).at(0.08, 1.15, 0.13),
        PartSpec::new("left_arm", arm, STEEL).at(-0.25, 0.6, 0.0),
        PartSpec::new("right_arm", arm, STEEL).at(0.25, 0.6, 0.0),
    ]
}

fn alien<R: Rng + ?Sized>(rng: &mut R) -> Vec<PartSpec> {
    let eye = sphere(0.08);
    let mut parts = vec![
        PartSpec::new("head", sphere(0.25), ALIEN_HIDE).at(0.0, 1.0, 0.0),
        PartSpec::new("left_eye", eye, ALIEN_HIDE).at(-0.1, 1.1, 0.2),
        PartSpec::new("right_eye", eye, ALIEN_HIDE).at(0.1, 1.1, 0.2),
        PartSpec::new(
            "body",
            Primitive::Cone {
                radius: 0.2,
                height: 0.7,
            },
            ALIEN_HIDE,
        )
        .at(0.0, 0.25, 0.0),
    ];
    let quarter = std::f32::consts::FRAC_PI_2;
    parts.extend((0..4u8).map(|i| {
        let angle = f32::from(i) * quarter;
        PartSpec::new("tentacle", cylinder(0.06, 0.04, 0.5), ALIEN_HIDE)
            .at(angle.cos() * 0.2, 0.1, angle.sin() * 0.2)
            .rolled(rng.random_range(0.0..TENTACLE_MAX_TILT))
    }));
    parts
}

fn creature() -> Vec<PartSpec> {
    let ear = sphere(0.1);
    let mut parts = vec![
        PartSpec::new("head", sphere(0.3), FUR).at(0.0, 0.8, 0.0),
        PartSpec::new("snout", sphere(0.15), FUR).at(0.0, 0.7, 0.28),
        PartSpec::new("left_ear", ear, FUR).at(-0.2, 1.15, 0.0),
        PartSpec::new("right_ear", ear, FUR).at(0.2, 1.15, 0.0),
        PartSpec::new("body", sphere(0.28), FUR)
            .at(0.0, 0.1, 0.0)
            .scaled(Vec3::new(1.0, 0.7, 1.2)),
    ];
    parts.extend((0..4u8).map(|i| {
        let side = if i % 2 == 0 { -1.0 } else { 1.0 };
        let end = if i < 2 { -1.0 } else { 1.0 };
        PartSpec::new("leg", cylinder(0.08, 0.08, 0.4), FUR).at(side * 0.15, -0.1, end * 0.15)
    }));
    parts
}

fn statue() -> Vec<PartSpec> {
    vec![
        PartSpec::new("pedestal", cuboid(0.5, 0.3, 0.5), STONE),
        PartSpec::new("body", cuboid(0.25, 0.8, 0.25), STONE).at(0.0, 0.65, 0.0),
        PartSpec::new("head", cuboid(0.22, 0.3, 0.22), STONE).at(0.0, 1.3, 0.0),
    ]
}
