//! Gallery animation and layout constants used across systems.
//!
//! The animation values assume a fixed ~60 Hz frame step rather than a
//! measured wall-clock delta.

/// Animation clock increment applied per driver tick before speed scaling.
pub const FRAME_STEP: f32 = 0.016;
/// Distance covered by a walking actor per tick along its yaw.
pub const WALK_STEP: f32 = 0.05;
/// Yaw added to a spinning actor per tick, in radians.
pub const SPIN_STEP: f32 = 0.05;

/// Angular frequency of the idle float.
pub const IDLE_BOB_RATE: f32 = 2.0;
/// Peak vertical offset of the idle float.
pub const IDLE_BOB_AMPLITUDE: f32 = 0.05;
/// Angular frequency of the walking bob.
pub const WALK_BOB_RATE: f32 = 5.0;
/// Peak vertical offset of the walking bob.
pub const WALK_BOB_AMPLITUDE: f32 = 0.1;
/// Angular frequency of the waving arm.
pub const WAVE_RATE: f32 = 3.0;
/// Peak roll of the waving arm, in radians.
pub const WAVE_AMPLITUDE: f32 = 0.5;
/// Child index of the arm swung by the wave animation.
///
/// Positional: humanoid and robot visuals place an arm at this slot.
pub const WAVE_ARM_INDEX: usize = 3;

/// Default radius for proximity picks.
pub const DEFAULT_PICK_RADIUS: f32 = 1.0;

/// Half extent of the square area random spawns are placed in.
pub const SPAWN_HALF_EXTENT: f32 = 7.0;
/// Height at which control-surface spawns are placed.
pub const SPAWN_HEIGHT: f32 = 0.5;
/// Smallest speed the control surface accepts.
pub const MIN_CONTROL_SPEED: f32 = 0.5;
/// Largest speed the control surface accepts.
pub const MAX_CONTROL_SPEED: f32 = 3.0;
/// Granularity of the control-surface speed slider.
pub const CONTROL_SPEED_STEP: f32 = 0.5;
/// Yaw applied by a single rotate button press.
pub const ROTATE_STEP: f32 = std::f32::consts::FRAC_PI_4;

/// Number of dust motes floating in the room.
pub const DUST_MOTE_COUNT: usize = 200;
/// Half extent of the square floor area dust is scattered over.
pub const DUST_HALF_EXTENT: f32 = 10.0;
/// Ceiling height; dust wraps between the floor and this height.
pub const ROOM_HEIGHT: f32 = 6.0;
