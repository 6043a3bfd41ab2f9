//! Ambient scene animators driven by the shared gallery clock.
//!
//! These run before the actor driver each frame. They own plain numeric
//! state only; whatever renders lights and dust reads it from the resources.

use std::f32::consts::FRAC_PI_3;

use bevy::math::Vec3;
use bevy::prelude::*;
use rand::Rng;

use crate::animation::GalleryClock;
use crate::constants::{DUST_HALF_EXTENT, DUST_MOTE_COUNT, ROOM_HEIGHT};

const SPOT_BASE: f32 = 2.0;
const SPOT_SWING: f32 = 0.3;
const SPOT_RATE: f32 = 0.5;
const ART_LIGHT_BASE: f32 = 1.5;
const ART_LIGHT_SWING: f32 = 0.2;
const ART_LIGHT_RATE: f32 = 0.8;
const DUST_DRIFT: f32 = 0.005;
const DUST_DRIFT_RATE: f32 = 0.5;
const DUST_PHASE_STEP: f32 = 0.1;
const DUST_SPIN_RATE: f32 = 0.05;

/// Intensities of the gallery's animated lights.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightRig {
    /// Overhead spotlight intensity.
    pub spot_intensity: f32,
    /// Point lights hanging over the art pieces.
    pub art_lights: Vec<ArtLight>,
}

/// One point light over an art piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArtLight {
    /// World-space position.
    pub position: Vec3,
    /// Current intensity.
    pub intensity: f32,
}

impl Default for LightRig {
    fn default() -> Self {
        let art_lights = [
            Vec3::new(-6.0, 3.0, 0.0),
            Vec3::new(6.0, 3.0, 0.0),
            Vec3::new(0.0, 3.0, -7.0),
        ]
        .into_iter()
        .map(|position| ArtLight {
            position,
            intensity: ART_LIGHT_BASE,
        })
        .collect();
        Self {
            spot_intensity: SPOT_BASE,
            art_lights,
        }
    }
}

impl LightRig {
    /// Sets every intensity for clock `time`.
    pub fn update(&mut self, time: f32) {
        self.spot_intensity = SPOT_BASE + (time * SPOT_RATE).sin() * SPOT_SWING;
        for (index, light) in (0u8..).zip(self.art_lights.iter_mut()) {
            let phase = f32::from(index) * FRAC_PI_3;
            light.intensity = ART_LIGHT_BASE + (time * ART_LIGHT_RATE + phase).sin() * ART_LIGHT_SWING;
        }
    }
}

/// A single floating dust mote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mote {
    /// Position inside the room.
    pub position: Vec3,
    /// Hue in `[0, 1)`.
    pub hue: f32,
}

/// Dust motes drifting up and down through the room.
#[derive(Resource, Debug, Clone, PartialEq, Default)]
pub struct DustField {
    /// All motes, in phase order.
    pub motes: Vec<Mote>,
    /// Yaw of the whole field, in radians.
    pub yaw: f32,
}

impl DustField {
    /// Scatters `count` motes over the floor area and room height.
    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let motes = (0..count)
            .map(|_| Mote {
                position: Vec3::new(
                    rng.random_range(-DUST_HALF_EXTENT..DUST_HALF_EXTENT),
                    rng.random_range(0.0..ROOM_HEIGHT),
                    rng.random_range(-DUST_HALF_EXTENT..DUST_HALF_EXTENT),
                ),
                hue: rng.random_range(0.0..1.0),
            })
            .collect();
        Self { motes, yaw: 0.0 }
    }

    /// Scatters the default number of motes.
    pub fn with_default_count<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::scatter(DUST_MOTE_COUNT, rng)
    }

    /// Drifts every mote for clock `time`, wrapping between floor and
    /// ceiling.
    pub fn update(&mut self, time: f32) {
        for (index, mote) in (0u16..).zip(self.motes.iter_mut()) {
            let phase = f32::from(index) * DUST_PHASE_STEP;
            let y = mote.position.y + (time * DUST_DRIFT_RATE + phase).sin() * DUST_DRIFT;
            mote.position.y = if y > ROOM_HEIGHT {
                0.0
            } else if y < 0.0 {
                ROOM_HEIGHT
            } else {
                y
            };
        }
        self.yaw = time * DUST_SPIN_RATE;
    }
}

/// Pulses the light rig from the shared clock.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn pulse_lights_system(clock: Res<GalleryClock>, mut rig: ResMut<LightRig>) {
    rig.update(clock.elapsed);
}

/// Drifts the dust field from the shared clock.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn drift_dust_system(clock: Res<GalleryClock>, mut dust: ResMut<DustField>) {
    dust.update(clock.elapsed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(1.7)]
    #[case(42.0)]
    fn light_intensities_stay_within_swing(#[case] time: f32) {
        let mut rig = LightRig::default();
        rig.update(time);
        assert!((SPOT_BASE - SPOT_SWING..=SPOT_BASE + SPOT_SWING).contains(&rig.spot_intensity));
        for light in &rig.art_lights {
            assert!(
                (ART_LIGHT_BASE - ART_LIGHT_SWING..=ART_LIGHT_BASE + ART_LIGHT_SWING)
                    .contains(&light.intensity)
            );
        }
    }

    #[test]
    fn art_lights_are_phase_shifted() {
        let mut rig = LightRig::default();
        rig.update(0.0);
        let [first, second, _] = rig.art_lights.as_slice() else {
            panic!("expected three art lights");
        };
        assert_relative_eq!(first.intensity, ART_LIGHT_BASE);
        assert_relative_eq!(
            second.intensity,
            ART_LIGHT_BASE + FRAC_PI_3.sin() * ART_LIGHT_SWING
        );
    }

    #[test]
    fn dust_stays_inside_room() {
        let mut dust = DustField::with_default_count(&mut StdRng::seed_from_u64(3));
        assert_eq!(dust.motes.len(), DUST_MOTE_COUNT);
        for frame in 0..500u16 {
            dust.update(f32::from(frame) * 0.016);
        }
        for mote in &dust.motes {
            assert!((0.0..=ROOM_HEIGHT).contains(&mote.position.y));
            assert!(mote.position.x.abs() <= DUST_HALF_EXTENT);
        }
    }

    #[test]
    fn dust_wraps_past_ceiling() {
        let mut dust = DustField {
            motes: vec![Mote {
                position: Vec3::new(0.0, ROOM_HEIGHT, 0.0),
                hue: 0.5,
            }],
            yaw: 0.0,
        };
        // sin(pi/2) pushes the only mote upwards.
        dust.update(std::f32::consts::PI);
        assert_eq!(dust.motes.first().map(|mote| mote.position.y), Some(0.0));
        assert_relative_eq!(dust.yaw, std::f32::consts::PI * DUST_SPIN_RATE);
    }

    #[test]
    fn far_motes_use_index_phase() {
        let mut dust = DustField {
            motes: vec![
                Mote {
                    position: Vec3::ZERO,
                    hue: 0.0,
                };
                150
            ],
            yaw: 0.0,
        };
        dust.update(0.0);
        // Mote 149 takes phase 149 * step, not a running sum.
        let last = dust.motes.last().map_or(f32::NAN, |mote| mote.position.y);
        assert_relative_eq!(last, (149.0_f32 * DUST_PHASE_STEP).sin() * DUST_DRIFT);
    }
}
