//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use geargen::{GearPair, GearProfile, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Round to `places` decimals, for comparing against three-decimal reference tables.
pub fn round_to(value: Real, places: i32) -> Real {
    let shift = (10.0 as Real).powi(places);
    (value * shift).round() / shift
}

pub fn gear(pitch_diameter: Real, teeth: usize, pressure_angle: Real) -> GearProfile {
    GearProfile::new(pitch_diameter, teeth, pressure_angle).expect("valid test gear")
}

/// The stock 7:23 pair on 100 mm centers at 25° pressure angle.
pub fn pair_7_23(rotation: Real) -> GearPair {
    GearPair::from_center_distance(100.0, 7, 23, 25.0, 0.0, rotation).expect("valid test pair")
}
