mod support;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use geargen::{
    float_types::{Real, tolerance},
    involute::{
        ToothProfile, involute_flank, involute_intersect_angle, rotate_point, xy_location,
    },
};
use nalgebra::Point2;
use support::gear;

fn radius(p: &Point2<Real>) -> Real {
    p.coords.norm()
}

#[test]
fn involute_starts_on_base_circle() {
    for br in [1.0, 37.5, 1000.0, 86_602.5] {
        assert_eq!(involute_intersect_angle(br, br), 0.0);
        let p = xy_location(br, 0.0);
        assert_eq!(p, Point2::new(br, 0.0));
    }
}

#[test]
fn flank_points_reach_the_sampled_radius() {
    let br = 1000.0;
    let points: Vec<_> = involute_flank(br, br, 1500.0, 10).collect();
    assert_eq!(points.len(), 11);
    for (i, p) in points.iter().enumerate() {
        let want = br + 50.0 * i as Real;
        assert_relative_eq!(radius(p), want, max_relative = tolerance());
    }
}

#[test]
fn flank_iterator_is_restartable() {
    let flank = involute_flank(500.0, 500.0, 800.0, 100);
    let first: Vec<_> = flank.clone().collect();
    let second: Vec<_> = flank.collect();
    assert_eq!(first, second);
}

#[test]
fn radial_root_when_root_inside_base() {
    // root 74 mm, base 86.6 mm
    let tooth = ToothProfile::new(&gear(100.0, 10, 30.0), 1000.0, 100);
    assert!(tooth.has_radial_root());
    assert_eq!(tooth.upper.len(), 102);
    assert_relative_eq!(tooth.upper[0].x, 37_000.0, max_relative = tolerance());
    assert_eq!(tooth.upper[0].y, 0.0);
    assert_relative_eq!(radius(&tooth.upper[1]), tooth.base_radius, max_relative = tolerance());
    assert_relative_eq!(
        radius(&tooth.upper[tooth.upper.len() - 1]),
        60_000.0,
        max_relative = tolerance()
    );
}

#[test]
fn involute_starts_at_root_outside_base() {
    // 200 teeth at 20°: root 98.8 mm, base 93.97 mm
    let tooth = ToothProfile::new(&gear(100.0, 200, 20.0), 1000.0, 100);
    assert!(!tooth.has_radial_root());
    assert_eq!(tooth.upper.len(), 101);
    assert_relative_eq!(radius(&tooth.upper[0]), 49_400.0, max_relative = tolerance());
    assert_relative_eq!(radius(&tooth.upper[100]), 50_500.0, max_relative = tolerance());
}

#[test]
fn flanks_are_mirror_images() {
    let tooth = ToothProfile::new(&gear(46.0, 7, 25.0), 1000.0, 100);
    let upper: Vec<_> = tooth.placed_upper().collect();
    let lower: Vec<_> = tooth.placed_lower().collect();
    assert_eq!(upper.len(), lower.len());
    for (u, l) in upper.iter().zip(&lower) {
        assert_abs_diff_eq!(u.x, l.x, epsilon = 1e-6);
        assert_abs_diff_eq!(u.y, -l.y, epsilon = 1e-6);
    }
}

#[test]
fn tooth_is_centred_on_pitch_circle() {
    for (pd, n, a) in [(100.0, 10, 30.0), (200.0, 8, 25.0), (46.6, 7, 25.0), (153.3, 23, 25.0)] {
        let tooth = ToothProfile::new(&gear(pd, n, a), 1000.0, 100);
        assert_relative_eq!(
            tooth.half_thickness_at_pitch(),
            tooth.angular_pitch / 4.0,
            max_relative = tolerance()
        );
        assert!(tooth.offset < 0.0);
    }
}

fn check_arcs(tooth: &ToothProfile) {
    let (from, to) = tooth.crest_arc();
    assert_relative_eq!(radius(&from), tooth.outside_radius, max_relative = tolerance());
    assert_relative_eq!(radius(&to), tooth.outside_radius, max_relative = tolerance());
    // symmetric about the tooth axis
    assert_relative_eq!(from.y, -to.y, max_relative = tolerance());
    assert!(from.y < 0.0);

    let (from, to) = tooth.root_arc();
    assert_relative_eq!(radius(&from), tooth.root_radius, max_relative = tolerance());
    assert_relative_eq!(radius(&to), tooth.root_radius, max_relative = tolerance());
    // the gap is centred half a pitch round from the tooth
    let sum = from.y.atan2(from.x) + to.y.atan2(to.x);
    assert_abs_diff_eq!(sum, tooth.angular_pitch, epsilon = tolerance());

    // foot of this tooth's lower flank to the foot of the next tooth's upper flank
    let lower_foot = tooth.placed_lower().next().unwrap();
    let next_upper_foot = rotate_point(&tooth.placed_upper().next().unwrap(), tooth.angular_pitch);
    let span = tooth.root_radius;
    for (got, want) in [(from, lower_foot), (to, next_upper_foot)] {
        assert_abs_diff_eq!(got.x, want.x, epsilon = tolerance() * span);
        assert_abs_diff_eq!(got.y, want.y, epsilon = tolerance() * span);
    }
}

#[test]
fn crest_and_root_arcs() {
    // root inside the base circle: the arc joins the radial root segments
    let tooth = ToothProfile::new(&gear(100.0, 10, 30.0), 1000.0, 100);
    assert!(tooth.has_radial_root());
    check_arcs(&tooth);
}

#[test]
fn root_arc_joins_involute_feet_outside_base() {
    let tooth = ToothProfile::new(&gear(100.0, 200, 20.0), 1000.0, 100);
    assert!(!tooth.has_radial_root());
    assert!(tooth.has_root_circle());
    check_arcs(&tooth);

    // the feet sit off the tooth axis, so the gap is narrower than a full pitch
    let (from, to) = tooth.root_arc();
    let gap = to.y.atan2(to.x) - from.y.atan2(from.x);
    assert!(gap > 0.0 && gap < tooth.angular_pitch);
}

#[test]
fn sampling_scales_linearly() {
    let g = gear(60.0, 12, 20.0);
    let fine = ToothProfile::new(&g, 1000.0, 100);
    let coarse = ToothProfile::new(&g, 10.0, 100);
    assert_relative_eq!(fine.offset, coarse.offset, max_relative = tolerance());
    for (f, c) in fine.upper.iter().zip(&coarse.upper) {
        assert_relative_eq!(f.x, c.x * 100.0, max_relative = tolerance());
    }
}
