//! Involute tooth sampling.
//!
//! Everything here is pure: the samplers return restartable iterators or plain vectors of
//! points, so the tooth outline can be inspected without going through a drawing sink.

use crate::float_types::{Real, TAU};
use crate::gear::GearProfile;
use nalgebra::{Point2, Rotation2};

// -------------------------------------------------------------------------------------------------
// Involute helpers                                                                               //
// -------------------------------------------------------------------------------------------------

/// Unwinding angle at which the involute of a circle of radius `br` reaches radius `r`.
///
/// t(r) = sqrt((r/br)² - 1)
///
/// The curve does not exist inside the base circle; radii below `br` clamp to `t = 0`.
#[inline]
pub fn involute_intersect_angle(br: Real, r: Real) -> Real {
    ((r / br).powi(2) - 1.0).max(0.0).sqrt()
}

/// Classic parametric involute of a circle.
///
/// x = br( cos t + t·sin t )
/// y = br( sin t – t·cos t )
#[inline]
pub fn xy_location(br: Real, ang: Real) -> Point2<Real> {
    Point2::new(
        br * (ang.cos() + ang * ang.sin()),
        br * (ang.sin() - ang * ang.cos()),
    )
}

/// Rotate `p` about the origin by `ang` radians (counter-clockwise for positive angles).
#[inline]
pub fn rotate_point(p: &Point2<Real>, ang: Real) -> Point2<Real> {
    Rotation2::new(ang) * *p
}

/// `steps + 1` radii spaced evenly from `start` to `end`, both included.
pub fn flank_radii(start: Real, end: Real, steps: usize) -> impl Iterator<Item = Real> + Clone {
    let step = (end - start) / steps as Real;
    (0..=steps).map(move |i| if i == steps { end } else { start + step * i as Real })
}

/// Involute points for each radius of [`flank_radii`], base radius `br`.
pub fn involute_flank(
    br: Real,
    start: Real,
    end: Real,
    steps: usize,
) -> impl Iterator<Item = Point2<Real>> + Clone {
    flank_radii(start, end, steps).map(move |r| xy_location(br, involute_intersect_angle(br, r)))
}

// -------------------------------------------------------------------------------------------------
// Single tooth                                                                                   //
// -------------------------------------------------------------------------------------------------

/// The outline of one tooth centred on the +X axis, in drawing units.
///
/// `upper` and `lower` are the two flanks *before* rotation: `lower` is `upper` mirrored in
/// the X axis. They are drawn rotated by `+offset` and `-offset` respectively, which puts the
/// pitch-circle crossings of the flanks a quarter of an angular pitch either side of the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ToothProfile {
    pub upper: Vec<Point2<Real>>,
    pub lower: Vec<Point2<Real>>,
    /// Flank rotation in radians (negative for a right-way-up tooth).
    pub offset: Real,
    pub base_radius: Real,
    pub root_radius: Real,
    pub pitch_radius: Real,
    pub outside_radius: Real,
    /// One full tooth pitch in radians.
    pub angular_pitch: Real,
}

impl ToothProfile {
    /// Sample the tooth of `gear` at `scale` drawing units per mm, with `steps` linear radius
    /// steps from the start of the involute up to the outside circle.
    ///
    /// The involute starts at `max(root, base)`. When the root circle lies inside the base
    /// circle each flank gets an extra leading point on the root circle, on the X axis, giving
    /// a straight radial run up to the base circle.
    pub fn new(gear: &GearProfile, scale: Real, steps: usize) -> Self {
        let base_radius = gear.base_circle_diameter() * scale / 2.0;
        let outside_radius = gear.outside_diameter() * scale / 2.0;
        let root_radius = gear.root_circle_diameter() * scale / 2.0;
        let pitch_radius = gear.pitch_diameter() * scale / 2.0;
        let angular_pitch = TAU / gear.tooth_count() as Real;

        let pitch_point =
            xy_location(base_radius, involute_intersect_angle(base_radius, pitch_radius));
        let offset = -pitch_point.y.atan2(pitch_point.x) - angular_pitch / 4.0;

        let start_radius = root_radius.max(base_radius);
        let mut upper = Vec::with_capacity(steps + 2);
        if base_radius > root_radius {
            upper.push(Point2::new(root_radius, 0.0));
        }
        upper.extend(involute_flank(base_radius, start_radius, outside_radius, steps));
        let lower = upper.iter().map(|p| Point2::new(p.x, -p.y)).collect();

        Self {
            upper,
            lower,
            offset,
            base_radius,
            root_radius,
            pitch_radius,
            outside_radius,
            angular_pitch,
        }
    }

    /// True when the flanks begin with a radial segment from the root circle.
    pub fn has_radial_root(&self) -> bool {
        self.base_radius > self.root_radius
    }

    /// False when the dedendum reaches past the gear center, leaving no root circle to draw.
    pub fn has_root_circle(&self) -> bool {
        self.root_radius > 0.0 && self.root_radius.is_finite()
    }

    /// Upper flank in its drawn position.
    pub fn placed_upper(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.upper.iter().map(|p| rotate_point(p, self.offset))
    }

    /// Lower flank in its drawn position.
    pub fn placed_lower(&self) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.lower.iter().map(|p| rotate_point(p, -self.offset))
    }

    /// End points of the crest arc along the outside circle, tip of the upper flank to tip of
    /// the lower flank.
    pub fn crest_arc(&self) -> (Point2<Real>, Point2<Real>) {
        let from = rotate_point(&self.upper[self.upper.len() - 1], self.offset);
        let to = rotate_point(&self.lower[self.lower.len() - 1], -self.offset);
        (from, to)
    }

    /// End points of the root arc: from the foot of the lower flank to the foot of the upper
    /// flank of the next tooth, one angular pitch further round.
    pub fn root_arc(&self) -> (Point2<Real>, Point2<Real>) {
        let from = rotate_point(&self.lower[0], -self.offset);
        let to = rotate_point(&self.upper[0], self.offset + self.angular_pitch);
        (from, to)
    }

    /// Half the angular width of the tooth at the pitch circle, in radians.
    pub fn half_thickness_at_pitch(&self) -> Real {
        let pitch_point = xy_location(
            self.base_radius,
            involute_intersect_angle(self.base_radius, self.pitch_radius),
        );
        let placed = rotate_point(&pitch_point, self.offset);
        placed.y.atan2(placed.x).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::{PI, tolerance};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn intersect_angle_reference_values() {
        assert_abs_diff_eq!(involute_intersect_angle(100.0, 110.0), 0.458258, epsilon = 1e-6);
        assert_abs_diff_eq!(involute_intersect_angle(200.0, 220.0), 0.458258, epsilon = 1e-6);
        assert_eq!(involute_intersect_angle(100.0, 100.0), 0.0);
        assert_abs_diff_eq!(involute_intersect_angle(100.0, 200.0), 1.732051, epsilon = 1e-6);
        assert_abs_diff_eq!(involute_intersect_angle(100.0, 300.0), 2.828427, epsilon = 1e-6);
        // inside the base circle
        assert_eq!(involute_intersect_angle(100.0, 50.0), 0.0);
    }

    #[test]
    fn xy_location_reference_values() {
        let cases = [
            (100.0, 0.458258, 109.955165, 3.140951),
            (200.0, 0.458258, 219.910331, 6.281902),
            (100.0, 0.0, 100.0, 0.0),
            (100.0, 1.732051, 154.902371, 126.511906),
            (100.0, 2.828427, -8.000432, 299.893291),
        ];
        for (br, ang, x, y) in cases {
            let p = xy_location(br, ang);
            // six-decimal references; f32 only holds them relatively
            assert_relative_eq!(p.x, x, epsilon = 1e-5, max_relative = tolerance());
            assert_relative_eq!(p.y, y, epsilon = 1e-5, max_relative = tolerance());
        }
    }

    #[test]
    fn flank_radii_hits_both_ends() {
        let radii: Vec<Real> = flank_radii(10.0, 20.0, 100).collect();
        assert_eq!(radii.len(), 101);
        assert_eq!(radii[0], 10.0);
        assert_eq!(radii[100], 20.0);
        assert_abs_diff_eq!(radii[50], 15.0, epsilon = tolerance());
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = rotate_point(&Point2::new(2.0, 0.0), PI / 2.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = tolerance());
        assert_abs_diff_eq!(p.y, 2.0, epsilon = tolerance());
    }
}
