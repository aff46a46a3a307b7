//! Spur gear geometry.
//!
//! A [`GearProfile`] stores the four design inputs of an involute spur gear and derives every
//! other dimension from them on demand. Nothing is cached, so two queries on equal profiles
//! always agree.

use crate::errors::ValidationError;
use crate::float_types::{DEG_TO_RAD, RAD_TO_DEG, Real};
use std::fmt;

/// The design parameters of one involute spur gear.
///
/// Lengths are in millimetres, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearProfile {
    pitch_diameter: Real,
    tooth_count: usize,
    pressure_angle_deg: Real,
    backlash_deg: Real,
}

impl GearProfile {
    /// Build a gear from its pitch diameter, number of teeth and pressure angle, with no
    /// backlash allowance.
    ///
    /// # Errors
    /// - [`ValidationError::NonPositivePitchDiameter`] unless `pitch_diameter > 0`
    /// - [`ValidationError::TooFewTeeth`] if `tooth_count < 2`
    /// - [`ValidationError::PressureAngleOutOfRange`] unless `0 < pressure_angle_deg < 90`
    pub fn new(
        pitch_diameter: Real,
        tooth_count: usize,
        pressure_angle_deg: Real,
    ) -> Result<Self, ValidationError> {
        Self::with_backlash(pitch_diameter, tooth_count, pressure_angle_deg, 0.0)
    }

    /// Same as [`GearProfile::new`] but with an angular backlash allowance.
    ///
    /// The backlash is carried for callers tuning clearances; none of the derived quantities
    /// nor the rendered outline depend on it.
    pub fn with_backlash(
        pitch_diameter: Real,
        tooth_count: usize,
        pressure_angle_deg: Real,
        backlash_deg: Real,
    ) -> Result<Self, ValidationError> {
        // negated comparisons so that NaN is rejected too
        if !(pitch_diameter > 0.0 && pitch_diameter.is_finite()) {
            return Err(ValidationError::NonPositivePitchDiameter(pitch_diameter));
        }
        if tooth_count < 2 {
            return Err(ValidationError::TooFewTeeth(tooth_count));
        }
        if !(pressure_angle_deg > 0.0 && pressure_angle_deg < 90.0) {
            return Err(ValidationError::PressureAngleOutOfRange(pressure_angle_deg));
        }
        if !(backlash_deg >= 0.0 && backlash_deg.is_finite()) {
            return Err(ValidationError::NegativeBacklash(backlash_deg));
        }

        Ok(Self {
            pitch_diameter,
            tooth_count,
            pressure_angle_deg,
            backlash_deg,
        })
    }

    #[inline]
    pub const fn pitch_diameter(&self) -> Real {
        self.pitch_diameter
    }

    #[inline]
    pub const fn tooth_count(&self) -> usize {
        self.tooth_count
    }

    #[inline]
    pub const fn pressure_angle_deg(&self) -> Real {
        self.pressure_angle_deg
    }

    #[inline]
    pub const fn backlash_deg(&self) -> Real {
        self.backlash_deg
    }

    /// Teeth per millimetre of pitch diameter.
    pub fn diametric_pitch(&self) -> Real {
        self.tooth_count as Real / self.pitch_diameter
    }

    /// Clearance factor, taken as `pressure_angle_deg / 100`.
    ///
    /// This is not the textbook clearance (a small multiple of the module); it is kept
    /// because the dedendum and root circle are defined through it.
    pub fn clearance(&self) -> Real {
        self.pressure_angle_deg / 100.0
    }

    /// Radial height of a tooth above the pitch circle.
    pub fn addendum(&self) -> Real {
        1.0 / self.diametric_pitch()
    }

    /// Radial depth of a tooth gap below the pitch circle.
    pub fn dedendum(&self) -> Real {
        (1.0 + self.clearance()) / self.diametric_pitch()
    }

    /// Diameter of the tip (addendum) circle.
    pub fn outside_diameter(&self) -> Real {
        (self.tooth_count as Real + 2.0) / self.diametric_pitch()
    }

    /// Diameter of the circle the involute flanks unwind from.
    pub fn base_circle_diameter(&self) -> Real {
        self.pitch_diameter * (self.pressure_angle_deg * DEG_TO_RAD).cos()
    }

    /// Diameter of the circle at the bottom of the tooth gaps.
    pub fn root_circle_diameter(&self) -> Real {
        self.pitch_diameter - 2.0 * self.dedendum()
    }

    /// Straight-line tooth thickness measured across the pitch circle.
    pub fn chordal_tooth_thickness(&self) -> Real {
        self.pitch_diameter * ((90.0 * DEG_TO_RAD) / self.tooth_count as Real).sin()
    }

    /// Tooth thickness as an angle at the gear center, half of one angular pitch.
    pub fn angular_tooth_thickness_deg(&self) -> Real {
        360.0 / self.tooth_count as Real / 2.0
    }

    /// Angle in degrees between the start of the involute at the base circle and the point
    /// where it crosses the pitch circle.
    pub fn alpha_angle_deg(&self) -> Real {
        let base = self.base_circle_diameter();
        (self.pitch_diameter.powi(2) - base.powi(2)).sqrt() / base * RAD_TO_DEG
            - self.pressure_angle_deg
    }

    /// One full angular tooth pitch in degrees (`360 / tooth_count`).
    pub fn angular_pitch_deg(&self) -> Real {
        360.0 / self.tooth_count as Real
    }
}

impl fmt::Display for GearProfile {
    /// Fixed-order, three-decimal report of the gear dimensions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pitch Diameter:          {:.3}", self.pitch_diameter)?;
        writeln!(f, "Outside Diameter:        {:.3}", self.outside_diameter())?;
        writeln!(f, "Diametric Pitch:         {:.3}", self.diametric_pitch())?;
        writeln!(f, "Clearance:               {:.3}", self.clearance())?;
        writeln!(f, "Addendum:                {:.3}", self.addendum())?;
        writeln!(f, "Dedendum:                {:.3}", self.dedendum())?;
        writeln!(f, "Base Circle Diameter:    {:.3}", self.base_circle_diameter())?;
        writeln!(f, "Root Circle Diameter:    {:.3}", self.root_circle_diameter())?;
        writeln!(f, "Chordal Tooth Thickness: {:.3}", self.chordal_tooth_thickness())?;
        writeln!(f, "Angular Tooth Thickness: {:.3}", self.angular_tooth_thickness_deg())?;
        writeln!(f, "Alpha Angle:             {:.3}", self.alpha_angle_deg())
    }
}

/// Two externally meshing gears and the point of the mesh cycle to draw them at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearPair {
    pub drive: GearProfile,
    pub driven: GearProfile,
    rotation_percent: Real,
}

impl GearPair {
    /// Pair two gears. `rotation_percent` is how far through one tooth pitch (0–100) the
    /// drive gear has turned.
    pub fn new(
        drive: GearProfile,
        driven: GearProfile,
        rotation_percent: Real,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&rotation_percent) {
            return Err(ValidationError::RotationOutOfRange(rotation_percent));
        }
        Ok(Self {
            drive,
            driven,
            rotation_percent,
        })
    }

    /// Size both gears so that they mesh at `center_distance` with ratio
    /// `driven_teeth / drive_teeth`.
    ///
    /// # Parameters
    /// - `center_distance`: distance between the two gear centers (mm)
    /// - `drive_teeth`, `driven_teeth`: tooth counts (>= 2)
    /// - `pressure_angle_deg`: shared pressure angle
    /// - `backlash_deg`: shared backlash allowance
    /// - `rotation_percent`: mesh position, percent of one tooth pitch
    pub fn from_center_distance(
        center_distance: Real,
        drive_teeth: usize,
        driven_teeth: usize,
        pressure_angle_deg: Real,
        backlash_deg: Real,
        rotation_percent: Real,
    ) -> Result<Self, ValidationError> {
        if !(center_distance > 0.0 && center_distance.is_finite()) {
            return Err(ValidationError::NonPositiveCenterDistance(center_distance));
        }
        for teeth in [drive_teeth, driven_teeth] {
            if teeth < 2 {
                return Err(ValidationError::TooFewTeeth(teeth));
            }
        }

        let ratio = driven_teeth as Real / drive_teeth as Real;
        let drive_pd = (1.0 / (ratio + 1.0)) * center_distance * 2.0;
        let driven_pd = (ratio / (ratio + 1.0)) * center_distance * 2.0;

        let drive =
            GearProfile::with_backlash(drive_pd, drive_teeth, pressure_angle_deg, backlash_deg)?;
        let driven =
            GearProfile::with_backlash(driven_pd, driven_teeth, pressure_angle_deg, backlash_deg)?;
        Self::new(drive, driven, rotation_percent)
    }

    #[inline]
    pub const fn rotation_percent(&self) -> Real {
        self.rotation_percent
    }

    /// Center-to-center distance of the meshing pair, `(pd1 + pd2) / 2`.
    pub fn center_distance(&self) -> Real {
        (self.drive.pitch_diameter() + self.driven.pitch_diameter()) / 2.0
    }

    /// Drive gear rotation in degrees: forward by the mesh fraction of its tooth pitch.
    pub fn drive_rotation_deg(&self) -> Real {
        self.rotation_percent / 100.0 * self.drive.angular_pitch_deg()
    }

    /// Driven gear rotation in degrees: backwards by the mesh fraction of its tooth pitch,
    /// starting half a pitch round when its tooth count is even.
    pub fn driven_rotation_deg(&self) -> Real {
        let baseline = if self.driven.tooth_count() % 2 == 0 {
            180.0 / self.driven.tooth_count() as Real
        } else {
            0.0
        };
        baseline - self.rotation_percent / 100.0 * self.driven.angular_pitch_deg()
    }
}
