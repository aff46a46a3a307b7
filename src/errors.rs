//! Validation errors

use crate::float_types::Real;

/// Everything that can be wrong with the numbers describing a gear, a gear pair or a render.
///
/// Non-finite inputs (NaN, ±∞) fail the same range checks as out-of-range values, so a
/// successfully constructed value never carries them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (NonPositivePitchDiameter) Pitch diameter must be a finite number > 0
    #[error("(NonPositivePitchDiameter) Pitch diameter must be > 0, got {0}")]
    NonPositivePitchDiameter(Real),
    /// (TooFewTeeth) A gear needs at least two teeth
    #[error("(TooFewTeeth) A gear needs at least 2 teeth, got {0}")]
    TooFewTeeth(usize),
    /// (PressureAngleOutOfRange) Pressure angle must lie strictly between 0° and 90°
    #[error("(PressureAngleOutOfRange) Pressure angle must be between 0 and 90 degrees (exclusive), got {0}")]
    PressureAngleOutOfRange(Real),
    /// (NegativeBacklash) Backlash allowance cannot be negative
    #[error("(NegativeBacklash) Backlash angle must be >= 0, got {0}")]
    NegativeBacklash(Real),
    /// (NonPositiveCenterDistance) The distance between gear centers must be > 0
    #[error("(NonPositiveCenterDistance) Center distance must be > 0, got {0}")]
    NonPositiveCenterDistance(Real),
    /// (RotationOutOfRange) Mesh rotation is a percentage of one tooth pitch
    #[error("(RotationOutOfRange) Rotation must be a percentage in [0, 100], got {0}")]
    RotationOutOfRange(Real),
    /// (NonPositiveScale) Output resolution must be at least one unit per mm
    #[error("(NonPositiveScale) Drawing scale must be > 0 units per mm, got {0}")]
    NonPositiveScale(i64),
    /// (TooFewFlankSteps) An involute flank needs at least one sampling step
    #[error("(TooFewFlankSteps) Involute flanks need at least 1 sampling step, got {0}")]
    TooFewFlankSteps(usize),
}
