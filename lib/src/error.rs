//! Failure kinds of an inference run.

use crate::kepler::state::Quantity;

/// Any failure produced while turning known values into an [`Orbit`].
///
/// [`Orbit`]: crate::kepler::orbits::Orbit
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Impossible(#[from] ImpossibleOrbit),

    #[error(transparent)]
    Malformed(#[from] MalformedInput),
}

/// The supplied combination of known values cannot determine an orbit.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("reference body missing")]
    MissingBody,

    #[error(
        "not enough information provided: {shape_known} of e, rA and rP given without T or a \
         (need exactly 2)"
    )]
    Underdetermined { shape_known: usize },

    #[error("too much information provided: {0}")]
    Overdetermined(Overdetermination),
}

impl ValidationError {
    pub fn is_underdetermined(&self) -> bool {
        matches!(self, Self::Underdetermined { .. })
    }

    pub fn is_overdetermined(&self) -> bool {
        matches!(self, Self::Overdetermined(_))
    }
}

/// Which redundancy made the input overdetermined.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overdetermination {
    #[error("don't provide both orbital period (T) and semi-major axis (a)")]
    PeriodAndSemiMajorAxis,

    #[error("{shape_known} of e, rA and rP given alongside T or a (at most 1 allowed)")]
    ShapeWithSize { shape_known: usize },

    #[error("e, rA and rP all given (exactly 2 allowed)")]
    AllShapeParameters,
}

/// The orbit is mathematically consistent but cannot be flown.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ImpossibleOrbit {
    #[error("this orbit is below the surface: periapsis is {depth:.0} m under the surface")]
    BelowSurface { depth: f64 },

    #[error("this orbit is inside the atmosphere: periapsis is {depth:.0} m below its edge")]
    InsideAtmosphere { depth: f64 },

    #[error(
        "this orbit is outside the sphere of influence: apoapsis is {excess:.0} m beyond it"
    )]
    OutsideSoi { excess: f64 },

    #[error("periapsis ({periapsis:.0} m) is higher than apoapsis ({apoapsis:.0} m)")]
    InvertedApsides { apoapsis: f64, periapsis: f64 },

    #[error("{quantity} must be positive and finite, got {value}")]
    NonPositive { quantity: Quantity, value: f64 },

    #[error("eccentricity must be in [0, 1) for a bound orbit, got {eccentricity}")]
    Unbound { eccentricity: f64 },
}

/// A value could not be read as a number, duration or height.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("invalid value for {quantity}: {input:?} is not a number")]
    Number { quantity: Quantity, input: String },

    #[error(
        "invalid value for {quantity}: {input:?} is not a duration \
         (expected seconds or e.g. \"1h 30m 15s\")"
    )]
    Duration { quantity: Quantity, input: String },

    #[error(
        "invalid value for {quantity}: {input:?} is not a height \
         (expected e.g. \"700000\", \"100km\" or \"100km AS\")"
    )]
    Height { quantity: Quantity, input: String },
}

impl MalformedInput {
    /// The quantity the rejected text was meant for.
    pub fn quantity(&self) -> Quantity {
        match self {
            Self::Number { quantity, .. }
            | Self::Duration { quantity, .. }
            | Self::Height { quantity, .. } => *quantity,
        }
    }
}

#[test]
fn validation_kinds() {
    assert!(ValidationError::Underdetermined { shape_known: 1 }.is_underdetermined());
    assert!(
        ValidationError::Overdetermined(Overdetermination::AllShapeParameters).is_overdetermined()
    );
    assert!(!ValidationError::MissingBody.is_underdetermined());
    assert!(!ValidationError::MissingBody.is_overdetermined());
}

#[test]
fn impossible_orbit_reports_margin() {
    let err = ImpossibleOrbit::InsideAtmosphere { depth: 20000.0 };
    assert_eq!(
        err.to_string(),
        "this orbit is inside the atmosphere: periapsis is 20000 m below its edge"
    );
    let err = OrbitError::from(ImpossibleOrbit::OutsideSoi { excess: 5_840_714.0 });
    assert!(err.to_string().contains("5840714 m beyond"));
}
