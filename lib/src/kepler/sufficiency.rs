//! Deciding whether a set of known values pins down exactly one orbit.
//!
//! An orbit has one size (given by either `T` or `a`, which are
//! redundant) and one shape. Once the size is known any one of `e`,
//! `rA`, `rP` fixes the shape; without it, any two of them fix both.

use crate::{
    bodies::Body,
    error::{Overdetermination, ValidationError},
};

use super::state::OrbitalState;

/// The quantity describing the orbit's size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Size {
    Period(f64),
    SemiMajorAxis(f64),
}

/// The quantity describing the orbit's shape once its size is known.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Eccentricity(f64),
    Apoapsis(f64),
    Periapsis(f64),
}

/// A combination of known values that determines exactly one orbit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Determination {
    /// Only the size is known; the orbit is taken to be circular.
    Circular(Size),
    Sized(Size, Shape),
    EccentricityApoapsis { eccentricity: f64, apoapsis: f64 },
    EccentricityPeriapsis { eccentricity: f64, periapsis: f64 },
    Apsides { apoapsis: f64, periapsis: f64 },
}

/// Check that a reference body was found and that `state` determines
/// a single orbit.
pub fn validate(
    body: Option<&Body>,
    state: &OrbitalState,
) -> Result<Determination, ValidationError> {
    if body.is_none() {
        return Err(ValidationError::MissingBody);
    }
    classify(state)
}

/// Sort `state` into the case that determines its orbit.
pub fn classify(state: &OrbitalState) -> Result<Determination, ValidationError> {
    use Determination as D;

    let size = match (state.period(), state.semi_major_axis()) {
        (Some(_), Some(_)) => {
            return Err(ValidationError::Overdetermined(
                Overdetermination::PeriodAndSemiMajorAxis,
            ))
        }
        (Some(t), None) => Some(Size::Period(t)),
        (None, Some(a)) => Some(Size::SemiMajorAxis(a)),
        (None, None) => None,
    };
    let shape_known = state.shape_known();

    match (size, state.eccentricity(), state.apoapsis(), state.periapsis()) {
        (Some(size), None, None, None) => Ok(D::Circular(size)),
        (Some(size), Some(e), None, None) => Ok(D::Sized(size, Shape::Eccentricity(e))),
        (Some(size), None, Some(ra), None) => Ok(D::Sized(size, Shape::Apoapsis(ra))),
        (Some(size), None, None, Some(rp)) => Ok(D::Sized(size, Shape::Periapsis(rp))),
        (Some(_), ..) => Err(ValidationError::Overdetermined(
            Overdetermination::ShapeWithSize { shape_known },
        )),
        (None, Some(eccentricity), Some(apoapsis), None) => Ok(D::EccentricityApoapsis {
            eccentricity,
            apoapsis,
        }),
        (None, Some(eccentricity), None, Some(periapsis)) => Ok(D::EccentricityPeriapsis {
            eccentricity,
            periapsis,
        }),
        (None, None, Some(apoapsis), Some(periapsis)) => Ok(D::Apsides {
            apoapsis,
            periapsis,
        }),
        (None, Some(_), Some(_), Some(_)) => Err(ValidationError::Overdetermined(
            Overdetermination::AllShapeParameters,
        )),
        (None, ..) => Err(ValidationError::Underdetermined { shape_known }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bodies::SolarSystem, kepler::state::OrbitalStateBuilder};

    fn classify_built(builder: OrbitalStateBuilder) -> Result<Determination, ValidationError> {
        classify(&builder.build().unwrap())
    }

    #[test]
    fn missing_body_comes_first() {
        let state = OrbitalState::builder()
            .period(1.0)
            .semi_major_axis(1.0)
            .build()
            .unwrap();
        assert_eq!(validate(None, &state), Err(ValidationError::MissingBody));

        let system = SolarSystem::stock();
        let kerbin = system.get("Kerbin").map(|body| &**body);
        assert_eq!(
            validate(kerbin, &state),
            Err(ValidationError::Overdetermined(
                Overdetermination::PeriodAndSemiMajorAxis
            ))
        );
    }

    #[test]
    fn period_and_axis_together() {
        let err = classify_built(
            OrbitalState::builder()
                .period(2000.0)
                .semi_major_axis(700_000.0)
                .eccentricity(0.1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Overdetermined(Overdetermination::PeriodAndSemiMajorAxis)
        );
    }

    #[test]
    fn size_alone_is_circular() {
        assert_eq!(
            classify_built(OrbitalState::builder().period(2000.0)),
            Ok(Determination::Circular(Size::Period(2000.0)))
        );
        assert_eq!(
            classify_built(OrbitalState::builder().semi_major_axis(7.0e5)),
            Ok(Determination::Circular(Size::SemiMajorAxis(7.0e5)))
        );
    }

    #[test]
    fn size_with_one_shape() {
        assert_eq!(
            classify_built(OrbitalState::builder().semi_major_axis(7.0e5).eccentricity(0.1)),
            Ok(Determination::Sized(
                Size::SemiMajorAxis(7.0e5),
                Shape::Eccentricity(0.1)
            ))
        );
        assert_eq!(
            classify_built(OrbitalState::builder().period(2000.0).apoapsis(8.0e5)),
            Ok(Determination::Sized(Size::Period(2000.0), Shape::Apoapsis(8.0e5)))
        );
        assert_eq!(
            classify_built(OrbitalState::builder().period(2000.0).periapsis(6.8e5)),
            Ok(Determination::Sized(Size::Period(2000.0), Shape::Periapsis(6.8e5)))
        );
    }

    #[test]
    fn size_with_two_shapes() {
        let err = classify_built(
            OrbitalState::builder()
                .semi_major_axis(7.0e5)
                .apoapsis(8.0e5)
                .periapsis(6.0e5),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Overdetermined(Overdetermination::ShapeWithSize { shape_known: 2 })
        );
        assert!(err.is_overdetermined());
    }

    #[test]
    fn shape_only_boundary() {
        let none = classify_built(OrbitalState::builder()).unwrap_err();
        assert_eq!(none, ValidationError::Underdetermined { shape_known: 0 });
        assert!(none.is_underdetermined());

        let one = classify_built(OrbitalState::builder().eccentricity(0.2)).unwrap_err();
        assert_eq!(one, ValidationError::Underdetermined { shape_known: 1 });

        let three = classify_built(
            OrbitalState::builder()
                .eccentricity(0.1)
                .apoapsis(8.0e5)
                .periapsis(7.0e5),
        )
        .unwrap_err();
        assert_eq!(
            three,
            ValidationError::Overdetermined(Overdetermination::AllShapeParameters)
        );
    }

    #[test]
    fn shape_pairs() {
        assert_eq!(
            classify_built(OrbitalState::builder().eccentricity(0.1).apoapsis(8.0e5)),
            Ok(Determination::EccentricityApoapsis {
                eccentricity: 0.1,
                apoapsis: 8.0e5
            })
        );
        assert_eq!(
            classify_built(OrbitalState::builder().eccentricity(0.1).periapsis(7.0e5)),
            Ok(Determination::EccentricityPeriapsis {
                eccentricity: 0.1,
                periapsis: 7.0e5
            })
        );
        assert_eq!(
            classify_built(OrbitalState::builder().apoapsis(8.0e5).periapsis(7.0e5)),
            Ok(Determination::Apsides {
                apoapsis: 8.0e5,
                periapsis: 7.0e5
            })
        );
    }
}
