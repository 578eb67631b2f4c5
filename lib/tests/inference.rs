//! End-to-end inference runs around stock bodies.

mod common;

use approx::assert_relative_eq;
use kepcalc::{
    error::Overdetermination, solve, ImpossibleOrbit, OrbitError, OrbitalState, ValidationError,
};

#[test]
fn kerbin_low_circular_orbit() {
    let kerbin = common::kerbin();
    let state = OrbitalState::builder()
        .semi_major_axis(700_000.0)
        .eccentricity(0.0)
        .build()
        .unwrap();

    let orbit = solve(Some(&kerbin), &state).unwrap();
    assert_eq!(orbit.apoapsis, 700_000.0);
    assert_eq!(orbit.periapsis, 700_000.0);
    assert_eq!(orbit.eccentricity, 0.0);
    assert_eq!(orbit.apoapsis_altitude, 100_000.0);
    assert_eq!(orbit.periapsis_altitude, 100_000.0);
    // 32 minutes 38 seconds
    assert_relative_eq!(orbit.period, 1958.13, epsilon = 0.01);
    let period = orbit.period_duration().unwrap();
    assert_eq!((period.whole_hours(), period.minutes(), period.seconds()), (0, 32, 38));
}

#[test]
fn period_alone_is_circular() {
    let kerbin = common::kerbin();
    let state = OrbitalState::builder().period(5400.0).build().unwrap();
    let orbit = solve(Some(&kerbin), &state).unwrap();
    assert!(orbit.is_circular());
    assert_eq!(orbit.apoapsis, orbit.semi_major_axis);
    assert_eq!(orbit.periapsis, orbit.semi_major_axis);
    assert_relative_eq!(orbit.period, 5400.0, max_relative = 1e-12);
}

#[test]
fn missing_body() {
    let state = OrbitalState::builder().period(5400.0).build().unwrap();
    assert_eq!(
        solve(None, &state),
        Err(OrbitError::Validation(ValidationError::MissingBody))
    );

    let overdetermined = OrbitalState::builder()
        .period(5400.0)
        .semi_major_axis(700_000.0)
        .build()
        .unwrap();
    assert_eq!(
        solve(None, &overdetermined),
        Err(OrbitError::Validation(ValidationError::MissingBody))
    );
}

#[test]
fn sufficiency_boundary() {
    let kerbin = common::kerbin();
    let run = |state: OrbitalState| solve(Some(&kerbin), &state);

    let zero = OrbitalState::builder().build().unwrap();
    let one = OrbitalState::builder().apoapsis(900_000.0).build().unwrap();
    let two = OrbitalState::builder()
        .apoapsis(900_000.0)
        .periapsis(700_000.0)
        .build()
        .unwrap();
    let three = OrbitalState::builder()
        .eccentricity(0.125)
        .apoapsis(900_000.0)
        .periapsis(700_000.0)
        .build()
        .unwrap();

    for state in [zero, one] {
        match run(state) {
            Err(OrbitError::Validation(err)) => assert!(err.is_underdetermined()),
            other => panic!("expected underdetermined, got {other:?}"),
        }
    }
    assert_eq!(
        run(three),
        Err(OrbitError::Validation(ValidationError::Overdetermined(
            Overdetermination::AllShapeParameters
        )))
    );

    let orbit = run(two).unwrap();
    assert_eq!(orbit.semi_major_axis, 800_000.0);
    assert_eq!(orbit.eccentricity, 0.125);
}

#[test]
fn surface_rejection() {
    let kerbin = common::kerbin();
    let with_periapsis = |rp: f64| {
        let state = OrbitalState::builder()
            .apoapsis(1_000_000.0)
            .periapsis(rp)
            .build()
            .unwrap();
        solve(Some(&kerbin), &state)
    };

    assert!(matches!(
        with_periapsis(650_000.0),
        Err(OrbitError::Impossible(ImpossibleOrbit::InsideAtmosphere { .. }))
    ));
    assert!(matches!(
        with_periapsis(500_000.0),
        Err(OrbitError::Impossible(ImpossibleOrbit::BelowSurface { .. }))
    ));
    assert!(with_periapsis(700_000.0).is_ok());
}

#[test]
fn airless_body_allows_low_periapsis() {
    let mun = common::mun();
    let state = OrbitalState::builder()
        .periapsis(205_000.0)
        .eccentricity(0.0)
        .build()
        .unwrap();
    let orbit = solve(Some(&mun), &state).unwrap();
    assert_relative_eq!(orbit.periapsis_altitude, 5_000.0, epsilon = 1e-6);
}

#[test]
fn sphere_of_influence_rejection() {
    let kerbin = common::kerbin();
    let with_apoapsis = |ra: f64| {
        let state = OrbitalState::builder()
            .apoapsis(ra)
            .periapsis(700_000.0)
            .build()
            .unwrap();
        solve(Some(&kerbin), &state)
    };

    assert_eq!(
        with_apoapsis(90_000_000.0),
        Err(OrbitError::Impossible(ImpossibleOrbit::OutsideSoi {
            excess: 5_840_714.0
        }))
    );
    assert!(with_apoapsis(80_000_000.0).is_ok());
}

#[test]
fn derived_apsides_out_of_order() {
    let kerbin = common::kerbin();
    let state = OrbitalState::builder()
        .semi_major_axis(800_000.0)
        .apoapsis(750_000.0)
        .build()
        .unwrap();
    assert!(matches!(
        solve(Some(&kerbin), &state),
        Err(OrbitError::Impossible(ImpossibleOrbit::InvertedApsides { .. }))
    ));
}
