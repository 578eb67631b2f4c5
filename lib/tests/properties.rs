//! Property-based tests for the derivation rules.

mod common;

use approx::relative_eq;
use kepcalc::{
    kepler::{period_from_semi_major_axis, semi_major_axis_from_period},
    solve, OrbitalState,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Going period -> semi-major axis -> period lands where it started.
    #[test]
    fn period_round_trip(mass in 1.0e15f64..1.0e28, period in 60.0f64..1.0e8) {
        let mu = common::point_mass(mass).mu();
        let back = period_from_semi_major_axis(mu, semi_major_axis_from_period(mu, period));
        prop_assert!(relative_eq!(back, period, max_relative = 1e-9), "{back} != {period}");
    }

    /// Feeding only T reproduces the a that, fed alone, gives T.
    #[test]
    fn period_and_axis_agree(a in 1.0e3f64..1.0e9) {
        let body = common::point_mass(5.291_515_8e22);
        let from_a = solve(Some(&body), &OrbitalState::builder().semi_major_axis(a).build().unwrap())
            .unwrap();
        let from_t = solve(Some(&body), &OrbitalState::builder().period(from_a.period).build().unwrap())
            .unwrap();
        prop_assert!(relative_eq!(from_t.semi_major_axis, a, max_relative = 1e-9));
    }

    /// For fixed a, starting from e, from the resulting rA, or from the
    /// resulting rP gives the same orbit.
    #[test]
    fn shape_derivation_is_symmetric(a in 1.0e4f64..1.0e9, e in 0.0f64..0.95) {
        let body = common::point_mass(5.291_515_8e22);
        let sized = OrbitalState::builder().semi_major_axis(a);

        let from_e = solve(Some(&body), &sized.eccentricity(e).build().unwrap()).unwrap();
        let from_ra = solve(Some(&body), &sized.apoapsis(from_e.apoapsis).build().unwrap()).unwrap();
        let from_rp = solve(Some(&body), &sized.periapsis(from_e.periapsis).build().unwrap()).unwrap();

        prop_assert!(relative_eq!(from_ra.periapsis, from_e.periapsis, max_relative = 1e-9, epsilon = 1e-6));
        prop_assert!(relative_eq!(from_rp.apoapsis, from_e.apoapsis, max_relative = 1e-9));
        prop_assert!(relative_eq!(from_ra.eccentricity, e, epsilon = 1e-9));
        prop_assert!(relative_eq!(from_rp.eccentricity, e, epsilon = 1e-9));
    }

    /// Without a size, any two shape parameters give the same orbit.
    #[test]
    fn shape_pairs_agree(rp in 1.0e3f64..1.0e8, e in 0.0f64..0.9) {
        let body = common::point_mass(5.291_515_8e22);
        let from_pair = solve(
            Some(&body),
            &OrbitalState::builder().eccentricity(e).periapsis(rp).build().unwrap(),
        )
        .unwrap();
        let from_apsides = solve(
            Some(&body),
            &OrbitalState::builder()
                .apoapsis(from_pair.apoapsis)
                .periapsis(rp)
                .build()
                .unwrap(),
        )
        .unwrap();

        prop_assert!(relative_eq!(from_apsides.eccentricity, e, epsilon = 1e-9));
        prop_assert!(relative_eq!(
            from_apsides.semi_major_axis,
            from_pair.semi_major_axis,
            max_relative = 1e-12
        ));
        prop_assert!(from_pair.periapsis <= from_pair.apoapsis);
    }

    /// Altitudes are always the center heights less the radius.
    #[test]
    fn altitudes_follow_radius(altitude in 70_000.0f64..1.0e7, e in 0.0f64..0.5) {
        let kerbin = common::kerbin();
        let state = OrbitalState::builder()
            .periapsis(600_000.0 + altitude)
            .eccentricity(e)
            .build()
            .unwrap();
        if let Ok(orbit) = solve(Some(&kerbin), &state) {
            prop_assert!(relative_eq!(orbit.periapsis_altitude, altitude, max_relative = 1e-12));
            prop_assert!(orbit.apoapsis_altitude >= orbit.periapsis_altitude);
            prop_assert!(orbit.apoapsis <= 84_159_286.0);
        }
    }
}
