//! Keplerian orbits.
//!
//! An inference run goes through three stages, each with its own type:
//! [`sufficiency::validate`] turns an [`OrbitalState`] into a
//! [`Determination`](sufficiency::Determination), [`Conic::derive`]
//! fills in every quantity, and [`Conic::check`] rejects orbits that
//! cannot be flown, producing an [`Orbit`]. [`solve`] runs all three.

use std::f64::consts;

use tracing::debug;

use crate::{
    bodies::Body,
    error::{OrbitError, ValidationError},
};

pub mod orbits;
pub mod state;
pub mod sufficiency;

use orbits::{Conic, Orbit};
use state::OrbitalState;

/// Gravitational constant (`m^3 kg^-1 s^-2`)
pub const G: f64 = 6.67408e-11;

const FOUR_PI_SQUARED: f64 = 4.0 * consts::PI * consts::PI;

/// Semi-major axis (`m`) of an orbit with period `period` (`s`) around a
/// body with gravitational parameter `mu`.
pub fn semi_major_axis_from_period(mu: f64, period: f64) -> f64 {
    libm::pow(mu * period * period / FOUR_PI_SQUARED, 1.0 / 3.0)
}

/// Period (`s`) of an orbit with semi-major axis `a` (`m`) around a body
/// with gravitational parameter `mu`.
pub fn period_from_semi_major_axis(mu: f64, a: f64) -> f64 {
    2.0 * consts::PI * a * libm::sqrt(a / mu)
}

/// `2ae = rA - rP` and `2a = rA + rP`.
pub fn eccentricity_from_apsides(apoapsis: f64, periapsis: f64) -> f64 {
    (apoapsis - periapsis) / (apoapsis + periapsis)
}

/// Infer the complete orbit described by `state` around `body`.
pub fn solve(body: Option<&Body>, state: &OrbitalState) -> Result<Orbit, OrbitError> {
    let determination = sufficiency::validate(body, state)?;
    let body = body.ok_or(ValidationError::MissingBody)?;
    debug!(body = %body.name, ?determination, "known values are sufficient");

    let conic = Conic::derive(body, determination);
    debug!(?conic, "derived orbit");

    let orbit = conic.check(body)?;
    debug!(?orbit, "orbit is flyable");
    Ok(orbit)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const KERBIN_MU: f64 = G * 5.291_515_8e22;

    #[test]
    fn kepler_third_law() {
        let t = period_from_semi_major_axis(KERBIN_MU, 700_000.0);
        assert_relative_eq!(t, 1958.1, epsilon = 0.1);
        assert_relative_eq!(
            semi_major_axis_from_period(KERBIN_MU, t),
            700_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn kerbin_synchronous_orbit() {
        // Kerbin's sidereal day
        let a = semi_major_axis_from_period(KERBIN_MU, 21_549.425);
        assert_relative_eq!(a - 600_000.0, 2_863_334.0, epsilon = 50.0);
    }

    #[test]
    fn huge_orbits_keep_a_finite_period() {
        let t = period_from_semi_major_axis(KERBIN_MU, 1e200);
        assert!(t.is_finite() && t > 1e294, "{t}");
    }

    #[test]
    fn eccentricity_of_apsides() {
        assert_eq!(eccentricity_from_apsides(900_000.0, 700_000.0), 0.125);
        assert_eq!(eccentricity_from_apsides(700_000.0, 700_000.0), 0.0);
    }
}
