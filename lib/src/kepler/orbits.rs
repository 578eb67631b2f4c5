//! Deriving a full orbit and checking that it can be flown.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{bodies::Body, error::ImpossibleOrbit, time::OrbitalPeriod};

use super::{
    eccentricity_from_apsides, period_from_semi_major_axis, semi_major_axis_from_period,
    state::Quantity,
    sufficiency::{Determination, Shape, Size},
};

/// An orbit with every Keplerian quantity known, not yet checked
/// against the body it orbits.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conic {
    /// Orbital period (s).
    pub period: f64,
    /// Semi-major axis (m).
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless).
    pub eccentricity: f64,
    /// Apoapsis radius from the body's center (m).
    pub apoapsis: f64,
    /// Periapsis radius from the body's center (m).
    pub periapsis: f64,
}

impl Conic {
    /// Fill in every quantity not given by `determination`.
    pub fn derive(body: &Body, determination: Determination) -> Self {
        let mu = body.mu();
        let sized = |size: Size| match size {
            Size::Period(t) => (t, semi_major_axis_from_period(mu, t)),
            Size::SemiMajorAxis(a) => (period_from_semi_major_axis(mu, a), a),
        };

        match determination {
            Determination::Circular(size) => {
                let (period, a) = sized(size);
                info!("assuming circular orbit");
                Self {
                    period,
                    semi_major_axis: a,
                    eccentricity: 0.0,
                    apoapsis: a,
                    periapsis: a,
                }
            }
            Determination::Sized(size, shape) => {
                let (period, a) = sized(size);
                let (eccentricity, apoapsis, periapsis) = match shape {
                    Shape::Eccentricity(e) => (e, a * (1.0 + e), a * (1.0 - e)),
                    Shape::Apoapsis(ra) => {
                        let rp = 2.0 * a - ra;
                        (eccentricity_from_apsides(ra, rp), ra, rp)
                    }
                    Shape::Periapsis(rp) => {
                        let ra = 2.0 * a - rp;
                        (eccentricity_from_apsides(ra, rp), ra, rp)
                    }
                };
                Self {
                    period,
                    semi_major_axis: a,
                    eccentricity,
                    apoapsis,
                    periapsis,
                }
            }
            Determination::EccentricityApoapsis {
                eccentricity,
                apoapsis,
            } => Self::from_apsides(
                mu,
                eccentricity,
                apoapsis,
                apoapsis / apsis_ratio(eccentricity),
            ),
            Determination::EccentricityPeriapsis {
                eccentricity,
                periapsis,
            } => Self::from_apsides(
                mu,
                eccentricity,
                periapsis * apsis_ratio(eccentricity),
                periapsis,
            ),
            Determination::Apsides {
                apoapsis,
                periapsis,
            } => Self::from_apsides(
                mu,
                eccentricity_from_apsides(apoapsis, periapsis),
                apoapsis,
                periapsis,
            ),
        }
    }

    fn from_apsides(mu: f64, eccentricity: f64, apoapsis: f64, periapsis: f64) -> Self {
        let a = (apoapsis + periapsis) / 2.0;
        Self {
            period: period_from_semi_major_axis(mu, a),
            semi_major_axis: a,
            eccentricity,
            apoapsis,
            periapsis,
        }
    }

    /// Reject orbits that cross the surface or atmosphere of `body` or
    /// leave its sphere of influence.
    pub fn check(self, body: &Body) -> Result<Orbit, ImpossibleOrbit> {
        for (quantity, value) in [
            (Quantity::Period, self.period),
            (Quantity::SemiMajorAxis, self.semi_major_axis),
            (Quantity::Apoapsis, self.apoapsis),
            (Quantity::Periapsis, self.periapsis),
        ] {
            if !value.is_finite() {
                return Err(ImpossibleOrbit::NonPositive { quantity, value });
            }
        }
        if self.periapsis > self.apoapsis {
            return Err(ImpossibleOrbit::InvertedApsides {
                apoapsis: self.apoapsis,
                periapsis: self.periapsis,
            });
        }
        // The periapsis is the lowest point, so it is the only one checked
        // against the surface and atmosphere.
        if self.periapsis < body.radius {
            return Err(ImpossibleOrbit::BelowSurface {
                depth: body.radius - self.periapsis,
            });
        }
        if self.periapsis < body.min_periapsis() {
            return Err(ImpossibleOrbit::InsideAtmosphere {
                depth: body.min_periapsis() - self.periapsis,
            });
        }

        let orbit = Orbit {
            period: self.period,
            semi_major_axis: self.semi_major_axis,
            eccentricity: self.eccentricity,
            apoapsis: self.apoapsis,
            periapsis: self.periapsis,
            apoapsis_altitude: self.apoapsis - body.radius,
            periapsis_altitude: self.periapsis - body.radius,
        };

        match body.soi {
            Some(soi) if orbit.apoapsis > soi => Err(ImpossibleOrbit::OutsideSoi {
                excess: orbit.apoapsis - soi,
            }),
            _ => Ok(orbit),
        }
    }
}

/// `rA / rP` for an orbit with eccentricity `e`.
fn apsis_ratio(e: f64) -> f64 {
    (1.0 + e) / (1.0 - e)
}

/// A complete orbit that can be flown around its body.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    /// Orbital period (s).
    pub period: f64,
    /// Semi-major axis (m).
    pub semi_major_axis: f64,
    /// Eccentricity (dimensionless).
    pub eccentricity: f64,
    /// Apoapsis radius from the body's center (m).
    pub apoapsis: f64,
    /// Periapsis radius from the body's center (m).
    pub periapsis: f64,
    /// Apoapsis height above the surface (m).
    pub apoapsis_altitude: f64,
    /// Periapsis height above the surface (m).
    pub periapsis_altitude: f64,
}

impl Orbit {
    /// The period as hours, minutes and seconds, if it fits in a
    /// [`time::Duration`].
    pub fn period_duration(&self) -> Option<OrbitalPeriod> {
        OrbitalPeriod::try_from_seconds(self.period)
    }

    pub fn is_circular(&self) -> bool {
        self.eccentricity == 0.0
    }
}
