//! The known values an orbit is inferred from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ImpossibleOrbit;

/// One of the five orbital quantities the engine works with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quantity {
    Period,
    SemiMajorAxis,
    Eccentricity,
    Apoapsis,
    Periapsis,
}

impl Quantity {
    pub const ALL: [Quantity; 5] = [
        Self::Period,
        Self::SemiMajorAxis,
        Self::Eccentricity,
        Self::Apoapsis,
        Self::Periapsis,
    ];

    /// Short symbol used in input files and on the command line.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Period => "T",
            Self::SemiMajorAxis => "a",
            Self::Eccentricity => "e",
            Self::Apoapsis => "rA",
            Self::Periapsis => "rP",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Period => "orbital period",
            Self::SemiMajorAxis => "semi-major axis",
            Self::Eccentricity => "eccentricity",
            Self::Apoapsis => "apoapsis height",
            Self::Periapsis => "periapsis height",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

/// A partial description of an orbit. Heights are measured from the
/// body's center.
///
/// Only [`OrbitalStateBuilder`] creates these, so every present value has
/// already been range-checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrbitalState {
    period: Option<f64>,
    semi_major_axis: Option<f64>,
    eccentricity: Option<f64>,
    apoapsis: Option<f64>,
    periapsis: Option<f64>,
}

impl OrbitalState {
    pub fn builder() -> OrbitalStateBuilder {
        OrbitalStateBuilder::default()
    }

    /// Orbital period (`s`)
    pub fn period(&self) -> Option<f64> {
        self.period
    }

    /// Semi-major axis (`m`)
    pub fn semi_major_axis(&self) -> Option<f64> {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> Option<f64> {
        self.eccentricity
    }

    /// Apoapsis radius (`m`)
    pub fn apoapsis(&self) -> Option<f64> {
        self.apoapsis
    }

    /// Periapsis radius (`m`)
    pub fn periapsis(&self) -> Option<f64> {
        self.periapsis
    }

    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Period => self.period,
            Quantity::SemiMajorAxis => self.semi_major_axis,
            Quantity::Eccentricity => self.eccentricity,
            Quantity::Apoapsis => self.apoapsis,
            Quantity::Periapsis => self.periapsis,
        }
    }

    /// How many of e, rA and rP are known.
    pub fn shape_known(&self) -> usize {
        [self.eccentricity, self.apoapsis, self.periapsis]
            .iter()
            .filter(|x| x.is_some())
            .count()
    }
}

/// Collects known values and checks them once in [`build`].
///
/// Setting a quantity again replaces the earlier value.
///
/// [`build`]: OrbitalStateBuilder::build
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OrbitalStateBuilder {
    state: OrbitalState,
}

impl OrbitalStateBuilder {
    #[must_use]
    pub fn period(mut self, seconds: f64) -> Self {
        self.state.period = Some(seconds);
        self
    }

    #[must_use]
    pub fn semi_major_axis(mut self, meters: f64) -> Self {
        self.state.semi_major_axis = Some(meters);
        self
    }

    #[must_use]
    pub fn eccentricity(mut self, e: f64) -> Self {
        self.state.eccentricity = Some(e);
        self
    }

    #[must_use]
    pub fn apoapsis(mut self, meters: f64) -> Self {
        self.state.apoapsis = Some(meters);
        self
    }

    #[must_use]
    pub fn periapsis(mut self, meters: f64) -> Self {
        self.state.periapsis = Some(meters);
        self
    }

    #[must_use]
    pub fn set(self, quantity: Quantity, value: f64) -> Self {
        match quantity {
            Quantity::Period => self.period(value),
            Quantity::SemiMajorAxis => self.semi_major_axis(value),
            Quantity::Eccentricity => self.eccentricity(value),
            Quantity::Apoapsis => self.apoapsis(value),
            Quantity::Periapsis => self.periapsis(value),
        }
    }

    pub fn build(self) -> Result<OrbitalState, ImpossibleOrbit> {
        let state = self.state;
        for quantity in [
            Quantity::Period,
            Quantity::SemiMajorAxis,
            Quantity::Apoapsis,
            Quantity::Periapsis,
        ] {
            if let Some(value) = state.get(quantity) {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ImpossibleOrbit::NonPositive { quantity, value });
                }
            }
        }
        if let Some(eccentricity) = state.eccentricity {
            if !(0.0..1.0).contains(&eccentricity) {
                return Err(ImpossibleOrbit::Unbound { eccentricity });
            }
        }
        if let (Some(apoapsis), Some(periapsis)) = (state.apoapsis, state.periapsis) {
            if periapsis > apoapsis {
                return Err(ImpossibleOrbit::InvertedApsides {
                    apoapsis,
                    periapsis,
                });
            }
        }
        Ok(state)
    }
}

#[test]
fn builder_keeps_last_value() {
    let state = OrbitalState::builder()
        .semi_major_axis(1.0e6)
        .semi_major_axis(2.0e6)
        .eccentricity(0.1)
        .build()
        .unwrap();
    assert_eq!(state.semi_major_axis(), Some(2.0e6));
    assert_eq!(state.eccentricity(), Some(0.1));
    assert_eq!(state.period(), None);
    assert_eq!(state.shape_known(), 1);
}

#[test]
fn builder_rejects_bad_ranges() {
    assert_eq!(
        OrbitalState::builder().period(-5.0).build(),
        Err(ImpossibleOrbit::NonPositive {
            quantity: Quantity::Period,
            value: -5.0
        })
    );
    assert!(matches!(
        OrbitalState::builder().apoapsis(f64::NAN).build(),
        Err(ImpossibleOrbit::NonPositive {
            quantity: Quantity::Apoapsis,
            ..
        })
    ));
    assert_eq!(
        OrbitalState::builder().eccentricity(1.0).build(),
        Err(ImpossibleOrbit::Unbound { eccentricity: 1.0 })
    );
    assert_eq!(
        OrbitalState::builder().eccentricity(-0.2).build(),
        Err(ImpossibleOrbit::Unbound { eccentricity: -0.2 })
    );
}

#[test]
fn builder_rejects_inverted_apsides() {
    assert_eq!(
        OrbitalState::builder()
            .apoapsis(700_000.0)
            .periapsis(800_000.0)
            .build(),
        Err(ImpossibleOrbit::InvertedApsides {
            apoapsis: 700_000.0,
            periapsis: 800_000.0
        })
    );
    assert!(OrbitalState::builder()
        .apoapsis(700_000.0)
        .periapsis(700_000.0)
        .build()
        .is_ok());
}

#[test]
fn quantity_display() {
    assert_eq!(Quantity::Apoapsis.to_string(), "apoapsis height (rA)");
    assert_eq!(Quantity::ALL.map(Quantity::symbol), ["T", "a", "e", "rA", "rP"]);
}
