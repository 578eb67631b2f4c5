//! Definitions of celestial bodies.

use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::kepler::G;

/// A celestial body orbits are computed around.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Name of this body as displayed in KSP
    pub name: Arc<str>,
    /// Mass (`kg`)
    pub mass: f64,
    /// Mean equatorial radius (`m`)
    pub radius: f64,
    /// Height of the top of the atmosphere above the surface (`m`),
    /// zero for airless bodies
    #[serde(default)]
    pub atmosphere_thickness: f64,
    /// Radius of this body's sphere of influence (`m`), if it has one
    #[serde(default)]
    pub soi: Option<f64>,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("body {name:?}: mass must be positive, got {value} kg")]
    Mass { name: Arc<str>, value: f64 },

    #[error("body {name:?}: radius must be positive, got {value} m")]
    Radius { name: Arc<str>, value: f64 },

    #[error("body {name:?}: atmosphere thickness must not be negative, got {value} m")]
    Atmosphere { name: Arc<str>, value: f64 },

    #[error("body {name:?}: sphere of influence must be positive, got {value} m")]
    Soi { name: Arc<str>, value: f64 },
}

impl Body {
    pub fn new(
        name: impl Into<Arc<str>>,
        mass: f64,
        radius: f64,
        atmosphere_thickness: f64,
        soi: Option<f64>,
    ) -> Result<Self, BodyError> {
        let body = Self {
            name: name.into(),
            mass,
            radius,
            atmosphere_thickness,
            soi,
        };
        body.validate()?;
        Ok(body)
    }

    /// Check the physical ranges of every field. Bodies coming from
    /// [`Body::new`] already passed this; deserialized ones have not.
    pub fn validate(&self) -> Result<(), BodyError> {
        let name = self.name.clone();
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(BodyError::Mass {
                name,
                value: self.mass,
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BodyError::Radius {
                name,
                value: self.radius,
            });
        }
        if !(self.atmosphere_thickness.is_finite() && self.atmosphere_thickness >= 0.0) {
            return Err(BodyError::Atmosphere {
                name,
                value: self.atmosphere_thickness,
            });
        }
        match self.soi {
            Some(soi) if !(soi.is_finite() && soi > 0.0) => Err(BodyError::Soi { name, value: soi }),
            _ => Ok(()),
        }
    }

    /// Standard gravitational parameter (`m^3/s^2`)
    pub fn mu(&self) -> f64 {
        G * self.mass
    }

    /// Lowest periapsis radius (from the body's center) that clears
    /// both the surface and the atmosphere.
    pub fn min_periapsis(&self) -> f64 {
        self.radius + self.atmosphere_thickness
    }
}

/// A catalog of bodies, keyed by lowercase name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolarSystem {
    pub bodies: HashMap<Arc<str>, Arc<Body>>,
}

impl SolarSystem {
    /// The stock Kerbol system.
    pub fn stock() -> Self {
        let mut system = Self::default();
        for body in stock_bodies() {
            system.bodies.insert(key(&body.name), Arc::new(body));
        }
        system
    }

    /// Add a body, replacing any body with the same name. Returns the
    /// replaced body, if any.
    pub fn insert(&mut self, body: Body) -> Result<Option<Arc<Body>>, BodyError> {
        body.validate()?;
        Ok(self.bodies.insert(key(&body.name), Arc::new(body)))
    }

    /// Look up a body by name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&Arc<Body>> {
        self.bodies.get(key(name).as_ref())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies sorted by name.
    pub fn sorted(&self) -> Vec<&Arc<Body>> {
        let mut bodies = self.bodies.values().collect::<Vec<_>>();
        bodies.sort_by(|a, b| a.name.cmp(&b.name));
        bodies
    }
}

fn key(name: &str) -> Arc<str> {
    name.trim().to_lowercase().into()
}

fn stock(name: &str, mass: f64, radius: f64, atmosphere_thickness: f64, soi: Option<f64>) -> Body {
    Body {
        name: name.into(),
        mass,
        radius,
        atmosphere_thickness,
        soi,
    }
}

fn stock_bodies() -> [Body; 9] {
    [
        stock("Kerbol", 1.756_545_9e28, 261_600_000.0, 600_000.0, None),
        stock("Moho", 2.526_331_4e21, 250_000.0, 0.0, Some(9_646_663.0)),
        stock("Eve", 1.224_398e23, 700_000.0, 90_000.0, Some(85_109_365.0)),
        stock("Kerbin", 5.291_515_8e22, 600_000.0, 70_000.0, Some(84_159_286.0)),
        stock("Mun", 9.759_906_6e20, 200_000.0, 0.0, Some(2_429_559.1)),
        stock("Minmus", 2.645_758e19, 60_000.0, 0.0, Some(2_247_428.4)),
        stock("Duna", 4.515_427e21, 320_000.0, 50_000.0, Some(47_921_949.0)),
        stock("Ike", 2.782_161_5e20, 130_000.0, 0.0, Some(1_049_598.9)),
        stock("Jool", 4.233_212_7e24, 6_000_000.0, 200_000.0, Some(2_455_985_200.0)),
    ]
}

#[test]
fn stock_bodies_are_valid() {
    for body in stock_bodies() {
        body.validate().unwrap();
    }
}

#[test]
fn lookup_ignores_case() {
    let system = SolarSystem::stock();
    let kerbin = system.get("kerbin").unwrap();
    assert_eq!(&*kerbin.name, "Kerbin");
    assert_eq!(kerbin.radius, 600_000.0);
    assert_eq!(kerbin.soi, Some(84_159_286.0));
    assert!(system.get(" MUN ").is_some());
    assert!(system.get("Laythe").is_none());
}

#[test]
fn insert_replaces_and_validates() {
    let mut system = SolarSystem::stock();
    let custom = Body::new("Kerbin", 5.0e22, 610_000.0, 0.0, None).unwrap();
    let old = system.insert(custom).unwrap().unwrap();
    assert_eq!(old.radius, 600_000.0);
    assert_eq!(system.get("Kerbin").unwrap().radius, 610_000.0);

    let bad = Body {
        name: "Gilly".into(),
        mass: 1.2e17,
        radius: 13_000.0,
        atmosphere_thickness: -1.0,
        soi: None,
    };
    assert!(matches!(system.insert(bad), Err(BodyError::Atmosphere { .. })));
    assert!(system.get("Gilly").is_none());
}

#[test]
fn new_rejects_bad_ranges() {
    assert!(matches!(
        Body::new("X", 0.0, 1.0, 0.0, None),
        Err(BodyError::Mass { .. })
    ));
    assert!(matches!(
        Body::new("X", 1.0, -1.0, 0.0, None),
        Err(BodyError::Radius { .. })
    ));
    assert!(matches!(
        Body::new("X", 1.0, 1.0, 0.0, Some(0.0)),
        Err(BodyError::Soi { .. })
    ));
}
