//! Known values as written in an input file or on the command line.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    bodies::{Body, SolarSystem},
    error::{OrbitError, ValidationError},
    kepler::state::{OrbitalState, Quantity},
    parse::{self, Height},
};

/// A single known value: either already a number or text still to be
/// parsed (`"1h 30m"`, `"100km AS"`, `"5,400"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl Value {
    /// Blank text counts as not given.
    fn present(&self) -> Option<&Self> {
        match self {
            Value::Text(s) if s.trim().is_empty() => None,
            _ => Some(self),
        }
    }

    fn number(&self, quantity: Quantity) -> Result<f64, OrbitError> {
        match self {
            Value::Number(x) => Ok(*x),
            Value::Text(s) => Ok(parse::parse_number(quantity, s)?),
        }
    }

    fn duration(&self, quantity: Quantity) -> Result<f64, OrbitError> {
        match self {
            Value::Number(x) => Ok(*x),
            Value::Text(s) => Ok(parse::parse_duration(quantity, s)?),
        }
    }

    fn height(&self, quantity: Quantity, body: &Body) -> Result<f64, OrbitError> {
        let height = match self {
            Value::Number(x) => Height::Center(*x),
            Value::Text(s) => parse::parse_height(quantity, s)?,
        };
        Ok(height.resolve(body))
    }
}

/// The reference body and whichever orbital quantities are known.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnownValues {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, rename = "T")]
    pub period: Option<Value>,
    #[serde(default, rename = "a")]
    pub semi_major_axis: Option<Value>,
    #[serde(default, rename = "e")]
    pub eccentricity: Option<Value>,
    #[serde(default, rename = "rA")]
    pub apoapsis: Option<Value>,
    #[serde(default, rename = "rP")]
    pub periapsis: Option<Value>,
}

impl KnownValues {
    /// Values from `overrides` win over values in `self`.
    #[must_use]
    pub fn merge(self, overrides: KnownValues) -> KnownValues {
        KnownValues {
            body: overrides.body.or(self.body),
            period: overrides.period.or(self.period),
            semi_major_axis: overrides.semi_major_axis.or(self.semi_major_axis),
            eccentricity: overrides.eccentricity.or(self.eccentricity),
            apoapsis: overrides.apoapsis.or(self.apoapsis),
            periapsis: overrides.periapsis.or(self.periapsis),
        }
    }

    pub fn get(&self, quantity: Quantity) -> Option<&Value> {
        match quantity {
            Quantity::Period => self.period.as_ref(),
            Quantity::SemiMajorAxis => self.semi_major_axis.as_ref(),
            Quantity::Eccentricity => self.eccentricity.as_ref(),
            Quantity::Apoapsis => self.apoapsis.as_ref(),
            Quantity::Periapsis => self.periapsis.as_ref(),
        }
        .and_then(Value::present)
    }

    /// Look up the reference body in `system`.
    pub fn body(&self, system: &SolarSystem) -> Result<Arc<Body>, ValidationError> {
        self.body
            .as_deref()
            .and_then(|name| system.get(name))
            .cloned()
            .ok_or(ValidationError::MissingBody)
    }

    /// Parse every known value, reading heights marked `AS` relative to
    /// the surface of `body`.
    pub fn to_state(&self, body: &Body) -> Result<OrbitalState, OrbitError> {
        let mut builder = OrbitalState::builder();
        for quantity in Quantity::ALL {
            let Some(value) = self.get(quantity) else {
                continue;
            };
            let x = match quantity {
                Quantity::Period => value.duration(quantity)?,
                Quantity::Eccentricity => value.number(quantity)?,
                Quantity::SemiMajorAxis | Quantity::Apoapsis | Quantity::Periapsis => {
                    value.height(quantity, body)?
                }
            };
            debug!(%quantity, x, "known value");
            builder = builder.set(quantity, x);
        }
        Ok(builder.build()?)
    }

    /// Resolve the body and parse the known values against it.
    pub fn resolve(&self, system: &SolarSystem) -> Result<(Arc<Body>, OrbitalState), OrbitError> {
        let body = self.body(system)?;
        let state = self.to_state(&body)?;
        Ok((body, state))
    }
}
