#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::doc_markdown
)]
//! Two-body orbit inference: fill in the missing Keplerian quantities
//! of an orbit from a partial set of known values, then check that the
//! result can actually be flown around the reference body.

pub mod bodies;
pub mod error;
pub mod input;
pub mod kepler;
pub mod parse;
pub mod time;

pub use bodies::{Body, SolarSystem};
pub use error::{ImpossibleOrbit, MalformedInput, OrbitError, ValidationError};
pub use kepler::{
    orbits::{Conic, Orbit},
    solve,
    state::{OrbitalState, OrbitalStateBuilder, Quantity},
};
