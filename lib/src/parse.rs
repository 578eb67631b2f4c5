//! Reading numbers, durations and heights typed by a person.
//!
//! Thousands separators (`,` and `_`) are ignored in every quantity but
//! the eccentricity, so `"5,400"` and `"5_400"` both read as `5400`.

use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{one_of, space0};
use nom::combinator::{eof, not, opt};
use nom::number::complete::double;
use nom::sequence::{delimited, preceded, terminated, tuple};
use nom::IResult;
use serde::{Deserialize, Serialize};

use crate::{bodies::Body, error::MalformedInput, kepler::state::Quantity};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;

/// A height as typed: either from the body's center or above its surface.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Height {
    /// Meters from the body's center.
    Center(f64),
    /// Meters above the body's surface.
    AboveSurface(f64),
}

impl Height {
    /// Meters from the center of `body`.
    pub fn resolve(self, body: &Body) -> f64 {
        match self {
            Height::Center(h) => h,
            Height::AboveSurface(h) => h + body.radius,
        }
    }
}

fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, ',' | '_')).collect()
}

fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

fn padded_number(input: &str) -> IResult<&str, f64> {
    delimited(space0, double, space0)(input)
}

fn unsigned(input: &str) -> IResult<&str, f64> {
    preceded(not(one_of("+-")), double)(input)
}

fn component<'a>(
    unit: impl FnMut(&'a str) -> IResult<&'a str, &'a str>,
) -> impl FnMut(&'a str) -> IResult<&'a str, f64> {
    terminated(unsigned, tuple((space0, unit, space0)))
}

/// `1d 2h 30m 15.5s`, every part optional but at least one present.
fn compound_duration(input: &str) -> IResult<&str, f64> {
    let start = input;
    let (input, _) = space0(input)?;
    let (input, days) = opt(component(tag("d")))(input)?;
    let (input, hours) = opt(component(tag("h")))(input)?;
    let (input, mins) = opt(component(alt((tag("min"), tag("m")))))(input)?;
    let (input, secs) = opt(component(alt((tag("sec"), tag("s")))))(input)?;

    if days.is_none() && hours.is_none() && mins.is_none() && secs.is_none() {
        return Err(nom::Err::Error(nom::error::make_error(
            start,
            nom::error::ErrorKind::Verify,
        )));
    }

    let seconds = days.unwrap_or(0.0) * SECONDS_PER_DAY
        + hours.unwrap_or(0.0) * SECONDS_PER_HOUR
        + mins.unwrap_or(0.0) * SECONDS_PER_MINUTE
        + secs.unwrap_or(0.0);
    Ok((input, seconds))
}

fn number(input: &str) -> IResult<&str, f64> {
    terminated(padded_number, eof)(input)
}

fn duration(input: &str) -> IResult<&str, f64> {
    alt((
        terminated(compound_duration, eof),
        terminated(padded_number, eof),
    ))(input)
}

fn height(input: &str) -> IResult<&str, Height> {
    let (input, value) = padded_number(input)?;
    let (input, scale) = opt(alt((tag("km"), tag("Mm"), tag("m"))))(input)?;
    let (input, _) = space0(input)?;
    let (input, above_surface) = opt(tag_no_case("AS"))(input)?;
    let (input, _) = terminated(space0, eof)(input)?;

    let value = value
        * match scale {
            Some("km") => 1e3,
            Some("Mm") => 1e6,
            _ => 1.0,
        };
    let height = if above_surface.is_some() {
        Height::AboveSurface(value)
    } else {
        Height::Center(value)
    };
    Ok((input, height))
}

/// A plain real number, e.g. `0.25`, `-3`, `1.5e6` or `5,400`. An
/// eccentricity keeps its commas, so `0,5` is rejected rather than read
/// as `5`.
pub fn parse_number(quantity: Quantity, input: &str) -> Result<f64, MalformedInput> {
    let cleaned = match quantity {
        Quantity::Eccentricity => input.to_owned(),
        _ => strip_separators(input),
    };
    number(cleaned.as_str())
        .ok()
        .and_then(|(_, x)| finite(x))
        .ok_or_else(|| MalformedInput::Number {
            quantity,
            input: input.to_owned(),
        })
}

/// A duration in seconds, either bare (`5400`, `5,400.5`) or compound
/// (`1h 30m`, `2d 3h 4m 5.5s`). A day is 24 hours.
pub fn parse_duration(quantity: Quantity, input: &str) -> Result<f64, MalformedInput> {
    let cleaned = strip_separators(input);
    duration(cleaned.as_str())
        .ok()
        .and_then(|(_, x)| finite(x))
        .ok_or_else(|| MalformedInput::Duration {
            quantity,
            input: input.to_owned(),
        })
}

/// A height with an optional unit (`m`, `km`, `Mm`) and an optional `AS`
/// suffix marking it as measured above the surface: `700000`,
/// `700 km`, `100km AS`.
pub fn parse_height(quantity: Quantity, input: &str) -> Result<Height, MalformedInput> {
    let cleaned = strip_separators(input);
    height(cleaned.as_str())
        .ok()
        .map(|(_, h)| h)
        .filter(|h| match h {
            Height::Center(x) | Height::AboveSurface(x) => x.is_finite(),
        })
        .ok_or_else(|| MalformedInput::Height {
            quantity,
            input: input.to_owned(),
        })
}
