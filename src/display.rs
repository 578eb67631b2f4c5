//! Human-readable output.

use std::fmt;

use itertools::Itertools;
use kepcalc::{Body, Orbit, SolarSystem};

/// `1234567.8` -> `1,234,568`
pub fn thousands(x: f64) -> String {
    let rounded = x.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(String::from_utf8_lossy)
        .join(",");
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// The orbit report printed on success.
pub struct Report<'a> {
    body: &'a Body,
    orbit: &'a Orbit,
}

impl<'a> Report<'a> {
    pub fn new(body: &'a Body, orbit: &'a Orbit) -> Self {
        Self { body, orbit }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.orbit;
        writeln!(f, "{:<20}{}", "Reference Body", self.body.name)?;
        match o.period_duration() {
            Some(period) => writeln!(
                f,
                "{:<20}{} ({} s)",
                "Orbital Period",
                period,
                thousands(o.period)
            )?,
            None => writeln!(f, "{:<20}{} s", "Orbital Period", thousands(o.period))?,
        }
        writeln!(f, "{:<20}{} m", "Semi-Major Axis", thousands(o.semi_major_axis))?;
        writeln!(
            f,
            "{:<20}{} m ({} m above surface)",
            "Apoapsis",
            thousands(o.apoapsis),
            thousands(o.apoapsis_altitude)
        )?;
        writeln!(
            f,
            "{:<20}{} m ({} m above surface)",
            "Periapsis",
            thousands(o.periapsis),
            thousands(o.periapsis_altitude)
        )?;
        writeln!(f, "{:<20}{:.4}", "Eccentricity", o.eccentricity)
    }
}

/// One line per body, sorted by name.
pub struct BodyList<'a>(pub &'a SolarSystem);

impl fmt::Display for BodyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for body in self.0.sorted() {
            write!(
                f,
                "{:<12}radius {} m, atmosphere {} m",
                body.name,
                thousands(body.radius),
                thousands(body.atmosphere_thickness)
            )?;
            match body.soi {
                Some(soi) => writeln!(f, ", SOI {} m", thousands(soi))?,
                None => writeln!(f)?,
            }
        }
        Ok(())
    }
}

#[test]
fn thousands_separators() {
    assert_eq!(thousands(0.0), "0");
    assert_eq!(thousands(-0.2), "0");
    assert_eq!(thousands(999.6), "1,000");
    assert_eq!(thousands(700_000.0), "700,000");
    assert_eq!(thousands(84_159_286.0), "84,159,286");
    assert_eq!(thousands(-12_345.0), "-12,345");
}

#[test]
fn report() {
    let kerbin = Body::new("Kerbin", 5.291_515_8e22, 600_000.0, 70_000.0, Some(84_159_286.0))
        .expect("valid body");
    let orbit = Orbit {
        period: 1958.128,
        semi_major_axis: 700_000.0,
        eccentricity: 0.0,
        apoapsis: 700_000.0,
        periapsis: 700_000.0,
        apoapsis_altitude: 100_000.0,
        periapsis_altitude: 100_000.0,
    };
    let expected = "\
Reference Body      Kerbin
Orbital Period      32m 38s (1,958 s)
Semi-Major Axis     700,000 m
Apoapsis            700,000 m (100,000 m above surface)
Periapsis           700,000 m (100,000 m above surface)
Eccentricity        0.0000
";
    assert_eq!(Report::new(&kerbin, &orbit).to_string(), expected);
}

#[test]
fn body_list() {
    let mut system = SolarSystem::default();
    system
        .insert(Body::new("Mun", 9.759_906_6e20, 200_000.0, 0.0, Some(2_429_559.1)).expect("valid body"))
        .expect("valid body");
    system
        .insert(Body::new("Kerbol", 1.756_545_9e28, 261_600_000.0, 600_000.0, None).expect("valid body"))
        .expect("valid body");
    assert_eq!(
        BodyList(&system).to_string(),
        "Kerbol      radius 261,600,000 m, atmosphere 600,000 m\n\
         Mun         radius 200,000 m, atmosphere 0 m, SOI 2,429,559 m\n"
    );
}
