//! Reading known values and body catalogs from disk.

use std::path::Path;

use color_eyre::eyre::{self, WrapErr};
use kepcalc::{bodies::Body, input::KnownValues, SolarSystem};
use tracing::{info, warn};

pub fn parse_known_values(s: &str) -> eyre::Result<KnownValues> {
    Ok(toml::from_str(s)?)
}

pub fn parse_bodies(s: &str) -> eyre::Result<Vec<Body>> {
    Ok(ron::from_str(s)?)
}

pub fn load_known_values(path: &Path) -> eyre::Result<KnownValues> {
    let s = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading known values from {}", path.display()))?;
    parse_known_values(&s).wrap_err_with(|| format!("parsing {}", path.display()))
}

/// Add every body in the RON catalog at `path` to `system`, replacing
/// stock bodies of the same name.
pub fn load_bodies(path: &Path, system: &mut SolarSystem) -> eyre::Result<()> {
    let s = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading bodies from {}", path.display()))?;
    let bodies = parse_bodies(&s).wrap_err_with(|| format!("parsing {}", path.display()))?;
    for body in bodies {
        let name = body.name.clone();
        if system.insert(body)?.is_some() {
            warn!(body = %name, "replacing stock body");
        } else {
            info!(body = %name, "loaded body");
        }
    }
    Ok(())
}

#[test]
fn known_values_file() {
    use kepcalc::input::Value;

    let known = parse_known_values(
        r#"
body = "Kerbin"
T = "1h 30m"
e = 0.1
rP = 700000
"#,
    )
    .unwrap();
    assert_eq!(known.body.as_deref(), Some("Kerbin"));
    assert_eq!(known.period, Some(Value::Text("1h 30m".into())));
    assert_eq!(known.eccentricity, Some(Value::Number(0.1)));
    assert_eq!(known.periapsis, Some(Value::Number(700_000.0)));
    assert_eq!(known.apoapsis, None);
}

#[test]
fn known_values_file_rejects_unknown_keys() {
    assert!(parse_known_values("body = \"Kerbin\"\ninclination = 5\n").is_err());
}

#[test]
fn body_catalog() {
    let bodies = parse_bodies(
        r#"[
    (name: "Gilly", mass: 1.2420363e17, radius: 13000.0, soi: Some(126123.27)),
    (name: "Laythe", mass: 2.9397311e22, radius: 500000.0, atmosphere_thickness: 50000.0, soi: Some(3723645.8)),
]"#,
    )
    .unwrap();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0].atmosphere_thickness, 0.0);
    assert_eq!(bodies[1].soi, Some(3_723_645.8));

    let mut system = SolarSystem::stock();
    let stock = system.len();
    for body in bodies {
        system.insert(body).unwrap();
    }
    assert_eq!(system.len(), stock + 2);
    assert!(system.get("gilly").is_some());
}
