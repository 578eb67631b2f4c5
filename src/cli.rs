use std::path::PathBuf;

use clap::Parser;
use kepcalc::input::{KnownValues, Value};

/// Work out a complete Keplerian orbit from a few known values.
///
/// Give either T or a (or neither), plus enough of e, rA and rP to pin
/// the orbit down. Heights are from the body's center unless suffixed
/// with AS ("100km AS").
#[derive(Debug, Parser)]
#[command(name = "kepcalc", version)]
pub struct Args {
    /// TOML file with known values (keys: body, T, a, e, rA, rP)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// RON file with a list of additional bodies
    #[arg(long)]
    pub bodies: Option<PathBuf>,

    /// Print the known bodies and exit
    #[arg(long)]
    pub list_bodies: bool,

    /// Reference body, e.g. Kerbin
    #[arg(short, long)]
    pub body: Option<String>,

    /// Orbital period, e.g. 5400 or "1h 30m"
    #[arg(short = 'T', long)]
    pub period: Option<String>,

    /// Semi-major axis, e.g. 700000 or 700km
    #[arg(short = 'a', long = "sma")]
    pub semi_major_axis: Option<String>,

    /// Eccentricity, 0 <= e < 1
    #[arg(short, long)]
    pub eccentricity: Option<String>,

    /// Apoapsis height, e.g. 900km or "300km AS"
    #[arg(long = "ra")]
    pub apoapsis: Option<String>,

    /// Periapsis height, e.g. 700km or "100km AS"
    #[arg(long = "rp")]
    pub periapsis: Option<String>,
}

impl Args {
    /// The values given as flags, to be laid over any input file.
    pub fn known_values(&self) -> KnownValues {
        let text = |s: &Option<String>| s.as_deref().map(Value::from);
        KnownValues {
            body: self.body.clone(),
            period: text(&self.period),
            semi_major_axis: text(&self.semi_major_axis),
            eccentricity: text(&self.eccentricity),
            apoapsis: text(&self.apoapsis),
            periapsis: text(&self.periapsis),
        }
    }
}

#[test]
fn flags_become_known_values() {
    let args = Args::try_parse_from([
        "kepcalc",
        "--body",
        "Mun",
        "-T",
        "1h 30m",
        "--rp",
        "10km AS",
    ])
    .unwrap();
    let known = args.known_values();
    assert_eq!(known.body.as_deref(), Some("Mun"));
    assert_eq!(known.period, Some(Value::Text("1h 30m".into())));
    assert_eq!(known.periapsis, Some(Value::Text("10km AS".into())));
    assert_eq!(known.semi_major_axis, None);
    assert!(!args.list_bodies);
}

#[test]
fn cli_is_well_formed() {
    use clap::CommandFactory;
    Args::command().debug_assert();
}
