#![warn(clippy::unwrap_used, clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]
use clap::Parser;
use color_eyre::eyre::{self, bail, WrapErr};
use kepcalc::{input::KnownValues, OrbitError, SolarSystem, ValidationError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Args;
use display::Report;

mod cli;
mod config;
mod display;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut system = SolarSystem::stock();
    if let Some(path) = &args.bodies {
        config::load_bodies(path, &mut system)?;
    }
    if args.list_bodies {
        print!("{}", display::BodyList(&system));
        return Ok(());
    }

    let known = match &args.input {
        Some(path) => config::load_known_values(path)?,
        None => KnownValues::default(),
    }
    .merge(args.known_values());

    let (body, state) = match known.resolve(&system) {
        Err(OrbitError::Validation(ValidationError::MissingBody)) => match &known.body {
            Some(name) => bail!("unknown reference body {name:?} (see --list-bodies)"),
            None => bail!("reference body missing (use --body)"),
        },
        res => res.wrap_err("invalid known values")?,
    };
    info!(body = %body.name, "reference body");

    let orbit = kepcalc::solve(Some(&body), &state).wrap_err("impossible to compute orbit")?;
    if state.shape_known() == 0 {
        println!("Assuming circular orbit");
    }
    print!("{}", Report::new(&body, &orbit));
    Ok(())
}
