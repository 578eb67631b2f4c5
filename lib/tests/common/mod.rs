#![allow(dead_code)]

use kepcalc::Body;

pub fn kerbin() -> Body {
    Body::new(
        "Kerbin",
        5.291_515_8e22,
        600_000.0,
        70_000.0,
        Some(84_159_286.0),
    )
    .unwrap()
}

pub fn mun() -> Body {
    Body::new("Mun", 9.759_906_6e20, 200_000.0, 0.0, Some(2_429_559.1)).unwrap()
}

/// A body with no atmosphere and no sphere of influence, so every orbit
/// with a periapsis above 1 m is flyable.
pub fn point_mass(mass: f64) -> Body {
    Body::new("Point", mass, 1.0, 0.0, None).unwrap()
}
