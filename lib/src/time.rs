use std::fmt;

use serde::{Deserialize, Serialize};
use time::Duration;

/// Length of one orbit, kept as a [`Duration`] for display purposes.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct OrbitalPeriod(Duration);

impl OrbitalPeriod {
    pub fn new_hms(hours: u32, minutes: u8, seconds: u8, millis: u16) -> Self {
        Self(Duration::new(
            seconds as i64 + 60 * minutes as i64 + 60 * 60 * hours as i64,
            millis as i32 * 1_000_000,
        ))
    }

    pub fn new_seconds(sec: f64) -> Self {
        Self(Duration::seconds_f64(sec))
    }

    /// Like [`new_seconds`](Self::new_seconds), but `None` for values a
    /// [`Duration`] cannot hold.
    pub fn try_from_seconds(sec: f64) -> Option<Self> {
        (sec.is_finite() && sec.abs() < i64::MAX as f64).then(|| Self::new_seconds(sec))
    }

    pub fn whole_hours(self) -> i64 {
        self.0.whole_hours()
    }

    pub fn minutes(self) -> u8 {
        (self.0.whole_minutes() % 60).unsigned_abs() as u8
    }

    pub fn seconds(self) -> u8 {
        (self.0.whole_seconds() % 60).unsigned_abs() as u8
    }

    pub fn millis(self) -> u16 {
        (self.0.whole_milliseconds() % 1000).unsigned_abs() as u16
    }

    pub fn as_seconds(self) -> f64 {
        self.0.as_seconds_f64()
    }
}

/// `1h 32m 38s`, with leading zero units left out. The alternate form
/// (`{:#}`) appends milliseconds.
impl fmt::Display for OrbitalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.whole_hours() > 0 {
            write!(f, "{}h {}m ", self.whole_hours(), self.minutes())?;
        } else if self.minutes() > 0 {
            write!(f, "{}m ", self.minutes())?;
        }
        if f.alternate() {
            write!(f, "{}.{:03}s", self.seconds(), self.millis())
        } else {
            write!(f, "{}s", self.seconds())
        }
    }
}

impl fmt::Debug for OrbitalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrbitalPeriod({}s)", self.as_seconds())
    }
}

#[test]
fn hms_breakdown() {
    let period = OrbitalPeriod::new_seconds(5558.25);
    assert_eq!(period.whole_hours(), 1);
    assert_eq!(period.minutes(), 32);
    assert_eq!(period.seconds(), 38);
    assert_eq!(period.millis(), 250);
    assert_eq!(period, OrbitalPeriod::new_hms(1, 32, 38, 250));
}

#[test]
fn out_of_range() {
    assert!(OrbitalPeriod::try_from_seconds(f64::INFINITY).is_none());
    assert!(OrbitalPeriod::try_from_seconds(1e30).is_none());
    assert_eq!(
        OrbitalPeriod::try_from_seconds(90.0),
        Some(OrbitalPeriod::new_hms(0, 1, 30, 0))
    );
}

#[test]
fn display() {
    assert_eq!(OrbitalPeriod::new_hms(1, 32, 38, 0).to_string(), "1h 32m 38s");
    assert_eq!(OrbitalPeriod::new_hms(0, 32, 38, 0).to_string(), "32m 38s");
    assert_eq!(OrbitalPeriod::new_hms(0, 0, 7, 0).to_string(), "7s");
    assert_eq!(OrbitalPeriod::new_hms(6, 0, 0, 0).to_string(), "6h 0m 0s");
    assert_eq!(
        format!("{:#}", OrbitalPeriod::new_hms(0, 2, 3, 45)),
        "2m 3.045s"
    );
}
