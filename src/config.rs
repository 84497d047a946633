//! Which demo a canvas runs and which sliders feed it.
//!
//! A page selects the demo with `<canvas data-demo="eigshow">`. Each demo
//! lists its sliders as [`ParamSpec`]s; the value shown next to a slider lives
//! in the element named by `label_id`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Circle,
    Eigshow,
    GaussSeidel,
    Plot,
    Translate,
    Triangle,
    TriangleFlat,
    Vector,
    VectorDrag,
}

impl DemoKind {
    pub const ALL: [DemoKind; 9] = [
        DemoKind::Circle,
        DemoKind::Eigshow,
        DemoKind::GaussSeidel,
        DemoKind::Plot,
        DemoKind::Translate,
        DemoKind::Triangle,
        DemoKind::TriangleFlat,
        DemoKind::Vector,
        DemoKind::VectorDrag,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::Circle => "circle",
            DemoKind::Eigshow => "eigshow",
            DemoKind::GaussSeidel => "gs",
            DemoKind::Plot => "plot",
            DemoKind::Translate => "translate",
            DemoKind::Triangle => "triangle",
            DemoKind::TriangleFlat => "triangle-flat",
            DemoKind::Vector => "vector",
            DemoKind::VectorDrag => "vector-drag",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownDemo(s.to_owned()))
    }
}

/// One slider-bound parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    /// Slider element id; also the name passed to `Demo::set_param`.
    pub id: &'static str,
    pub label_id: &'static str,
    /// Used when the page has no such slider.
    pub default: f64,
}

impl ParamSpec {
    pub const fn new(id: &'static str, label_id: &'static str, default: f64) -> Self {
        Self { id, label_id, default }
    }
}

/// Slider values arrive as text and are read like JavaScript's `parseInt`:
/// an optional sign and the leading run of digits, ignoring whatever follows.
pub fn parse_slider(name: &str, raw: &str) -> Result<f64, Error> {
    let raw = raw.trim();
    let invalid = || Error::InvalidParam {
        name: name.to_owned(),
        value: raw.to_owned(),
    };

    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(invalid());
    }
    let magnitude: f64 = rest[..digits].parse().map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.to_string().parse::<DemoKind>().unwrap(), kind);
        }
        assert_eq!(" EigShow ".parse::<DemoKind>().unwrap(), DemoKind::Eigshow);
    }

    #[test]
    fn unknown_demo_is_an_error() {
        let err = "sphere".parse::<DemoKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownDemo(ref name) if name == "sphere"));
    }

    #[test]
    fn slider_values_are_integers() {
        assert_eq!(parse_slider("r", "120").unwrap(), 120.0);
        assert_eq!(parse_slider("r", "-3.7").unwrap(), -3.0);
        assert_eq!(parse_slider("r", "1e3").unwrap(), 1.0);
        assert_eq!(parse_slider("r", "+42px").unwrap(), 42.0);
        assert!(parse_slider("r", "-").is_err());
        assert!(parse_slider("r", ".5").is_err());
        assert!(parse_slider("r", "wide").is_err());
        assert!(parse_slider("r", "").is_err());
    }
}
