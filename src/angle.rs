//! Angular math shared by every ring of the wheel: shortest angular
//! distance, degree normalization, and sexagesimal formatting.

use crate::errors::ChartError;

/// Normalize a degree value into `[0, 360)`.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Minimal unsigned angular distance between two longitudes, in
/// `[0, 180]`. Wrap-around correct: `degree_diff(350.0, 10.0) == 20.0`.
/// Symmetric in its arguments, zero when they coincide.
pub fn degree_diff(a: f64, b: f64) -> f64 {
    let mut out = (normalize_degrees(a) - normalize_degrees(b)).abs();
    if out > 180.0 {
        out = 360.0 - out;
    }
    out
}

/// How many sexagesimal places a formatted degree value carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegreeFormat {
    /// `a°`
    Degrees,
    /// `a°b'` with minutes rounded
    DegreesMinutes,
    /// `a°b'c"`
    DegreesMinutesSeconds,
}

impl DegreeFormat {
    /// Resolve a raw selector (`1..=3`) into a format. Anything else is
    /// rejected; the selector comes straight from caller configuration.
    pub fn from_selector(selector: u8) -> Result<DegreeFormat, ChartError> {
        match selector {
            1 => Ok(DegreeFormat::Degrees),
            2 => Ok(DegreeFormat::DegreesMinutes),
            3 => Ok(DegreeFormat::DegreesMinutesSeconds),
            _ => Err(ChartError::InvalidFormatSelector { selector }),
        }
    }
}

/// Render a decimal degree value in sexagesimal notation.
pub fn format_degrees(dec: f64, format: DegreeFormat) -> String {
    let a = dec as i64;
    let minutes = (dec - a as f64) * 60.0;
    let b = minutes as i64;
    let b_rounded = minutes.round() as i64;
    let c = ((minutes - b as f64) * 60.0).round() as i64;
    match format {
        DegreeFormat::Degrees => format!("{a:02}°"),
        DegreeFormat::DegreesMinutes => format!("{a:02}°{b_rounded:02}'"),
        DegreeFormat::DegreesMinutesSeconds => format!("{a:02}°{b:02}'{c:02}\""),
    }
}

/// Render a geographic latitude as degrees/minutes/seconds with an N/S
/// suffix, e.g. `52.1234567 → 52°7'24" N`.
pub fn format_latitude(coord: f64) -> String {
    format_coordinate(coord, 'N', 'S')
}

/// Render a geographic longitude as degrees/minutes/seconds with an E/W
/// suffix.
pub fn format_longitude(coord: f64) -> String {
    format_coordinate(coord, 'E', 'W')
}

fn format_coordinate(coord: f64, positive: char, negative: char) -> String {
    let suffix = if coord < 0.0 { negative } else { positive };
    let coord = coord.abs();
    let deg = coord as i64;
    let minutes = (coord - deg as f64) * 60.0;
    let min = minutes as i64;
    let sec = ((minutes - min as f64) * 60.0).round() as i64;
    format!("{deg}°{min}'{sec}\" {suffix}")
}
