//! volvelle — chart wheel layout for astrological charts.
//!
//! Given already-computed celestial longitudes and house cusps, this
//! crate computes the 2-D geometry of a chart wheel — zodiac and house
//! rings, deconflicted body glyphs, aspect lines, dual-subject overlays
//! — and emits abstract drawing primitives for any renderer to consume.
//! No markup is produced and no positions are computed here: ephemeris
//! data comes in, geometry goes out.
//!
//! ```
//! use volvelle::{BodyKind, CelestialPoint, Chart, ChartConfig, ChartKind, HouseCusps, Subject};
//!
//! let first = Subject {
//!     points: vec![
//!         CelestialPoint::new(0, 120.3, false, BodyKind::Planet),
//!         CelestialPoint::new(1, 185.0, false, BodyKind::Planet),
//!     ],
//!     cusps: HouseCusps::from_degrees([
//!         10.0, 40.0, 70.0, 100.0, 130.0, 160.0,
//!         190.0, 220.0, 250.0, 280.0, 310.0, 340.0,
//!     ]),
//!     latitude: 53.4,
//!     sun_moon_separation: 64.7,
//! };
//! let chart = Chart { kind: ChartKind::Natal, first, second: None };
//! let scene = volvelle::wheel(&chart, &ChartConfig::default()).unwrap();
//! assert_eq!(scene.wheel_radius, 165.0);
//! ```

pub mod angle;
pub mod aspect;
pub mod config;
pub mod deconflict;
pub mod errors;
pub mod layout;
pub mod log;
pub mod pattern;
pub mod project;
pub mod types;

pub use angle::{DegreeFormat, degree_diff, format_degrees, normalize_degrees};
pub use aspect::{AspectGraph, AspectInstance};
pub use config::{AspectDefinition, ChartConfig, PointSetting};
pub use errors::ChartError;
pub use layout::{
    ElementShares, GlyphPlacement, LabelPlacement, Primitive, Scene, StyleClass, Symbol,
    TextAnchor, compose,
};
pub use pattern::{PatternInstance, PatternKind};
pub use types::{
    BodyKind, CelestialPoint, Chart, ChartAngle, ChartKind, Element, HouseCusps, Longitude, Sign,
    Subject,
};

/// Lay out a chart wheel.
///
/// Returns the composed [`Scene`] on success, or an error when the
/// chart request is inconsistent (a dual chart without its second
/// subject, or upstream data breaking the layout's invariants).
pub fn wheel(chart: &Chart, config: &ChartConfig) -> Result<Scene, ChartError> {
    layout::compose(chart, config)
}
