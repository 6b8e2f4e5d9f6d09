//! Chart configuration: the active point table, aspect definitions, and
//! canvas settings.
//!
//! Configuration is plain data handed in by the caller; file parsing
//! lives outside this crate. `ChartConfig::default()` carries the stock
//! tables so a chart can be built with no setup at all.

use crate::types::{BodyKind, ChartAngle, Sign};

/// One row of the active celestial point table. A subject's
/// [`crate::types::CelestialPoint::index`] refers into this table.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSetting {
    /// Stable identifier used for glyph symbols, e.g. `"sun"`.
    pub name: String,
    /// Category of the body.
    pub kind: BodyKind,
    /// Weight this point contributes to its sign's element tally.
    pub element_points: f64,
    /// Signs this point rules; landing in one earns the configured
    /// bonus points.
    pub related_signs: Vec<Sign>,
}

impl PointSetting {
    fn new(name: &str, kind: BodyKind, element_points: f64, related_signs: &[Sign]) -> Self {
        PointSetting {
            name: name.to_string(),
            kind,
            element_points,
            related_signs: related_signs.to_vec(),
        }
    }
}

/// An aspect definition: exact separation angle plus a symmetric,
/// inclusive orb band.
#[derive(Clone, Debug, PartialEq)]
pub struct AspectDefinition {
    /// Stable identifier, used to tag aspect lines and grid glyphs.
    pub id: usize,
    /// Glyph/name identifier, e.g. `"conjunction"`.
    pub name: String,
    /// Exact separation angle in degrees.
    pub degree: f64,
    /// Orb tolerance in degrees; the band is `[degree − orb, degree + orb]`,
    /// both ends inclusive.
    pub orb: f64,
}

impl AspectDefinition {
    pub fn new(id: usize, name: &str, degree: f64, orb: f64) -> Self {
        AspectDefinition {
            id,
            name: name.to_string(),
            degree,
            orb,
        }
    }
}

/// Everything the layout composer needs besides the subjects themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Active point table, indexed by `CelestialPoint::index`.
    pub points: Vec<PointSetting>,
    /// Aspect definitions to classify against.
    pub aspects: Vec<AspectDefinition>,
    /// Bonus element points for a body sitting in a sign it rules.
    pub ruler_bonus: f64,
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Surface detected aspect patterns in the scene. Off by default:
    /// patterns are computed either way, but historically the results
    /// were dropped before rendering, and consumers may rely on that.
    pub emit_patterns: bool,
}

impl ChartConfig {
    /// The wheel's outer radius for this canvas.
    #[inline]
    pub fn wheel_radius(&self) -> f64 {
        self.height * 0.3
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            points: default_points(),
            aspects: default_aspects(),
            ruler_bonus: 10.0,
            width: 820.0,
            height: 550.0,
            emit_patterns: false,
        }
    }
}

/// The stock point table: ten planets, lunar points, and the four chart
/// angles.
pub fn default_points() -> Vec<PointSetting> {
    use BodyKind::*;
    use Sign::*;
    vec![
        PointSetting::new("sun", Planet, 40.0, &[Leo]),
        PointSetting::new("moon", Planet, 40.0, &[Cancer]),
        PointSetting::new("mercury", Planet, 15.0, &[Gemini, Virgo]),
        PointSetting::new("venus", Planet, 15.0, &[Taurus, Libra]),
        PointSetting::new("mars", Planet, 15.0, &[Aries, Scorpio]),
        PointSetting::new("jupiter", Planet, 10.0, &[Sagittarius, Pisces]),
        PointSetting::new("saturn", Planet, 10.0, &[Capricorn, Aquarius]),
        PointSetting::new("uranus", Planet, 10.0, &[Aquarius]),
        PointSetting::new("neptune", Planet, 10.0, &[Pisces]),
        PointSetting::new("pluto", Planet, 10.0, &[Scorpio]),
        PointSetting::new("mean_node", LunarNode, 20.0, &[]),
        PointSetting::new("true_node", LunarNode, 0.0, &[]),
        PointSetting::new("chiron", Planet, 5.0, &[]),
        PointSetting::new("asc", Angle(ChartAngle::Ascendant), 40.0, &[]),
        PointSetting::new("mc", Angle(ChartAngle::MidHeaven), 20.0, &[]),
        PointSetting::new("dsc", Angle(ChartAngle::Descendant), 0.0, &[]),
        PointSetting::new("ic", Angle(ChartAngle::ImumCoeli), 0.0, &[]),
    ]
}

/// The stock aspect table: the classical majors plus the usual minors.
pub fn default_aspects() -> Vec<AspectDefinition> {
    vec![
        AspectDefinition::new(0, "conjunction", 0.0, 10.0),
        AspectDefinition::new(1, "semi-sextile", 30.0, 1.0),
        AspectDefinition::new(2, "semi-square", 45.0, 1.0),
        AspectDefinition::new(3, "sextile", 60.0, 6.0),
        AspectDefinition::new(4, "quintile", 72.0, 1.0),
        AspectDefinition::new(5, "square", 90.0, 5.0),
        AspectDefinition::new(6, "trine", 120.0, 8.0),
        AspectDefinition::new(7, "sesquiquadrate", 135.0, 1.0),
        AspectDefinition::new(8, "biquintile", 144.0, 1.0),
        AspectDefinition::new(9, "quincunx", 150.0, 1.0),
        AspectDefinition::new(10, "opposition", 180.0, 10.0),
    ]
}
