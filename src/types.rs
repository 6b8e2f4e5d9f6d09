//! Strongly-typed domain primitives for chart wheel layout.
//!
//! Design goals:
//! - Ecliptic longitudes are always normalized to `[0, 360)`
//! - Zodiac signs and chart angles are enums, never magic indices
//! - All entities are rebuilt fresh per chart build, nothing is shared

use std::fmt;

/// An absolute ecliptic longitude in degrees, normalized to `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Longitude(f64);

impl Longitude {
    /// Create a longitude, wrapping the input into `[0, 360)`.
    #[inline]
    pub fn new(deg: f64) -> Longitude {
        Longitude(deg.rem_euclid(360.0))
    }

    /// The raw degree value in `[0, 360)`.
    #[inline]
    pub fn deg(self) -> f64 {
        self.0
    }

    /// The zodiac sign this longitude falls in.
    pub fn sign(self) -> Sign {
        Sign::from_index((self.0 / 30.0) as usize % 12)
    }

    /// Position within the sign, in `[0, 30)`.
    #[inline]
    pub fn sign_position(self) -> f64 {
        self.0 % 30.0
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// The twelve zodiac signs, in ecliptic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign from its index `0..12`; indices wrap.
    #[inline]
    pub fn from_index(i: usize) -> Sign {
        Sign::ALL[i % 12]
    }

    /// Index of the sign in ecliptic order, `0..12`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The classical element of the sign (fire/earth/air/water cycle).
    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    /// Lowercase sign name, as used for glyph identifiers.
    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "aries",
            Sign::Taurus => "taurus",
            Sign::Gemini => "gemini",
            Sign::Cancer => "cancer",
            Sign::Leo => "leo",
            Sign::Virgo => "virgo",
            Sign::Libra => "libra",
            Sign::Scorpio => "scorpio",
            Sign::Sagittarius => "sagittarius",
            Sign::Capricorn => "capricorn",
            Sign::Aquarius => "aquarius",
            Sign::Pisces => "pisces",
        }
    }
}

/// The four classical elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// The four chart angles derived from the house cusps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartAngle {
    Ascendant,
    MidHeaven,
    Descendant,
    ImumCoeli,
}

impl ChartAngle {
    /// The chart angle a house cusp coincides with, if any.
    /// Cusp 0 is the Ascendant, 9 the Midheaven, 6 the Descendant,
    /// 3 the Imum Coeli.
    pub fn for_cusp(index: usize) -> Option<ChartAngle> {
        match index {
            0 => Some(ChartAngle::Ascendant),
            9 => Some(ChartAngle::MidHeaven),
            6 => Some(ChartAngle::Descendant),
            3 => Some(ChartAngle::ImumCoeli),
            _ => None,
        }
    }
}

/// Category of a celestial point on the wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Planet,
    LunarNode,
    Apogee,
    Perigee,
    Angle(ChartAngle),
}

impl BodyKind {
    /// Whether this category takes part in aspect-pattern detection.
    ///
    /// Lunar nodes, apogee/perigee points, and the Descendant/Imum Coeli
    /// angles are kept out of the adjacency maps even though they still
    /// appear in the flat aspect list. The Ascendant and Midheaven do
    /// participate.
    pub fn joins_patterns(self) -> bool {
        match self {
            BodyKind::Planet => true,
            BodyKind::LunarNode | BodyKind::Apogee | BodyKind::Perigee => false,
            BodyKind::Angle(ChartAngle::Ascendant) | BodyKind::Angle(ChartAngle::MidHeaven) => true,
            BodyKind::Angle(_) => false,
        }
    }

    /// Whether this is one of the four chart angles.
    #[inline]
    pub fn is_angle(self) -> bool {
        matches!(self, BodyKind::Angle(_))
    }
}

/// One active celestial point of a subject, as computed by an external
/// ephemeris layer. Immutable per chart build.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialPoint {
    /// Row in the configured point table ([`crate::config::PointSetting`]).
    pub index: usize,
    /// Absolute ecliptic longitude.
    pub longitude: Longitude,
    /// Position within the sign, `[0, 30)`.
    pub sign_position: f64,
    /// Zodiac sign the point falls in.
    pub sign: Sign,
    /// Apparent retrograde motion.
    pub retrograde: bool,
    /// Category of the point.
    pub kind: BodyKind,
}

impl CelestialPoint {
    /// Build a point from its table row, longitude and kind; sign and
    /// sign position are derived from the longitude.
    pub fn new(index: usize, longitude: f64, retrograde: bool, kind: BodyKind) -> CelestialPoint {
        let longitude = Longitude::new(longitude);
        CelestialPoint {
            index,
            longitude,
            sign_position: longitude.sign_position(),
            sign: longitude.sign(),
            retrograde,
            kind,
        }
    }
}

/// The twelve house cusp longitudes of a subject. Cusps define unequal
/// wedges; cusp 6 (the Descendant) is the rotation anchor of the whole
/// wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HouseCusps(pub [Longitude; 12]);

impl HouseCusps {
    /// Build from raw degree values, normalizing each.
    pub fn from_degrees(deg: [f64; 12]) -> HouseCusps {
        HouseCusps(deg.map(Longitude::new))
    }

    /// Longitude of cusp `i` (`0..12`).
    #[inline]
    pub fn cusp(&self, i: usize) -> Longitude {
        self.0[i]
    }

    /// The global rotation anchor: `360 − cusp[6]`. Every layer of the
    /// wheel projects through this single value.
    #[inline]
    pub fn anchor(&self) -> f64 {
        360.0 - self.0[6].deg()
    }
}

/// One charted person or moment: points, cusps, and the couple of
/// scalars the wheel decorations need.
#[derive(Clone, Debug, PartialEq)]
pub struct Subject {
    /// Active celestial points, in table order.
    pub points: Vec<CelestialPoint>,
    /// The twelve house cusps.
    pub cusps: HouseCusps,
    /// Geographic latitude in degrees, used to tilt the lunar disc.
    pub latitude: f64,
    /// Sun–Moon angular separation in degrees, `[0, 360)`.
    pub sun_moon_separation: f64,
}

/// Which wheel is being laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Natal,
    ExternalNatal,
    Transit,
    Synastry,
}

impl ChartKind {
    /// Dual-subject chart types need a second point set.
    #[inline]
    pub fn is_dual(self) -> bool {
        matches!(self, ChartKind::Transit | ChartKind::Synastry)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartKind::Natal => "natal",
            ChartKind::ExternalNatal => "external natal",
            ChartKind::Transit => "transit",
            ChartKind::Synastry => "synastry",
        };
        write!(f, "{s}")
    }
}

/// A full chart build request: kind, primary subject, and the optional
/// second subject for transit/synastry overlays.
#[derive(Clone, Debug)]
pub struct Chart {
    pub kind: ChartKind,
    pub first: Subject,
    pub second: Option<Subject>,
}
