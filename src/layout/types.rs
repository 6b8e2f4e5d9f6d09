//! The layout output: a typed list of abstract drawing primitives.
//!
//! Primitives carry geometry plus a semantic style class — which ring,
//! which aspect, which layer — never colors or fonts. A renderer maps
//! classes and symbols to concrete styling.

use glam::DVec2;

use crate::aspect::AspectInstance;
use crate::pattern::PatternInstance;
use crate::types::{ChartAngle, ChartKind, Element, Sign};

/// The concentric bands of the wheel, outermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingBand {
    /// Outer rim band.
    Outer,
    /// Zodiac band.
    Zodiac,
    /// Inner band between houses and aspects.
    Inner,
    /// Aspect hub circle.
    Aspect,
}

/// Shade role of a lunar-disc part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LunarShade {
    Lit,
    Shadow,
}

/// Semantic tag identifying a primitive's layer and role.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleClass {
    /// One of the wheel's concentric circles.
    WheelBand(RingBand),
    /// The wide outer band carrying the second subject of a dual chart.
    OverlayBand,
    /// Thin rim circle at the full wheel radius of a dual chart.
    OverlayBandEdge,
    /// A 30° zodiac wedge.
    ZodiacWedge(Sign),
    /// One of the 72 five-degree ticks.
    DegreeTick,
    /// Degree tick on the rim of a dual chart.
    OverlayDegreeTick,
    /// A house cusp line; angular cusps carry their chart angle.
    HouseLine(Option<ChartAngle>),
    /// House number label.
    HouseNumber,
    /// Second subject's house cusp line.
    OverlayHouseLine(Option<ChartAngle>),
    /// Second subject's house number label.
    OverlayHouseNumber,
    /// An aspect line, tagged with the matched definition id.
    AspectLine(usize),
    /// Pointer from a body's true longitude to its displaced glyph
    /// (external natal wheels); carries the point table row.
    PointerLine(usize),
    /// Per-body tick on the overlay rim; carries the point table row.
    BodyTick(usize),
    /// Rotated degree label next to an overlay body.
    BodyDegreeLabel(usize),
    /// Degree label in the point grid; carries the point table row.
    GridDegreeLabel(usize),
    /// A cell of an aspect grid.
    GridCell,
    /// A row label of the transit aspect grid.
    GridOrbitLabel,
    /// Element share label.
    ElementPercent(Element),
    /// Lunar disc parts.
    LunarBackground(LunarShade),
    LunarForeground(LunarShade),
    LunarOutline,
}

/// Horizontal anchoring of a text label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Which symbol a glyph placement refers to.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    /// A zodiac sign glyph.
    Sign(Sign),
    /// A celestial body glyph, by its configured name.
    Body(String),
    /// An aspect glyph, by definition id.
    Aspect(usize),
    /// The retrograde marker.
    Retrograde,
}

/// A positioned glyph. `at` is the final canvas position of the glyph
/// anchor; `scale` and `rotation` (degrees, clockwise on screen) apply
/// around it.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub at: DVec2,
    pub rotation: f64,
    pub scale: f64,
    pub symbol: Symbol,
}

/// A positioned text label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
    pub at: DVec2,
    pub rotation: f64,
    pub anchor: TextAnchor,
    pub text: String,
    pub class: StyleClass,
}

/// One abstract drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Circle {
        center: DVec2,
        radius: f64,
        class: StyleClass,
    },
    Segment {
        from: DVec2,
        to: DVec2,
        class: StyleClass,
    },
    /// A pie wedge: straight edges from `center` to `start` and `end`,
    /// closed by an arc of `arc_radius`.
    Wedge {
        center: DVec2,
        start: DVec2,
        end: DVec2,
        arc_radius: f64,
        class: StyleClass,
    },
    Rect {
        min: DVec2,
        size: DVec2,
        class: StyleClass,
    },
    Glyph(GlyphPlacement),
    Label(LabelPlacement),
}

impl Primitive {
    /// The primitive's style class; glyphs have none (they are styled by
    /// symbol).
    pub fn class(&self) -> Option<&StyleClass> {
        match self {
            Primitive::Circle { class, .. }
            | Primitive::Segment { class, .. }
            | Primitive::Wedge { class, .. }
            | Primitive::Rect { class, .. } => Some(class),
            Primitive::Label(label) => Some(&label.class),
            Primitive::Glyph(_) => None,
        }
    }
}

/// Rounded per-element percentage shares of the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementShares {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

/// A fully composed chart layout, ready for a renderer.
#[derive(Clone, Debug)]
pub struct Scene {
    pub kind: ChartKind,
    /// Canvas size in pixels.
    pub width: f64,
    pub height: f64,
    /// Outer wheel radius; the wheel center sits at `(r, r)`.
    pub wheel_radius: f64,
    /// The rotation anchor (`360 − cusp[6]` of the primary subject),
    /// computed once and shared by every layer.
    pub anchor: f64,
    /// Drawing primitives in paint order.
    pub primitives: Vec<Primitive>,
    /// The classified aspects behind the aspect lines.
    pub aspects: Vec<AspectInstance>,
    /// Detected aspect patterns. Stays empty unless
    /// [`crate::config::ChartConfig::emit_patterns`] is set.
    pub patterns: Vec<PatternInstance>,
    /// Element tally shares of the primary subject.
    pub elements: ElementShares,
}

impl Scene {
    /// Count primitives carrying a class selected by `pred`.
    pub fn count_class(&self, pred: impl Fn(&StyleClass) -> bool) -> usize {
        self.primitives
            .iter()
            .filter(|p| p.class().is_some_and(&pred))
            .count()
    }

    /// Iterate all glyph placements.
    pub fn glyphs(&self) -> impl Iterator<Item = &GlyphPlacement> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Glyph(g) => Some(g),
            _ => None,
        })
    }
}
