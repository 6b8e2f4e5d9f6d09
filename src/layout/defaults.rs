//! Ring radii and inset constants, per chart type.
//!
//! Single-subject wheels size their bands as fractions of the wheel
//! radius; dual wheels reserve a fixed-width outer band for the second
//! subject and use absolute insets below it.

use crate::types::ChartKind;

/// Band radius fractions of a single-subject wheel, outermost first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingProfile {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
}

/// The ring profile for a chart type. External natal wheels push the
/// glyphs outside the rim, so every band moves inward; the dual types
/// share the natal fractions but mostly work in absolute insets.
pub fn ring_profile(kind: ChartKind) -> RingProfile {
    match kind {
        ChartKind::ExternalNatal => RingProfile {
            c0: 1.0,
            c1: 0.9,
            c2: 0.6,
            c3: 0.52,
        },
        _ => RingProfile {
            c0: 1.2,
            c1: 0.85,
            c2: 0.52,
            c3: 0.0,
        },
    }
}

/// Stroke-center inset of the wide overlay band of a dual chart.
pub const OVERLAY_BAND_INSET: f64 = 18.0;

/// Absolute band insets of a dual wheel (zodiac, inner, aspect hub).
pub const DUAL_BAND_INSETS: [f64; 3] = [36.0, 72.0, 160.0];

/// Zodiac sign glyph inset on a dual wheel.
pub const DUAL_SIGN_GLYPH_INSET: f64 = 54.0;

/// House cusp lines of a dual wheel run between these insets.
pub const DUAL_HOUSE_INNER_INSET: f64 = 160.0;
pub const DUAL_HOUSE_OUTER_INSET: f64 = 72.0;

/// House number labels of a dual wheel.
pub const DUAL_HOUSE_NUMBER_INSET: f64 = 84.0;

/// Second subject's house cusp lines reach the rim from this inset.
pub const OVERLAY_HOUSE_INSET: f64 = 36.0;

/// Second subject's house number labels.
pub const OVERLAY_HOUSE_NUMBER_INSET: f64 = 8.0;

/// Aspect lines of a dual wheel meet the hub at this inset.
pub const DUAL_ASPECT_INSET: f64 = 160.0;

/// Primary-ring glyph rows of a dual wheel: chart angles, then the two
/// alternating staggered rows.
pub const DUAL_ANGLE_ROW: f64 = 76.0;
pub const DUAL_ROW_A: f64 = 110.0;
pub const DUAL_ROW_B: f64 = 130.0;

/// Overlay-ring glyph rows of a dual wheel.
pub const OVERLAY_ANGLE_ROW: f64 = 9.0;
pub const OVERLAY_ROW_A: f64 = 18.0;
pub const OVERLAY_ROW_B: f64 = 26.0;

/// Radial length of a five-degree tick.
pub const DEGREE_TICK_LENGTH: f64 = 2.0;

/// Glyph scale factors per chart type.
pub fn body_glyph_scale(kind: ChartKind) -> f64 {
    match kind {
        ChartKind::Transit | ChartKind::Synastry => 0.8,
        ChartKind::ExternalNatal => 0.9,
        ChartKind::Natal => 1.0,
    }
}

/// Overlay glyphs are drawn at half size.
pub const OVERLAY_GLYPH_SCALE: f64 = 0.5;
