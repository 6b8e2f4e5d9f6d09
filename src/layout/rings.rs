//! The static rings of the wheel: concentric bands, zodiac wedges, the
//! degree tick ring, and the house cusp lines.

use glam::dvec2;

use crate::angle::{degree_diff, normalize_degrees};
use crate::project::ring_point;
use crate::types::{ChartAngle, Sign, Subject};

use super::context::BuildContext;
use super::defaults::*;
use super::types::{RingBand, StyleClass};

/// The concentric band circles. Single-subject wheels get all four
/// fractional bands; dual wheels get the overlay band plus three
/// absolute inner bands.
pub fn bands(cx: &mut BuildContext<'_>) {
    let r = cx.r;
    let center = cx.center();
    if cx.is_dual() {
        cx.circle(
            center,
            r - OVERLAY_BAND_INSET,
            StyleClass::OverlayBand,
        );
        cx.circle(center, r, StyleClass::OverlayBandEdge);
        let bands = [RingBand::Zodiac, RingBand::Inner, RingBand::Aspect];
        for (inset, band) in DUAL_BAND_INSETS.into_iter().zip(bands) {
            cx.circle(center, r - inset, StyleClass::WheelBand(band));
        }
    } else {
        let p = cx.profile;
        let fractions = [
            (p.c0, RingBand::Outer),
            (p.c1, RingBand::Zodiac),
            (p.c2, RingBand::Inner),
            (p.c3, RingBand::Aspect),
        ];
        for (fraction, band) in fractions {
            cx.circle(center, r * fraction, StyleClass::WheelBand(band));
        }
    }
}

/// Twelve equal 30° zodiac wedges, rotated by the anchor, each with its
/// sign glyph.
pub fn zodiac(cx: &mut BuildContext<'_>) {
    let r = cx.r;
    let offset = cx.anchor;
    let wedge_inset = if cx.is_dual() {
        0.0
    } else {
        r - r * cx.profile.c1
    };
    let glyph_inset = if cx.is_dual() {
        DUAL_SIGN_GLYPH_INSET
    } else {
        r - r * cx.profile.c1 * 0.85
    };
    // glyphs sit a hair ahead of the wedge boundary, pulled back onto
    // the band by a small pixel nudge
    let glyph_offset = offset + cx.width() * 0.008;
    let nudge = dvec2(cx.width() * 0.008, cx.height() * 0.01);

    for (i, sign) in Sign::ALL.into_iter().enumerate() {
        let slice = i as f64;
        let start = ring_point(slice, r, wedge_inset, offset);
        let end = ring_point(slice + 1.0, r, wedge_inset, offset);
        cx.wedge(start, end, r - wedge_inset, StyleClass::ZodiacWedge(sign));

        let at = ring_point(slice, r, glyph_inset, glyph_offset) - nudge;
        cx.glyph(at, 1.0, super::types::Symbol::Sign(sign));
    }
}

/// The 72-tick degree ring at 5° spacing.
pub fn degree_ring(cx: &mut BuildContext<'_>) {
    let r = cx.r;
    let (inner_inset, class) = if cx.is_dual() {
        (0.0, StyleClass::OverlayDegreeTick)
    } else {
        (r - r * cx.profile.c0, StyleClass::DegreeTick)
    };
    for i in 0..72 {
        let offset = normalize_degrees(cx.anchor + 5.0 * i as f64);
        let from = ring_point(0.0, r, inner_inset, offset);
        let to = ring_point(0.0, r, inner_inset - DEGREE_TICK_LENGTH, offset);
        cx.segment(from, to, class.clone());
    }
}

/// Twelve unequal house wedges for the primary subject, plus the second
/// subject's cusp lines on dual wheels. House numbers sit at each
/// wedge's angular midpoint.
pub fn houses(cx: &mut BuildContext<'_>, first: &Subject, second: Option<&Subject>) {
    let r = cx.r;
    let (inner_inset, outer_inset, number_inset) = if cx.is_dual() {
        (
            DUAL_HOUSE_INNER_INSET,
            DUAL_HOUSE_OUTER_INSET,
            DUAL_HOUSE_NUMBER_INSET,
        )
    } else {
        let c0 = cx.profile.c0;
        let number = if cx.kind == crate::types::ChartKind::ExternalNatal {
            r - r * c0 * 0.95
        } else {
            r - r * c0
        };
        (r - r * cx.profile.c2, r - r * c0, number)
    };

    for i in 0..12 {
        let cusp = first.cusps.cusp(i).deg();
        let next = first.cusps.cusp((i + 1) % 12).deg();
        let offset = cx.anchor + cusp;
        let angle = ChartAngle::for_cusp(i);

        cx.segment(
            ring_point(0.0, r, outer_inset, offset),
            ring_point(0.0, r, inner_inset, offset),
            StyleClass::HouseLine(angle),
        );

        let mid_offset = offset + degree_diff(next, cusp) / 2.0;
        let at = ring_point(0.0, r, number_inset, mid_offset) + dvec2(-3.0, 5.0);
        cx.label(at, (i + 1).to_string(), StyleClass::HouseNumber);

        if let Some(second) = second {
            let t_cusp = second.cusps.cusp(i).deg();
            let t_next = second.cusps.cusp((i + 1) % 12).deg();
            let t_offset = normalize_degrees(cx.anchor + t_cusp);

            cx.segment(
                ring_point(0.0, r, OVERLAY_HOUSE_INSET, t_offset),
                ring_point(0.0, r, 0.0, t_offset),
                StyleClass::OverlayHouseLine(angle),
            );

            let t_mid = t_offset + degree_diff(t_next, t_cusp) / 2.0;
            let at = ring_point(0.0, r, OVERLAY_HOUSE_NUMBER_INSET, t_mid) + dvec2(-3.0, 3.0);
            cx.label(at, (i + 1).to_string(), StyleClass::OverlayHouseNumber);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::types::{ChartKind, HouseCusps};

    fn cusps() -> HouseCusps {
        HouseCusps::from_degrees([
            10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0,
        ])
    }

    fn subject() -> Subject {
        Subject {
            points: Vec::new(),
            cusps: cusps(),
            latitude: 0.0,
            sun_moon_separation: 0.0,
        }
    }

    #[test]
    fn twelve_wedges_for_every_chart_type() {
        let config = ChartConfig::default();
        for kind in [
            ChartKind::Natal,
            ChartKind::ExternalNatal,
            ChartKind::Transit,
            ChartKind::Synastry,
        ] {
            let mut cx = BuildContext::new(&config, kind, config.wheel_radius(), 170.0);
            zodiac(&mut cx);
            let wedges = cx
                .primitives
                .iter()
                .filter(|p| matches!(p, crate::layout::Primitive::Wedge { .. }))
                .count();
            assert_eq!(wedges, 12);
        }
    }

    #[test]
    fn seventy_two_degree_ticks() {
        let config = ChartConfig::default();
        let mut cx = BuildContext::new(&config, ChartKind::Natal, config.wheel_radius(), 170.0);
        degree_ring(&mut cx);
        assert_eq!(cx.primitives.len(), 72);
    }

    #[test]
    fn angular_cusps_are_tagged() {
        let config = ChartConfig::default();
        let first = subject();
        let mut cx = BuildContext::new(
            &config,
            ChartKind::Natal,
            config.wheel_radius(),
            first.cusps.anchor(),
        );
        houses(&mut cx, &first, None);
        let tagged: Vec<_> = cx
            .primitives
            .iter()
            .filter_map(|p| match p {
                crate::layout::Primitive::Segment {
                    class: StyleClass::HouseLine(Some(angle)),
                    ..
                } => Some(*angle),
                _ => None,
            })
            .collect();
        assert_eq!(
            tagged,
            vec![
                ChartAngle::Ascendant,
                ChartAngle::ImumCoeli,
                ChartAngle::Descendant,
                ChartAngle::MidHeaven,
            ]
        );
    }

    #[test]
    fn dual_charts_add_overlay_house_lines() {
        let config = ChartConfig::default();
        let first = subject();
        let second = subject();
        let mut cx = BuildContext::new(
            &config,
            ChartKind::Synastry,
            config.wheel_radius(),
            first.cusps.anchor(),
        );
        houses(&mut cx, &first, Some(&second));
        let overlay = cx
            .primitives
            .iter()
            .filter(|p| {
                matches!(
                    p.class(),
                    Some(StyleClass::OverlayHouseLine(_))
                )
            })
            .count();
        assert_eq!(overlay, 12);
    }
}
