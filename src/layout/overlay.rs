//! The second subject's ring on transit and synastry wheels.
//!
//! Overlay bodies share the primary subject's rotation anchor, so both
//! subjects render in one coordinate frame. Each body gets a glyph on a
//! staggered inner row, a tick on the rim, and a rotated degree label;
//! labels flip by 180° (and swap their anchor side) whenever they would
//! render upside-down.

use glam::DVec2;

use crate::angle::{DegreeFormat, format_degrees, normalize_degrees};
use crate::deconflict::overlay_deltas;
use crate::project::ring_point;
use crate::types::{ChartKind, Subject};

use super::context::BuildContext;
use super::defaults::*;
use super::types::{StyleClass, Symbol, TextAnchor};

/// Place the overlay ring for the second subject.
pub fn place(cx: &mut BuildContext<'_>, first: &Subject, second: &Subject) {
    // transit wheels drop the second subject's chart angles; synastry
    // keeps them
    let points: Vec<_> = second
        .points
        .iter()
        .filter(|p| !(cx.kind == ChartKind::Transit && p.kind.is_angle()))
        .collect();

    let lons: Vec<f64> = points.iter().map(|p| p.longitude.deg()).collect();
    let deltas = overlay_deltas(&lons);

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| lons[a].total_cmp(&lons[b]));

    let r = cx.r;
    let ascendant = first.cusps.cusp(0).deg();
    let mut switch = false;

    for &i in &order {
        let point = points[i];
        let row = if point.kind.is_angle() {
            OVERLAY_ANGLE_ROW
        } else if switch {
            switch = false;
            OVERLAY_ROW_A
        } else {
            switch = true;
            OVERLAY_ROW_B
        };

        let offset = normalize_degrees(cx.anchor + lons[i]);

        let name = cx
            .config
            .points
            .get(point.index)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        let at = ring_point(0.0, r, row, offset) - DVec2::splat(6.0);
        cx.glyph(at, OVERLAY_GLYPH_SCALE, Symbol::Body(name));

        cx.segment(
            ring_point(0.0, r, -3.0, offset),
            ring_point(0.0, r, 3.0, offset),
            StyleClass::BodyTick(point.index),
        );

        // degree label, rotated to read along the rim
        let mut rotation = ascendant - lons[i];
        let mut anchor = TextAnchor::End;
        if -270.0 < rotation && rotation < -90.0 {
            rotation += 180.0;
            anchor = TextAnchor::Start;
        }
        if 90.0 < rotation && rotation < 270.0 {
            rotation -= 180.0;
            anchor = TextAnchor::Start;
        }
        let side = if anchor == TextAnchor::End { 1.0 } else { -1.0 };
        let label_offset = offset + deltas[i] + side;
        let at = ring_point(0.0, r, -3.0, label_offset);
        cx.anchored_label(
            at,
            rotation,
            anchor,
            format_degrees(point.sign_position, DegreeFormat::Degrees),
            StyleClass::BodyDegreeLabel(point.index),
        );
    }
}
