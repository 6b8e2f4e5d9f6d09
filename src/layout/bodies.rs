//! Primary-ring body placement: deconflicted glyphs, staggered rows,
//! and the pointer lines of external natal wheels.

use glam::dvec2;

use crate::deconflict::body_deltas;
use crate::project::ring_point;
use crate::types::{ChartKind, Subject};

use super::context::BuildContext;
use super::defaults::*;
use super::types::{StyleClass, Symbol};

/// Radius row selection for the primary ring. Chart angles get their
/// own row; everything else alternates between two staggered rows so
/// neighboring glyphs interleave.
struct RowPicker {
    kind: ChartKind,
    width: f64,
    switch: bool,
}

impl RowPicker {
    fn new(kind: ChartKind, width: f64) -> Self {
        RowPicker {
            kind,
            width,
            switch: false,
        }
    }

    fn pick(&mut self, is_angle: bool) -> f64 {
        if self.kind.is_dual() {
            if is_angle {
                DUAL_ANGLE_ROW
            } else if self.switch {
                self.switch = false;
                DUAL_ROW_A
            } else {
                self.switch = true;
                DUAL_ROW_B
            }
        } else {
            // external natal pulls every row outside the rim by the same
            // margin, so the stagger collapses there
            let margin = if self.kind == ChartKind::ExternalNatal {
                self.width * 0.1 + self.width * 0.03
            } else {
                0.0
            };
            let base = self.width * 0.1;
            if is_angle {
                base - margin
            } else if self.switch {
                self.switch = false;
                base - margin
            } else {
                self.switch = true;
                base - margin
            }
        }
    }
}

/// Place the primary subject's bodies around the wheel, tallying
/// elements along the way.
pub fn place(cx: &mut BuildContext<'_>, first: &Subject) {
    let ruler_bonus = cx.config.ruler_bonus;
    for point in &first.points {
        if let Some(setting) = cx.config.points.get(point.index) {
            cx.elements.tally(setting, point.sign, ruler_bonus);
        }
    }

    let lons: Vec<f64> = first.points.iter().map(|p| p.longitude.deg()).collect();
    let deltas = body_deltas(&lons);

    let mut order: Vec<usize> = (0..first.points.len()).collect();
    order.sort_by(|&a, &b| lons[a].total_cmp(&lons[b]));

    let r = cx.r;
    let scale = body_glyph_scale(cx.kind);
    let mut rows = RowPicker::new(cx.kind, cx.width());

    for &i in &order {
        let point = &first.points[i];
        let row = rows.pick(point.kind.is_angle());

        let offset = cx.anchor + lons[i] + deltas[i];
        let true_offset = cx.anchor + lons[i];

        if cx.kind == ChartKind::ExternalNatal {
            pointer_lines(cx, row, true_offset, offset, point.index);
        }

        let at = ring_point(0.0, r, row, offset)
            + dvec2(-cx.width() * 0.004 * scale, cx.width() * 0.001 * scale);
        let name = cx
            .config
            .points
            .get(point.index)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        cx.glyph(at, scale, Symbol::Body(name));
    }
}

/// The two-segment pointer of an external natal wheel: from the body's
/// true longitude on the aspect band out to the displaced glyph.
fn pointer_lines(
    cx: &mut BuildContext<'_>,
    row: f64,
    true_offset: f64,
    offset: f64,
    table_row: usize,
) {
    let r = cx.r;
    let inner_inset = r * cx.profile.c3 * 0.93;
    let elbow_inset = row + cx.width() * 0.022;
    // the last stretch closes most of the remaining gap to the glyph
    let tip_inset = row + (cx.width() * 0.022 / 1.6).floor();

    let from = ring_point(0.0, r, inner_inset, true_offset);
    let elbow = ring_point(0.0, r, elbow_inset, true_offset);
    let tip = ring_point(0.0, r, tip_inset, offset);

    cx.segment(from, elbow, StyleClass::PointerLine(table_row));
    cx.segment(elbow, tip, StyleClass::PointerLine(table_row));
}
