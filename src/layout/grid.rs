//! Tabular layouts beside the wheel: the triangular natal aspect grid,
//! the transit aspect list, and the point grid with degree readouts.

use glam::dvec2;

use crate::angle::{DegreeFormat, format_degrees};
use crate::aspect::AspectInstance;
use crate::types::Subject;

use super::context::BuildContext;
use super::types::{StyleClass, Symbol};

/// Scale of the small aspect glyphs inside grid cells.
const CELL_GLYPH_SCALE: f64 = 1.6;

/// Glyph inset from a cell's corner.
const CELL_GLYPH_INSET: f64 = 3.4;

/// Rows per column of the transit aspect list.
const LIST_ROWS_PER_COLUMN: usize = 12;

/// Row height of list layouts.
const LIST_ROW_HEIGHT: f64 = 14.0;

/// The triangular aspect grid of a single-subject wheel: one row per
/// body, one cell per pair below it, aspect glyphs in matching cells.
pub fn aspect_grid(cx: &mut BuildContext<'_>, first: &Subject, aspects: &[AspectInstance]) {
    let box_size = cx.width() * 0.015;
    let mut x = cx.width() * 0.71;
    let mut y = cx.height() * 0.85;

    for a in (0..first.points.len()).rev() {
        let name = cx
            .config
            .points
            .get(first.points[a].index)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        cx.glyph(
            dvec2(x + cx.width() * 0.003, y + cx.width() * 0.002),
            0.8,
            Symbol::Body(name),
        );
        cx.rect(dvec2(x, y), dvec2(box_size, box_size), StyleClass::GridCell);

        x += box_size;
        y -= box_size;

        let mut cell_x = x;
        let cell_y = y + box_size;
        for b in (0..a).rev() {
            cx.rect(
                dvec2(cell_x, cell_y),
                dvec2(box_size, box_size),
                StyleClass::GridCell,
            );
            cell_x += box_size;
            for aspect in aspects {
                if (aspect.p1 == a && aspect.p2 == b) || (aspect.p1 == b && aspect.p2 == a) {
                    cx.glyph(
                        dvec2(
                            cell_x - box_size + CELL_GLYPH_INSET,
                            cell_y + CELL_GLYPH_INSET,
                        ),
                        CELL_GLYPH_SCALE,
                        Symbol::Aspect(aspect.aspect),
                    );
                }
            }
        }
    }
}

/// The aspect list of a dual wheel: rows of
/// `glyph · aspect · glyph · orbit`, broken into 12-row columns. Long
/// lists shift the last column upward to stay on the canvas.
pub fn aspect_list(
    cx: &mut BuildContext<'_>,
    first: &Subject,
    second: &Subject,
    aspects: &[AspectInstance],
) {
    let base = dvec2(500.0, 310.0);
    let mut line = 0.0;
    let mut column_x = 0.0;

    for (i, aspect) in aspects.iter().enumerate() {
        // four column breaks; the fifth column absorbs everything past
        // row 48, shifting up when it would overflow
        if i > 0 && i % LIST_ROWS_PER_COLUMN == 0 && i <= 4 * LIST_ROWS_PER_COLUMN {
            column_x += 100.0;
            line = 0.0;
            if i == 4 * LIST_ROWS_PER_COLUMN && aspects.len() > 60 {
                line = -((aspects.len() - 60) as f64) * LIST_ROW_HEIGHT;
            }
        }

        let row = base + dvec2(column_x, line);
        let p1_name = first
            .points
            .get(aspect.p1)
            .and_then(|p| cx.config.points.get(p.index))
            .map(|s| s.name.clone())
            .unwrap_or_default();
        let p2_name = second
            .points
            .get(aspect.p2)
            .and_then(|p| cx.config.points.get(p.index))
            .map(|s| s.name.clone())
            .unwrap_or_default();

        cx.glyph(row + dvec2(0.0, 1.2), 0.4, Symbol::Body(p1_name));
        cx.glyph(row + dvec2(15.0, 0.0), 1.0, Symbol::Aspect(aspect.aspect));
        cx.glyph(row + dvec2(30.0, 1.2), 0.4, Symbol::Body(p2_name));
        cx.label(
            row + dvec2(45.0, 8.0),
            format_degrees(aspect.orbit, DegreeFormat::DegreesMinutesSeconds),
            StyleClass::GridOrbitLabel,
        );

        line += LIST_ROW_HEIGHT;
    }
}

/// The point grid: per body, its glyph, degree-in-sign readout, sign
/// glyph, and retrograde marker. Dual wheels add a second column for the
/// overlay subject.
pub fn point_grid(cx: &mut BuildContext<'_>, first: &Subject, second: Option<&Subject>) {
    let base = dvec2(cx.width() * 0.77, cx.height() * 0.06);
    let column = dvec2(-cx.width() * 0.085, 0.0);
    point_rows(cx, first, base + column, 1.0);

    if let Some(second) = second {
        let overlay_column = dvec2(250.0, 0.0);
        point_rows(cx, second, base + overlay_column, 0.5);
    }
}

fn point_rows(cx: &mut BuildContext<'_>, subject: &Subject, base: glam::DVec2, scale: f64) {
    let mut y = cx.height() * 0.04;
    let step = cx.height() * 0.025;

    for point in &subject.points {
        let row = base + dvec2(0.0, y + cx.height() * 0.02);
        let name = cx
            .config
            .points
            .get(point.index)
            .map(|s| s.name.clone())
            .unwrap_or_default();

        cx.glyph(
            row + dvec2(cx.width() * 0.008, -cx.height() * 0.015),
            0.8 * scale,
            Symbol::Body(name),
        );
        cx.label(
            row + dvec2(cx.width() * 0.025, 0.0),
            format_degrees(point.sign_position, DegreeFormat::DegreesMinutesSeconds),
            StyleClass::GridDegreeLabel(point.index),
        );
        cx.glyph(
            row + dvec2(cx.width() * 0.075, -cx.height() * 0.02),
            0.8 * scale,
            Symbol::Sign(point.sign),
        );
        if point.retrograde {
            cx.glyph(row + dvec2(74.0, -6.0), 0.1, Symbol::Retrograde);
        }

        y += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::classify_pairs;
    use crate::config::ChartConfig;
    use crate::layout::Primitive;
    use crate::types::{BodyKind, CelestialPoint, ChartKind, HouseCusps};

    fn subject(lons: &[f64]) -> Subject {
        Subject {
            points: lons
                .iter()
                .enumerate()
                .map(|(i, &lon)| CelestialPoint::new(i, lon, i == 0, BodyKind::Planet))
                .collect(),
            cusps: HouseCusps::from_degrees([
                0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
            ]),
            latitude: 0.0,
            sun_moon_separation: 0.0,
        }
    }

    fn cx_for(config: &ChartConfig, kind: ChartKind) -> BuildContext<'_> {
        BuildContext::new(config, kind, config.wheel_radius(), 180.0)
    }

    #[test]
    fn triangular_grid_has_one_cell_per_pair() {
        let config = ChartConfig::default();
        let first = subject(&[0.0, 90.0, 180.0, 270.0]);
        let aspects = classify_pairs(&first.points, &config.aspects);
        let mut cx = cx_for(&config, ChartKind::Natal);
        aspect_grid(&mut cx, &first, &aspects);
        let cells = cx
            .primitives
            .iter()
            .filter(|p| matches!(p.class(), Some(StyleClass::GridCell)))
            .count();
        // 4 diagonal cells + C(4,2) pair cells
        assert_eq!(cells, 4 + 6);
    }

    #[test]
    fn aspect_list_emits_one_orbit_label_per_aspect() {
        let config = ChartConfig::default();
        let first = subject(&[0.0, 10.0]);
        let second = subject(&[90.0, 180.0]);
        let aspects = crate::aspect::classify_cross(&first.points, &second.points, &config.aspects);
        let mut cx = cx_for(&config, ChartKind::Synastry);
        aspect_list(&mut cx, &first, &second, &aspects);
        let labels = cx
            .primitives
            .iter()
            .filter(|p| matches!(p.class(), Some(StyleClass::GridOrbitLabel)))
            .count();
        assert_eq!(labels, aspects.len());
    }

    #[test]
    fn point_grid_marks_retrograde_bodies() {
        let config = ChartConfig::default();
        let first = subject(&[15.0, 45.0]);
        let mut cx = cx_for(&config, ChartKind::Natal);
        point_grid(&mut cx, &first, None);
        let retro = cx
            .primitives
            .iter()
            .filter(|p| {
                matches!(
                    p,
                    Primitive::Glyph(g) if g.symbol == Symbol::Retrograde
                )
            })
            .count();
        assert_eq!(retro, 1);
    }

    #[test]
    fn point_grid_adds_overlay_column_for_dual_charts() {
        let config = ChartConfig::default();
        let first = subject(&[15.0]);
        let second = subject(&[45.0, 75.0]);
        let mut cx = cx_for(&config, ChartKind::Transit);
        point_grid(&mut cx, &first, Some(&second));
        let labels = cx
            .primitives
            .iter()
            .filter(|p| matches!(p.class(), Some(StyleClass::GridDegreeLabel(_))))
            .count();
        assert_eq!(labels, 3);
    }
}
