//! Chart wheel composition.
//!
//! This module is organized into submodules:
//! - `defaults`: ring profiles and inset constants
//! - `types`: the drawing primitives and the composed `Scene`
//! - `context`: the per-build accumulator
//! - `rings`: bands, zodiac wedges, degree ticks, house lines
//! - `bodies`: primary-ring glyph placement
//! - `overlay`: the second subject's ring on dual wheels
//! - `grid`: aspect grids and the point grid
//! - `elements`: element tallies
//! - `lunar`: the lunar-phase disc

pub mod bodies;
pub mod context;
pub mod defaults;
pub mod elements;
pub mod grid;
pub mod lunar;
pub mod overlay;
pub mod rings;
pub mod types;

pub use context::BuildContext;
pub use types::*;

use crate::aspect::{AspectGraph, AspectInstance, classify_cross, classify_pairs};
use crate::config::ChartConfig;
use crate::errors::ChartError;
use crate::log::debug;
use crate::pattern::detect_patterns;
use crate::project::ring_point;
use crate::types::{Chart, Subject};

use defaults::DUAL_ASPECT_INSET;

/// Compose a chart into a [`Scene`].
///
/// The rotation anchor is computed exactly once, from the primary
/// subject's cusp 6, and shared by every layer; dual wheels translate
/// the second subject into the same frame rather than re-anchoring.
pub fn compose(chart: &Chart, config: &ChartConfig) -> Result<Scene, ChartError> {
    let second: Option<&Subject> = if chart.kind.is_dual() {
        Some(
            chart
                .second
                .as_ref()
                .ok_or(ChartError::MissingSecondSubject { kind: chart.kind })?,
        )
    } else {
        None
    };

    let r = config.wheel_radius();
    let anchor = chart.first.cusps.anchor();
    debug!(kind = %chart.kind, anchor, "composing chart");

    let mut cx = BuildContext::new(config, chart.kind, r, anchor);

    rings::bands(&mut cx);
    rings::zodiac(&mut cx);
    rings::degree_ring(&mut cx);
    rings::houses(&mut cx, &chart.first, second);

    let aspects = match second {
        Some(second) => classify_cross(&chart.first.points, &second.points, &config.aspects),
        None => classify_pairs(&chart.first.points, &config.aspects),
    };
    aspect_lines(&mut cx, chart, second, &aspects);

    bodies::place(&mut cx, &chart.first);
    if let Some(second) = second {
        overlay::place(&mut cx, &chart.first, second);
        grid::aspect_list(&mut cx, &chart.first, second, &aspects);
    } else {
        grid::aspect_grid(&mut cx, &chart.first, &aspects);
    }
    grid::point_grid(&mut cx, &chart.first, second);
    elements::share_labels(&mut cx);
    lunar::disc(&mut cx, &chart.first)?;

    // Patterns are detected on single-subject wheels, then dropped
    // unless the caller opted in; flipping `emit_patterns` is the whole
    // policy change.
    let patterns = if second.is_none() {
        detect_patterns(&AspectGraph::build(&chart.first.points, &config.aspects))
    } else {
        Vec::new()
    };
    let patterns = if config.emit_patterns {
        patterns
    } else {
        Vec::new()
    };

    let elements = cx.elements.shares();
    Ok(Scene {
        kind: chart.kind,
        width: config.width,
        height: config.height,
        wheel_radius: r,
        anchor,
        primitives: cx.primitives,
        aspects,
        patterns,
        elements,
    })
}

/// One segment per classified aspect, both endpoints on the hub circle.
fn aspect_lines(
    cx: &mut BuildContext<'_>,
    chart: &Chart,
    second: Option<&Subject>,
    aspects: &[AspectInstance],
) {
    let r = cx.r;
    let hub_inset = if cx.is_dual() {
        DUAL_ASPECT_INSET
    } else {
        r - r * cx.profile.c3
    };

    for aspect in aspects {
        let lon1 = chart.first.points[aspect.p1].longitude.deg();
        let lon2 = match second {
            Some(second) => second.points[aspect.p2].longitude.deg(),
            None => chart.first.points[aspect.p2].longitude.deg(),
        };
        cx.segment(
            ring_point(0.0, r, hub_inset, cx.anchor + lon1),
            ring_point(0.0, r, hub_inset, cx.anchor + lon2),
            StyleClass::AspectLine(aspect.aspect),
        );
    }
}
