//! Build context - the accumulator threaded through composition steps.
//!
//! All per-build scratch state lives here: the primitive list under
//! construction and the running element tallies. Nothing outlives the
//! build.

use glam::DVec2;

use crate::config::ChartConfig;
use crate::types::ChartKind;

use super::defaults::{RingProfile, ring_profile};
use super::elements::ElementTotals;
use super::types::{GlyphPlacement, LabelPlacement, Primitive, StyleClass, Symbol, TextAnchor};

/// Per-build accumulator.
pub struct BuildContext<'a> {
    pub config: &'a ChartConfig,
    pub kind: ChartKind,
    /// Outer wheel radius.
    pub r: f64,
    /// The rotation anchor, `360 − cusp[6]` of the primary subject.
    /// Computed once; every layer reads this value.
    pub anchor: f64,
    pub profile: RingProfile,
    pub elements: ElementTotals,
    pub primitives: Vec<Primitive>,
}

impl<'a> BuildContext<'a> {
    pub fn new(config: &'a ChartConfig, kind: ChartKind, r: f64, anchor: f64) -> Self {
        BuildContext {
            config,
            kind,
            r,
            anchor,
            profile: ring_profile(kind),
            elements: ElementTotals::default(),
            primitives: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.config.height
    }

    /// Wheel center, `(r, r)`.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::splat(self.r)
    }

    #[inline]
    pub fn is_dual(&self) -> bool {
        self.kind.is_dual()
    }

    pub fn circle(&mut self, center: DVec2, radius: f64, class: StyleClass) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            class,
        });
    }

    pub fn segment(&mut self, from: DVec2, to: DVec2, class: StyleClass) {
        self.primitives.push(Primitive::Segment { from, to, class });
    }

    pub fn wedge(&mut self, start: DVec2, end: DVec2, arc_radius: f64, class: StyleClass) {
        self.primitives.push(Primitive::Wedge {
            center: self.center(),
            start,
            end,
            arc_radius,
            class,
        });
    }

    pub fn rect(&mut self, min: DVec2, size: DVec2, class: StyleClass) {
        self.primitives.push(Primitive::Rect { min, size, class });
    }

    pub fn glyph(&mut self, at: DVec2, scale: f64, symbol: Symbol) {
        self.primitives.push(Primitive::Glyph(GlyphPlacement {
            at,
            rotation: 0.0,
            scale,
            symbol,
        }));
    }

    pub fn rotated_glyph(&mut self, at: DVec2, rotation: f64, scale: f64, symbol: Symbol) {
        self.primitives.push(Primitive::Glyph(GlyphPlacement {
            at,
            rotation,
            scale,
            symbol,
        }));
    }

    pub fn label(&mut self, at: DVec2, text: String, class: StyleClass) {
        self.primitives.push(Primitive::Label(LabelPlacement {
            at,
            rotation: 0.0,
            anchor: TextAnchor::Start,
            text,
            class,
        }));
    }

    pub fn anchored_label(
        &mut self,
        at: DVec2,
        rotation: f64,
        anchor: TextAnchor,
        text: String,
        class: StyleClass,
    ) {
        self.primitives.push(Primitive::Label(LabelPlacement {
            at,
            rotation,
            anchor,
            text,
            class,
        }));
    }
}
