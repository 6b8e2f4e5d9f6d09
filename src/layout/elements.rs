//! Element tallies: how much fire, earth, air and water a chart carries.
//!
//! Every active point contributes its configured weight to the element
//! of the sign it sits in, plus a bonus when the sign is one the point
//! rules. Totals are reported as rounded percentage shares.

use glam::dvec2;

use crate::config::PointSetting;
use crate::types::{Element, Sign};

use super::context::BuildContext;
use super::types::{ElementShares, StyleClass};

/// Running element totals for one subject. Explicit accumulator,
/// threaded through the build and dropped with it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementTotals {
    pub fire: f64,
    pub earth: f64,
    pub air: f64,
    pub water: f64,
}

impl ElementTotals {
    /// Add one point's contribution.
    pub fn tally(&mut self, setting: &PointSetting, sign: Sign, ruler_bonus: f64) {
        let mut points = setting.element_points;
        if setting.related_signs.contains(&sign) {
            points += ruler_bonus;
        }
        match sign.element() {
            Element::Fire => self.fire += points,
            Element::Earth => self.earth += points,
            Element::Air => self.air += points,
            Element::Water => self.water += points,
        }
    }

    /// Rounded percentage shares. All zeros when nothing was tallied.
    pub fn shares(&self) -> ElementShares {
        let total = self.fire + self.earth + self.air + self.water;
        if total <= 0.0 {
            return ElementShares::default();
        }
        ElementShares {
            fire: (100.0 * self.fire / total).round() as u32,
            earth: (100.0 * self.earth / total).round() as u32,
            air: (100.0 * self.air / total).round() as u32,
            water: (100.0 * self.water / total).round() as u32,
        }
    }
}

/// Emit the four percentage labels down the left margin.
pub fn share_labels(cx: &mut BuildContext<'_>) {
    let shares = cx.elements.shares();
    let base_x = cx.width() * 0.03 + cx.width() * 0.04;
    let base_y = cx.height() * 0.4;
    let row = cx.height() * 0.08;
    let rows = [
        (Element::Fire, shares.fire),
        (Element::Earth, shares.earth),
        (Element::Air, shares.air),
        (Element::Water, shares.water),
    ];
    for (i, (element, share)) in rows.into_iter().enumerate() {
        cx.label(
            dvec2(base_x, base_y + row * i as f64),
            format!("{share}%"),
            StyleClass::ElementPercent(element),
        );
    }
}
