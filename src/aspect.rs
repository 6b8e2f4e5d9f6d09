//! Pairwise aspect classification.
//!
//! A pair of points is "in aspect" when its angular separation falls
//! inside a definition's inclusive `[degree − orb, degree + orb]` band.
//! Bands may overlap, in which case a pair matches several definitions
//! at once; all matches are kept, and redundant classification is
//! intended rather than filtered.

use std::collections::BTreeSet;

use crate::angle::degree_diff;
use crate::config::AspectDefinition;
use crate::types::CelestialPoint;

/// A classified pair: indices into the point slice it was built from,
/// the matched definition id, and the actual separation ("orbit").
#[derive(Clone, Debug, PartialEq)]
pub struct AspectInstance {
    pub p1: usize,
    pub p2: usize,
    /// [`AspectDefinition::id`] of the matched definition.
    pub aspect: usize,
    /// Actual angular separation in degrees.
    pub orbit: f64,
}

/// Every definition whose band contains the separation of `a` and `b`.
/// Both band ends are inclusive.
pub fn matching_aspects<'a>(
    a: f64,
    b: f64,
    defs: &'a [AspectDefinition],
) -> impl Iterator<Item = &'a AspectDefinition> {
    let sep = degree_diff(a, b);
    defs.iter()
        .filter(move |def| def.degree - def.orb <= sep && sep <= def.degree + def.orb)
}

/// Classify every unordered pair within one point set.
pub fn classify_pairs(points: &[CelestialPoint], defs: &[AspectDefinition]) -> Vec<AspectInstance> {
    let mut out = Vec::new();
    for i in 0..points.len() {
        for j in i + 1..points.len() {
            push_matches(&mut out, i, j, points[i].longitude.deg(), points[j].longitude.deg(), defs);
        }
    }
    out
}

/// Classify every pair across two point sets (transit/synastry):
/// `p1` indexes the first set, `p2` the second.
pub fn classify_cross(
    first: &[CelestialPoint],
    second: &[CelestialPoint],
    defs: &[AspectDefinition],
) -> Vec<AspectInstance> {
    let mut out = Vec::new();
    for (i, a) in first.iter().enumerate() {
        for (j, b) in second.iter().enumerate() {
            push_matches(&mut out, i, j, a.longitude.deg(), b.longitude.deg(), defs);
        }
    }
    out
}

fn push_matches(
    out: &mut Vec<AspectInstance>,
    p1: usize,
    p2: usize,
    a: f64,
    b: f64,
    defs: &[AspectDefinition],
) {
    let orbit = degree_diff(a, b);
    for def in matching_aspects(a, b, defs) {
        out.push(AspectInstance {
            p1,
            p2,
            aspect: def.id,
            orbit,
        });
    }
}

/// Per-point adjacency for the six classical aspect classes, feeding
/// pattern detection. Indexed by position in the point slice the graph
/// was built from.
///
/// The trine map is populated but consumed by no pattern scan: grand
/// trines (and grand crosses) are deliberately never emitted.
#[derive(Clone, Debug, Default)]
pub struct AspectGraph {
    pub conjunction: Vec<BTreeSet<usize>>,
    pub sextile: Vec<BTreeSet<usize>>,
    pub square: Vec<BTreeSet<usize>>,
    pub trine: Vec<BTreeSet<usize>>,
    pub quincunx: Vec<BTreeSet<usize>>,
    pub opposition: Vec<BTreeSet<usize>>,
}

impl AspectGraph {
    /// Build adjacency over the pattern-eligible points of a set.
    ///
    /// Ineligible categories (lunar nodes, apogee/perigee, the Dsc/IC
    /// angles) keep empty rows: they never source nor receive an edge,
    /// even though [`classify_pairs`] still reports their aspects in the
    /// flat list.
    pub fn build(points: &[CelestialPoint], defs: &[AspectDefinition]) -> AspectGraph {
        let n = points.len();
        let mut graph = AspectGraph {
            conjunction: vec![BTreeSet::new(); n],
            sextile: vec![BTreeSet::new(); n],
            square: vec![BTreeSet::new(); n],
            trine: vec![BTreeSet::new(); n],
            quincunx: vec![BTreeSet::new(); n],
            opposition: vec![BTreeSet::new(); n],
        };

        let bands = [
            (0.0, &mut graph.conjunction),
            (60.0, &mut graph.sextile),
            (90.0, &mut graph.square),
            (120.0, &mut graph.trine),
            (150.0, &mut graph.quincunx),
            (180.0, &mut graph.opposition),
        ];
        let mut classes: Vec<(f64, f64, &mut Vec<BTreeSet<usize>>)> = Vec::new();
        for (degree, map) in bands {
            if let Some(def) = defs.iter().find(|d| d.degree == degree) {
                classes.push((def.degree - def.orb, def.degree + def.orb, map));
            }
        }

        for i in 0..n {
            if !points[i].kind.joins_patterns() {
                continue;
            }
            for j in 0..n {
                if i == j || !points[j].kind.joins_patterns() {
                    continue;
                }
                let sep = degree_diff(points[i].longitude.deg(), points[j].longitude.deg());
                for (lo, hi, map) in classes.iter_mut() {
                    if *lo <= sep && sep <= *hi {
                        map[i].insert(j);
                    }
                }
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_aspects;
    use crate::types::{BodyKind, ChartAngle};

    fn planet(index: usize, lon: f64) -> CelestialPoint {
        CelestialPoint::new(index, lon, false, BodyKind::Planet)
    }

    #[test]
    fn exact_separation_is_classified() {
        let defs = default_aspects();
        let hits: Vec<_> = matching_aspects(10.0, 70.0, &defs).collect();
        assert!(hits.iter().any(|d| d.name == "sextile"));
    }

    #[test]
    fn orb_bounds_are_inclusive() {
        let defs = vec![AspectDefinition::new(0, "sextile", 60.0, 6.0)];
        assert_eq!(matching_aspects(0.0, 54.0, &defs).count(), 1);
        assert_eq!(matching_aspects(0.0, 66.0, &defs).count(), 1);
        assert_eq!(matching_aspects(0.0, 53.999, &defs).count(), 0);
        assert_eq!(matching_aspects(0.0, 66.001, &defs).count(), 0);
    }

    #[test]
    fn overlapping_bands_double_classify() {
        let defs = vec![
            AspectDefinition::new(0, "conjunction", 0.0, 10.0),
            AspectDefinition::new(1, "semi-sextile", 30.0, 25.0),
        ];
        let hits: Vec<_> = matching_aspects(0.0, 8.0, &defs).collect();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn classify_pairs_reports_each_unordered_pair_once() {
        let defs = vec![AspectDefinition::new(5, "square", 90.0, 5.0)];
        let points = vec![planet(0, 0.0), planet(1, 90.0), planet(2, 180.0)];
        let aspects = classify_pairs(&points, &defs);
        assert_eq!(aspects.len(), 2);
        assert_eq!(aspects[0].p1, 0);
        assert_eq!(aspects[0].p2, 1);
        assert_eq!(aspects[0].orbit, 90.0);
        assert_eq!(aspects[1].p1, 1);
        assert_eq!(aspects[1].p2, 2);
    }

    #[test]
    fn cross_classification_spans_both_sets() {
        let defs = vec![AspectDefinition::new(10, "opposition", 180.0, 10.0)];
        let first = vec![planet(0, 0.0)];
        let second = vec![planet(0, 185.0), planet(1, 90.0)];
        let aspects = classify_cross(&first, &second, &defs);
        assert_eq!(aspects.len(), 1);
        assert_eq!((aspects[0].p1, aspects[0].p2), (0, 0));
        assert_eq!(aspects[0].orbit, 175.0);
    }

    #[test]
    fn graph_is_symmetric_for_eligible_points() {
        let points = vec![planet(0, 0.0), planet(1, 90.0)];
        let graph = AspectGraph::build(&points, &default_aspects());
        assert!(graph.square[0].contains(&1));
        assert!(graph.square[1].contains(&0));
    }

    #[test]
    fn ineligible_points_stay_out_of_the_graph_but_in_the_flat_list() {
        let defs = default_aspects();
        let points = vec![
            planet(0, 0.0),
            CelestialPoint::new(1, 90.0, false, BodyKind::LunarNode),
            CelestialPoint::new(2, 180.0, false, BodyKind::Angle(ChartAngle::Descendant)),
        ];
        let graph = AspectGraph::build(&points, &defs);
        assert!(graph.square[0].is_empty());
        assert!(graph.square[1].is_empty());
        assert!(graph.opposition[0].is_empty());
        assert!(graph.opposition[2].is_empty());

        let flat = classify_pairs(&points, &defs);
        assert!(flat.iter().any(|a| a.p1 == 0 && a.p2 == 1));
        assert!(flat.iter().any(|a| a.p1 == 0 && a.p2 == 2));
    }

    #[test]
    fn ascendant_and_midheaven_do_join_the_graph() {
        let defs = default_aspects();
        let points = vec![
            planet(0, 0.0),
            CelestialPoint::new(1, 90.0, false, BodyKind::Angle(ChartAngle::Ascendant)),
        ];
        let graph = AspectGraph::build(&points, &defs);
        assert!(graph.square[0].contains(&1));
    }
}
