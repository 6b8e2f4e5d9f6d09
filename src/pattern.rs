//! Composite aspect-pattern detection over the adjacency maps.
//!
//! Detected: yods, T-squares, and four-point stelliums. Grand trines
//! and grand crosses are part of the traditional vocabulary but are
//! deliberately never produced here. The stellium scan is fixed at
//! chains of exactly four points; longer stelliums go undetected, and
//! that limitation is load-bearing for downstream consumers — do not
//! extend the chain length.

use std::collections::BTreeSet;

use crate::aspect::AspectGraph;

/// Which composite pattern was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternKind {
    Yod,
    TSquare,
    Stellium,
}

/// One detected pattern. `members` is the canonical tuple used as the
/// dedup key: the apex leads for yods and T-squares (followed by the
/// remaining members in ascending order), stellium members are fully
/// sorted. Members index the point slice the graph was built from.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternInstance {
    pub kind: PatternKind,
    pub members: Vec<usize>,
}

/// Scan the adjacency maps for every supported pattern. The result is
/// sorted and deduplicated, so scan order never produces duplicate or
/// reordered findings.
pub fn detect_patterns(graph: &AspectGraph) -> Vec<PatternInstance> {
    let mut found: BTreeSet<PatternInstance> = BTreeSet::new();
    let n = graph.conjunction.len();

    // Yod: an apex quincunx to two points that are mutually sextile.
    for apex in 0..n {
        let partners = &graph.quincunx[apex];
        if partners.len() < 2 {
            continue;
        }
        for &l in partners {
            for &m in partners {
                if l == m || !graph.sextile[l].contains(&m) {
                    continue;
                }
                found.insert(PatternInstance {
                    kind: PatternKind::Yod,
                    members: vec![apex, l.min(m), l.max(m)],
                });
            }
        }
    }

    // T-square: an opposition pair both squared by an apex.
    for a in 0..n {
        for &b in &graph.opposition[a] {
            for apex in 0..n {
                if graph.square[apex].contains(&a) && graph.square[apex].contains(&b) {
                    found.insert(PatternInstance {
                        kind: PatternKind::TSquare,
                        members: vec![apex, a.min(b), a.max(b)],
                    });
                }
            }
        }
    }

    // Stellium: a chain of exactly four distinct points linked by
    // consecutive conjunctions.
    for k in 0..n {
        for &l in &graph.conjunction[k] {
            for &m in &graph.conjunction[l] {
                if m == k {
                    continue;
                }
                for &p in &graph.conjunction[m] {
                    if p == k || p == l {
                        continue;
                    }
                    let mut members = vec![k, l, m, p];
                    members.sort_unstable();
                    found.insert(PatternInstance {
                        kind: PatternKind::Stellium,
                        members,
                    });
                }
            }
        }
    }

    found.into_iter().collect()
}
