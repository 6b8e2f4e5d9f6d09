//! Glyph-overlap avoidance.
//!
//! Given the active points of one ring, computes a per-point angular
//! delta (default 0) that separates glyphs whose raw positions would
//! collide when drawn. The underlying longitudes are never modified;
//! deltas only displace the drawn glyph.
//!
//! Two modes exist. The wheel-body mode (natal, external natal, and the
//! primary ring of dual charts) distributes available room
//! asymmetrically, cascading into neighboring points when the cluster
//! itself has none. The overlay mode (the second ring of transit and
//! synastry charts) assigns fixed symmetric offsets purely by cluster
//! size. Both scans are deterministic; neither is idempotent, since
//! deltas are recomputed from raw positions on every pass.

use crate::angle::degree_diff;
use crate::log::debug;

/// Closeness threshold for the wheel body: consecutive points closer
/// than this are grouped.
pub const BODY_SPACING: f64 = 3.4;

/// Closeness threshold for the overlay ring (inclusive).
pub const OVERLAY_SPACING: f64 = 2.5;

/// Room factor for the symmetric two-member cascade: the points one step
/// outside the group must each have this many spacings free.
const CASCADE_ROOM: f64 = 2.4;

/// Cumulative spacing step between members of a large cluster, and the
/// member shift of a one-sided cascade.
const STEP: f64 = 1.2;

/// Neighbor displacement factor of a one-sided cascade.
const ONE_SIDED_SHIFT: f64 = 2.5;

/// A point's place in the cyclic, longitude-sorted sequence with its
/// gaps to both neighbors.
#[derive(Clone, Copy, Debug)]
struct Slot {
    /// Index into the caller's point list.
    point: usize,
    /// Gap to the cyclic predecessor, degrees.
    before: f64,
    /// Gap to the cyclic successor, degrees.
    after: f64,
}

fn sorted_slots(longitudes: &[f64]) -> Vec<Slot> {
    let n = longitudes.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| longitudes[a].total_cmp(&longitudes[b]));
    (0..n)
        .map(|e| {
            let here = longitudes[order[e]];
            let prev = longitudes[order[(e + n - 1) % n]];
            let next = longitudes[order[(e + 1) % n]];
            Slot {
                point: order[e],
                before: degree_diff(prev, here),
                after: degree_diff(next, here),
            }
        })
        .collect()
}

/// Maximal runs of consecutive sorted positions whose forward gap is
/// under `BODY_SPACING`. The run includes its closing member (the first
/// point whose forward gap opens up again).
fn body_groups(slots: &[Slot]) -> Vec<Vec<usize>> {
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut open = false;
    for (e, slot) in slots.iter().enumerate() {
        if slot.after < BODY_SPACING {
            if open {
                if let Some(group) = groups.last_mut() {
                    group.push(e);
                }
            } else {
                open = true;
                groups.push(vec![e]);
            }
        } else {
            if open {
                if let Some(group) = groups.last_mut() {
                    group.push(e);
                }
            }
            open = false;
        }
    }
    groups
}

/// Wheel-body deconfliction. Returns one delta per input point, aligned
/// with `longitudes`.
pub fn body_deltas(longitudes: &[f64]) -> Vec<f64> {
    let n = longitudes.len();
    let mut out = vec![0.0; n];
    if n < 2 {
        return out;
    }

    let slots = sorted_slots(longitudes);
    let groups = body_groups(&slots);
    debug!(groups = groups.len(), points = n, "body deconfliction");

    // Deltas are accumulated per sorted position, then scattered back to
    // input order at the end.
    let mut deltas = vec![0.0; n];
    let d = BODY_SPACING;

    for group in &groups {
        if group.len() == 2 {
            let pa = group[0];
            let pb = group[1];
            let next_to_a = (pa + n - 1) % n;
            let next_to_b = (pb + 1) % n;
            let inner = slots[pa].after;

            // Room rules, highest priority first; the first that fires
            // wins. If none fires the pair stays visually close, which
            // is the accepted degraded case.
            if slots[pa].before > 2.0 * d && slots[pb].after > 2.0 * d {
                // both sides have room: split symmetrically
                deltas[pa] = -(d - inner) / 2.0;
                deltas[pb] = (d - inner) / 2.0;
            } else if slots[pa].before > 2.0 * d {
                deltas[pa] = -d;
            } else if slots[pb].after > 2.0 * d {
                deltas[pb] = d;
            } else if slots[next_to_a].before > CASCADE_ROOM * d
                && slots[next_to_b].after > CASCADE_ROOM * d
            {
                // no room at the group itself, but the points one step
                // out can give way on both sides
                deltas[next_to_a] = slots[pa].before - 2.0 * d;
                deltas[pa] = -0.5 * d;
                deltas[next_to_b] = -(slots[pb].after - 2.0 * d);
                deltas[pb] = 0.5 * d;
            } else if slots[next_to_a].before > 2.0 * d {
                deltas[next_to_a] = slots[pa].before - ONE_SIDED_SHIFT * d;
                deltas[pa] = -STEP * d;
            } else if slots[next_to_b].after > 2.0 * d {
                deltas[next_to_b] = -(slots[pb].after - ONE_SIDED_SHIFT * d);
                deltas[pb] = STEP * d;
            }
        } else if group.len() >= 3 {
            let xl = group.len();
            let mut available = slots[group[0]].before;
            for &p in group {
                available += slots[p].after;
            }
            let need = 3.0 * d + STEP * (xl as f64 - 1.0) * d;
            let xa = slots[group[0]].before;
            let xb = slots[group[xl - 1]].after;

            if available > need {
                let leftover = available - need;
                // center the run when both outward gaps are generous,
                // otherwise weight the start by each side's share
                let start = if xa > need * 0.5 && xb > need * 0.5 {
                    xa - need * 0.5
                } else {
                    (leftover / (xa + xb)) * xa
                };
                deltas[group[0]] = start - xa + 1.5 * d;
                for f in 0..xl - 1 {
                    deltas[group[f + 1]] = STEP * d + deltas[group[f]] - slots[group[f]].after;
                }
            }
            // available <= need: the cluster stays compressed
        }
    }

    for (e, slot) in slots.iter().enumerate() {
        out[slot.point] = deltas[e];
    }
    out
}

/// Overlay-ring deconfliction: fixed symmetric offsets by cluster size,
/// outer-to-inner. Clusters of five or more are left unadjusted.
pub fn overlay_deltas(longitudes: &[f64]) -> Vec<f64> {
    let n = longitudes.len();
    let mut out = vec![0.0; n];
    if n < 2 {
        return out;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| longitudes[a].total_cmp(&longitudes[b]));

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut in_group = false;
    for e in 0..n {
        let ia = order[e];
        let ib = order[(e + 1) % n];
        let diff = degree_diff(longitudes[ia], longitudes[ib]);
        if diff <= OVERLAY_SPACING {
            if in_group {
                if let Some(group) = groups.last_mut() {
                    group.push(ib);
                }
            } else {
                groups.push(vec![ia, ib]);
                in_group = true;
            }
        } else {
            in_group = false;
        }
    }
    debug!(groups = groups.len(), points = n, "overlay deconfliction");

    for group in &groups {
        let offsets: &[f64] = match group.len() {
            2 => &[-1.0, 1.0],
            3 => &[-1.5, 0.0, 1.5],
            4 => &[-2.0, -1.0, 1.0, 2.0],
            _ => continue,
        };
        for (&i, &offset) in group.iter().zip(offsets) {
            out[i] = offset;
        }
    }
    out
}
