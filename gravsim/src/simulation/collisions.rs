//! Overlap detection and merging
//!
//! Bodies whose discs overlap are merged: the lighter one is absorbed into
//! the heavier one and tombstoned. Pairs are scanned once, left to right, in
//! the order of the active list handed in. A body tombstoned earlier in the
//! scan is skipped for the rest of it, while a surviving absorber may keep
//! absorbing later bodies. An absorber that grows is not re-checked against
//! pairs the scan has already passed; those are picked up on the next tick.

use tracing::trace;

use super::states::{Body, BodyId};

/// Whether the discs of `a` and `b` overlap (touching does not count)
pub fn overlapping(a: &Body, b: &Body) -> bool {
    let d = (b.x - a.x).norm();
    d < (a.radius + b.radius) as f64
}

/// Scan every pair of `active` (i < j by list position) and merge the
/// overlapping ones in place. Returns the number of merges performed
pub fn resolve(bodies: &mut [Body], active: &[BodyId]) -> usize {
    let mut merges = 0;

    for (n, &i) in active.iter().enumerate() {
        for &j in &active[n + 1..] {
            // i may have been absorbed by an earlier j in this scan
            if !bodies[i].alive {
                break;
            }
            if !bodies[j].alive {
                continue;
            }
            if !overlapping(&bodies[i], &bodies[j]) {
                continue;
            }

            // ties go to the body listed first
            let (absorber, absorbed) = if bodies[i].m >= bodies[j].m { (i, j) } else { (j, i) };

            let prey = bodies[absorbed].clone();
            bodies[absorber].absorb(&prey);
            bodies[absorbed].alive = false;
            merges += 1;

            trace!(absorber, absorbed, mass = bodies[absorber].m, "merged bodies");
        }
    }

    merges
}
