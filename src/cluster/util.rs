use std::collections::HashSet;

use super::item::{ClusterItem, Label};

#[inline]
pub(crate) fn abs_distance(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// Number of distinct cluster ids and number of noise items.
pub(crate) fn tally<P>(items: &[ClusterItem<P>]) -> (usize, usize) {
    let mut ids: HashSet<usize> = HashSet::new();
    let mut noise = 0;
    for item in items {
        match item.label {
            Label::Cluster(id) => {
                ids.insert(id);
            }
            Label::Noise => noise += 1,
            Label::Unclassified => {}
        }
    }
    (ids.len(), noise)
}
