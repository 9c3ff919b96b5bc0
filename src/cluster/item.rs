//! Labeled scalar observations.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw code for an item that has not been visited yet.
pub const UNCLASSIFIED: i64 = -1;

/// Raw code for an item labeled as noise.
pub const NOISE: i64 = -2;

/// Cluster assignment of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Label {
    /// Not visited by a run yet.
    #[default]
    Unclassified,
    /// Neighborhood too sparse to belong to a cluster.
    Noise,
    /// Member of the cluster with this id.
    Cluster(usize),
}

impl Label {
    /// Integer encoding: cluster ids map to themselves, the other variants
    /// to [`UNCLASSIFIED`] and [`NOISE`].
    pub fn to_raw(self) -> i64 {
        match self {
            Label::Unclassified => UNCLASSIFIED,
            Label::Noise => NOISE,
            Label::Cluster(id) => id as i64,
        }
    }

    /// Inverse of [`Label::to_raw`]. Negative codes other than the two
    /// sentinels have no meaning and yield `None`.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            UNCLASSIFIED => Some(Label::Unclassified),
            NOISE => Some(Label::Noise),
            id if id >= 0 => usize::try_from(id).ok().map(Label::Cluster),
            _ => None,
        }
    }

    /// The cluster id, if this label is a cluster.
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            _ => None,
        }
    }
}

/// One input observation: a scalar value, its label, and caller data.
///
/// `payload` is carried through untouched so callers can correlate labels
/// with their own records after clustering. A plain index into a
/// caller-owned table works as well as an owned value.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterItem<P = ()> {
    /// Scalar value the distance is measured on.
    pub value: f64,
    /// Current label. `Unclassified` until a run visits the item.
    pub label: Label,
    /// Caller data, never inspected by the engine.
    pub payload: P,
}

impl<P> ClusterItem<P> {
    /// Create an unclassified item.
    pub fn new(value: f64, payload: P) -> Self {
        Self {
            value,
            label: Label::Unclassified,
            payload,
        }
    }

    /// The cluster id, if the item belongs to a cluster.
    pub fn cluster_id(&self) -> Option<usize> {
        self.label.cluster_id()
    }

    pub fn is_noise(&self) -> bool {
        self.label == Label::Noise
    }

    pub fn is_unclassified(&self) -> bool {
        self.label == Label::Unclassified
    }
}

impl ClusterItem<()> {
    /// Create an unclassified item with no payload.
    pub fn from_value(value: f64) -> Self {
        Self::new(value, ())
    }
}

/// Item indices per cluster id, in ascending id order.
///
/// Ids are not necessarily contiguous: a seed whose neighborhood turned out
/// to be noise still consumes an id.
pub fn group_by_cluster<P>(items: &[ClusterItem<P>]) -> Vec<(usize, Vec<usize>)> {
    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (idx, item) in items.iter().enumerate() {
        if let Some(id) = item.cluster_id() {
            groups.entry(id).or_default().push(idx);
        }
    }
    groups.into_iter().collect()
}

/// Indices of items labeled as noise.
pub fn noise_indices<P>(items: &[ClusterItem<P>]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_noise())
        .map(|(idx, _)| idx)
        .collect()
}
