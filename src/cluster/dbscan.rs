//! DBSCAN over scalar values.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Applied to a line of scalar
//! values, a cluster is a run of values whose gaps are bridged by points with
//! dense enough neighborhoods, and isolated values are reported as noise.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum absolute difference for two values to be
//!   neighbors. The boundary is inclusive, and equal values are always
//!   neighbors.
//! - **Min cluster size**: A neighborhood (seed included) with fewer members
//!   than this is noise.
//!
//! ## Algorithm Steps
//!
//! 1. Visit items in sequence order. Each item still unclassified seeds an
//!    expansion with the next cluster id; the id is consumed whether or not
//!    the seed turns out to be noise.
//!
//! 2. Expansion from a seed:
//!    - Find its ε-neighborhood by linear scan.
//!    - Too small: every member becomes noise, including members that an
//!      earlier step of the same expansion already put in a cluster.
//!    - Otherwise every unclassified member joins the cluster, and each new
//!      member whose value differs from the seed's expands in turn.
//!
//! Expansion runs depth first over an explicit stack of frames, so the visit
//! order is that of the recursive formulation without its stack depth.
//!
//! ## Differences from textbook DBSCAN
//!
//! Textbook DBSCAN only marks unclassified points as noise and lets a later
//! core point claim them as border points. Here the sparse branch overwrites
//! unconditionally, so a point labeled earlier can be "un-clustered" by a
//! sparse neighbor, depending on traversal order. Use a reference DBSCAN if
//! border points must never lose their cluster.
//!
//! ## Complexity
//!
//! - **Time**: O(n) per neighborhood query, O(n²) overall.
//! - **Space**: O(n) for the frame stack in the worst case (a long chain).

use super::item::{ClusterItem, Label};
use super::traits::Clustering;
use super::util::{abs_distance, tally};
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// DBSCAN parameters for scalar data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dbscan1d {
    /// Epsilon: maximum absolute difference for neighborhood.
    epsilon: f64,
    /// Neighborhoods smaller than this are noise.
    min_cluster_size: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunStats {
    /// Cluster ids consumed, including seeds that ended up as noise.
    pub seeds: usize,
    /// Distinct cluster ids present after the run.
    pub clusters: usize,
    /// Items labeled as noise.
    pub noise: usize,
}

/// One pending expansion: the seed's value, its neighborhood, and how far
/// through the neighborhood we are.
struct Frame {
    seed_value: f64,
    neighbors: Vec<usize>,
    cursor: usize,
}

impl Dbscan1d {
    /// Create a new clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum absolute difference between two neighbors.
    /// * `min_cluster_size` - Minimum neighborhood size (seed included) for a
    ///   seed to grow a cluster.
    pub fn new(epsilon: f64, min_cluster_size: usize) -> Self {
        Self {
            epsilon,
            min_cluster_size,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the minimum neighborhood size.
    pub fn with_min_cluster_size(mut self, min_cluster_size: usize) -> Self {
        self.min_cluster_size = min_cluster_size;
        self
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn min_cluster_size(&self) -> usize {
        self.min_cluster_size
    }

    /// Reject parameters outside the documented domain.
    ///
    /// [`Engine::run`] does not call this: a negative or NaN epsilon there
    /// simply shrinks every neighborhood to the seed alone.
    pub fn validate(&self) -> Result<()> {
        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be non-negative",
            });
        }
        Ok(())
    }

    /// Borrow `items` into an engine configured with these parameters.
    pub fn engine<'a, P>(&self, items: &'a mut [ClusterItem<P>]) -> Engine<'a, P> {
        Engine::with_items(items, *self)
    }

    /// Label every unclassified item in place.
    ///
    /// Items already labeled are left alone, so on a fully labeled slice
    /// this is a no-op.
    pub fn label<P>(&self, items: &mut [ClusterItem<P>]) -> RunStats {
        let mut next_id = 0usize;
        for idx in 0..items.len() {
            if items[idx].is_unclassified() {
                self.expand(items, idx, next_id);
                next_id += 1;
            }
        }

        let (clusters, noise) = tally(items);
        RunStats {
            seeds: next_id,
            clusters,
            noise,
        }
    }

    /// Indices of all items within epsilon of `items[seed_idx]`, in sequence
    /// order. The seed is always included.
    fn find_neighborhood<P>(&self, items: &[ClusterItem<P>], seed_idx: usize) -> Vec<usize> {
        let seed = items[seed_idx].value;
        items
            .iter()
            .enumerate()
            .filter(|(idx, other)| {
                *idx == seed_idx || abs_distance(seed, other.value) <= self.epsilon
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Query the seed's neighborhood. A sparse neighborhood is marked noise
    /// on the spot and yields no frame.
    fn open_frame<P>(&self, items: &mut [ClusterItem<P>], seed_idx: usize) -> Option<Frame> {
        let neighbors = self.find_neighborhood(items, seed_idx);

        if neighbors.len() < self.min_cluster_size {
            tracing::trace!(
                seed = seed_idx,
                neighbors = neighbors.len(),
                min_cluster_size = self.min_cluster_size,
                "sparse neighborhood, marking noise"
            );
            // Overwrites cluster labels as well as unclassified ones.
            for &idx in &neighbors {
                items[idx].label = Label::Noise;
            }
            return None;
        }

        Some(Frame {
            seed_value: items[seed_idx].value,
            neighbors,
            cursor: 0,
        })
    }

    fn expand<P>(&self, items: &mut [ClusterItem<P>], seed_idx: usize, cluster_id: usize) {
        let mut stack: Vec<Frame> = self.open_frame(items, seed_idx).into_iter().collect();

        while let Some(frame) = stack.last_mut() {
            let Some(&idx) = frame.neighbors.get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;
            let seed_value = frame.seed_value;

            if !items[idx].is_unclassified() {
                continue;
            }
            items[idx].label = Label::Cluster(cluster_id);

            if items[idx].value != seed_value {
                stack.extend(self.open_frame(items, idx));
            }
        }
    }
}

impl Default for Dbscan1d {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl Clustering for Dbscan1d {
    fn fit_predict(&self, values: &[f64]) -> Result<Vec<Label>> {
        self.validate()?;

        let mut items: Vec<ClusterItem> =
            values.iter().map(|&v| ClusterItem::from_value(v)).collect();
        self.label(&mut items);

        Ok(items.into_iter().map(|item| item.label).collect())
    }
}

/// The clustering engine: exclusive access to a caller-owned item sequence
/// plus the parameters to label it with.
///
/// The sequence may be absent, in which case [`Engine::run`] reports failure
/// without touching anything.
#[derive(Debug)]
pub struct Engine<'a, P = ()> {
    items: Option<&'a mut [ClusterItem<P>]>,
    params: Dbscan1d,
}

impl<'a, P> Engine<'a, P> {
    pub fn new(items: Option<&'a mut [ClusterItem<P>]>, params: Dbscan1d) -> Self {
        Self { items, params }
    }

    pub fn with_items(items: &'a mut [ClusterItem<P>], params: Dbscan1d) -> Self {
        Self::new(Some(items), params)
    }

    pub fn params(&self) -> &Dbscan1d {
        &self.params
    }

    /// Read access to the borrowed sequence, if any.
    pub fn items(&self) -> Option<&[ClusterItem<P>]> {
        self.items.as_deref()
    }

    /// Label every item as noise or a cluster id.
    ///
    /// Returns `false` only when no sequence was provided. Running again
    /// without [`Engine::reset`] leaves the labels as they are.
    pub fn run(&mut self) -> bool {
        self.try_run().is_ok()
    }

    /// Like [`Engine::run`], reporting the failure as an error and the
    /// outcome as [`RunStats`].
    pub fn try_run(&mut self) -> Result<RunStats> {
        let items = self.items.as_deref_mut().ok_or(Error::MissingItems)?;
        let stats = self.params.label(items);

        tracing::debug!(
            items = items.len(),
            epsilon = self.params.epsilon,
            min_cluster_size = self.params.min_cluster_size,
            seeds = stats.seeds,
            clusters = stats.clusters,
            noise = stats.noise,
            "dbscan run complete"
        );

        Ok(stats)
    }

    /// Put every item back to `Unclassified` so the sequence can be run again.
    pub fn reset(&mut self) {
        if let Some(items) = self.items.as_deref_mut() {
            for item in items.iter_mut() {
                item.label = Label::Unclassified;
            }
        }
    }
}
