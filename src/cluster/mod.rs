//! Density clustering of scalar values.
//!
//! The engine labels a caller-owned sequence of [`ClusterItem`]s in place:
//! each item ends up either in a cluster (a non-negative id) or as noise.
//! Items carry an opaque payload so results can be matched back to the
//! caller's own records.
//!
//! ## DBSCAN on a line
//!
//! Two values are neighbors when their absolute difference is at most
//! epsilon. A value whose neighborhood (itself included) holds at least
//! `min_cluster_size` values grows a cluster, which spreads through
//! neighbors-of-neighbors. See [`Dbscan1d`] for the exact rules, including
//! where they depart from textbook DBSCAN.
//!
//! ## Usage
//!
//! ```rust
//! use dbscan1d::cluster::{ClusterItem, Clustering, Dbscan1d, Label};
//!
//! // In place, with payloads
//! let mut items = vec![
//!     ClusterItem::new(1.0, "a"),
//!     ClusterItem::new(1.1, "b"),
//!     ClusterItem::new(9.0, "c"),
//! ];
//! let mut engine = Dbscan1d::new(0.3, 2).engine(&mut items);
//! assert!(engine.run());
//! assert_eq!(items[0].label, Label::Cluster(0));
//! assert_eq!(items[1].label, Label::Cluster(0));
//! assert!(items[2].is_noise());
//!
//! // Plain values
//! let labels = Dbscan1d::new(0.3, 2).fit_predict_with_noise(&[1.0, 1.1, 9.0]).unwrap();
//! assert_eq!(labels, vec![Some(0), Some(0), None]);
//! ```

mod dbscan;
mod item;
mod traits;
mod util;

pub use dbscan::{Dbscan1d, Engine, RunStats};
pub use item::{group_by_cluster, noise_indices, ClusterItem, Label, NOISE, UNCLASSIFIED};
pub use traits::Clustering;
