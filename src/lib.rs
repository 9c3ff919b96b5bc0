//! One-dimensional density clustering.
//!
//! `dbscan1d` runs DBSCAN over scalar values: a collection of numbers is
//! split into density-connected clusters, and sparse values are labeled as
//! noise.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`Engine`], which labels a borrowed sequence of items in place
//! - [`Dbscan1d`], the parameters, usable directly through [`Clustering`]

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    group_by_cluster, noise_indices, ClusterItem, Clustering, Dbscan1d, Engine, Label, RunStats,
    NOISE, UNCLASSIFIED,
};
pub use error::{Error, Result};
