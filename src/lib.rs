//! # dendra
//!
//! Agglomerative hierarchical clustering over a fixed dataset of numeric
//! vectors: build a multi-level dendrogram, render it, persist it, reload
//! it.
//!
//! Bottom-up clustering starts with every example as its own cluster and
//! repeatedly merges the closest pair, one merge per level:
//!
//! ```text
//! level0:  {0} {1} {2} {3}        n singletons
//! level1:  {0,1} {2} {3}          closest pair merged
//! level2:  {0,1} {2,3}            ...and so on, one fewer per level
//! ```
//!
//! "Closest" is pluggable via [`LinkageStrategy`]: [`SingleLink`] takes the
//! minimum pairwise distance between clusters, [`AverageLink`] the mean.
//! Both operate on **squared** Euclidean distances; see the [`linkage`]
//! module for why that distinction matters.
//!
//! The engine is synchronous and deterministic — same dataset order, depth
//! and linkage, same dendrogram — and holds no shared state between
//! instances, so independent miners are safe to run concurrently.
//!
//! ## Usage
//!
//! ```rust
//! use dendra::{Dataset, HierarchicalMiner, Linkage, Vector};
//!
//! let rows = vec![
//!     Vector::from_components(vec![0.0, 0.0]),
//!     Vector::from_components(vec![0.0, 1.0]),
//!     Vector::from_components(vec![5.0, 5.0]),
//! ];
//! let data = Dataset::from_rows(rows)?;
//!
//! let miner = HierarchicalMiner::build(&data, 2, Linkage::Single)?;
//! assert_eq!(
//!     miner.render(),
//!     "level0:\ncluster0:0\ncluster1:1\ncluster2:2\n\nlevel1:\ncluster0:0,1\ncluster1:2\n\n"
//! );
//! # Ok::<(), dendra::Error>(())
//! ```
//!
//! Mined dendrograms round-trip through a named durable record:
//! [`HierarchicalMiner::persist`] writes one bincode file per name under a
//! fixed namespace directory, and [`HierarchicalMiner::restore`] brings
//! back an engine that renders bit-identically.

pub mod cluster;
pub mod data;
pub mod dendrogram;
/// Error types used across `dendra`.
pub mod error;
pub mod linkage;
pub mod miner;
mod store;

pub use cluster::{Cluster, ClusterPartition};
pub use data::{Dataset, RowBuffer, RowSource, Vector};
pub use dendrogram::Dendrogram;
pub use error::{Error, Result};
pub use linkage::{AverageLink, Linkage, LinkageStrategy, SingleLink};
pub use miner::HierarchicalMiner;
