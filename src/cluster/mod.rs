//! Clusters and dendrogram levels.
//!
//! A [`Cluster`] is an immutable-after-build set of distinct example
//! indices; a [`ClusterPartition`] is one dendrogram level — a fixed-size,
//! ordered collection of clusters that together cover every example index
//! exactly once.
//!
//! The partition owns the core step of agglomerative mining:
//! [`ClusterPartition::merge_closest`] scans every unordered cluster pair,
//! finds the closest pair under a
//! [`LinkageStrategy`](crate::LinkageStrategy), and produces the next,
//! one-smaller level.
//! Merging is copy-on-write throughout: earlier levels stay valid and
//! untouched while later levels are built.

mod partition;
mod set;

pub use partition::ClusterPartition;
pub use set::Cluster;
