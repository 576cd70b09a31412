//! The dataset model: numeric row vectors and the immutable example set.
//!
//! A [`Vector`] is one data row — an ordered, fixed-length tuple of reals.
//! A [`Dataset`] is an ordered, immutable collection of equal-length
//! vectors, built once from an ingestion collaborator (see [`RowSource`])
//! and never mutated afterwards. Everything downstream — clusters,
//! partitions, linkage — refers to examples by their index into the
//! dataset, never by value.

mod dataset;
mod source;
mod vector;

pub use dataset::Dataset;
pub use source::{RowBuffer, RowSource};
pub use vector::Vector;
