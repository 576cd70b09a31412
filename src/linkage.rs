//! Linkage: inter-cluster distance from point-to-point distances.
//!
//! The key choice in agglomerative clustering is how to lift a pairwise
//! point distance to a distance between clusters:
//!
//! | Linkage | Formula | Effect |
//! |---------|---------|--------|
//! | Single  | min d(p,q) for p∈A, q∈B | Chaining; elongated clusters |
//! | Average | mean d(p,q)             | Balanced compromise |
//!
//! Both variants here operate on the **squared** Euclidean distance
//! ([`Vector::squared_distance`](crate::Vector::squared_distance)), not the
//! true Euclidean distance. For single linkage this changes nothing: the
//! square is a monotonic transform, so the minimum pair — and with it the
//! merge order — is identical. For average linkage it does matter: the mean
//! of squared distances is not the square of the mean distance, so merge
//! order can differ from a true-Euclidean implementation. Persisted
//! dendrograms depend on this exact behavior, so it is kept rather than
//! corrected.
//!
//! A strategy is a pure function of its operands: stateless, and symmetric
//! in the two clusters.

use crate::cluster::Cluster;
use crate::data::Dataset;
use crate::error::Result;

/// A rule for computing the distance between two clusters over a dataset.
pub trait LinkageStrategy {
    /// Distance between `c1` and `c2`. Symmetric: `distance(a, b, d) ==
    /// distance(b, a, d)`.
    fn distance(&self, c1: &Cluster, c2: &Cluster, data: &Dataset) -> Result<f64>;
}

/// Single linkage: the minimum squared distance over all point pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLink;

impl LinkageStrategy for SingleLink {
    fn distance(&self, c1: &Cluster, c2: &Cluster, data: &Dataset) -> Result<f64> {
        let mut min = f64::INFINITY;
        for id1 in c1.iter() {
            let e1 = data.get(id1)?;
            for id2 in c2.iter() {
                let d = e1.squared_distance(data.get(id2)?)?;
                if d < min {
                    min = d;
                }
            }
        }
        Ok(min)
    }
}

/// Average linkage: the arithmetic mean of squared distances over all
/// point pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageLink;

impl LinkageStrategy for AverageLink {
    fn distance(&self, c1: &Cluster, c2: &Cluster, data: &Dataset) -> Result<f64> {
        let mut total = 0.0;
        let mut count = 0usize;
        for id1 in c1.iter() {
            let e1 = data.get(id1)?;
            for id2 in c2.iter() {
                total += e1.squared_distance(data.get(id2)?)?;
                count += 1;
            }
        }
        // Unreachable through a partition (clusters are never empty there),
        // but an empty operand must not divide by zero.
        if count == 0 {
            return Ok(f64::INFINITY);
        }
        Ok(total / count as f64)
    }
}

/// Linkage selection, as passed in by callers choosing a variant by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Minimum pairwise distance.
    Single,
    /// Mean pairwise distance.
    Average,
}

impl Linkage {
    /// The strategy implementing this variant.
    pub fn strategy(self) -> &'static dyn LinkageStrategy {
        match self {
            Linkage::Single => &SingleLink,
            Linkage::Average => &AverageLink,
        }
    }
}
