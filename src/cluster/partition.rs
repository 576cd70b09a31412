//! One dendrogram level: a fixed-capacity, ordered collection of clusters.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::cluster::Cluster;
use crate::data::Dataset;
use crate::error::{Error, Result};
use crate::linkage::LinkageStrategy;

/// An ordered collection of clusters with a fixed capacity.
///
/// Represents one level of the dendrogram. The partition property — every
/// example index appears in exactly one member cluster — is maintained by
/// the engine's construction sequence (n singletons at the base, one merge
/// per level); the partition itself enforces the structural preconditions
/// it can check locally: no empty clusters, no additions past capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterPartition {
    clusters: Vec<Cluster>,
    capacity: usize,
}

impl ClusterPartition {
    /// Create an empty partition that will hold exactly `capacity` clusters.
    pub fn new(capacity: usize) -> Self {
        Self {
            clusters: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a cluster.
    ///
    /// Fails with [`Error::EmptyCluster`] for a zero-member cluster and
    /// with [`Error::PartitionFull`] once `capacity` clusters are present.
    pub fn add(&mut self, cluster: Cluster) -> Result<()> {
        if cluster.is_empty() {
            return Err(Error::EmptyCluster);
        }
        if self.clusters.len() == self.capacity {
            return Err(Error::PartitionFull {
                capacity: self.capacity,
            });
        }
        self.clusters.push(cluster);
        Ok(())
    }

    /// The i-th cluster, if in range.
    pub fn get(&self, i: usize) -> Option<&Cluster> {
        self.clusters.get(i)
    }

    /// Number of clusters currently held.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the partition holds no clusters yet.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// The fixed capacity declared at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the clusters in order.
    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    /// The core agglomerative step: merge the two closest clusters.
    ///
    /// Exhaustively evaluates `strategy` over every unordered pair `(i, j)`
    /// with `i < j`, scanning in row-major order. The strictly smallest
    /// distance wins; on a tie the first pair encountered in scan order is
    /// kept, so the step is deterministic for a given partition, strategy
    /// and dataset order.
    ///
    /// Returns a new partition of capacity `len - 1`: the merged cluster
    /// takes the lower-indexed operand's position, every other cluster is
    /// copied over in its original relative order. `self` is left intact.
    ///
    /// Cost: O(k²) strategy evaluations for k clusters, each itself
    /// O(|cᵢ|·|cⱼ|) for the pairwise linkage variants.
    pub fn merge_closest(
        &self,
        strategy: &dyn LinkageStrategy,
        data: &Dataset,
    ) -> Result<ClusterPartition> {
        let k = self.clusters.len();
        if k < 2 {
            return Err(Error::InsufficientClusters { len: k });
        }

        let mut min_distance = f64::INFINITY;
        let mut closest = (0, 1);
        for i in 0..k {
            for j in (i + 1)..k {
                let distance = strategy.distance(&self.clusters[i], &self.clusters[j], data)?;
                if distance < min_distance {
                    min_distance = distance;
                    closest = (i, j);
                }
            }
        }

        let (lo, hi) = closest;
        let merged = self.clusters[lo].merge(&self.clusters[hi]);

        let mut next = ClusterPartition::new(k - 1);
        for (i, cluster) in self.clusters.iter().enumerate() {
            if i == lo {
                next.add(merged.clone())?;
            } else if i != hi {
                next.add(cluster.clone())?;
            }
        }
        Ok(next)
    }

    /// Render each cluster's member vectors, one `cluster<i>:` line per
    /// cluster.
    pub fn render_with(&self, data: &Dataset) -> Result<String> {
        let mut out = String::new();
        for (i, cluster) in self.clusters.iter().enumerate() {
            out.push_str(&format!("cluster{i}:{}\n", cluster.render_with(data)?));
        }
        Ok(out)
    }
}

impl fmt::Display for ClusterPartition {
    /// One `cluster<i>:` line per cluster, in index form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cluster) in self.clusters.iter().enumerate() {
            writeln!(f, "cluster{i}:{cluster}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Vector;
    use crate::linkage::SingleLink;

    fn dataset(raw: &[&[f64]]) -> Dataset {
        Dataset::from_rows(
            raw.iter()
                .map(|r| Vector::from_components(r.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    fn singletons(n: usize) -> ClusterPartition {
        let mut partition = ClusterPartition::new(n);
        for i in 0..n {
            partition.add(Cluster::singleton(i)).unwrap();
        }
        partition
    }

    #[test]
    fn test_empty_cluster_rejected() {
        let mut partition = ClusterPartition::new(2);
        assert_eq!(partition.add(Cluster::new()), Err(Error::EmptyCluster));
    }

    #[test]
    fn test_capacity_enforced() {
        let mut partition = ClusterPartition::new(1);
        partition.add(Cluster::singleton(0)).unwrap();
        assert_eq!(
            partition.add(Cluster::singleton(1)),
            Err(Error::PartitionFull { capacity: 1 })
        );
    }

    #[test]
    fn test_merge_closest_picks_global_minimum() {
        // Pairwise squared distances: (0,1)=1, (0,2)=50, (1,2)=41.
        let data = dataset(&[&[0.0, 0.0], &[0.0, 1.0], &[5.0, 5.0]]);
        let level = singletons(3);

        let next = level.merge_closest(&SingleLink, &data).unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(next.capacity(), 2);
        assert_eq!(next.get(0).unwrap().iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(next.get(1).unwrap().iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_merged_cluster_takes_lower_position() {
        // Closest pair is (1, 3); the merge must land at index 1 and the
        // others keep their relative order.
        let data = dataset(&[&[0.0], &[10.0], &[100.0], &[11.0]]);
        let level = singletons(4);

        let next = level.merge_closest(&SingleLink, &data).unwrap();

        assert_eq!(next.len(), 3);
        assert_eq!(next.get(0).unwrap().iter().collect::<Vec<_>>(), vec![0]);
        assert_eq!(next.get(1).unwrap().iter().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(next.get(2).unwrap().iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_tie_keeps_first_pair_in_scan_order() {
        // (0,1) and (2,3) are both at squared distance 1; row-major scan
        // sees (0,1) first.
        let data = dataset(&[&[0.0], &[1.0], &[100.0], &[101.0]]);
        let level = singletons(4);

        let next = level.merge_closest(&SingleLink, &data).unwrap();

        assert_eq!(next.get(0).unwrap().iter().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(next.get(1).unwrap().iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(next.get(2).unwrap().iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_merge_closest_is_idempotent() {
        let data = dataset(&[&[0.0, 0.0], &[0.0, 1.0], &[5.0, 5.0], &[6.0, 6.0]]);
        let level = singletons(4);

        let a = level.merge_closest(&SingleLink, &data).unwrap();
        let b = level.merge_closest(&SingleLink, &data).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge_leaves_operand_partition_intact() {
        let data = dataset(&[&[0.0], &[1.0], &[5.0]]);
        let level = singletons(3);
        let before = level.clone();

        let _ = level.merge_closest(&SingleLink, &data).unwrap();
        assert_eq!(level, before);
    }

    #[test]
    fn test_merge_requires_two_clusters() {
        let data = dataset(&[&[0.0]]);
        let level = singletons(1);
        assert_eq!(
            level.merge_closest(&SingleLink, &data).unwrap_err(),
            Error::InsufficientClusters { len: 1 }
        );
    }

    #[test]
    fn test_display_lines() {
        let mut partition = ClusterPartition::new(2);
        partition.add(Cluster::singleton(0)).unwrap();
        let mut c = Cluster::singleton(1);
        c.insert(2);
        partition.add(c).unwrap();

        assert_eq!(partition.to_string(), "cluster0:0\ncluster1:1,2\n");
    }
}
