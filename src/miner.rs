//! The clustering engine: builds the dendrogram and owns persistence.
//!
//! # Lifecycle
//!
//! ```text
//! Unbuilt ──mine()──▶ Mined ──persist()──▶ durable record ──restore()──▶ Mined
//! ```
//!
//! Construction validates the requested depth against the dataset and
//! fails loudly — a miner you can hold is always usable. Mining is
//! synchronous and deterministic: given the same dataset order, depth and
//! strategy it always produces the same dendrogram, so re-mining is
//! idempotent. Once mined, the engine is read-only.
//!
//! Only the depth and the dendrogram are persisted; the dataset is not
//! part of the record and must be supplied again for data-value rendering.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cluster::{Cluster, ClusterPartition};
use crate::data::Dataset;
use crate::dendrogram::Dendrogram;
use crate::error::{Error, Result};
use crate::linkage::{Linkage, LinkageStrategy};
use crate::store;

/// Agglomerative hierarchical clustering over a fixed dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchicalMiner {
    depth: usize,
    dendrogram: Dendrogram,
}

impl HierarchicalMiner {
    /// Create an unbuilt miner for the given depth and dataset.
    ///
    /// Fails with [`Error::InvalidDepth`] when `depth` is zero or exceeds
    /// the number of examples. The failure propagates; no half-built miner
    /// is ever handed back.
    pub fn new(depth: usize, data: &Dataset) -> Result<Self> {
        if depth == 0 || depth > data.len() {
            return Err(Error::InvalidDepth {
                requested: depth,
                n_examples: data.len(),
            });
        }
        Ok(Self {
            depth,
            dendrogram: Dendrogram::new(depth),
        })
    }

    /// Construct and mine in one step, selecting the linkage by name.
    pub fn build(data: &Dataset, depth: usize, linkage: Linkage) -> Result<Self> {
        let mut miner = Self::new(depth, data)?;
        miner.mine(data, linkage.strategy())?;
        Ok(miner)
    }

    /// The requested depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The dendrogram built so far (empty before [`mine`](Self::mine)).
    pub fn dendrogram(&self) -> &Dendrogram {
        &self.dendrogram
    }

    /// Build the dendrogram.
    ///
    /// Level 0 is one singleton cluster per example, in ascending index
    /// order; every later level is the previous level with its two closest
    /// clusters merged under `strategy`. Runs to completion on the calling
    /// thread; no randomness, no suspension.
    pub fn mine(&mut self, data: &Dataset, strategy: &dyn LinkageStrategy) -> Result<()> {
        let n = data.len();
        let mut dendrogram = Dendrogram::new(self.depth);

        let mut base = ClusterPartition::new(n);
        for i in 0..n {
            base.add(Cluster::singleton(i))?;
        }
        dendrogram.push_level(base)?;

        for level in 1..self.depth {
            let next = dendrogram.level(level - 1)?.merge_closest(strategy, data)?;
            dendrogram.push_level(next)?;
        }

        self.dendrogram = dendrogram;
        debug!(
            "mined a {}-level dendrogram over {} examples",
            self.depth, n
        );
        Ok(())
    }

    /// Render the dendrogram in index form.
    pub fn render(&self) -> String {
        self.dendrogram.to_string()
    }

    /// Render the dendrogram in data-value form.
    pub fn render_with(&self, data: &Dataset) -> Result<String> {
        self.dendrogram.render_with(data)
    }

    /// Serialize the miner to a named record under the store namespace.
    ///
    /// The canonical suffix is appended to `name` when missing and the
    /// namespace directory is created if absent. Returns the record path.
    /// A write that fails partway leaves previously persisted records
    /// untouched.
    pub fn persist(&self, name: &str) -> Result<PathBuf> {
        let path = store::write_record(self, name)?;
        debug!("persisted {}-level dendrogram to {:?}", self.depth, path);
        Ok(path)
    }

    /// Reload a miner persisted under `name` (same suffix convention).
    ///
    /// The restored miner renders identically to the one persisted.
    pub fn restore(name: &str) -> Result<Self> {
        let miner: Self = store::read_record(name)?;
        info!(
            "restored a {}-level dendrogram from record '{}'",
            miner.depth,
            store::record_file_name(name)
        );
        Ok(miner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Vector;
    use rand::prelude::*;

    fn dataset(raw: &[&[f64]]) -> Dataset {
        Dataset::from_rows(
            raw.iter()
                .map(|r| Vector::from_components(r.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    fn scenario_dataset() -> Dataset {
        dataset(&[&[0.0, 0.0], &[0.0, 1.0], &[5.0, 5.0]])
    }

    #[test]
    fn test_depth_zero_rejected() {
        let data = scenario_dataset();
        assert_eq!(
            HierarchicalMiner::new(0, &data).unwrap_err(),
            Error::InvalidDepth {
                requested: 0,
                n_examples: 3
            }
        );
    }

    #[test]
    fn test_depth_beyond_dataset_rejected() {
        let data = scenario_dataset();
        assert_eq!(
            HierarchicalMiner::new(4, &data).unwrap_err(),
            Error::InvalidDepth {
                requested: 4,
                n_examples: 3
            }
        );
    }

    #[test]
    fn test_single_link_scenario() {
        // Squared distances: (0,1)=1, (0,2)=50, (1,2)=41. The global
        // minimum is (0,1), so level 1 holds {0,1} and {2}.
        let data = scenario_dataset();
        let miner = HierarchicalMiner::build(&data, 2, Linkage::Single).unwrap();

        let level0 = miner.dendrogram().level(0).unwrap();
        assert_eq!(level0.len(), 3);
        for (i, cluster) in level0.iter().enumerate() {
            assert_eq!(cluster.iter().collect::<Vec<_>>(), vec![i]);
        }

        let level1 = miner.dendrogram().level(1).unwrap();
        assert_eq!(level1.len(), 2);
        assert_eq!(
            level1.get(0).unwrap().iter().collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert_eq!(level1.get(1).unwrap().iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_full_depth_ends_in_one_cluster() {
        let data = dataset(&[&[0.0], &[1.0], &[4.0], &[9.0]]);
        let miner = HierarchicalMiner::build(&data, 4, Linkage::Average).unwrap();

        let last = miner.dendrogram().level(3).unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(
            last.get(0).unwrap().iter().collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn test_level_counts_and_partition_property() {
        // Every level L must hold n - L clusters that cover each example
        // index exactly once.
        let mut rng = StdRng::seed_from_u64(42);
        let n = 12;
        let rows: Vec<Vector> = (0..n)
            .map(|_| {
                Vector::from_components(vec![
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                ])
            })
            .collect();
        let data = Dataset::from_rows(rows).unwrap();

        for linkage in [Linkage::Single, Linkage::Average] {
            let miner = HierarchicalMiner::build(&data, n, linkage).unwrap();
            assert_eq!(miner.dendrogram().levels_built(), n);

            for level in 0..n {
                let partition = miner.dendrogram().level(level).unwrap();
                assert_eq!(partition.len(), n - level);

                let mut seen = vec![0usize; n];
                for cluster in partition.iter() {
                    for id in cluster.iter() {
                        seen[id] += 1;
                    }
                }
                assert!(
                    seen.iter().all(|&count| count == 1),
                    "level {level} does not partition the dataset: {seen:?}"
                );
            }
        }
    }

    #[test]
    fn test_mining_is_deterministic() {
        let data = dataset(&[&[0.0, 0.0], &[0.5, 0.5], &[5.0, 5.0], &[5.5, 5.0], &[9.0, 0.0]]);

        let a = HierarchicalMiner::build(&data, 5, Linkage::Average).unwrap();
        let b = HierarchicalMiner::build(&data, 5, Linkage::Average).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn test_render_matches_level_grammar() {
        let data = scenario_dataset();
        let miner = HierarchicalMiner::build(&data, 2, Linkage::Single).unwrap();

        assert_eq!(
            miner.render(),
            "level0:\ncluster0:0\ncluster1:1\ncluster2:2\n\nlevel1:\ncluster0:0,1\ncluster1:2\n\n"
        );
        assert_eq!(
            miner.render_with(&data).unwrap(),
            "level0:\ncluster0:<[0,0]>\ncluster1:<[0,1]>\ncluster2:<[5,5]>\n\n\
             level1:\ncluster0:<[0,0]><[0,1]>\ncluster1:<[5,5]>\n\n"
        );
    }

    #[test]
    fn test_round_trip_renders_identically() {
        let dir = tempfile::tempdir().unwrap();
        let data = scenario_dataset();
        let miner = HierarchicalMiner::build(&data, 3, Linkage::Average).unwrap();

        crate::store::write_record_in(dir.path(), &miner, "scenario").unwrap();
        let restored: HierarchicalMiner =
            crate::store::read_record_in(dir.path(), "scenario").unwrap();

        assert_eq!(restored, miner);
        assert_eq!(restored.render(), miner.render());
        assert_eq!(
            restored.render_with(&data).unwrap(),
            miner.render_with(&data).unwrap()
        );
    }

    #[test]
    fn test_persist_and_restore_through_namespace() {
        // Exercises the public surface: fixed namespace, suffix appended.
        let data = scenario_dataset();
        let miner = HierarchicalMiner::build(&data, 2, Linkage::Single).unwrap();

        let name = "miner_namespace_roundtrip";
        let path = miner.persist(name).unwrap();
        assert!(path.ends_with("stored/miner_namespace_roundtrip.dat"));

        let restored = HierarchicalMiner::restore(name).unwrap();
        assert_eq!(restored.render(), miner.render());

        std::fs::remove_file(path).unwrap();
        let _ = std::fs::remove_dir("stored");
    }
}
