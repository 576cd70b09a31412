//! The dendrogram: one partition per merge level.
//!
//! Level 0 holds every example as its own singleton cluster; each later
//! level holds exactly one cluster fewer than the one before it, so a
//! dendrogram of depth D over n examples runs from n clusters down to
//! n−D+1:
//!
//! ```text
//! level0:  {0} {1} {2} {3}
//! level1:  {0,1} {2} {3}
//! level2:  {0,1} {2,3}
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::cluster::ClusterPartition;
use crate::data::Dataset;
use crate::error::{Error, Result};

/// An ordered sequence of [`ClusterPartition`]s, one per level.
///
/// The depth is fixed at construction; levels are appended in order during
/// mining and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dendrogram {
    depth: usize,
    levels: Vec<ClusterPartition>,
}

impl Dendrogram {
    /// Create an empty dendrogram that will hold exactly `depth` levels.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            levels: Vec::with_capacity(depth),
        }
    }

    /// The declared depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of levels filled in so far.
    pub fn levels_built(&self) -> usize {
        self.levels.len()
    }

    /// Append the next level.
    ///
    /// Fails with [`Error::LevelOutOfRange`] once `depth` levels exist.
    pub fn push_level(&mut self, partition: ClusterPartition) -> Result<()> {
        if self.levels.len() == self.depth {
            return Err(Error::LevelOutOfRange {
                level: self.depth,
                depth: self.depth,
            });
        }
        self.levels.push(partition);
        Ok(())
    }

    /// The partition at `level`.
    ///
    /// Out-of-range access is an observable error, not a panic.
    pub fn level(&self, level: usize) -> Result<&ClusterPartition> {
        self.levels.get(level).ok_or(Error::LevelOutOfRange {
            level,
            depth: self.depth,
        })
    }

    /// Iterate over the built levels in order.
    pub fn iter(&self) -> impl Iterator<Item = &ClusterPartition> {
        self.levels.iter()
    }

    /// Render every level in data-value form: a `level<i>:` header followed
    /// by the partition's member vectors.
    pub fn render_with(&self, data: &Dataset) -> Result<String> {
        let mut out = String::new();
        for (i, level) in self.levels.iter().enumerate() {
            out.push_str(&format!("level{i}:\n{}\n", level.render_with(data)?));
        }
        Ok(out)
    }
}

impl fmt::Display for Dendrogram {
    /// Every level in index form: a `level<i>:` header followed by the
    /// partition rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            writeln!(f, "level{i}:")?;
            write!(f, "{level}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}
