//! A cluster of example indices.

use core::fmt;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::Dataset;
use crate::error::Result;

/// A group of distinct example indices.
///
/// Membership is a sorted unique set: duplicates are silently absorbed and
/// iteration is always ascending. Ascending order is load-bearing, not
/// cosmetic — rendering and the merge tie-break both depend on it for
/// reproducibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    members: BTreeSet<usize>,
}

impl Cluster {
    /// Create an empty cluster (builder phase).
    pub fn new() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }

    /// Create a cluster holding exactly one example index.
    pub fn singleton(id: usize) -> Self {
        let mut cluster = Self::new();
        cluster.insert(id);
        cluster
    }

    /// Add an example index. Duplicates are silently absorbed.
    pub fn insert(&mut self, id: usize) {
        self.members.insert(id);
    }

    /// Member count.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: usize) -> bool {
        self.members.contains(&id)
    }

    /// A **new** cluster holding the union of both operands' memberships.
    /// Neither operand is mutated.
    pub fn merge(&self, other: &Cluster) -> Cluster {
        let mut merged = self.clone();
        for &id in &other.members {
            merged.insert(id);
        }
        merged
    }

    /// Iterate over the member indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().copied()
    }

    /// Render each member's vector wrapped in angle brackets, concatenated
    /// in ascending member order.
    pub fn render_with(&self, data: &Dataset) -> Result<String> {
        let mut out = String::new();
        for id in self.iter() {
            out.push('<');
            out.push_str(&data.get(id)?.to_string());
            out.push('>');
        }
        Ok(out)
    }
}

impl fmt::Display for Cluster {
    /// Members joined by commas, ascending: `0,3,7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
