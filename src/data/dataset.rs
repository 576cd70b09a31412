//! The immutable example set.

use core::fmt;

use ndarray::Array2;

use crate::data::{RowSource, Vector};
use crate::error::{Error, Result};

/// An ordered, immutable collection of equal-length [`Vector`]s.
///
/// Built once — from rows or from a [`RowSource`] collaborator — and never
/// mutated. Always holds at least one example; every example shares one
/// dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    examples: Vec<Vector>,
    dim: usize,
}

impl Dataset {
    /// Build a dataset from pre-ingested rows.
    ///
    /// Fails with [`Error::NoData`] when `rows` is empty and with
    /// [`Error::DimensionMismatch`] when any row disagrees with the first
    /// row's length.
    pub fn from_rows(rows: Vec<Vector>) -> Result<Self> {
        let first = rows.first().ok_or(Error::NoData)?;
        let dim = first.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: bad.len(),
            });
        }
        Ok(Self {
            examples: rows,
            dim,
        })
    }

    /// Build a dataset by draining an ingestion collaborator.
    pub fn from_source(source: &mut dyn RowSource) -> Result<Self> {
        Self::from_rows(source.fetch_rows()?)
    }

    /// The i-th example.
    ///
    /// Out-of-range access is an observable error, not a panic.
    pub fn get(&self, index: usize) -> Result<&Vector> {
        self.examples.get(index).ok_or(Error::ExampleOutOfRange {
            index,
            len: self.examples.len(),
        })
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Always `false`: a dataset holds at least one example.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// The shared dimensionality of every example.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Iterate over the examples in order.
    pub fn iter(&self) -> impl Iterator<Item = &Vector> {
        self.examples.iter()
    }

    /// The upper-triangular matrix of pairwise squared distances.
    ///
    /// Entry `(i, j)` with `i < j` holds
    /// [`squared_distance`](Vector::squared_distance) between examples `i`
    /// and `j`; the diagonal and lower triangle stay zero. Diagnostic
    /// surface only — mining never calls this.
    pub fn distance_matrix(&self) -> Result<Array2<f64>> {
        let n = self.len();
        let mut matrix = Array2::zeros((n, n));
        for i in 0..n {
            for j in (i + 1)..n {
                matrix[[i, j]] = self.examples[i].squared_distance(&self.examples[j])?;
            }
        }
        Ok(matrix)
    }
}

impl fmt::Display for Dataset {
    /// One line per example: `<index>: <vector>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, example) in self.examples.iter().enumerate() {
            writeln!(f, "{index}: {example}")?;
        }
        Ok(())
    }
}
