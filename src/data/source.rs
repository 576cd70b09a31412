//! Ingestion seam.
//!
//! The engine never talks to a database or a socket; an external
//! collaborator implements [`RowSource`] and hands over fully numeric rows.
//! Rows containing non-numeric fields must be rejected by the collaborator
//! before they reach this boundary.

use crate::data::Vector;
use crate::error::Result;

/// Supplier of numeric rows for [`Dataset`](crate::Dataset) construction.
pub trait RowSource {
    /// Yield every row, in ingestion order.
    ///
    /// An empty result is legal here; dataset construction turns it into
    /// [`Error::NoData`](crate::Error::NoData).
    fn fetch_rows(&mut self) -> Result<Vec<Vector>>;
}

/// An in-memory [`RowSource`] over pre-built rows.
#[derive(Debug, Clone, Default)]
pub struct RowBuffer {
    rows: Vec<Vector>,
}

impl RowBuffer {
    /// Wrap a set of rows.
    pub fn new(rows: Vec<Vector>) -> Self {
        Self { rows }
    }
}

impl RowSource for RowBuffer {
    fn fetch_rows(&mut self) -> Result<Vec<Vector>> {
        Ok(std::mem::take(&mut self.rows))
    }
}
