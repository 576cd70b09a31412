use core::fmt;

/// Result alias for `dendra`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering engine and its persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Two vectors of unequal length were compared.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// A zero-member cluster was registered into a partition.
    EmptyCluster,

    /// A cluster was added past the partition's fixed capacity.
    PartitionFull {
        /// The partition's capacity.
        capacity: usize,
    },

    /// A merge step was requested on a partition with fewer than two clusters.
    InsufficientClusters {
        /// Number of clusters present.
        len: usize,
    },

    /// Requested dendrogram depth is zero or exceeds the dataset size.
    InvalidDepth {
        /// Requested depth.
        requested: usize,
        /// Number of examples in the dataset.
        n_examples: usize,
    },

    /// Ingestion yielded zero usable rows.
    NoData,

    /// Dataset example index out of range.
    ExampleOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of examples.
        len: usize,
    },

    /// Dendrogram level out of range.
    LevelOutOfRange {
        /// Requested level.
        level: usize,
        /// Dendrogram depth.
        depth: usize,
    },

    /// No persisted record exists under the given name.
    NotFound {
        /// The record name as resolved (suffix included).
        name: String,
    },

    /// I/O failure while persisting or restoring a record.
    Io {
        /// What the engine was doing when the failure occurred.
        context: &'static str,
        /// The underlying OS error.
        message: String,
    },

    /// Encoding or decoding a persisted record failed.
    Serialization {
        /// What the engine was doing when the failure occurred.
        context: &'static str,
        /// The underlying codec error.
        message: String,
    },
}

impl Error {
    pub(crate) fn io(context: &'static str, err: std::io::Error) -> Self {
        Error::Io {
            context,
            message: err.to_string(),
        }
    }

    pub(crate) fn serialization(context: &'static str, err: impl fmt::Display) -> Self {
        Error::Serialization {
            context,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::EmptyCluster => write!(f, "cannot register an empty cluster"),
            Error::PartitionFull { capacity } => {
                write!(f, "partition already holds its {capacity} clusters")
            }
            Error::InsufficientClusters { len } => {
                write!(f, "cannot merge a partition of {len} cluster(s)")
            }
            Error::InvalidDepth {
                requested,
                n_examples,
            } => {
                write!(
                    f,
                    "invalid depth {requested}: must be between 1 and the dataset size {n_examples}"
                )
            }
            Error::NoData => write!(f, "ingestion yielded no rows"),
            Error::ExampleOutOfRange { index, len } => {
                write!(f, "example index {index} out of range for dataset of {len}")
            }
            Error::LevelOutOfRange { level, depth } => {
                write!(f, "level {level} out of range for dendrogram of depth {depth}")
            }
            Error::NotFound { name } => write!(f, "no record named '{name}'"),
            Error::Io { context, message } => write!(f, "i/o failure {context}: {message}"),
            Error::Serialization { context, message } => {
                write!(f, "serialization failure {context}: {message}")
            }
        }
    }
}

impl std::error::Error for Error {}
