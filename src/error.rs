use thiserror::Error;

/// Broad category of an [`ArrangeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument had the wrong type (e.g. a non-integer bound)
    Type,
    /// An argument was outside its logically valid range
    Range,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrangeError {
    #[error("{name} should be an integer, got {value}")]
    NotInteger { name: &'static str, value: String },

    #[error("minimum should be smaller than maximum: {minimum} > {maximum}")]
    InvertedBounds { minimum: i64, maximum: i64 },

    #[error("minPerGroup should be smaller than maxPerGroup: {min_per_group} > {max_per_group}")]
    InvertedGroupBounds {
        min_per_group: usize,
        max_per_group: usize,
    },

    #[error(
        "cannot divide {items} items into {groups} groups of {min_per_group}..={max_per_group}"
    )]
    Infeasible {
        items: usize,
        groups: usize,
        min_per_group: usize,
        max_per_group: usize,
    },

    #[error("group bounds must be positive: {min_per_group}..={max_per_group}")]
    ZeroGroupBound {
        min_per_group: usize,
        max_per_group: usize,
    },

    #[error("chunk size must be positive")]
    ZeroChunkSize,
}

impl ArrangeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrangeError::NotInteger { .. } => ErrorKind::Type,
            _ => ErrorKind::Range,
        }
    }
}
