// Public API exports
pub mod arranger;
pub mod chunker;
pub mod error;
pub mod grouper;
pub mod partition;
pub mod random;
pub mod standardize;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main types for convenience
pub use arranger::{Arranger, ArrangerBuilder};
pub use error::{ArrangeError, ErrorKind};

pub use random::{
    integer_bound, parse_bound, random_index, random_int, RandomSource, SeededRandom,
    ThreadRandom,
};

pub use partition::partition;

pub use grouper::random_group;

pub use chunker::{chunk_size, sequential_chunk};

pub use standardize::{is_blank, standardize, standardize_item, IdGenerator, Item, UuidV4};
