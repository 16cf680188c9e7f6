mod sequential;

#[cfg(test)]
mod tests;

pub use sequential::{chunk_size, sequential_chunk};
