use crate::error::ArrangeError;
use crate::random::{random_index, RandomSource};
use tracing::debug;

/// Pick the chunk size for a sequential split
///
/// Without a maximum the size is `min_per_group`; with one, a single size is
/// drawn from `min_per_group..=max_per_group`.
pub fn chunk_size<R: RandomSource + ?Sized>(
    rng: &mut R,
    min_per_group: usize,
    max_per_group: Option<usize>,
) -> Result<usize, ArrangeError> {
    if min_per_group == 0 {
        return Err(ArrangeError::ZeroChunkSize);
    }

    match max_per_group {
        Some(max_per_group) => random_index(rng, min_per_group, max_per_group),
        None => Ok(min_per_group),
    }
}

/// Split items into consecutive chunks, preserving input order
///
/// Every chunk has the same size except the last, which holds whatever is left.
pub fn sequential_chunk<'a, T, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    min_per_group: usize,
    max_per_group: Option<usize>,
) -> Result<Vec<&'a [T]>, ArrangeError> {
    let size = chunk_size(rng, min_per_group, max_per_group)?;
    let chunks: Vec<&[T]> = items.chunks(size).collect();

    debug!(items = items.len(), size, chunks = chunks.len(), "chunked items sequentially");

    Ok(chunks)
}
