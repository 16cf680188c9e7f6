
use crate::error::ArrangeError;
use crate::partition::partition;
use crate::random::{random_index, RandomSource};
use tracing::debug;

/// Group items randomly into groups of `min_per_group..=max_per_group`
///
/// The number of groups is drawn from `ceil(n / max)..=floor(n / min)`, the
/// sizes come from [`partition`], and items are then dealt out by removing a
/// random element from a working copy until each group is full.
///
/// Items are referenced, never copied; the input slice is left untouched.
pub fn random_group<'a, T, R: RandomSource + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    min_per_group: usize,
    max_per_group: usize,
) -> Result<Vec<Vec<&'a T>>, ArrangeError> {
    if min_per_group == 0 || max_per_group == 0 {
        return Err(ArrangeError::ZeroGroupBound {
            min_per_group,
            max_per_group,
        });
    }

    let n = items.len();
    let groups_cnt = random_index(rng, n.div_ceil(max_per_group), n / min_per_group)?;
    let sizes = partition(rng, n, groups_cnt, min_per_group, max_per_group)?;

    let mut remaining: Vec<&T> = items.iter().collect();
    let mut groups = Vec::with_capacity(sizes.len());

    for size in sizes {
        let mut group = Vec::with_capacity(size);
        for _ in 0..size {
            let index = random_index(rng, 0, remaining.len() - 1)?;
            group.push(remaining.swap_remove(index));
        }
        groups.push(group);
    }

    debug_assert!(remaining.is_empty());
    debug!(items = n, groups = groups.len(), "grouped items randomly");

    Ok(groups)
}
