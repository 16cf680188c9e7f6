
use crate::error::ArrangeError;
use crate::random::{random_index, RandomSource};
use tracing::debug;

/// Divide `items_cnt` items into `groups_cnt` group sizes
///
/// Every group starts at `min_per_group`; the surplus is then handed out one
/// unit at a time to a uniformly random group, skipping groups already at
/// `max_per_group`. Groups that fill early receive nothing further, so the
/// result is not uniform over all valid partitions.
///
/// # Returns
/// One size per group, e.g. `[1, 9]` for 1 item in group 1 and 9 in group 2
pub fn partition<R: RandomSource + ?Sized>(
    rng: &mut R,
    items_cnt: usize,
    groups_cnt: usize,
    min_per_group: usize,
    max_per_group: usize,
) -> Result<Vec<usize>, ArrangeError> {
    if min_per_group > max_per_group {
        return Err(ArrangeError::InvertedGroupBounds {
            min_per_group,
            max_per_group,
        });
    }

    let infeasible = || ArrangeError::Infeasible {
        items: items_cnt,
        groups: groups_cnt,
        min_per_group,
        max_per_group,
    };

    let floor = groups_cnt
        .checked_mul(min_per_group)
        .filter(|&floor| floor <= items_cnt)
        .ok_or_else(infeasible)?;

    // An overflowing capacity can always hold `items_cnt`
    if let Some(capacity) = groups_cnt.checked_mul(max_per_group) {
        if capacity < items_cnt {
            return Err(infeasible());
        }
    }

    let mut sizes = vec![min_per_group; groups_cnt];
    let mut surplus = items_cnt - floor;

    while surplus > 0 {
        let group = random_index(rng, 0, groups_cnt - 1)?;
        if sizes[group] < max_per_group {
            sizes[group] += 1;
            surplus -= 1;
        }
    }

    debug!(items_cnt, groups_cnt, ?sizes, "partitioned group sizes");

    Ok(sizes)
}
