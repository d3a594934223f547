use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::debug;

/// A value must occur at least this many times to count as the mode.
pub const MIN_MODE_OCCURRENCES: usize = 2;

/// Return the unique key holding the highest count, if there is one.
///
/// Yields `None` when the highest count is below [`MIN_MODE_OCCURRENCES`]
/// or when more than one key shares it. The result does not depend on the
/// map's iteration order.
pub fn resolve<K>(counts: &BTreeMap<K, usize>) -> Option<K>
where
    K: Clone,
{
    let max_count = counts.values().copied().max().unwrap_or(0);

    if max_count < MIN_MODE_OCCURRENCES {
        debug!(max_count, distinct = counts.len(), "no value occurs often enough to be the mode");
        return None;
    }

    let leaders = counts
        .iter()
        .filter(|&(_, &count)| count == max_count)
        .map(|(key, _)| key);

    match leaders.exactly_one() {
        Ok(key) => Some(key.clone()),
        Err(tied) => {
            debug!(max_count, tied = tied.count(), "tie at the highest count, no unique mode");
            None
        }
    }
}
