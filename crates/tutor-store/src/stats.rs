//! Derived project statistics.

use serde::Serialize;
use tutor_model::{Block, lookup_cost};

/// Aggregate counts over every block on every page.
///
/// Never mutated directly; always rebuilt with [`Stats::recompute`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of blocks across all pages.
    pub total_blocks: usize,
    /// Sum of registry costs across all pages.
    pub total_cost: u64,
}

impl Stats {
    /// Fold over the blocks of every page.
    pub fn recompute<'a, P>(pages: P) -> Self
    where
        P: IntoIterator<Item = &'a [Block]>,
    {
        pages
            .into_iter()
            .flatten()
            .fold(Self::default(), |mut stats, block| {
                stats.total_blocks += 1;
                stats.total_cost += u64::from(lookup_cost(block.kind()));
                stats
            })
    }
}
