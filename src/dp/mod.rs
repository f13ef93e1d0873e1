//! Dynamic programming exercises, each solved three ways
//!
//! - **Naive recursion**: follows the recurrence directly, exponential time
//! - **Memoization**: the same recursion with a cache of solved subproblems
//! - **Tabulation**: fills a table bottom-up without recursion
//!
//! The recursive variants come in a plain form and a `_counted` form that
//! records the number of calls in a [`CallCounter`], which makes the cost
//! difference between the first two approaches observable.

pub mod fibonacci;
pub mod knapsack;
pub mod lcs;

pub use fibonacci::{fib_memoized, fib_recursive, fib_tabulated};
pub use knapsack::{knapsack_memoized, knapsack_recursive, knapsack_tabulated, Item, KnapsackTable};
pub use lcs::{lcs_memoized, lcs_recursive, lcs_tabulated, LcsTable};

/// Counts recursive calls, including calls answered from a memo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounter {
    pub calls: u64,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn tick(&mut self) {
        self.calls += 1;
    }
}
