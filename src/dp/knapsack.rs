//! 0/1 knapsack: pick a subset of items maximizing value within a weight budget

use rustc_hash::FxHashMap;

use super::CallCounter;

/// An item that can be taken at most once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: u64,
}

impl Item {
    pub fn new(weight: usize, value: u64) -> Self {
        Self { weight, value }
    }
}

/// Naive recursion over "take or skip the last item", O(2^n)
pub fn knapsack_recursive(items: &[Item], capacity: usize) -> u64 {
    knapsack_recursive_counted(items, capacity, &mut CallCounter::new())
}

pub fn knapsack_recursive_counted(items: &[Item], capacity: usize, counter: &mut CallCounter) -> u64 {
    counter.tick();
    let Some((last, rest)) = items.split_last() else {
        return 0;
    };
    if capacity == 0 {
        return 0;
    }

    let skip = knapsack_recursive_counted(rest, capacity, counter);
    if last.weight > capacity {
        return skip;
    }
    let take = last.value + knapsack_recursive_counted(rest, capacity - last.weight, counter);
    take.max(skip)
}

/// Top-down with a memo keyed by (items considered, remaining capacity), O(n * capacity)
pub fn knapsack_memoized(items: &[Item], capacity: usize) -> u64 {
    knapsack_memoized_counted(items, capacity, &mut CallCounter::new())
}

pub fn knapsack_memoized_counted(items: &[Item], capacity: usize, counter: &mut CallCounter) -> u64 {
    let mut memo = FxHashMap::default();
    memoized(items, items.len(), capacity, &mut memo, counter)
}

fn memoized(
    items: &[Item],
    n: usize,
    capacity: usize,
    memo: &mut FxHashMap<(usize, usize), u64>,
    counter: &mut CallCounter,
) -> u64 {
    counter.tick();
    if let Some(&value) = memo.get(&(n, capacity)) {
        return value;
    }

    let value = if n == 0 || capacity == 0 {
        0
    } else {
        let item = items[n - 1];
        let skip = memoized(items, n - 1, capacity, memo, counter);
        if item.weight > capacity {
            skip
        } else {
            let take = item.value + memoized(items, n - 1, capacity - item.weight, memo, counter);
            take.max(skip)
        }
    };
    memo.insert((n, capacity), value);
    value
}

/// Filled table from [`knapsack_tabulated`]
///
/// `table[i][w]` is the best value using the first `i` items with budget `w`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackTable {
    pub value: u64,
    pub table: Vec<Vec<u64>>,
    weights: Vec<usize>,
}

impl KnapsackTable {
    /// Indices of the items in one optimal selection, ascending
    pub fn selected_items(&self) -> Vec<usize> {
        let mut selected = Vec::new();
        let mut w = self.table.first().map_or(0, |row| row.len() - 1);

        for i in (1..self.table.len()).rev() {
            if w == 0 {
                break;
            }
            if self.table[i][w] != self.table[i - 1][w] {
                selected.push(i - 1);
                w -= self.weights[i - 1];
            }
        }
        selected.reverse();
        selected
    }
}

/// Bottom-up table, O(n * capacity) time and space
pub fn knapsack_tabulated(items: &[Item], capacity: usize) -> KnapsackTable {
    let n = items.len();
    let mut dp = vec![vec![0u64; capacity + 1]; n + 1];

    for i in 1..=n {
        let item = items[i - 1];
        for w in 0..=capacity {
            dp[i][w] = if item.weight > w {
                dp[i - 1][w]
            } else {
                dp[i - 1][w].max(item.value + dp[i - 1][w - item.weight])
            };
        }
    }

    KnapsackTable {
        value: dp[n][capacity],
        table: dp,
        weights: items.iter().map(|item| item.weight).collect(),
    }
}
