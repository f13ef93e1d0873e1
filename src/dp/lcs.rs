//! Longest common subsequence of two sequences
//!
//! Works on any slices of comparable elements; [`lcs_string`] is a shortcut
//! for text, comparing by `char`.

use rustc_hash::FxHashMap;

use super::CallCounter;

/// Naive recursion, O(2^(m+n))
pub fn lcs_recursive<T: PartialEq>(x: &[T], y: &[T]) -> usize {
    lcs_recursive_counted(x, y, &mut CallCounter::new())
}

pub fn lcs_recursive_counted<T: PartialEq>(x: &[T], y: &[T], counter: &mut CallCounter) -> usize {
    counter.tick();
    match (x.split_last(), y.split_last()) {
        (Some((a, x_rest)), Some((b, y_rest))) => {
            if a == b {
                1 + lcs_recursive_counted(x_rest, y_rest, counter)
            } else {
                lcs_recursive_counted(x_rest, y, counter).max(lcs_recursive_counted(x, y_rest, counter))
            }
        }
        _ => 0,
    }
}

/// Top-down with a memo keyed by prefix lengths, O(m * n)
pub fn lcs_memoized<T: PartialEq>(x: &[T], y: &[T]) -> usize {
    lcs_memoized_counted(x, y, &mut CallCounter::new())
}

pub fn lcs_memoized_counted<T: PartialEq>(x: &[T], y: &[T], counter: &mut CallCounter) -> usize {
    let mut memo = FxHashMap::default();
    memoized(x, y, x.len(), y.len(), &mut memo, counter)
}

fn memoized<T: PartialEq>(
    x: &[T],
    y: &[T],
    m: usize,
    n: usize,
    memo: &mut FxHashMap<(usize, usize), usize>,
    counter: &mut CallCounter,
) -> usize {
    counter.tick();
    if let Some(&length) = memo.get(&(m, n)) {
        return length;
    }

    let length = if m == 0 || n == 0 {
        0
    } else if x[m - 1] == y[n - 1] {
        1 + memoized(x, y, m - 1, n - 1, memo, counter)
    } else {
        memoized(x, y, m - 1, n, memo, counter).max(memoized(x, y, m, n - 1, memo, counter))
    };
    memo.insert((m, n), length);
    length
}

/// Filled table from [`lcs_tabulated`]
///
/// `table[i][j]` is the LCS length of `x[..i]` and `y[..j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    pub length: usize,
    pub table: Vec<Vec<usize>>,
}

impl LcsTable {
    /// Walks the table back from the corner to recover one longest subsequence
    ///
    /// `x` and `y` must be the sequences the table was built from. On ties the
    /// walk drops an element of `x` first.
    pub fn sequence<T: PartialEq + Clone>(&self, x: &[T], y: &[T]) -> Vec<T> {
        let (mut i, mut j) = (x.len(), y.len());
        let mut out = Vec::with_capacity(self.length);

        while i > 0 && j > 0 {
            if x[i - 1] == y[j - 1] {
                out.push(x[i - 1].clone());
                i -= 1;
                j -= 1;
            } else if self.table[i - 1][j] >= self.table[i][j - 1] {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        out.reverse();
        out
    }
}

/// Bottom-up table, O(m * n) time and space
pub fn lcs_tabulated<T: PartialEq>(x: &[T], y: &[T]) -> LcsTable {
    let (m, n) = (x.len(), y.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if x[i - 1] == y[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    LcsTable {
        length: dp[m][n],
        table: dp,
    }
}

/// One longest common subsequence of two strings
pub fn lcs_string(a: &str, b: &str) -> String {
    let x: Vec<char> = a.chars().collect();
    let y: Vec<char> = b.chars().collect();
    lcs_tabulated(&x, &y).sequence(&x, &y).into_iter().collect()
}
