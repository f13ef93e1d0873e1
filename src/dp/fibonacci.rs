//! Fibonacci numbers: `F(0) = 0`, `F(1) = 1`, `F(n) = F(n-1) + F(n-2)`
//!
//! Results are `u128`, which holds every value up to [`MAX_FIB_INDEX`]. Past
//! that the functions return `None` instead of overflowing.

use rustc_hash::FxHashMap;

use super::CallCounter;

/// Largest `n` for which `F(n)` fits in a `u128`
pub const MAX_FIB_INDEX: u32 = 186;

/// Naive recursion, O(2^n)
pub fn fib_recursive(n: u32) -> Option<u128> {
    fib_recursive_counted(n, &mut CallCounter::new())
}

pub fn fib_recursive_counted(n: u32, counter: &mut CallCounter) -> Option<u128> {
    counter.tick();
    if n <= 1 {
        return Some(n as u128);
    }
    fib_recursive_counted(n - 1, counter)?.checked_add(fib_recursive_counted(n - 2, counter)?)
}

/// Top-down with a memo, O(n)
pub fn fib_memoized(n: u32) -> Option<u128> {
    fib_memoized_counted(n, &mut CallCounter::new())
}

pub fn fib_memoized_counted(n: u32, counter: &mut CallCounter) -> Option<u128> {
    if n > MAX_FIB_INDEX {
        counter.tick();
        return None;
    }
    let mut memo = FxHashMap::default();
    Some(memoized(n, &mut memo, counter))
}

fn memoized(n: u32, memo: &mut FxHashMap<u32, u128>, counter: &mut CallCounter) -> u128 {
    counter.tick();
    if let Some(&value) = memo.get(&n) {
        return value;
    }
    let value = if n <= 1 {
        n as u128
    } else {
        memoized(n - 1, memo, counter) + memoized(n - 2, memo, counter)
    };
    memo.insert(n, value);
    value
}

/// Bottom-up table, O(n)
pub fn fib_tabulated(n: u32) -> Option<u128> {
    if n <= 1 {
        return Some(n as u128);
    }
    let n = n as usize;
    let mut dp = vec![0u128; n + 1];
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1].checked_add(dp[i - 2])?;
    }
    Some(dp[n])
}
