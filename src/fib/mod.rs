//! Fibonacci algorithms
//!
//! Three strategies over unbounded integers, all 0-indexed with `fib(0) = 0`
//! and `fib(1) = 1`. They compute the same values and differ only in where
//! the time goes.

pub use matrix::{fibonacci_matrix, Matrix2};

mod matrix;

#[cfg(test)]
mod tests;

use num::{BigUint, One, Zero};

/// Classic recursive Fibonacci, `O(2^n)` calls.
///
/// Deliberately unmemoized: this one measures call overhead. Recursion depth
/// is `n`, so the caller's stack bounds how large `n` can get.
pub fn fibonacci_recursive(n: u32) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }
    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}

/// Iterative Fibonacci with two rolling values.
///
/// Linear in `n` additions; for large `n` the cost is the big-integer adds.
pub fn fibonacci_iterative(n: u32) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 2..=n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    b
}

/// Number of decimal digits in `value`. Zero has one digit.
pub fn digit_count(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}
