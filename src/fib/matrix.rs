//! 2x2 matrix exponentiation

use num::{BigUint, One, Zero};
use std::ops::Mul;

/// Row-major 2x2 matrix of big integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix2 {
    pub cells: [[BigUint; 2]; 2],
}

impl Matrix2 {
    /// The Fibonacci Q-matrix `[[1, 1], [1, 0]]`.
    pub fn fibonacci_base() -> Self {
        Self {
            cells: [
                [BigUint::one(), BigUint::one()],
                [BigUint::one(), BigUint::zero()],
            ],
        }
    }

    /// Raise `self` to `power` by recursive halving.
    ///
    /// Even powers square the half power; odd powers multiply by one more
    /// copy of the base. `power` must be at least 1.
    pub fn pow(
        &self,
        power: u32,
    ) -> Matrix2 {
        debug_assert!(power >= 1, "matrix power must be positive");
        if power == 1 {
            return self.clone();
        }
        if power % 2 == 0 {
            let half = self.pow(power / 2);
            &half * &half
        } else {
            self * &self.pow(power - 1)
        }
    }
}

impl<'a> Mul<&'a Matrix2> for &'a Matrix2 {
    type Output = Matrix2;

    fn mul(
        self,
        rhs: &'a Matrix2,
    ) -> Matrix2 {
        let [[a00, a01], [a10, a11]] = &self.cells;
        let [[b00, b01], [b10, b11]] = &rhs.cells;
        Matrix2 {
            cells: [
                [a00 * b00 + a01 * b10, a00 * b01 + a01 * b11],
                [a10 * b00 + a11 * b10, a10 * b01 + a11 * b11],
            ],
        }
    }
}

/// Fibonacci via matrix exponentiation, `O(log n)` multiplications.
///
/// The multiplication count is small but the operands grow to hundreds of
/// thousands of bits, so big-integer multiply dominates.
pub fn fibonacci_matrix(n: u32) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }
    let [[_, fib_n], _] = Matrix2::fibonacci_base().pow(n).cells;
    fib_n
}
