use crate::bits::maximum_value;
use crate::error::ArithError;
use crate::modulo::MulModuloFactor;
use crate::wide::multiply_u64_hi;

/// The modular multiplication.
pub trait MulModulo<Modulus, Rhs = Self> {
    /// Output type.
    type Output;

    /// Calculates `self * rhs mod modulus`.
    ///
    /// The result is in `[0, modulus)`.
    fn mul_modulo(self, rhs: Rhs, modulus: Modulus) -> Self::Output;
}

impl MulModulo<u64> for u64 {
    type Output = Self;

    /// Calculates `self * rhs mod modulus` through a 128-bit product,
    /// exact for every nonzero `modulus`.
    #[inline]
    fn mul_modulo(self, rhs: Self, modulus: u64) -> Self::Output {
        check!(modulus != 0, ArithError::InvalidModulus(modulus));
        ((self as u128 * rhs as u128) % modulus as u128) as u64
    }
}

impl<const SHIFT: u32> MulModulo<u64, MulModuloFactor<SHIFT>> for u64 {
    type Output = Self;

    /// Calculates `self * rhs mod modulus`
    ///
    /// The result is in `[0, modulus)`
    ///
    /// # Correctness
    ///
    /// `rhs` must be built from the same `modulus`, and `modulus` must be less than `2^63`.
    /// For `SHIFT < 64`, `modulus` and `self` must also fit in `SHIFT` bits.
    #[inline]
    fn mul_modulo(self, rhs: MulModuloFactor<SHIFT>, modulus: u64) -> Self::Output {
        let tmp = self.lazy_mul_modulo(rhs, modulus);

        if tmp >= modulus {
            tmp - modulus
        } else {
            tmp
        }
    }
}

impl<const SHIFT: u32> MulModulo<u64, u64> for MulModuloFactor<SHIFT> {
    type Output = u64;

    /// Calculates `self.value * rhs mod modulus`.
    ///
    /// The result is in `[0, modulus)`.
    #[inline]
    fn mul_modulo(self, rhs: u64, modulus: u64) -> Self::Output {
        rhs.mul_modulo(self, modulus)
    }
}

/// The modular multiplication assignment.
pub trait MulModuloAssign<Modulus, Rhs = Self> {
    /// Calculates `self *= rhs mod modulus`.
    fn mul_modulo_assign(&mut self, rhs: Rhs, modulus: Modulus);
}

impl MulModuloAssign<u64> for u64 {
    #[inline]
    fn mul_modulo_assign(&mut self, rhs: Self, modulus: u64) {
        *self = self.mul_modulo(rhs, modulus);
    }
}

impl<const SHIFT: u32> MulModuloAssign<u64, MulModuloFactor<SHIFT>> for u64 {
    #[inline]
    fn mul_modulo_assign(&mut self, rhs: MulModuloFactor<SHIFT>, modulus: u64) {
        *self = self.mul_modulo(rhs, modulus);
    }
}

/// The lazy modular multiplication.
pub trait LazyMulModulo<Modulus, Rhs = Self> {
    /// Output type.
    type Output;

    /// Calculates `self * rhs mod modulus`.
    ///
    /// The result is in `[0, 2 * modulus)`.
    fn lazy_mul_modulo(self, rhs: Rhs, modulus: Modulus) -> Self::Output;
}

impl<const SHIFT: u32> LazyMulModulo<u64, MulModuloFactor<SHIFT>> for u64 {
    type Output = u64;

    /// Calculates `self * rhs.value mod modulus`.
    ///
    /// The result is in `[0, 2 * modulus)`.
    ///
    /// # Correctness
    ///
    /// `modulus` must be less than `2^63`. For `SHIFT < 64`, `modulus` and
    /// `self` must also fit in `SHIFT` bits.
    ///
    /// # Proof
    ///
    /// Let `x = self`, `w = rhs.value`, `w' = rhs.quotient`, `p = modulus` and `β = 2^SHIFT`.
    ///
    /// By definition, `w' = ⌊wβ/p⌋`. Let `q = ⌊w'x/β⌋`.
    ///
    /// Then, `0 ≤ wβ/p − w' < 1`, `0 ≤ w'x/β - q < 1`.
    ///
    /// Multiplying by `xp/β` and `p` respectively, and adding, yields
    ///
    /// `0 ≤ wx − qp < xp/β + p < 2p`
    #[inline]
    fn lazy_mul_modulo(self, rhs: MulModuloFactor<SHIFT>, modulus: u64) -> Self::Output {
        // 2 * modulus must stay inside one word
        let bound = maximum_value(SHIFT.min(u64::BITS - 1));
        check!(
            modulus <= bound,
            ArithError::OperandOutOfRange {
                value: modulus,
                bound,
            }
        );
        if SHIFT < u64::BITS {
            check!(self <= bound, ArithError::OperandOutOfRange { value: self, bound });
        }

        let q = multiply_u64_hi::<SHIFT>(self, rhs.quotient());
        rhs.value()
            .wrapping_mul(self)
            .wrapping_sub(q.wrapping_mul(modulus))
    }
}
