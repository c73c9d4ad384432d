/// The modular addition.
pub trait AddModulo<Modulus, Rhs = Self> {
    /// Output type.
    type Output;

    /// Calculates `self + rhs mod modulus`
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn add_modulo(self, rhs: Rhs, modulus: Modulus) -> Self::Output;
}

impl AddModulo<u64> for u64 {
    type Output = u64;

    /// The sum may carry out of 64 bits when `modulus > 2^63`,
    /// the wrapped result is then corrected by the same subtraction.
    #[inline]
    fn add_modulo(self, rhs: Self, modulus: u64) -> Self::Output {
        let (r, carry) = self.overflowing_add(rhs);
        if carry || r >= modulus {
            r.wrapping_sub(modulus)
        } else {
            r
        }
    }
}

/// The modular addition assignment.
pub trait AddModuloAssign<Modulus, Rhs = Self> {
    /// Calculates `self += rhs mod modulus`
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn add_modulo_assign(&mut self, rhs: Rhs, modulus: Modulus);
}

impl AddModuloAssign<u64> for u64 {
    #[inline]
    fn add_modulo_assign(&mut self, rhs: Self, modulus: u64) {
        *self = self.add_modulo(rhs, modulus);
    }
}
