/// The modular subtraction.
pub trait SubModulo<Modulus, Rhs = Self> {
    /// Output type.
    type Output;

    /// Calculates `self - rhs mod modulus`
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn sub_modulo(self, rhs: Rhs, modulus: Modulus) -> Self::Output;
}

impl SubModulo<u64> for u64 {
    type Output = u64;

    #[inline]
    fn sub_modulo(self, rhs: Self, modulus: u64) -> Self::Output {
        if self >= rhs {
            self - rhs
        } else {
            modulus - rhs + self
        }
    }
}

/// The modular subtraction assignment.
pub trait SubModuloAssign<Modulus, Rhs = Self> {
    /// Calculates `self -= rhs mod modulus`
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn sub_modulo_assign(&mut self, rhs: Rhs, modulus: Modulus);
}

impl SubModuloAssign<u64> for u64 {
    #[inline]
    fn sub_modulo_assign(&mut self, rhs: Self, modulus: u64) {
        if *self >= rhs {
            *self -= rhs;
        } else {
            *self += modulus - rhs;
        }
    }
}
