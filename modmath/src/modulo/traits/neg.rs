/// The modular negation.
pub trait NegModulo<Modulus> {
    /// Output type.
    type Output;

    /// Calculates `(-self) mod modulus`
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    fn neg_modulo(self, modulus: Modulus) -> Self::Output;
}

impl NegModulo<u64> for u64 {
    type Output = u64;

    #[inline]
    fn neg_modulo(self, modulus: u64) -> Self::Output {
        if self == 0 {
            0
        } else {
            modulus - self
        }
    }
}

/// The modular negation assignment.
pub trait NegModuloAssign<Modulus> {
    /// Calculates `(-self) mod modulus`
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    fn neg_modulo_assign(&mut self, modulus: Modulus);
}

impl NegModuloAssign<u64> for u64 {
    #[inline]
    fn neg_modulo_assign(&mut self, modulus: u64) {
        *self = self.neg_modulo(modulus);
    }
}
