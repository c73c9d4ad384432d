use crate::modulo::{Modulo, Modulus, MulModulo};

/// The modular exponentiation.
pub trait PowModulo<Modulus> {
    /// Calculates `self^exponent (mod modulus)`.
    ///
    /// `self` need not be reduced. Any base raised to `0` gives `1`.
    fn pow_modulo(self, exponent: u64, modulus: Modulus) -> Self;
}

/// Square-and-multiply over the bits of `exponent`, low bits first.
///
/// `exponent` must be nonzero.
#[inline]
fn pow_with<F>(base: u64, mut exponent: u64, mul: F) -> u64
where
    F: Fn(u64, u64) -> u64,
{
    let mut power = base;
    let mut intermediate = 1u64;
    loop {
        if (exponent & 1) != 0 {
            intermediate = mul(intermediate, power);
        }
        exponent >>= 1;
        if exponent == 0 {
            break;
        }
        power = mul(power, power);
    }
    intermediate
}

impl PowModulo<u64> for u64 {
    /// ```
    /// use modmath::modulo::PowModulo;
    ///
    /// assert_eq!(2u64.pow_modulo(u64::MAX, 5), 3);
    /// assert_eq!(2u64.pow_modulo(59, 1 << 60), 1 << 59);
    /// ```
    #[inline]
    fn pow_modulo(self, exponent: u64, modulus: u64) -> Self {
        if exponent == 0 {
            return 1;
        }
        let base = self % modulus;
        pow_with(base, exponent, |a, b| a.mul_modulo(b, modulus))
    }
}

impl PowModulo<&Modulus> for u64 {
    #[inline]
    fn pow_modulo(self, exponent: u64, modulus: &Modulus) -> Self {
        if exponent == 0 {
            return 1;
        }
        let base = self.modulo(modulus);
        pow_with(base, exponent, |a, b| a.mul_modulo(b, modulus))
    }
}
