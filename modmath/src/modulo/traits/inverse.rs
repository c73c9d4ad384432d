use crate::error::ArithError;
use crate::number_theory::Xgcd;

/// The modular inversion.
pub trait InvModulo<Modulus = Self>: Sized {
    /// Calculates `self^(-1) (mod modulus)`.
    ///
    /// `self` need not be reduced. For `modulus = 1` the result is `0`.
    ///
    /// # Correctness
    ///
    /// `modulus` must be nonzero and coprime to `self`; checked builds panic otherwise.
    fn inv_modulo(self, modulus: Modulus) -> Self;
}

/// The fallible modular inversion.
pub trait TryInvModulo<Modulus = Self>: Sized {
    /// Calculates `self^(-1) (mod modulus)`, or returns
    /// [`ArithError::NoModuloInverse`] if `self` and `modulus` are not coprime,
    /// or [`ArithError::InvalidModulus`] if `modulus` is zero.
    fn try_inv_modulo(self, modulus: Modulus) -> Result<Self, ArithError>;
}

impl InvModulo for u64 {
    /// ```
    /// use modmath::modulo::InvModulo;
    ///
    /// assert_eq!(5u64.inv_modulo(19), 4);
    /// assert_eq!(0xFFFFFFu64.inv_modulo(2), 1);
    /// ```
    #[inline]
    fn inv_modulo(self, modulus: u64) -> Self {
        check!(modulus != 0, ArithError::InvalidModulus(modulus));
        let (gcd, inv) = u64::gcdinv(self, modulus);
        check!(
            gcd == 1,
            ArithError::NoModuloInverse {
                value: self,
                modulus,
            }
        );
        inv
    }
}

impl TryInvModulo for u64 {
    #[inline]
    fn try_inv_modulo(self, modulus: u64) -> Result<Self, ArithError> {
        if modulus == 0 {
            return Err(ArithError::InvalidModulus(modulus));
        }
        let (gcd, inv) = u64::gcdinv(self, modulus);
        if gcd == 1 {
            Ok(inv)
        } else {
            Err(ArithError::NoModuloInverse {
                value: self,
                modulus,
            })
        }
    }
}
