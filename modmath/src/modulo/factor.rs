#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ArithError;
use crate::wide::ValidShift;

/// A number used for fast modular multiplication.
///
/// This is efficient if many operations are multiplied by
/// the same number and then reduced with the same modulus,
/// e.g. a twiddle factor inside the butterflies of a transform.
///
/// It stores the operand `value` together with its Barrett factor
/// `quotient = ⌊value · 2^SHIFT / modulus⌋`. A factor is only meaningful
/// for the `(value, SHIFT, modulus)` triple it was built from.
///
/// `SHIFT` must be 32, 52 or 64, others fail to compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MulModuloFactor<const SHIFT: u32 = 64> {
    value: u64,
    quotient: u64,
}

#[inline]
fn mul_base_then_div_mod<const SHIFT: u32>(value: u64, modulus: u64) -> u64 {
    let () = ValidShift::<SHIFT>::OK;
    check!(modulus != 0, ArithError::InvalidModulus(modulus));
    check!(
        value < modulus,
        ArithError::OperandOutOfRange {
            value,
            bound: modulus - 1,
        }
    );

    // ⌊(value * (2^SHIFT)) / modulus⌋
    (((value as u128) << SHIFT) / modulus as u128) as u64
}

impl<const SHIFT: u32> MulModuloFactor<SHIFT> {
    /// Constructs a [`MulModuloFactor`].
    ///
    /// * `value` must be less than `modulus`.
    #[inline]
    pub fn new(value: u64, modulus: u64) -> Self {
        Self {
            value,
            quotient: mul_base_then_div_mod::<SHIFT>(value, modulus),
        }
    }

    /// Resets the content of [`MulModuloFactor`].
    ///
    /// * `value` must be less than `modulus`.
    #[inline]
    pub fn set(&mut self, value: u64, modulus: u64) {
        self.value = value;
        self.set_modulus(modulus);
    }

    /// Resets the `modulus` of [`MulModuloFactor`].
    #[inline]
    pub fn set_modulus(&mut self, modulus: u64) {
        self.quotient = mul_base_then_div_mod::<SHIFT>(self.value, modulus);
    }

    /// Returns the value of this [`MulModuloFactor`].
    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Returns the quotient of this [`MulModuloFactor`], the Barrett factor.
    #[inline]
    pub const fn quotient(&self) -> u64 {
        self.quotient
    }

    /// Returns the shift the quotient was built with.
    #[inline]
    pub const fn shift(&self) -> u32 {
        SHIFT
    }
}
