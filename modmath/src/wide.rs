//! 128-bit aware helpers over pairs of 64-bit words.
//!
//! The functions here take a 128-bit value as `(high, low)` words.

use crate::error::ArithError;
use crate::Widening;

/// Compile-time guard for the supported shift amounts.
pub(crate) struct ValidShift<const BITS: u32>;

impl<const BITS: u32> ValidShift<BITS> {
    pub(crate) const OK: () = assert!(
        BITS == 32 || BITS == 52 || BITS == 64,
        "the shift must be 32, 52 or 64"
    );
}

/// Calculates `x + y`, returning the wrapped sum and whether the true sum
/// exceeds 64 bits.
///
/// ```
/// use modmath::add_u64;
///
/// assert_eq!(add_u64(1 << 63, 1 << 63), (0, true));
/// assert_eq!(add_u64((1 << 63) + 13, (1 << 63) + 17), (30, true));
/// ```
#[inline]
pub fn add_u64(x: u64, y: u64) -> (u64, bool) {
    x.carry_add(y, false)
}

/// Calculates `x - y`, returning the wrapped difference and whether a borrow occurred.
#[inline]
pub fn sub_u64(x: u64, y: u64) -> (u64, bool) {
    x.borrow_sub(y, false)
}

/// Returns `⌊x * y / 2^BITS⌋` truncated to 64 bits.
///
/// `BITS` must be 32, 52 or 64, others fail to compile.
#[inline]
pub fn multiply_u64_hi<const BITS: u32>(x: u64, y: u64) -> u64 {
    let () = ValidShift::<BITS>::OK;
    if BITS == 64 {
        x.widen_mul_hw(y)
    } else {
        ((x as u128 * y as u128) >> BITS) as u64
    }
}

/// Returns the low 64 bits of `⌊(high * 2^64 + low) / divisor⌋`.
///
/// The caller guarantees the quotient fits in 64 bits.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub fn divide_u128_u64_lo(high: u64, low: u64, divisor: u64) -> u64 {
    check!(divisor != 0, ArithError::DivisionByZero);
    ((((high as u128) << 64) | low as u128) / divisor as u128) as u64
}

/// Returns the full quotient `⌊(high * 2^64 + low) / divisor⌋` as `(high, low)` words.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[inline]
pub fn divide_u128_u64(high: u64, low: u64, divisor: u64) -> (u64, u64) {
    check!(divisor != 0, ArithError::DivisionByZero);
    let quotient = (((high as u128) << 64) | low as u128) / divisor as u128;
    ((quotient >> 64) as u64, quotient as u64)
}
