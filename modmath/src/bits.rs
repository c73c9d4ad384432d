//! Bit-level helpers.

use num_traits::{PrimInt, Unsigned};

use crate::error::ArithError;

#[inline]
fn bit_width<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}

/// Returns `⌊log2(x)⌋`.
///
/// `x` must be nonzero.
#[inline]
pub fn log2<T: PrimInt + Unsigned>(x: T) -> u32 {
    check!(!x.is_zero(), ArithError::ZeroValue);
    bit_width::<T>() - 1 - x.leading_zeros()
}

/// Returns the index of the most significant set bit of `x`.
///
/// `x` must be nonzero.
///
/// ```
/// use modmath::msb;
///
/// assert_eq!(msb(1u64 << 40), 40);
/// assert_eq!(msb((1u64 << 40) - 1), 39);
/// ```
#[inline]
pub fn msb<T: PrimInt + Unsigned>(x: T) -> u32 {
    log2(x)
}

/// Returns whether `x` is a power of two. `0` is not.
#[inline]
pub fn is_power_of_two<T: PrimInt + Unsigned>(x: T) -> bool {
    x.count_ones() == 1
}

/// Returns whether `x` is a power of four.
#[inline]
pub fn is_power_of_four<T: PrimInt + Unsigned>(x: T) -> bool {
    is_power_of_two(x) && x.trailing_zeros() % 2 == 0
}

/// Returns the bit of `x` at `position`.
#[inline]
pub fn get_bit<T: PrimInt + Unsigned>(x: T, position: u32) -> bool {
    !((x >> position as usize) & T::one()).is_zero()
}

/// Returns `x` with the bit at `position` forced to `value`.
#[inline]
pub fn set_bit<T: PrimInt + Unsigned>(x: T, position: u32, value: bool) -> T {
    let mask = T::one() << position as usize;
    if value {
        x | mask
    } else {
        x & !mask
    }
}

/// Returns the largest value representable in `bit_width` bits.
#[inline]
pub fn maximum_value(bit_width: u32) -> u64 {
    check!(
        bit_width <= u64::BITS,
        ArithError::OperandOutOfRange {
            value: bit_width as u64,
            bound: u64::BITS as u64,
        }
    );
    if bit_width >= u64::BITS {
        u64::MAX
    } else {
        (1 << bit_width) - 1
    }
}

/// Reverses the low `bit_width` bits of `x`, higher bits are dropped.
///
/// ```
/// use modmath::reverse_bits;
///
/// assert_eq!(reverse_bits(0b0011, 4), 0b1100);
/// assert_eq!(reverse_bits(1, 10), 1 << 9);
/// ```
#[inline]
pub fn reverse_bits(x: u64, bit_width: u32) -> u64 {
    check!(
        bit_width <= u64::BITS,
        ArithError::OperandOutOfRange {
            value: bit_width as u64,
            bound: u64::BITS as u64,
        }
    );
    if bit_width == 0 {
        0
    } else {
        x.reverse_bits() >> (u64::BITS - bit_width)
    }
}
