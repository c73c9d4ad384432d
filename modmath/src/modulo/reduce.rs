use crate::error::ArithError;

struct ValidFactor<const FACTOR: u64>;

impl<const FACTOR: u64> ValidFactor<FACTOR> {
    const OK: () = assert!(
        FACTOR == 1 || FACTOR == 2 || FACTOR == 4,
        "the input factor must be 1, 2 or 4"
    );
}

/// Reduces `x` from `[0, FACTOR * modulus)` to `[0, modulus)`.
///
/// `FACTOR` must be 1, 2 or 4, others fail to compile.
/// `FACTOR * modulus` must fit in 64 bits.
///
/// ```
/// use modmath::modulo::reduce_mod;
///
/// assert_eq!(reduce_mod::<2>(15, 10), 5);
/// assert_eq!(reduce_mod::<4>(39, 10), 9);
/// ```
#[inline]
pub fn reduce_mod<const FACTOR: u64>(mut x: u64, modulus: u64) -> u64 {
    let () = ValidFactor::<FACTOR>::OK;
    check!(
        (x as u128) < FACTOR as u128 * modulus as u128,
        ArithError::OperandOutOfRange {
            value: x,
            bound: (FACTOR as u128 * modulus as u128)
                .saturating_sub(1)
                .min(u64::MAX as u128) as u64,
        }
    );

    if FACTOR == 4 && x >= 2 * modulus {
        x -= 2 * modulus;
    }
    if FACTOR >= 2 && x >= modulus {
        x -= modulus;
    }
    x
}
