use crate::modulo::{LazyMulModulo, MulModuloFactor};

struct LazyBits<const BITS: u32>;

impl<const BITS: u32> LazyBits<BITS> {
    const OK: () = assert!(BITS == 52 || BITS == 64, "lazy bit width must be 52 or 64");
}

/// Calculates `x * y mod modulus` with lazy reduction.
///
/// The result is in `[0, 2 * modulus)`; finish it with
/// [`reduce_mod::<2>`](crate::modulo::reduce_mod) once a batch is done.
///
/// `BITS` must be 52 or 64, others fail to compile. It selects the
/// precision of the Barrett factor built for `y`.
/// With `BITS = 52` every operand fits a double-precision mantissa:
/// `x` and `modulus` must be at most `2^52 - 1`.
/// In any case `y` must be less than `modulus` and `modulus` less than `2^63`.
///
/// ```
/// use modmath::modulo::mul_modulo_lazy;
///
/// assert_eq!(mul_modulo_lazy::<64>(7, 6, 10), 2);
/// assert_eq!(mul_modulo_lazy::<52>(7, 7, 10), 9);
/// ```
#[inline]
pub fn mul_modulo_lazy<const BITS: u32>(x: u64, y: u64, modulus: u64) -> u64 {
    let () = LazyBits::<BITS>::OK;
    let factor = MulModuloFactor::<BITS>::new(y, modulus);
    x.lazy_mul_modulo(factor, modulus)
}
