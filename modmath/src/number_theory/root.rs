use tracing::{debug, trace};

use crate::bits::{is_power_of_two, maximum_value};
use crate::constants::{BARRETT_MODULUS_BIT_COUNT_MAX, PRIMITIVE_ROOT_SEARCH_LIMIT};
use crate::error::ArithError;
use crate::modulo::{MulModulo, MulModuloFactor, PowModulo};

/// Checks whether `root` is a primitive `degree`-th root of unity modulo `modulus`.
///
/// For `degree > 1` this holds iff `root^(degree/2) ≡ -1 (mod modulus)`,
/// which for a prime `modulus` means `root^degree ≡ 1` and no smaller
/// power of `root` is `1`.
///
/// # Correctness
///
/// `degree` must be a power of two; checked builds panic otherwise.
///
/// ```
/// use modmath::number_theory::is_primitive_root;
///
/// assert!(is_primitive_root(12, 4, 29));
/// assert!(!is_primitive_root(12, 8, 29));
/// ```
pub fn is_primitive_root(root: u64, degree: u64, modulus: u64) -> bool {
    check!(
        is_power_of_two(degree),
        ArithError::IsNotPowerOf2 { value: degree }
    );

    let root = root % modulus;
    if root == 0 {
        return false;
    }
    if degree == 1 {
        return root == 1;
    }
    // -1 ≡ 1 (mod 2), so nothing has even order
    if modulus == 2 {
        return false;
    }

    root.pow_modulo(degree >> 1, modulus) == modulus - 1
}

/// Validates the search parameters, returning `(modulus - 1) / degree`.
fn root_quotient(degree: u64, modulus: u64) -> Result<u64, ArithError> {
    if !is_power_of_two(degree) {
        return Err(ArithError::IsNotPowerOf2 { value: degree });
    }
    if modulus < 2 {
        return Err(ArithError::InvalidModulus(modulus));
    }

    // p-1
    let modulus_minus_one = modulus - 1;

    // (p-1) must be divisible by n
    if modulus_minus_one % degree != 0 {
        return Err(ArithError::NoPrimitiveRoot { degree, modulus });
    }

    Ok(modulus_minus_one / degree)
}

/// Finds a primitive `degree`-th root of unity modulo `modulus`.
///
/// Candidates `c = 2, 3, ...` are tried in order and `c^((modulus-1)/degree)`
/// is tested, so the result is deterministic. At most
/// [`PRIMITIVE_ROOT_SEARCH_LIMIT`] candidates are tried.
///
/// # Errors
///
/// - [`ArithError::IsNotPowerOf2`] if `degree` is not a power of two.
/// - [`ArithError::InvalidModulus`] if `modulus < 2`.
/// - [`ArithError::NoPrimitiveRoot`] if `degree` does not divide `modulus - 1`
///   or no candidate succeeds.
pub fn primitive_root(degree: u64, modulus: u64) -> Result<u64, ArithError> {
    let quotient = root_quotient(degree, modulus)?;
    if degree == 1 {
        return Ok(1);
    }

    let end = modulus.min(PRIMITIVE_ROOT_SEARCH_LIMIT.saturating_add(2));
    for candidate in 2..end {
        let w = candidate.pow_modulo(quotient, modulus);
        if is_primitive_root(w, degree, modulus) {
            debug!(degree, modulus, candidate, root = w, "found primitive root");
            return Ok(w);
        }
        trace!(degree, modulus, candidate, "candidate rejected");
    }

    debug!(degree, modulus, "primitive root search exhausted");
    Err(ArithError::NoPrimitiveRoot { degree, modulus })
}

/// Scans the odd powers `root, root^3, ..., root^(degree-1)` for the smallest.
fn min_odd_power<F>(root: u64, degree: u64, mut next: F) -> u64
where
    F: FnMut(u64) -> u64,
{
    let mut minimal = root;
    let mut current = root;
    for _ in 1..(degree >> 1) {
        current = next(current);
        if current < minimal {
            minimal = current;
        }
    }
    minimal
}

/// Finds the smallest primitive `degree`-th root of unity in `[2, modulus)`
/// modulo a prime `modulus`.
///
/// The primitive roots are exactly the odd powers of any one of them,
/// so only `degree / 2` candidates are visited.
///
/// # Errors
///
/// The same as [`primitive_root`]. In addition, `degree = 1` yields
/// [`ArithError::NoPrimitiveRoot`] since its only root `1` is out of range.
///
/// ```
/// use modmath::number_theory::minimal_primitive_root;
///
/// assert_eq!(minimal_primitive_root(4, 29), Ok(12));
/// assert_eq!(minimal_primitive_root(8, 1234565441), Ok(249725733));
/// ```
pub fn minimal_primitive_root(degree: u64, modulus: u64) -> Result<u64, ArithError> {
    let root = primitive_root(degree, modulus)?;
    if degree == 1 {
        return Err(ArithError::NoPrimitiveRoot { degree, modulus });
    }

    let generator_sq = root.mul_modulo(root, modulus);
    let minimal = if modulus <= maximum_value(BARRETT_MODULUS_BIT_COUNT_MAX) {
        let generator_sq = <MulModuloFactor>::new(generator_sq, modulus);
        min_odd_power(root, degree, |x| x.mul_modulo(generator_sq, modulus))
    } else {
        min_odd_power(root, degree, |x| x.mul_modulo(generator_sq, modulus))
    };

    debug!(degree, modulus, root = minimal, "found minimal primitive root");
    Ok(minimal)
}
