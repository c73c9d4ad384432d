use crate::constants::MILLER_RABIN_WITNESSES;
use crate::modulo::{MulModulo, PowModulo};

/// Records the primes < 64.
const PRIME_BIT_MASK: u64 = 1 << 2
    | 1 << 3
    | 1 << 5
    | 1 << 7
    | 1 << 11
    | 1 << 13
    | 1 << 17
    | 1 << 19
    | 1 << 23
    | 1 << 29
    | 1 << 31
    | 1 << 37
    | 1 << 41
    | 1 << 43
    | 1 << 47
    | 1 << 53
    | 1 << 59
    | 1 << 61;

/// Odd primes used to screen candidates before Miller-Rabin.
const SMALL_PRIMES: [u64; 15] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

/// Check whether `value` is a prime number through Miller-Rabin primality test algorithm.
///
/// The test is deterministic for every `u64`: the first twelve primes as
/// witnesses are sufficient for all `n < 3.3 · 10^24`.
///
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
///
/// ```
/// use modmath::number_theory::is_prime;
///
/// assert!(is_prime(2305843009211596801));
/// assert!(!is_prime(72307 * 59399));
/// ```
pub fn is_prime(value: u64) -> bool {
    if value < 64 {
        return (PRIME_BIT_MASK & (1 << value)) != 0;
    }

    // even
    if 0 == (value & 0x1) {
        return false;
    }

    if SMALL_PRIMES.iter().any(|&p| value % p == 0) {
        return false;
    }

    let value_sub_one: u64 = value - 1;
    let r = value_sub_one.trailing_zeros();
    let q = value_sub_one >> r;

    'next_witness: for &a in MILLER_RABIN_WITNESSES.iter() {
        let mut x: u64 = a.pow_modulo(q, value);
        if x == 1 || x == value_sub_one {
            continue;
        }

        for _ in 1..r {
            x = x.mul_modulo(x, value);
            if x == value_sub_one {
                continue 'next_witness;
            }
            if x == 1 {
                return false;
            }
        }
        return false;
    }
    true
}
