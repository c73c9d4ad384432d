//! This module defines a number of common constants,
//! which are mainly constraints.

/// Whether preconditions of the hot-path operations are validated.
///
/// Enabled for debug builds and for builds with the `checked` feature.
/// When disabled, every precondition check is compiled out and violating
/// a precondition yields a meaningless (but memory-safe) result.
pub const CHECKED: bool = cfg!(any(debug_assertions, feature = "checked"));

/// The maximum number of bits of a generated modulus.
pub const MODULUS_BIT_COUNT_MAX: u32 = 62;
/// The minimum number of bits of a generated modulus.
pub const MODULUS_BIT_COUNT_MIN: u32 = 1;

/// The maximum number of bits of a [`Modulus`](crate::modulo::Modulus).
///
/// Barrett reduction keeps `2 * modulus` inside one word.
pub const BARRETT_MODULUS_BIT_COUNT_MAX: u32 = 63;

/// Number of candidates tried when searching a primitive root.
pub const PRIMITIVE_ROOT_SEARCH_LIMIT: u64 = 1 << 16;

/// Miller-Rabin witnesses, deterministic for every `n < 3.3 * 10^24`.
pub const MILLER_RABIN_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
