use tracing::debug;

use crate::bits::is_power_of_two;
use crate::constants::{MODULUS_BIT_COUNT_MAX, MODULUS_BIT_COUNT_MIN};
use crate::error::ArithError;
use crate::number_theory::is_prime;

/// The direction in which [`PrimeGenerator`] walks its bit range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchOrder {
    /// Start just below `2^(bit_size + 1)` and walk down.
    #[default]
    Descending,
    /// Start just above `2^bit_size` and walk up.
    Ascending,
}

/// A generator of NTT-friendly primes.
///
/// Every generated prime `p` satisfies `p ≡ 1 (mod 2 * ntt_size)` and
/// `2^bit_size < p < 2^(bit_size + 1)`, so `Z_p` holds a primitive
/// `2 * ntt_size`-th root of unity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeGenerator {
    bit_size: u32,
    ntt_size: u64,
    order: SearchOrder,
}

impl PrimeGenerator {
    /// Creates a [`PrimeGenerator`].
    ///
    /// # Errors
    ///
    /// - [`ArithError::BitCountError`] if `bit_size` is outside
    ///   `MODULUS_BIT_COUNT_MIN..=MODULUS_BIT_COUNT_MAX`.
    /// - [`ArithError::IsNotPowerOf2`] if `ntt_size` is not a power of two.
    pub fn new(bit_size: u32, ntt_size: u64) -> Result<Self, ArithError> {
        if !(MODULUS_BIT_COUNT_MIN..=MODULUS_BIT_COUNT_MAX).contains(&bit_size) {
            return Err(ArithError::BitCountError(bit_size));
        }
        if !is_power_of_two(ntt_size) {
            return Err(ArithError::IsNotPowerOf2 { value: ntt_size });
        }
        Ok(Self {
            bit_size,
            ntt_size,
            order: SearchOrder::default(),
        })
    }

    /// Sets the search order.
    #[inline]
    pub fn order(mut self, order: SearchOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the bit size of this [`PrimeGenerator`].
    #[inline]
    pub fn bit_size(&self) -> u32 {
        self.bit_size
    }

    /// Returns the ntt size of this [`PrimeGenerator`].
    #[inline]
    pub fn ntt_size(&self) -> u64 {
        self.ntt_size
    }

    /// Returns an iterator over the qualifying primes in the search order.
    pub fn iter(&self) -> PrimeIter {
        let lower = 1u64 << self.bit_size;
        let upper = lower << 1;

        // `step` is a power of two, so `step <= lower` keeps `lower + 1 ≡ 1 (mod step)`.
        let next = match self.ntt_size.checked_mul(2) {
            Some(step) if step <= lower => {
                let start = match self.order {
                    SearchOrder::Ascending => lower + 1,
                    SearchOrder::Descending => upper - step + 1,
                };
                Some((start, step))
            }
            _ => None,
        };

        PrimeIter {
            next: next.map(|(start, _)| start),
            step: next.map_or(0, |(_, step)| step),
            lower,
            upper,
            order: self.order,
        }
    }

    /// Generates the first `count` qualifying primes in the search order.
    ///
    /// # Errors
    ///
    /// [`ArithError::NoEnoughModulus`] if the range holds fewer than `count` primes.
    ///
    /// ```
    /// use modmath::number_theory::PrimeGenerator;
    ///
    /// let primes = PrimeGenerator::new(40, 4096)?.generate(3)?;
    /// assert_eq!(primes.len(), 3);
    /// assert!(primes.iter().all(|p| p % 8192 == 1));
    /// # Ok::<(), modmath::ArithError>(())
    /// ```
    pub fn generate(&self, count: usize) -> Result<Vec<u64>, ArithError> {
        let primes: Vec<u64> = self.iter().take(count).collect();
        if primes.len() < count {
            debug!(
                count,
                found = primes.len(),
                bit_size = self.bit_size,
                ntt_size = self.ntt_size,
                "bit range exhausted"
            );
            return Err(ArithError::NoEnoughModulus {
                count,
                found: primes.len(),
                bit_size: self.bit_size,
                ntt_size: self.ntt_size,
            });
        }

        debug!(
            count,
            bit_size = self.bit_size,
            ntt_size = self.ntt_size,
            "generated primes"
        );
        Ok(primes)
    }
}

impl<'a> IntoIterator for &'a PrimeGenerator {
    type Item = u64;
    type IntoIter = PrimeIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over NTT-friendly primes, created by [`PrimeGenerator::iter`].
#[derive(Debug, Clone)]
pub struct PrimeIter {
    next: Option<u64>,
    step: u64,
    lower: u64,
    upper: u64,
    order: SearchOrder,
}

impl Iterator for PrimeIter {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = self.next?;
            self.next = match self.order {
                SearchOrder::Ascending => candidate
                    .checked_add(self.step)
                    .filter(|&c| c < self.upper),
                SearchOrder::Descending => candidate
                    .checked_sub(self.step)
                    .filter(|&c| c > self.lower),
            };

            if is_prime(candidate) {
                debug!(prime = candidate, "accepted prime");
                return Some(candidate);
            }
        }
    }
}

/// Generates `count` primes `p ≡ 1 (mod 2 * ntt_size)` of `bit_size + 1` bits,
/// largest first.
///
/// # Errors
///
/// The same as [`PrimeGenerator::new`] and [`PrimeGenerator::generate`].
pub fn generate_primes(count: usize, bit_size: u32, ntt_size: u64) -> Result<Vec<u64>, ArithError> {
    PrimeGenerator::new(bit_size, ntt_size)?.generate(count)
}
