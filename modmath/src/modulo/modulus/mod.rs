#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::BARRETT_MODULUS_BIT_COUNT_MAX;
use crate::error::ArithError;
use crate::modulo::{Modulo, ModuloAssign, MulModulo, MulModuloAssign};
use crate::Widening;

/// A modulus, using barrett reduction algorithm.
///
/// The struct stores the modulus number and some precomputed
/// data. Here, `b` = 2^64.
///
/// It's efficient if many reductions are performed with a single modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Modulus {
    /// the value to indicate the modulus
    value: u64,
    /// ratio `µ` = ⌊b^2/value⌋, low word first
    ratio: [u64; 2],
    /// the bit count of the value
    bit_count: u32,
}

impl Modulus {
    /// Creates a [`Modulus`] instance.
    ///
    /// # Panics
    ///
    /// The `value` must be at least 2 and less than `2^63`, others will panic.
    #[inline]
    pub fn new(value: u64) -> Self {
        match Self::try_new(value) {
            Ok(modulus) => modulus,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a [`Modulus`] instance, returning
    /// [`ArithError::InvalidModulus`] for `0`, `1` and values of `2^63` or more.
    pub fn try_new(value: u64) -> Result<Self, ArithError> {
        let bit_count = u64::BITS - value.leading_zeros();
        if value < 2 || bit_count > BARRETT_MODULUS_BIT_COUNT_MAX {
            return Err(ArithError::InvalidModulus(value));
        }

        // ⌊2^128 / value⌋ from ⌊(2^128 - 1) / value⌋
        let mut ratio = u128::MAX / value as u128;
        if u128::MAX % value as u128 == value as u128 - 1 {
            ratio += 1;
        }

        Ok(Self {
            value,
            ratio: [ratio as u64, (ratio >> 64) as u64],
            bit_count,
        })
    }

    /// Returns the value of this [`Modulus`].
    #[inline]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Returns the ratio of this [`Modulus`].
    #[inline]
    pub const fn ratio(&self) -> [u64; 2] {
        self.ratio
    }

    /// Returns the bit count of this [`Modulus`].
    #[inline]
    pub const fn bit_count(&self) -> u32 {
        self.bit_count
    }

    /// Step 3. and 4. of the reduction.
    #[inline]
    fn correct(&self, r: u64) -> u64 {
        if r >= self.value {
            r - self.value
        } else {
            r
        }
    }
}

impl Modulo<&Modulus> for u64 {
    type Output = Self;

    /// Caculates `self (mod modulus)`.
    ///
    /// ## Procedure
    ///
    /// We denote `x` = `self`  and `m` = `modulus` here.
    ///
    /// 1. `q1` ← `x`, `q2` ← `q1` * `ratio`, `q3` ← ⌊`q2`/b^2⌋.
    /// 2. `r1` ← `x` mod b^2, `r2` ← `q3` * `m` mod b^2, `r` ← `r1` − `r2`.
    /// 3. If `r` ≥ `m` do: `r` ← `r` − `m`.
    /// 4. Return(`r`).
    ///
    /// ## Proof:
    ///
    /// ∵ `q1` = `x` , ⌊b^2 / m⌋ - 1 < `ratio` ≤ ⌊b^2 / m⌋
    ///
    /// ∴ ⌊x * b^2 / m⌋ - x < `q2` = `q1` * `ratio` ≤ ⌊x * b^2 / m⌋
    ///
    /// ∴ ⌊x / m⌋ - 2 < `q3` = ⌊`q2` / b^2⌋ ≤ ⌊x / m⌋
    ///
    /// ∴ ⌊x / m⌋ - 1 ≤ `q3` ≤ ⌊x / m⌋
    ///
    /// ∴ `x` - `q3` * `m` mod b^2 < 2 * m
    #[inline]
    fn modulo(self, modulus: &Modulus) -> Self::Output {
        let ratio = modulus.ratio();

        // Step 1.
        //              ratio[1]  ratio[0]
        //         *                self
        //   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
        //            +-------------------+
        //            |  tmp1   |         |    <-- self * ratio[0]
        //            +-------------------+
        //   +------------------+
        //   |      tmp2        |              <-- self * ratio[1]
        //   +------------------+
        //   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
        //   +--------+
        //   |   q3   |
        //   +--------+
        let tmp = self.widen_mul_hw(ratio[0]); // tmp1
        let (_, q3) = self.carry_mul(ratio[1], tmp);

        // Step 2.
        let r = self.wrapping_sub(q3.wrapping_mul(modulus.value()));

        modulus.correct(r)
    }
}

impl Modulo<&Modulus> for [u64; 2] {
    type Output = u64;

    /// Caculates `self (mod modulus)`, where `self` is `[low, high]`.
    ///
    /// The procedure is the same as the one-word reduction, with a two-word
    /// `q1`. Only `q3 mod b` is needed since `r < 2m < b`.
    #[inline]
    fn modulo(self, modulus: &Modulus) -> Self::Output {
        let ratio = modulus.ratio();
        let [lo, hi] = self;

        // Step 1.
        //                        ratio[1]  ratio[0]
        //                   *      hi        lo
        //   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
        //                      +-------------------+
        //                      |         a         |    <-- lo * ratio[0]
        //                      +-------------------+
        //             +------------------+
        //             |        b         |              <-- lo * ratio[1]
        //             +------------------+
        //             +------------------+
        //             |        c         |              <-- hi * ratio[0]
        //             +------------------+
        //   +------------------+
        //   |        d         |                        <-- hi * ratio[1]
        //   +------------------+
        //   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
        //   +------------------+
        //   |        q3        |
        //   +------------------+
        let a_hi = lo.widen_mul_hw(ratio[0]);
        let (b_lo, b_hi) = lo.carry_mul(ratio[1], a_hi);
        let (c_lo, c_hi) = hi.widen_mul(ratio[0]);

        // the middle column may carry once
        let (_, carry) = b_lo.carry_add(c_lo, false);
        let q3 = hi
            .wrapping_mul(ratio[1])
            .wrapping_add(b_hi)
            .wrapping_add(c_hi)
            .wrapping_add(carry as u64);

        // Step 2.
        let r = lo.wrapping_sub(q3.wrapping_mul(modulus.value()));

        modulus.correct(r)
    }
}

impl Modulo<&Modulus> for &[u64] {
    type Output = u64;

    /// Caculates `self (mod modulus)` for a little-endian multi-word value.
    ///
    /// An empty slice is zero.
    fn modulo(self, modulus: &Modulus) -> Self::Output {
        match self {
            [] => 0,
            [other @ .., last] => other
                .iter()
                .rfold(last.modulo(modulus), |acc, &x| [x, acc].modulo(modulus)),
        }
    }
}

impl ModuloAssign<&Modulus> for u64 {
    #[inline]
    fn modulo_assign(&mut self, modulus: &Modulus) {
        *self = (*self).modulo(modulus);
    }
}

impl MulModulo<&Modulus> for u64 {
    type Output = Self;

    /// Calculates `self * rhs mod modulus` with barrett reduction of the full product.
    #[inline]
    fn mul_modulo(self, rhs: Self, modulus: &Modulus) -> Self::Output {
        let (lo, hi) = self.widen_mul(rhs);
        [lo, hi].modulo(modulus)
    }
}

impl MulModuloAssign<&Modulus> for u64 {
    #[inline]
    fn mul_modulo_assign(&mut self, rhs: Self, modulus: &Modulus) {
        *self = self.mul_modulo(rhs, modulus);
    }
}

#[cfg(test)]
mod tests {
    use rand::{prelude::*, thread_rng};

    use super::*;

    #[test]
    fn test_modulus_create() {
        let mut rng = thread_rng();
        for _ in 0..10 {
            let m = rng.gen_range(2..=(u64::MAX >> 1));
            let modulus = Modulus::new(m);
            let ratio = ((modulus.ratio()[1] as u128) << 64) | modulus.ratio()[0] as u128;
            assert_eq!(ratio, u128::MAX / m as u128);
            assert_eq!(modulus.bit_count(), 64 - m.leading_zeros());
        }

        let modulus = Modulus::new(1 << 62);
        assert_eq!(modulus.ratio(), [0, 4]);

        assert_eq!(Modulus::try_new(0), Err(ArithError::InvalidModulus(0)));
        assert_eq!(Modulus::try_new(1), Err(ArithError::InvalidModulus(1)));
        assert_eq!(
            Modulus::try_new(1 << 63),
            Err(ArithError::InvalidModulus(1 << 63))
        );
    }

    #[test]
    #[should_panic]
    fn test_modulus_new_panics() {
        let _ = Modulus::new(1);
    }

    #[test]
    fn test_barret_reduce() {
        let mut rng = thread_rng();
        for _ in 0..10 {
            let m: u64 = rng.gen_range(2..=(u64::MAX >> 1));
            let modulus = Modulus::new(m);
            for _ in 0..10 {
                let v: u64 = rng.gen();
                assert_eq!(v.modulo(&modulus), v % m);

                let mut w = v;
                w.modulo_assign(&modulus);
                assert_eq!(w, v % m);
            }
        }
    }

    #[test]
    fn test_barret_reduce_128() {
        let mut rng = thread_rng();
        for _ in 0..10 {
            let m: u64 = rng.gen_range(2..=(u64::MAX >> 1));
            let modulus = Modulus::new(m);
            for _ in 0..10 {
                let lw64: u64 = rng.gen();
                let hw64: u64 = rng.gen();
                let v: u128 = ((hw64 as u128) << 64) + (lw64 as u128);
                assert_eq!([lw64, hw64].modulo(&modulus), (v % (m as u128)) as u64);
            }
        }

        let m = u64::MAX >> 1;
        let modulus = Modulus::new(m);
        assert_eq!(
            [u64::MAX, u64::MAX].modulo(&modulus),
            (u128::MAX % m as u128) as u64
        );
    }

    #[test]
    fn test_barret_reduce_slice() {
        let mut rng = thread_rng();
        for _ in 0..10 {
            let m: u64 = rng.gen_range(2..=(u64::MAX >> 1));
            let modulus = Modulus::new(m);
            let x: [u64; 3] = [rng.gen(), rng.gen(), rng.gen()];

            // Horner over words, most significant first
            let b = (1u128 << 64) % m as u128;
            let expected = x
                .iter()
                .rev()
                .fold(0u128, |acc, &w| (acc * b + w as u128) % m as u128);
            assert_eq!(x.as_slice().modulo(&modulus), expected as u64);
        }
        assert_eq!(<&[u64]>::default().modulo(&Modulus::new(7)), 0);
    }

    #[test]
    fn test_barret_mul() {
        let mut rng = thread_rng();
        for _ in 0..10 {
            let m: u64 = rng.gen_range(2..=(u64::MAX >> 1));
            let modulus = Modulus::new(m);
            let a = rng.gen_range(0..m);
            let b = rng.gen_range(0..m);
            let expected = ((a as u128 * b as u128) % m as u128) as u64;
            assert_eq!(a.mul_modulo(b, &modulus), expected);

            let mut c = a;
            c.mul_modulo_assign(b, &modulus);
            assert_eq!(c, expected);
        }
    }
}
