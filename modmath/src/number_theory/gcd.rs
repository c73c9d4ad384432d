/// Greatest common divisor and modular cofactors.
pub trait Xgcd: Sized {
    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`. The
    /// result is always non-negative, and `gcd(0, 0) = 0`.
    fn gcd(self, other: Self) -> Self;

    /// Check whether two numbers are coprime.
    fn coprime(self, other: Self) -> bool;

    /// Check whether two numbers are not coprime.
    fn not_coprime(self, other: Self) -> bool;

    /// Returns the greatest common divisor `g` of `x` and `y` and computes
    /// `a` such that `0 ≤ a < y` and `a x = gcd(x, y) mod y`.
    ///
    /// `x` is reduced modulo `y` first.
    ///
    /// When `y = 1` the greatest common divisor is set to `1` and `a` is
    /// set to `0`.
    fn gcdinv(x: Self, y: Self) -> (Self, Self);
}

impl Xgcd for u64 {
    #[inline]
    fn gcd(self, other: Self) -> Self {
        // Use Stein's algorithm
        let mut m = self;
        let mut n = other;
        if m == 0 || n == 0 {
            return m | n;
        }

        // find common factors of 2
        let shift = (m | n).trailing_zeros();

        // divide n and m by 2 until odd
        m >>= m.trailing_zeros();
        n >>= n.trailing_zeros();

        while m != n {
            if m > n {
                m -= n;
                m >>= m.trailing_zeros();
            } else {
                n -= m;
                n >>= n.trailing_zeros();
            }
        }
        m << shift
    }

    #[inline(always)]
    fn coprime(self, other: Self) -> bool {
        self.gcd(other) == 1
    }

    #[inline(always)]
    fn not_coprime(self, other: Self) -> bool {
        self.gcd(other) != 1
    }

    fn gcdinv(x: Self, y: Self) -> (Self, Self) {
        if y <= 1 {
            return (1, 0);
        }

        // invariants: r0 ≡ s0 * x, r1 ≡ s1 * x (mod y)
        let (mut r0, mut r1) = (y, x % y);
        let (mut s0, mut s1) = (0i128, 1i128);

        while r1 != 0 {
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (s0, s1) = (s1, s0 - q as i128 * s1);
        }

        (r0, s0.rem_euclid(y as i128) as u64)
    }
}
