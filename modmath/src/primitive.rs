/// Double-word helpers for unsigned words.
///
/// The `(low, high)` pairs returned here are the two halves of a
/// logical double-word value.
pub trait Widening: Sized {
    /// A wider type holding the full double-word value.
    type WideT;

    /// Calculates `self + rhs + carry` without the ability to overflow.
    ///
    /// Returns the wrapped sum and the carry out, in that order.
    ///
    /// ```
    /// use modmath::Widening;
    ///
    /// assert_eq!(5u64.carry_add(2, true), (8, false));
    /// assert_eq!(u64::MAX.carry_add(1, false), (0, true));
    /// assert_eq!(u64::MAX.carry_add(u64::MAX, true), (u64::MAX, true));
    /// ```
    #[must_use = "this returns the result of the operation, \
                  without modifying the original"]
    fn carry_add(self, rhs: Self, carry: bool) -> (Self, bool);

    /// Calculates `self - rhs - borrow` without the ability to overflow.
    ///
    /// Returns the wrapped difference and the borrow out, in that order.
    ///
    /// ```
    /// use modmath::Widening;
    ///
    /// assert_eq!(5u64.borrow_sub(2, true), (2, false));
    /// assert_eq!(0u64.borrow_sub(1, false), (u64::MAX, true));
    /// ```
    #[must_use = "this returns the result of the operation, \
                  without modifying the original"]
    fn borrow_sub(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Calculates the complete product `self * rhs` without the possibility to overflow.
    ///
    /// This returns the low-order (wrapping) bits and the high-order (overflow) bits
    /// of the result as two separate values, in that order.
    ///
    /// ```
    /// use modmath::Widening;
    ///
    /// assert_eq!(5u32.widen_mul(2), (10, 0));
    /// assert_eq!(1_000_000_000u32.widen_mul(10), (1410065408, 2));
    /// ```
    #[must_use = "this returns the result of the operation, \
                  without modifying the original"]
    fn widen_mul(self, rhs: Self) -> (Self, Self);

    /// Calculates the "full multiplication" `self * rhs + carry`
    /// without the possibility to overflow.
    ///
    /// ```
    /// use modmath::Widening;
    ///
    /// assert_eq!(u64::MAX.carry_mul(u64::MAX, u64::MAX), (0, u64::MAX));
    /// ```
    #[must_use = "this returns the result of the operation, \
                  without modifying the original"]
    fn carry_mul(self, rhs: Self, carry: Self) -> (Self, Self);

    /// Returns only the high-order word of `self * rhs`.
    #[must_use = "this returns the result of the operation, \
                  without modifying the original"]
    fn widen_mul_hw(self, rhs: Self) -> Self;
}

macro_rules! uint_widening_impl {
    ($SelfT:ty, $WideT:ty) => {
        impl Widening for $SelfT {
            type WideT = $WideT;

            #[inline]
            fn carry_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                let (a, b) = self.overflowing_add(rhs);
                let (c, d) = a.overflowing_add(carry as Self);
                (c, b || d)
            }

            #[inline]
            fn borrow_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                let (a, b) = self.overflowing_sub(rhs);
                let (c, d) = a.overflowing_sub(borrow as Self);
                (c, b || d)
            }

            #[inline]
            fn widen_mul(self, rhs: Self) -> (Self, Self) {
                let wide = (self as Self::WideT) * (rhs as Self::WideT);
                (wide as Self, (wide >> Self::BITS) as Self)
            }

            #[inline]
            fn carry_mul(self, rhs: Self, carry: Self) -> (Self, Self) {
                let wide = (self as Self::WideT) * (rhs as Self::WideT) + (carry as Self::WideT);
                (wide as Self, (wide >> Self::BITS) as Self)
            }

            #[inline]
            fn widen_mul_hw(self, rhs: Self) -> Self {
                (((self as Self::WideT) * (rhs as Self::WideT)) >> Self::BITS) as Self
            }
        }
    };
}

uint_widening_impl! { u32, u64 }
uint_widening_impl! { u64, u128 }
