//! This module implements modular arithmetic over 64-bit words.
//!
//! Three flavours of modular multiplication are offered:
//!
//! - the plain product `x * y mod m`, computed through a 128-bit intermediate;
//! - the Barrett-precomputed product, where the right operand is a
//!   [`MulModuloFactor`] holding `⌊y · 2^SHIFT / m⌋`, which replaces the
//!   division by one multiply-high and at most one correction;
//! - the lazy product, which skips the final correction and leaves the
//!   result in `[0, 2m)`.
//!
//! A [`Modulus`] additionally precomputes `µ = ⌊2^128 / m⌋` so that
//! arbitrary one- or two-word values can be reduced with Barrett reduction:
//!
//! 1. `q ← ⌊x · µ / 2^128⌋`.
//! 2. `r ← (x − q · m) mod 2^64`.
//! 3. If `r ≥ m` do: `r ← r − m`.
//! 4. Return(`r`).

mod factor;
mod lazy;
mod modulus;
mod reduce;
mod traits;

pub use factor::MulModuloFactor;
pub use lazy::mul_modulo_lazy;
pub use modulus::Modulus;
pub use reduce::reduce_mod;
pub use traits::*;
