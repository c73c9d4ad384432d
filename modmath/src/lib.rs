#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]
//! Number-theoretic arithmetic over 64-bit words for lattice cryptography.
//!
//! The crate offers overflow-safe modular multiplication (plain, Barrett
//! precomputed and lazy), exponentiation and inversion, together with
//! primality testing, primitive roots of unity and NTT-friendly prime
//! generation.
//!
//! Preconditions of the hot-path operations are validated only when
//! [`constants::CHECKED`] is set, i.e. in debug builds or with the
//! `checked` feature.
//!
//! ```
//! use modmath::modulo::{MulModulo, MulModuloFactor};
//! use modmath::number_theory::{generate_primes, minimal_primitive_root};
//!
//! let q = generate_primes(1, 50, 1024)?[0];
//! let root = minimal_primitive_root(2048, q)?;
//!
//! let factor = <MulModuloFactor>::new(root, q);
//! assert_eq!(7u64.mul_modulo(factor, q), 7u64.mul_modulo(root, q));
//! # Ok::<(), modmath::ArithError>(())
//! ```

#[macro_use]
mod macros;

pub mod bits;
pub mod constants;
pub mod error;
pub mod modulo;
pub mod number_theory;
pub mod wide;

mod primitive;

pub use bits::{
    get_bit, is_power_of_four, is_power_of_two, log2, maximum_value, msb, reverse_bits, set_bit,
};
pub use error::ArithError;
pub use modulo::{
    mul_modulo_lazy, reduce_mod, AddModulo, AddModuloAssign, InvModulo, LazyMulModulo, Modulo,
    ModuloAssign, Modulus, MulModulo, MulModuloAssign, MulModuloFactor, NegModulo,
    NegModuloAssign, PowModulo, SubModulo, SubModuloAssign, TryInvModulo,
};
pub use number_theory::{
    generate_primes, is_prime, is_primitive_root, minimal_primitive_root, primitive_root,
    PrimeGenerator, PrimeIter, SearchOrder, Xgcd,
};
pub use primitive::Widening;
pub use wide::{add_u64, divide_u128_u64, divide_u128_u64_lo, multiply_u64_hi, sub_u64};
