//! Number-theoretic helpers: gcd and inverse cofactors, primality,
//! primitive roots of unity and NTT-friendly prime generation.

mod gcd;
mod generator;
mod prime;
mod root;

pub use gcd::Xgcd;
pub use generator::{generate_primes, PrimeGenerator, PrimeIter, SearchOrder};
pub use prime::is_prime;
pub use root::{is_primitive_root, minimal_primitive_root, primitive_root};
