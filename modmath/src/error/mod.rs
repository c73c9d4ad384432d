//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

use crate::constants::{MODULUS_BIT_COUNT_MAX, MODULUS_BIT_COUNT_MIN};

/// Errors that may occur when it comes to modular operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("Value {value} has no inverse element with the modulus {modulus}!")]
    NoModuloInverse {
        /// The value being inverted.
        value: u64,
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when the given modulus has no primitive root with the given degree.
    #[error("There is no primitive root with the degree {degree} and the modulus {modulus}!")]
    NoPrimitiveRoot {
        /// The degree for the primitive root.
        degree: u64,
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when crate fails to find enough qualifying primes.
    #[error(
        "Failed to find {count} primes of {bit_size} bits for ntt size {ntt_size}, only {found} exist"
    )]
    NoEnoughModulus {
        /// The number of primes requested.
        count: usize,
        /// The number of primes the range holds.
        found: usize,
        /// The requested bit size.
        bit_size: u32,
        /// The requested ntt size.
        ntt_size: u64,
    },
    /// Error that occurs when a value which should be a power of 2 is not.
    #[error("Value {value} is not a power of 2")]
    IsNotPowerOf2 {
        /// The offending value.
        value: u64,
    },
    /// Error that occurs when user ask to generate a modulus with invalid bit count.
    #[error(
        "The bit count {0} of desired modulus is not in ({}..={})",
        MODULUS_BIT_COUNT_MIN,
        MODULUS_BIT_COUNT_MAX
    )]
    BitCountError(u32),
    /// Error that occurs when a modulus value can not be used by the requested operation.
    #[error("Modulus {0} is not valid for this operation")]
    InvalidModulus(u64),
    /// Error that occurs when an operand exceeds the bound of a reduced-precision operation.
    #[error("Operand {value} exceeds the bound {bound}")]
    OperandOutOfRange {
        /// The offending operand.
        value: u64,
        /// The inclusive upper bound.
        bound: u64,
    },
    /// Error that occurs when an operation undefined at zero receives zero.
    #[error("Operation is undefined for the value 0")]
    ZeroValue,
    /// Error that occurs when dividing by zero.
    #[error("Division by zero")]
    DivisionByZero,
}
