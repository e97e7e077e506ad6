//! Fixed-width numeric values.
//!
//! Sinks receive every reading as a [`Numeric64`]: 64 payload bits plus a one-byte tag saying how
//! those bits should be interpreted.  This keeps the sink interface narrow, as a single method can
//! carry signed deltas, unsigned totals, and floating-point samples alike, while still letting the
//! receiving side decode the original value without loss.
use std::fmt;

use thiserror::Error;

/// Errors that can occur when decoding a [`Numeric64`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// The transport tag did not name a known numeric type.
    #[error("unknown numeric type tag: {0}")]
    UnknownType(u8),

    /// The value was decoded as a different type than it was encoded with.
    #[error("numeric type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The type the caller asked for.
        expected: NumericType,
        /// The type the value actually carries.
        actual: NumericType,
    },
}

/// Interpretation of the payload bits of a [`Numeric64`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum NumericType {
    /// Two's complement signed integer.
    Int64 = 0,
    /// Unsigned integer.
    Uint64 = 1,
    /// IEEE-754 double precision float.
    Float64 = 2,
}

impl NumericType {
    /// Gets the transport tag for this type.
    pub const fn tag(self) -> u8 {
        self as u8
    }

    fn as_str(self) -> &'static str {
        match self {
            NumericType::Int64 => "int64",
            NumericType::Uint64 => "uint64",
            NumericType::Float64 => "float64",
        }
    }
}

impl TryFrom<u8> for NumericType {
    type Error = NumericError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(NumericType::Int64),
            1 => Ok(NumericType::Uint64),
            2 => Ok(NumericType::Float64),
            other => Err(NumericError::UnknownType(other)),
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged 64-bit numeric value.
///
/// Construction is pure and allocation-free, and every constructor is total: any `i64`, `u64`, or
/// `f64` can be encoded and recovered bit-for-bit through the matching accessor.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Numeric64 {
    ty: NumericType,
    bits: u64,
}

impl Numeric64 {
    /// Encodes a signed integer.
    pub const fn from_i64(value: i64) -> Self {
        Self { ty: NumericType::Int64, bits: value as u64 }
    }

    /// Encodes an unsigned integer.
    pub const fn from_u64(value: u64) -> Self {
        Self { ty: NumericType::Uint64, bits: value }
    }

    /// Encodes a floating-point value.
    pub fn from_f64(value: f64) -> Self {
        Self { ty: NumericType::Float64, bits: value.to_bits() }
    }

    /// Rebuilds a value from its transport representation.
    pub const fn from_parts(ty: NumericType, bits: u64) -> Self {
        Self { ty, bits }
    }

    /// Gets the type of this value.
    pub const fn ty(&self) -> NumericType {
        self.ty
    }

    /// Gets the raw payload bits.
    pub const fn to_bits(&self) -> u64 {
        self.bits
    }

    /// Gets the value as a signed integer, converting if necessary.
    ///
    /// Unsigned values wrap and floating-point values saturate, following `as` casts.
    pub fn as_i64(&self) -> i64 {
        match self.ty {
            NumericType::Int64 | NumericType::Uint64 => self.bits as i64,
            NumericType::Float64 => f64::from_bits(self.bits) as i64,
        }
    }

    /// Gets the value as an unsigned integer, converting if necessary.
    ///
    /// Signed values wrap and floating-point values saturate, following `as` casts.
    pub fn as_u64(&self) -> u64 {
        match self.ty {
            NumericType::Int64 | NumericType::Uint64 => self.bits,
            NumericType::Float64 => f64::from_bits(self.bits) as u64,
        }
    }

    /// Gets the value as a floating-point number, converting if necessary.
    pub fn as_f64(&self) -> f64 {
        match self.ty {
            NumericType::Int64 => self.bits as i64 as f64,
            NumericType::Uint64 => self.bits as f64,
            NumericType::Float64 => f64::from_bits(self.bits),
        }
    }

    /// Whether or not the encoded value is zero.
    ///
    /// Both positive and negative floating-point zero count as zero.
    pub fn is_zero(&self) -> bool {
        match self.ty {
            NumericType::Int64 | NumericType::Uint64 => self.bits == 0,
            NumericType::Float64 => f64::from_bits(self.bits) == 0.0,
        }
    }

    fn expect_type(&self, expected: NumericType) -> Result<u64, NumericError> {
        if self.ty == expected {
            Ok(self.bits)
        } else {
            Err(NumericError::TypeMismatch { expected, actual: self.ty })
        }
    }
}

impl From<i64> for Numeric64 {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for Numeric64 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<f64> for Numeric64 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl TryFrom<Numeric64> for i64 {
    type Error = NumericError;

    fn try_from(value: Numeric64) -> Result<Self, Self::Error> {
        value.expect_type(NumericType::Int64).map(|bits| bits as i64)
    }
}

impl TryFrom<Numeric64> for u64 {
    type Error = NumericError;

    fn try_from(value: Numeric64) -> Result<Self, Self::Error> {
        value.expect_type(NumericType::Uint64)
    }
}

impl TryFrom<Numeric64> for f64 {
    type Error = NumericError;

    fn try_from(value: Numeric64) -> Result<Self, Self::Error> {
        value.expect_type(NumericType::Float64).map(f64::from_bits)
    }
}

impl fmt::Display for Numeric64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            NumericType::Int64 => write!(f, "{}", self.bits as i64),
            NumericType::Uint64 => write!(f, "{}", self.bits),
            NumericType::Float64 => write!(f, "{}", f64::from_bits(self.bits)),
        }
    }
}

impl fmt::Debug for Numeric64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Numeric64({}: {})", self.ty, self)
    }
}
