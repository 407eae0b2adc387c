//! Error types for signature encoding operations

use thiserror::Error;

/// Error type for signature encoding operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A signature value is negative, or not less than the group order.
    ///
    /// Only raised while encoding; it signals a caller bug, not a hostile
    /// input.
    #[error("signature value out of range")]
    ValueOutOfRange,
    /// The destination buffer cannot hold the encoding.
    #[error("destination buffer too small")]
    BufferTooSmall,
    /// The bytes are not the canonical encoding of any signature value pair.
    ///
    /// Carries no detail about which check failed, so a rejected forgery
    /// reveals nothing about how to construct an accepted one.
    #[error("malformed signature")]
    MalformedSignature,
}
