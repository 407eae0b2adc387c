//! Canonically encode and decode discrete-log signature value pairs.
//!
//! # Overview
//!
//! Discrete-log signature schemes (DSA, ECDSA, and their algebraic variants)
//! represent a signature as two integers `(r, s)` bounded by a group order
//! `n`. The interoperable wire form is the ASN.1 DER
//! `SEQUENCE { r INTEGER, s INTEGER }`. DER's grammar is flexible enough that
//! a permissive parser will accept padded integers, long-form lengths of
//! small values, indefinite-length containers, or trailing garbage, all of
//! which decode to the same `(r, s)`. A verifier that accepts any such
//! variant lets an attacker mint a second valid encoding of an
//! already-verified signature, breaking protocols that rely on signature
//! uniqueness (replay protection keyed by signature hash, idempotency keys).
//!
//! [`Standard`] accepts exactly one byte string per `(r, s)` pair: after
//! parsing, the extracted values are re-encoded and compared byte-for-byte
//! against the input. Anything that is not the unique canonical encoding is
//! rejected as [`Error::MalformedSignature`], with no detail about which
//! check tripped.
//!
//! # Example
//!
//! ```rust
//! use dsa_codec::{Encoding, Standard};
//! use num_bigint::BigInt;
//!
//! let n = BigInt::from(17);
//! let (r, s) = (BigInt::from(5), BigInt::from(9));
//!
//! // Encode the pair
//! let encoding = Standard.encode(Some(&n), &r, &s).unwrap();
//! assert_eq!(encoding, [0x30, 0x06, 0x02, 0x01, 0x05, 0x02, 0x01, 0x09]);
//!
//! // Decode it back
//! let (r2, s2) = Standard.decode(Some(&n), &encoding).unwrap();
//! assert_eq!((r2, s2), (r, s));
//!
//! // Any other byte string for the same pair is rejected
//! let padded = [0x30, 0x07, 0x02, 0x02, 0x00, 0x05, 0x02, 0x01, 0x09];
//! assert!(Standard.decode(Some(&n), &padded).is_err());
//! ```

use num_bigint::BigInt;

mod error;
pub use error::Error;
mod standard;
pub use standard::Standard;

/// A scheme for converting a signature value pair `(r, s)` to and from bytes.
///
/// Implementations are stateless and freely shareable: both directions are
/// pure transformations over their arguments, so a single value can serve
/// arbitrarily many concurrent callers without synchronization.
///
/// The group order `n`, when supplied, bounds valid signature values to
/// `[0, n)`. When absent, only non-negativity is enforced.
pub trait Encoding {
    /// Encodes `(r, s)` as bytes.
    ///
    /// The same `(n, r, s)` always produces the same bytes, and distinct
    /// pairs always produce distinct bytes.
    ///
    /// Returns [`Error::ValueOutOfRange`] if either value is negative, or
    /// is not less than `n` when `n` is supplied.
    fn encode(&self, n: Option<&BigInt>, r: &BigInt, s: &BigInt) -> Result<Vec<u8>, Error>;

    /// Encodes `(r, s)` into a caller-supplied buffer, returning the number
    /// of bytes written.
    ///
    /// Output is byte-identical to [`Encoding::encode`]; this variant exists
    /// to let callers reuse a buffer sized with
    /// [`Encoding::max_encoded_size`]. Returns [`Error::BufferTooSmall`] if
    /// `buf` cannot hold the encoding.
    fn encode_into(
        &self,
        n: Option<&BigInt>,
        r: &BigInt,
        s: &BigInt,
        buf: &mut [u8],
    ) -> Result<usize, Error>;

    /// Decodes `encoding` into `(r, s)`.
    ///
    /// Succeeds only if `encoding` is exactly the byte string
    /// [`Encoding::encode`] produces for the returned pair. Every rejection,
    /// whether structural, out-of-range, or non-canonical, is reported as
    /// [`Error::MalformedSignature`].
    fn decode(&self, n: Option<&BigInt>, encoding: &[u8]) -> Result<(BigInt, BigInt), Error>;

    /// Returns an upper bound on the encoded length of any valid pair
    /// bounded by `n`.
    ///
    /// Never under-estimates; for worst-case values it is exact.
    fn max_encoded_size(&self, n: &BigInt) -> usize;
}
