//! Canonical DER implementation of the [`Encoding`] trait.

use crate::{Encoding, Error};
use der::{asn1::UintRef, Decode, Encode, Sequence};
use num_bigint::{BigInt, Sign};

/// Wire form of a signature value pair (RFC 3279):
///
/// ```text
/// Dss-Sig-Value ::= SEQUENCE {
///     r INTEGER,
///     s INTEGER
/// }
/// ```
#[derive(Sequence)]
struct RawSignature<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

/// Canonical DER encoding of a signature value pair.
///
/// Each `(r, s)` pair maps to exactly one byte string and vice versa:
/// [`Encoding::decode`] re-encodes whatever it parses and rejects the input
/// unless the bytes match exactly. `Standard` holds no state, so a single
/// value can be shared across any number of concurrent callers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Standard;

impl Encoding for Standard {
    fn encode(&self, n: Option<&BigInt>, r: &BigInt, s: &BigInt) -> Result<Vec<u8>, Error> {
        check_value(n, r)?;
        check_value(n, s)?;
        let (r, s) = (value_bytes(r), value_bytes(s));
        raw_signature(&r, &s)?
            .to_der()
            .map_err(|_| Error::ValueOutOfRange)
    }

    fn encode_into(
        &self,
        n: Option<&BigInt>,
        r: &BigInt,
        s: &BigInt,
        buf: &mut [u8],
    ) -> Result<usize, Error> {
        check_value(n, r)?;
        check_value(n, s)?;
        let (r, s) = (value_bytes(r), value_bytes(s));
        let raw = raw_signature(&r, &s)?;
        let len = u32::from(raw.encoded_len().map_err(|_| Error::ValueOutOfRange)?) as usize;
        if buf.len() < len {
            return Err(Error::BufferTooSmall);
        }
        raw.encode_to_slice(&mut buf[..len])
            .map_err(|_| Error::BufferTooSmall)?;
        Ok(len)
    }

    fn decode(&self, n: Option<&BigInt>, encoding: &[u8]) -> Result<(BigInt, BigInt), Error> {
        let raw = RawSignature::from_der(encoding).map_err(|_| Error::MalformedSignature)?;
        let r = BigInt::from_bytes_be(Sign::Plus, raw.r.as_bytes());
        let s = BigInt::from_bytes_be(Sign::Plus, raw.s.as_bytes());
        check_value(n, &r).map_err(|_| Error::MalformedSignature)?;
        check_value(n, &s).map_err(|_| Error::MalformedSignature)?;

        // Structural parsing alone cannot reject every malleable variant the
        // grammar admits. Re-encoding the extracted values and requiring
        // byte equality ties each accepted byte string to exactly one
        // (r, s) pair, independent of how permissive the parser is.
        let expected = self
            .encode(n, &r, &s)
            .map_err(|_| Error::MalformedSignature)?;
        if expected != encoding {
            return Err(Error::MalformedSignature);
        }
        Ok((r, s))
    }

    fn max_encoded_size(&self, n: &BigInt) -> usize {
        // The minimal signed representation of any value below n takes at
        // most one byte more than the whole bytes of n's magnitude (the
        // forced sign byte).
        let value_len = n.bits() as usize / 8 + 1;
        let integer_len = 1 + length_of_length(value_len) + value_len;
        let contents_len = 2 * integer_len;
        1 + length_of_length(contents_len) + contents_len
    }
}

/// Range guard applied identically to r and s: non-negative, and below the
/// group order when one is supplied.
fn check_value(n: Option<&BigInt>, x: &BigInt) -> Result<(), Error> {
    if x.sign() == Sign::Minus || n.is_some_and(|n| x >= n) {
        return Err(Error::ValueOutOfRange);
    }
    Ok(())
}

/// Minimal big-endian magnitude of a non-negative value (zero is a single
/// `0x00` byte).
fn value_bytes(x: &BigInt) -> Vec<u8> {
    x.magnitude().to_bytes_be()
}

// `UintRef` construction only fails when a value's byte length overflows the
// grammar's length type, i.e. the value itself is unencodable.
fn raw_signature<'a>(r: &'a [u8], s: &'a [u8]) -> Result<RawSignature<'a>, Error> {
    Ok(RawSignature {
        r: UintRef::new(r).map_err(|_| Error::ValueOutOfRange)?,
        s: UintRef::new(s).map_err(|_| Error::ValueOutOfRange)?,
    })
}

/// Size of a DER definite length field: one byte below 0x80 (short form),
/// otherwise a prefix byte plus the minimal big-endian bytes of the length.
fn length_of_length(len: usize) -> usize {
    if len < 0x80 {
        1
    } else {
        1 + ((usize::BITS - len.leading_zeros() + 7) / 8) as usize
    }
}
