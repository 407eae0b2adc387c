//! Randomized round-trip coverage across group orders of many sizes.

use dsa_codec::{Encoding, Error, Standard};
use num_bigint::{BigInt, Sign};
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// Draws a non-negative value of up to `max_bytes` big-endian bytes.
fn random_value(rng: &mut StdRng, max_bytes: usize) -> BigInt {
    let len = rng.next_u64() as usize % (max_bytes + 1);
    let mut bytes = vec![0u8; len];
    rng.fill_bytes(&mut bytes);
    BigInt::from_bytes_be(Sign::Plus, &bytes)
}

#[test]
fn round_trip_bounded() {
    let mut rng = StdRng::seed_from_u64(0);
    for order_bytes in [1usize, 2, 3, 20, 28, 32, 48, 66] {
        // A random order of the given width, forced above 1 so the
        // values drawn below have room.
        let mut bytes = vec![0u8; order_bytes];
        rng.fill_bytes(&mut bytes);
        bytes[0] |= 0x80;
        let n = BigInt::from_bytes_be(Sign::Plus, &bytes);

        let max = Standard.max_encoded_size(&n);
        for _ in 0..50 {
            let r = random_value(&mut rng, order_bytes + 8) % &n;
            let s = random_value(&mut rng, order_bytes + 8) % &n;

            let encoding = Standard.encode(Some(&n), &r, &s).unwrap();
            assert!(encoding.len() <= max);
            assert_eq!(Standard.decode(Some(&n), &encoding).unwrap(), (r, s));
        }

        // Boundary values of this order.
        let one_below = &n - BigInt::from(1);
        let encoding = Standard.encode(Some(&n), &one_below, &one_below).unwrap();
        assert!(encoding.len() <= max);
        assert_eq!(
            Standard.decode(Some(&n), &encoding).unwrap(),
            (one_below.clone(), one_below)
        );
        assert_eq!(
            Standard
                .encode(Some(&n), &n, &BigInt::from(0))
                .unwrap_err(),
            Error::ValueOutOfRange
        );
    }
}

#[test]
fn round_trip_unbounded() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let r = random_value(&mut rng, 64);
        let s = random_value(&mut rng, 64);

        let encoding = Standard.encode(None, &r, &s).unwrap();
        assert_eq!(
            Standard.decode(None, &encoding).unwrap(),
            (r.clone(), s.clone())
        );

        let mut buf = vec![0u8; encoding.len()];
        let written = Standard.encode_into(None, &r, &s, &mut buf).unwrap();
        assert_eq!(written, encoding.len());
        assert_eq!(buf, encoding);
    }
}
