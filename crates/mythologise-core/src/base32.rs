//! Crockford Base32 for handle tags.
//!
//! The alphabet omits `I`, `L`, `O` and `U` so tags survive being read
//! aloud or copied by hand. Bits are packed big-endian across byte
//! boundaries; a trailing partial group is zero-padded on the right and
//! always emitted. There is no padding character.
//!
//! **CRITICAL**: tags are part of every published handle. The alphabet and
//! bit order are FROZEN.

/// The 32-symbol alphabet, in value order.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Bits carried by one output symbol.
pub const BITS_PER_CHAR: usize = 5;

/// Output length for `byte_len` input bytes: `ceil(8 * byte_len / 5)`.
pub const fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8).div_ceil(BITS_PER_CHAR)
}

/// Encode bytes as uppercase Crockford Base32 without padding.
pub fn encode(data: &[u8]) -> String {
    let mut result = String::with_capacity(encoded_len(data.len()));
    let mut buffer: u32 = 0;
    let mut bits_in_buffer = 0;

    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_CHAR {
            bits_in_buffer -= BITS_PER_CHAR;
            let index = ((buffer >> bits_in_buffer) & 0x1f) as usize;
            result.push(ALPHABET[index] as char);
        }
        buffer &= (1 << bits_in_buffer) - 1;
    }

    if bits_in_buffer > 0 {
        let index = ((buffer << (BITS_PER_CHAR - bits_in_buffer)) & 0x1f) as usize;
        result.push(ALPHABET[index] as char);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_excludes_ambiguous_letters() {
        for c in [b'I', b'L', b'O', b'U'] {
            assert!(!ALPHABET.contains(&c));
        }
        let mut sorted = ALPHABET.to_vec();
        sorted.dedup();
        assert_eq!(sorted.len(), 32);
    }

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(b""), "");
        assert_eq!(encode(&[0x00]), "00");
        assert_eq!(encode(&[0xff]), "ZW");
        assert_eq!(encode(&[0xff, 0xff]), "ZZZG");
        // 'f' = 0b01100110 -> 01100 110(00)
        assert_eq!(encode(b"f"), "CR");
        assert_eq!(encode(b"foobar"), "CSQPYRK1E8");
    }

    #[test]
    fn test_encoded_len() {
        for len in 0..40 {
            let data = vec![0xa5u8; len];
            assert_eq!(encode(&data).len(), encoded_len(len), "len {len}");
        }
        assert_eq!(encoded_len(30), 48);
    }

    #[test]
    fn test_partial_group_is_emitted() {
        // 2 bytes = 16 bits = 3 full groups + 1 bit
        assert_eq!(encode(&[0x00, 0x01]).len(), 4);
        assert_eq!(encode(&[0x00, 0x01]), "000G");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn encoded_output_uses_alphabet(data in proptest::collection::vec(any::<u8>(), 0..64)) {
                let encoded = encode(&data);
                prop_assert_eq!(encoded.len(), encoded_len(data.len()));
                prop_assert!(encoded.bytes().all(|c| ALPHABET.contains(&c)));
            }

            #[test]
            fn prefix_is_stable(data in proptest::collection::vec(any::<u8>(), 5..40)) {
                // every 5 bytes end on a symbol boundary
                let short = encode(&data[..5]);
                prop_assert!(encode(&data).starts_with(&short));
            }
        }
    }
}
