//! Deterministic byte expander for avatar rendering.
//!
//! A string mixing hash (cyrb128) seeds a small-fast-counter generator
//! (sfc32), which fills a 32-byte buffer. Neither step is cryptographic and
//! neither ever sees a secret: the seed is the public tag.
//!
//! The hash runs over UTF-16 code units so that non-ASCII tags expand the
//! same way they always have.

use std::fmt;

/// Bytes produced per tag.
pub const EXPANDED_BYTES: usize = 32;

/// Total addressable bits in an [`ExpandedBytes`] buffer.
pub const EXPANDED_BITS: usize = EXPANDED_BYTES * 8;

const SEED: [u32; 4] = [1779033703, 3144134277, 1013904242, 2773480762];
const MIX: [u32; 4] = [597399067, 2869860233, 951274213, 2716044179];

/// Hash a string into four 32-bit words.
pub fn cyrb128(value: &str) -> [u32; 4] {
    let [mut h1, mut h2, mut h3, mut h4] = SEED;

    for unit in value.encode_utf16() {
        let k = u32::from(unit);
        h1 = h2 ^ (h1 ^ k).wrapping_mul(MIX[0]);
        h2 = h3 ^ (h2 ^ k).wrapping_mul(MIX[1]);
        h3 = h4 ^ (h3 ^ k).wrapping_mul(MIX[2]);
        h4 = h1 ^ (h4 ^ k).wrapping_mul(MIX[3]);
    }

    h1 = (h3 ^ (h1 >> 18)).wrapping_mul(MIX[0]);
    h2 = (h4 ^ (h2 >> 22)).wrapping_mul(MIX[1]);
    h3 = (h1 ^ (h3 >> 17)).wrapping_mul(MIX[2]);
    h4 = (h2 ^ (h4 >> 19)).wrapping_mul(MIX[3]);

    [h1 ^ h2 ^ h3 ^ h4, h2 ^ h1, h3 ^ h1, h4 ^ h1]
}

/// Small fast counter generator with 128 bits of state.
#[derive(Debug, Clone)]
pub struct Sfc32 {
    a: u32,
    b: u32,
    c: u32,
    d: u32,
}

impl Sfc32 {
    /// Seed from four words, e.g. a [`cyrb128`] output.
    pub fn new([a, b, c, d]: [u32; 4]) -> Self {
        Self { a, b, c, d }
    }

    /// Advance and return the next output.
    pub fn next_u32(&mut self) -> u32 {
        let t = self.a.wrapping_add(self.b).wrapping_add(self.d);
        self.d = self.d.wrapping_add(1);
        self.a = self.b ^ (self.b >> 9);
        self.b = self.c.wrapping_add(self.c << 3);
        self.c = self.c.rotate_left(21).wrapping_add(t);
        t
    }

    /// The top eight bits of the next output.
    pub fn next_byte(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }
}

/// The 32-byte buffer every avatar decision is read from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpandedBytes([u8; EXPANDED_BYTES]);

impl ExpandedBytes {
    /// Expand an already-normalized tag.
    pub fn from_tag(tag: &str) -> Self {
        let mut rng = Sfc32::new(cyrb128(tag));
        let mut out = [0u8; EXPANDED_BYTES];
        for byte in out.iter_mut() {
            *byte = rng.next_byte();
        }
        Self(out)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; EXPANDED_BYTES]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; EXPANDED_BYTES] {
        &self.0
    }

    /// Byte `index`, wrapping past the end.
    pub fn byte(&self, index: usize) -> u8 {
        self.0[index % EXPANDED_BYTES]
    }

    /// Bit `index` (wrapping), least significant bit of each byte first.
    pub fn bit(&self, index: usize) -> bool {
        let index = index % EXPANDED_BITS;
        (self.0[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Convert to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for ExpandedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExpandedBytes({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_tags() {
        assert_eq!(
            ExpandedBytes::from_tag("6JN3V2CD6XQQ").to_hex(),
            "6e28956a703dfd98d6092407779c3bedbc70347d78e645784f52974c734712ad"
        );
        assert_eq!(
            ExpandedBytes::from_tag("QACN46ZB97S1").to_hex(),
            "11fb85e01ab4f4e1f9fbcf2648b0dd8e032852c753ed0296722a6874ddb1995a"
        );
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        assert_ne!(cyrb128("AB"), cyrb128("BA"));
        assert_ne!(cyrb128(""), cyrb128("A"));
    }

    #[test]
    fn test_bit_order_lsb_first() {
        let mut raw = [0u8; EXPANDED_BYTES];
        raw[0] = 0b0000_0010;
        raw[31] = 0b1000_0000;
        let bytes = ExpandedBytes::from_bytes(raw);

        assert!(!bytes.bit(0));
        assert!(bytes.bit(1));
        assert!(bytes.bit(255));
        // wraps around the buffer
        assert!(bytes.bit(257));
        assert_eq!(bytes.byte(32), bytes.byte(0));
    }

    #[test]
    fn test_sfc32_is_deterministic() {
        let mut a = Sfc32::new([1, 2, 3, 4]);
        let mut b = Sfc32::new([1, 2, 3, 4]);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
