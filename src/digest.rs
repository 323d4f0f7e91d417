//! Streaming SHA-256 accumulator and lowercase hex rendering.

use sha2::{Digest as _, Sha256};
use std::fmt;

/// Length in bytes of a SHA-256 digest.
pub(crate) const DIGEST_LEN: usize = 32;
/// Length of the rendered hex digest.
pub(crate) const HEX_DIGEST_LEN: usize = DIGEST_LEN * 2;

/// Byte value to its two lowercase hex characters.
static HEX_TABLE: [[u8; 2]; 256] = build_hex_table();

const fn build_hex_table() -> [[u8; 2]; 256] {
    let digits = b"0123456789abcdef";
    let mut table = [[0u8; 2]; 256];
    let mut value = 0;
    while value < 256 {
        table[value] = [digits[value >> 4], digits[value & 0x0f]];
        value += 1;
    }
    table
}

/// Render one byte as exactly two lowercase hex characters.
pub(crate) fn hex_pair(byte: u8) -> [u8; 2] {
    HEX_TABLE[byte as usize]
}

/// Incremental SHA-256 over chunks of arbitrary size.
///
/// `finalize` takes the accumulator by value, so it cannot be updated or
/// finalized again afterwards.
pub(crate) struct StreamingDigest {
    hasher: Sha256,
    bytes_hashed: u64,
}

impl StreamingDigest {
    pub(crate) fn new() -> Self {
        Self {
            hasher: Sha256::new(),
            bytes_hashed: 0,
        }
    }

    /// Fold `bytes` into the running state. Partial blocks are carried
    /// over to the next call.
    pub(crate) fn add_to_hash(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.hasher.update(bytes);
        self.bytes_hashed += bytes.len() as u64;
    }

    /// Total number of bytes absorbed so far.
    pub(crate) fn bytes_hashed(&self) -> u64 {
        self.bytes_hashed
    }

    /// Pad and finish, returning the binary digest.
    pub(crate) fn finalize_digest(self) -> Digest {
        Digest(self.hasher.finalize().into())
    }

    /// Pad and finish, returning the lowercase hex rendering.
    pub(crate) fn finalize(self) -> HexDigest {
        self.finalize_digest().to_hex()
    }
}

/// 32-byte SHA-256 output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub(crate) fn to_hex(&self) -> HexDigest {
        let mut out = String::with_capacity(HEX_DIGEST_LEN);
        for &byte in &self.0 {
            let [hi, lo] = hex_pair(byte);
            out.push(hi as char);
            out.push(lo as char);
        }
        HexDigest(out)
    }
}

/// Lowercase hex form of a [`Digest`], always 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HexDigest(String);

impl HexDigest {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn one_shot(bytes: &[u8]) -> String {
        hex::encode(Sha256::digest(bytes))
    }

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 + 7) as u8).collect()
    }

    #[test]
    fn empty_input_matches_nist_vector() {
        let digest = StreamingDigest::new().finalize();
        assert_eq!(digest.as_str(), EMPTY_SHA256);
    }

    #[test]
    fn abc_matches_nist_vector() {
        let mut digest = StreamingDigest::new();
        digest.add_to_hash(b"abc");
        assert_eq!(digest.finalize().as_str(), ABC_SHA256);
    }

    #[test]
    fn two_block_nist_vector() {
        let mut digest = StreamingDigest::new();
        digest.add_to_hash(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq");
        assert_eq!(
            digest.finalize().as_str(),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn empty_updates_are_noops() {
        let mut digest = StreamingDigest::new();
        digest.add_to_hash(&[]);
        digest.add_to_hash(b"abc");
        digest.add_to_hash(&[]);
        assert_eq!(digest.bytes_hashed(), 3);
        assert_eq!(digest.finalize().as_str(), ABC_SHA256);
    }

    #[test]
    fn chunking_does_not_change_digest() {
        let data = sample(1000);
        let expected = one_shot(&data);
        for chunk_size in [1, 3, 63, 64, 65, 128, 333, 999, 1000] {
            let mut digest = StreamingDigest::new();
            for chunk in data.chunks(chunk_size) {
                digest.add_to_hash(chunk);
            }
            assert_eq!(digest.bytes_hashed(), 1000);
            assert_eq!(digest.finalize().as_str(), expected, "chunk size {chunk_size}");
        }
    }

    #[test]
    fn irregular_splits_match_single_shot() {
        let data = sample(517);
        let mut digest = StreamingDigest::new();
        let mut rest = data.as_slice();
        for size in [0usize, 7, 57, 64, 1, 120, 200].iter().cycle() {
            if rest.is_empty() {
                break;
            }
            let take = (*size).min(rest.len());
            let (head, tail) = rest.split_at(take);
            digest.add_to_hash(head);
            rest = tail;
        }
        assert_eq!(digest.finalize().as_str(), one_shot(&data));
    }

    #[test]
    fn hex_table_covers_every_byte() {
        for byte in 0..=255u8 {
            let pair = hex_pair(byte);
            let rendered = std::str::from_utf8(&pair).expect("ascii pair");
            assert_eq!(rendered, hex::encode([byte]));
            assert_eq!(rendered, rendered.to_ascii_lowercase());
        }
        assert_eq!(&hex_pair(0x0a), b"0a");
        assert_eq!(&hex_pair(0xff), b"ff");
    }

    #[test]
    fn hex_digest_renders_binary_digest() {
        let mut digest = StreamingDigest::new();
        digest.add_to_hash(b"abc");
        let binary = digest.finalize_digest();
        let hex_digest = binary.to_hex();
        assert_eq!(hex_digest.as_str().len(), HEX_DIGEST_LEN);
        assert_eq!(hex_digest.as_str(), hex::encode(binary.0));
        assert_eq!(hex_digest.to_string(), ABC_SHA256);
    }
}
