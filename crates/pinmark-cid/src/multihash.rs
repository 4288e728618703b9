use pinmark_types::{Digest, DIGEST_LEN};

use crate::error::{CidError, CidResult};

/// Multihash function code for sha2-256.
pub const SHA2_256: u8 = 0x12;

/// A self-describing digest: `[code, size, ...digest]`.
///
/// Code and size are both below 128, so their varint encodings are single
/// bytes and the layout is fixed at `2 + size` bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Multihash {
    code: u8,
    size: u8,
    digest: Digest,
}

impl Multihash {
    /// Wrap a raw digest with its hash function code.
    ///
    /// Only sha2-256 is supported, and its digest must be exactly 32 bytes.
    pub fn build(code: u8, digest: &[u8]) -> CidResult<Self> {
        let expected = expected_size(code)?;
        let digest = Digest::from_slice(digest).map_err(|_| CidError::InvalidDigestLength {
            expected,
            actual: digest.len(),
        })?;
        Ok(Self {
            code,
            size: expected as u8,
            digest,
        })
    }

    /// Shorthand for a sha2-256 multihash.
    pub fn sha2_256(digest: Digest) -> Self {
        Self {
            code: SHA2_256,
            size: DIGEST_LEN as u8,
            digest,
        }
    }

    /// Parse the `[code, size, ...digest]` layout back into a multihash.
    pub fn from_bytes(bytes: &[u8]) -> CidResult<Self> {
        let [code, size, digest @ ..] = bytes else {
            return Err(CidError::InvalidCid(format!(
                "multihash too short: {} bytes",
                bytes.len()
            )));
        };
        if *size as usize != digest.len() {
            return Err(CidError::InvalidDigestLength {
                expected: *size as usize,
                actual: digest.len(),
            });
        }
        Self::build(*code, digest)
    }

    /// Hash function code (`0x12` for sha2-256).
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Digest length in bytes.
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Total encoded length in bytes.
    pub fn encoded_len(&self) -> usize {
        2 + self.size as usize
    }

    /// Binary layout `[code, size, ...digest]`, `2 + size` bytes long.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.push(self.code);
        buf.push(self.size);
        buf.extend_from_slice(self.digest.as_bytes());
        buf
    }
}

fn expected_size(code: u8) -> CidResult<usize> {
    match code {
        SHA2_256 => Ok(DIGEST_LEN),
        other => Err(CidError::UnsupportedCode(other)),
    }
}
