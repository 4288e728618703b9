use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::hex_codec;

/// Width of every digest in the system (sha2-256, commitments, merkle nodes).
pub const DIGEST_LEN: usize = 32;

/// Width of a proof generator address.
pub const ADDRESS_LEN: usize = 20;

/// A 32-byte hash output.
///
/// Used for sha2-256 content digests, batch commitments and merkle roots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wrap a pre-computed hash.
    pub const fn from_array(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy a digest out of a slice, failing unless it is exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> TypeResult<Self> {
        <[u8; DIGEST_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| TypeError::InvalidLength {
                expected: DIGEST_LEN,
                actual: bytes.len(),
            })
    }

    /// The all-zero digest.
    pub const fn zero() -> Self {
        Self([0u8; DIGEST_LEN])
    }

    /// The raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_codec::encode(&self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex_codec::encode(&self.0[..4])
    }

    /// Parse from an optionally `0x`-prefixed hex string.
    pub fn from_hex(s: &str) -> TypeResult<Self> {
        hex_codec::decode_array(hex_codec::strip_prefix(s)).map(Self)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(d: Digest) -> Self {
        d.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A 20-byte account address, rendered `0x`-prefixed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub fn from_slice(bytes: &[u8]) -> TypeResult<Self> {
        <[u8; ADDRESS_LEN]>::try_from(bytes)
            .map(Self)
            .map_err(|_| TypeError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            })
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Parse from an optionally `0x`-prefixed hex string.
    pub fn from_hex(s: &str) -> TypeResult<Self> {
        hex_codec::decode_array(hex_codec::strip_prefix(s)).map(Self)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex_codec::encode(&self.0))
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
