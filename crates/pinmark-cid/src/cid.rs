use std::fmt;
use std::str::FromStr;

use pinmark_types::{hex_codec, DIGEST_LEN};
use tracing::debug;

use crate::error::{CidError, CidResult};
use crate::hasher::ContentHasher;
use crate::multihash::{Multihash, SHA2_256};

/// Multicodec for dag-pb, the codec every v0 identifier implies.
const DAG_PB: u8 = 0x70;

/// Multibase prefix for base58btc text.
const BASE58BTC_PREFIX: char = 'z';

/// Length of the header the batcher prepends to a digest in hex form.
const HASH_HEADER_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Version {
    V0,
    V1,
}

/// A content identifier.
///
/// The binary form of a v0 identifier is exactly its multihash bytes. A v1
/// identifier prefixes the version and the dag-pb codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cid {
    version: Version,
    multihash: Multihash,
}

impl Cid {
    /// Wrap a multihash as a v0 identifier. No version or codec prefix is
    /// added; the binary form is the multihash itself.
    pub fn from_multihash_v0(multihash: Multihash) -> Self {
        Self {
            version: Version::V0,
            multihash,
        }
    }

    /// The v0 identifier of raw content, hashed with sha2-256.
    pub fn for_content(data: &[u8]) -> Self {
        Self::from_multihash_v0(Multihash::sha2_256(ContentHasher::sha256(data)))
    }

    /// Build a v0 identifier from a batcher-supplied hex hash.
    ///
    /// The hash may carry a `0x` prefix. Once decoded it must be
    /// `{2-byte header}{digest}`: the header is taken as given and not
    /// re-validated, and the trailing `expected_digest_len` bytes become the
    /// digest of a multihash with function `code`.
    pub fn parse_from_hash(hash: &str, expected_digest_len: usize, code: u8) -> CidResult<Self> {
        let bytes = hex_codec::decode_prefixed(hash)?;
        let expected = HASH_HEADER_LEN + expected_digest_len;
        if bytes.len() != expected {
            return Err(CidError::InvalidDigestLength {
                expected,
                actual: bytes.len(),
            });
        }
        let digest = &bytes[HASH_HEADER_LEN..];
        let multihash = Multihash::build(code, digest)?;
        debug!(
            header = %hex_codec::encode(&bytes[..HASH_HEADER_LEN]),
            digest = %multihash.digest().short_hex(),
            "parsed content hash"
        );
        Ok(Self::from_multihash_v0(multihash))
    }

    /// [`Cid::parse_from_hash`] with a 32-byte sha2-256 digest.
    pub fn from_hash(hash: &str) -> CidResult<Self> {
        Self::parse_from_hash(hash, DIGEST_LEN, SHA2_256)
    }

    /// Build a v0 identifier from a bare sha2-256 digest in hex.
    ///
    /// This is the form listings store on chain: the 32 digest bytes of the
    /// image's identifier, with no multihash header. A `0x` prefix is
    /// accepted.
    pub fn from_digest_hex(hash: &str) -> CidResult<Self> {
        let bytes = hex_codec::decode_prefixed(hash)?;
        let multihash = Multihash::build(SHA2_256, &bytes)?;
        Ok(Self::from_multihash_v0(multihash))
    }

    /// Parse the binary form of a v0 or v1 identifier.
    pub fn from_bytes(bytes: &[u8]) -> CidResult<Self> {
        match bytes {
            [SHA2_256, ..] => Ok(Self::from_multihash_v0(Multihash::from_bytes(bytes)?)),
            [1, DAG_PB, rest @ ..] => Ok(Self {
                version: Version::V1,
                multihash: Multihash::from_bytes(rest)?,
            }),
            [1, codec, ..] => Err(CidError::InvalidCid(format!(
                "unsupported codec {codec:#04x}"
            ))),
            _ => Err(CidError::InvalidCid("unrecognized version".into())),
        }
    }

    /// Parse the text form: bare base58btc for v0, `z`-prefixed for v1.
    pub fn from_text(text: &str) -> CidResult<Self> {
        if text.len() == 46 && text.starts_with("Qm") {
            let bytes = decode_base58(text)?;
            return Ok(Self::from_multihash_v0(Multihash::from_bytes(&bytes)?));
        }
        match text.strip_prefix(BASE58BTC_PREFIX) {
            Some(body) => {
                let cid = Self::from_bytes(&decode_base58(body)?)?;
                if cid.version != Version::V1 {
                    return Err(CidError::InvalidCid("multibase v0 identifier".into()));
                }
                Ok(cid)
            }
            None => Err(CidError::InvalidCid(format!("unsupported text form: {text}"))),
        }
    }

    /// Identifier version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// The wrapped multihash.
    pub fn multihash(&self) -> &Multihash {
        &self.multihash
    }

    /// The same content addressed as a v1 identifier.
    pub fn to_v1(&self) -> Self {
        Self {
            version: Version::V1,
            multihash: self.multihash,
        }
    }

    /// Binary form: the multihash for v0, `[0x01, 0x70, ...multihash]` for v1.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.version {
            Version::V0 => self.multihash.to_bytes(),
            Version::V1 => {
                let mut buf = Vec::with_capacity(2 + self.multihash.encoded_len());
                buf.push(1);
                buf.push(DAG_PB);
                buf.extend_from_slice(&self.multihash.to_bytes());
                buf
            }
        }
    }

    /// Text form: base58btc of the binary form, `z`-prefixed for v1.
    ///
    /// A sha2-256 v0 identifier always renders as 46 characters starting
    /// with `Qm`.
    pub fn to_text(&self) -> String {
        let encoded = bs58::encode(self.to_bytes()).into_string();
        match self.version {
            Version::V0 => encoded,
            Version::V1 => format!("{BASE58BTC_PREFIX}{encoded}"),
        }
    }
}

fn decode_base58(text: &str) -> CidResult<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| CidError::InvalidCid(e.to_string()))
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Cid {
    type Err = CidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}
