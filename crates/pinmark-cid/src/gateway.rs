use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cid::Cid;
use crate::error::CidResult;

/// Where content identifiers are resolved over HTTP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the gateway, e.g. `https://ipfs.io`.
    pub base_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ipfs.io".into(),
        }
    }
}

impl GatewayConfig {
    /// Use the given gateway base URL. It is stored as given; normalization
    /// happens in [`CidBuilder::new`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Renders gateway URLs for content identifiers.
///
/// The gateway base is fixed at construction; a single trailing `/` is
/// dropped so URLs never contain `//ipfs/`.
#[derive(Clone, Debug)]
pub struct CidBuilder {
    base: String,
}

impl CidBuilder {
    /// Fix the gateway base for every URL this builder renders.
    pub fn new(config: GatewayConfig) -> Self {
        let mut base = config.base_url;
        if base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// The normalized gateway base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// `<base>/ipfs/<cid text>`.
    pub fn gateway_url(&self, cid: &Cid) -> String {
        format!("{}/ipfs/{}", self.base, cid.to_text())
    }

    /// Resolve a batcher-supplied `{2-byte header}{digest}` hex hash to its
    /// gateway URL.
    pub fn url_from_hash(&self, hash: &str) -> CidResult<String> {
        let cid = Cid::from_hash(hash)?;
        let url = self.gateway_url(&cid);
        debug!(%cid, "resolved gateway url");
        Ok(url)
    }

    /// Resolve a bare 32-byte sha2-256 digest in hex, as stored in a
    /// listing's thumbnail hash, to its gateway URL.
    pub fn url_from_digest(&self, digest: &str) -> CidResult<String> {
        let cid = Cid::from_digest_hex(digest)?;
        let url = self.gateway_url(&cid);
        debug!(%cid, "resolved gateway url from digest");
        Ok(url)
    }
}

impl Default for CidBuilder {
    fn default() -> Self {
        Self::new(GatewayConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CidError;

    const HELLO_HASH: &str =
        "0x1220b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[test]
    fn default_gateway() {
        let c = GatewayConfig::default();
        assert_eq!(c.base_url, "https://ipfs.io");
    }

    #[test]
    fn url_has_ipfs_path() {
        let builder = CidBuilder::new(GatewayConfig::new("https://gateway.example"));
        let cid = Cid::for_content(b"hello world");
        assert_eq!(
            builder.gateway_url(&cid),
            "https://gateway.example/ipfs/QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let builder = CidBuilder::new(GatewayConfig::new("https://gateway.example/"));
        assert_eq!(builder.base(), "https://gateway.example");
    }

    #[test]
    fn url_from_hash() {
        let url = CidBuilder::default().url_from_hash(HELLO_HASH).unwrap();
        assert_eq!(
            url,
            "https://ipfs.io/ipfs/QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4"
        );
    }

    #[test]
    fn url_from_digest_matches_url_from_hash() {
        let builder = CidBuilder::default();
        let digest = Cid::for_content(b"hello world").multihash().digest().to_hex();
        assert_eq!(
            builder.url_from_digest(&format!("0x{digest}")).unwrap(),
            builder.url_from_hash(HELLO_HASH).unwrap()
        );
    }

    #[test]
    fn url_from_hash_propagates_errors() {
        let err = CidBuilder::default().url_from_hash("0x1220").unwrap_err();
        assert_eq!(err, CidError::InvalidDigestLength { expected: 34, actual: 2 });
    }

    #[test]
    fn config_serde_roundtrip() {
        let c = GatewayConfig::new("https://a.example");
        let json = serde_json::to_string(&c).unwrap();
        let parsed: GatewayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, parsed);
    }
}
