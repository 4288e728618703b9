use pinmark_cid::{Cid, CidBuilder};
use pinmark_proof::{VerificationBundle, VerificationDataDecoder, VerifierCallArgs};
use pinmark_types::hex_codec;
use pinmark_units::{from_fixed_point, to_fixed_point, U256};
use tracing::debug;

use crate::config::PinmarkConfig;
use crate::error::SdkResult;

/// Gateway URLs for one listed asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetUris {
    pub thumbnail_uri: String,
    pub manifest_uri: String,
}

/// High-level Pinmark API.
///
/// Every method is a synchronous transformation of its inputs; a `Pinmark`
/// can be shared freely between callers.
#[derive(Clone, Debug)]
pub struct Pinmark {
    cids: CidBuilder,
    decoder: VerificationDataDecoder,
    price_decimals: u32,
}

impl Pinmark {
    /// Build a client from explicit settings. Out-of-range `price_decimals`
    /// is reported by the price methods.
    pub fn new(config: PinmarkConfig) -> Self {
        let decoder = if config.strict_proofs {
            VerificationDataDecoder::strict()
        } else {
            VerificationDataDecoder::lenient()
        };
        Self {
            cids: CidBuilder::new(config.gateway),
            decoder,
            price_decimals: config.price_decimals,
        }
    }

    // ---- Content addressing ----

    /// Gateway URL for a `0x`-prefixed `{header}{digest}` hash.
    pub fn url_from_hash(&self, hash: &str) -> SdkResult<String> {
        Ok(self.cids.url_from_hash(hash)?)
    }

    /// Gateway URL for a bare 32-byte sha2-256 digest in hex.
    pub fn url_from_digest(&self, digest: &str) -> SdkResult<String> {
        Ok(self.cids.url_from_digest(digest)?)
    }

    /// Gateway URL for a content identifier in text form.
    pub fn url_from_cid(&self, cid: &str) -> SdkResult<String> {
        let cid = Cid::from_text(cid)?;
        Ok(self.cids.gateway_url(&cid))
    }

    /// The v0 identifier raw image bytes will be pinned under.
    pub fn content_cid(&self, data: &[u8]) -> Cid {
        Cid::for_content(data)
    }

    /// Gateway URL raw image bytes will be served from once pinned.
    pub fn content_url(&self, data: &[u8]) -> String {
        self.cids.gateway_url(&Cid::for_content(data))
    }

    /// Resolve the URLs of a listing from its on-chain thumbnail hash and
    /// manifest identifier.
    ///
    /// The thumbnail hash is the bare digest of the thumbnail's identifier,
    /// as stored when the listing was created.
    pub fn asset_uris(&self, thumbnail_hash: &str, manifest_cid: &str) -> SdkResult<AssetUris> {
        Ok(AssetUris {
            thumbnail_uri: self.url_from_digest(thumbnail_hash)?,
            manifest_uri: self.url_from_cid(manifest_cid)?,
        })
    }

    /// Decode a base64 upload payload into raw bytes.
    pub fn decode_base64(&self, payload: &str) -> SdkResult<Vec<u8>> {
        Ok(hex_codec::decode_base64(payload)?)
    }

    // ---- Verification data ----

    /// Decode verification data, checking field widths when the config asks
    /// for strict proofs.
    pub fn decode_verification_data(&self, json: &str) -> SdkResult<VerificationBundle> {
        Ok(self.decoder.decode(json)?)
    }

    /// Decode verification data straight into the verifier's positional
    /// arguments.
    pub fn verifier_call_args(&self, json: &str) -> SdkResult<VerifierCallArgs> {
        let bundle = self.decode_verification_data(json)?;
        debug!(
            index = bundle.index_in_batch,
            depth = bundle.depth(),
            "prepared verifier call"
        );
        Ok(bundle.into_call_args())
    }

    // ---- Prices ----

    /// Scale an entered price to the contract's integer units.
    pub fn price_to_base_units(&self, price: &str) -> SdkResult<U256> {
        Ok(to_fixed_point(price, self.price_decimals)?)
    }

    /// Render an on-chain price for display.
    pub fn base_units_to_price(&self, value: U256) -> SdkResult<String> {
        Ok(from_fixed_point(value, self.price_decimals)?)
    }
}

impl Default for Pinmark {
    fn default() -> Self {
        Self::new(PinmarkConfig::default())
    }
}
