//! High-level SDK for Pinmark.
//!
//! Provides one entry point, [`Pinmark`], for the conversions the marketplace
//! front end performs between wallet, contract, and gateway calls: resolving
//! image hashes to gateway URLs, flattening batcher verification data into
//! verifier arguments, and scaling listing prices.

pub mod client;
pub mod config;
pub mod error;

pub use client::{AssetUris, Pinmark};
pub use config::PinmarkConfig;
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use pinmark_cid::{Cid, GatewayConfig, Multihash};
pub use pinmark_proof::{VerificationBundle, VerifierCallArgs};
pub use pinmark_types::{Address, Digest};
pub use pinmark_units::{MoneyAmount, U256};
