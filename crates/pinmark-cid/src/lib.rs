//! Content addressing for Pinmark.
//!
//! Wraps raw sha2-256 digests into multihashes and content identifiers, and
//! renders the gateway URLs images are fetched from.
//!
//! The upstream batcher hands out image hashes as hex strings laid out as
//! `{2-byte header}{32-byte digest}`. [`Cid::parse_from_hash`] is the one
//! place that layout is interpreted.

pub mod cid;
pub mod error;
pub mod gateway;
pub mod hasher;
pub mod multihash;

pub use cid::{Cid, Version};
pub use error::{CidError, CidResult};
pub use gateway::{CidBuilder, GatewayConfig};
pub use hasher::ContentHasher;
pub use multihash::{Multihash, SHA2_256};
