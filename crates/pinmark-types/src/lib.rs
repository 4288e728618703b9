//! Foundation types for Pinmark.
//!
//! This crate provides the fixed-width byte types and the strict hex codec
//! shared by the content-identifier and verification-data crates.
//!
//! # Key Types
//!
//! - [`Digest`] — 32-byte hash output (sha2-256, commitments, merkle roots)
//! - [`Address`] — 20-byte proof generator address
//! - [`hex_codec`] — hex and base64 conversion that never truncates or coerces

pub mod bytes;
pub mod error;
pub mod hex_codec;

pub use bytes::{Address, Digest, ADDRESS_LEN, DIGEST_LEN};
pub use error::{TypeError, TypeResult};
