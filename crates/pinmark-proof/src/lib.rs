//! Verification data for Pinmark.
//!
//! The proof batcher returns a JSON bundle per submitted proof. This crate
//! decodes it into the seven arguments the on-chain verifier takes, in the
//! order it takes them. The merkle path arrives as a list of tree levels and
//! is flattened, leaf first, into one buffer.

pub mod bundle;
pub mod decoder;
pub mod error;

pub use bundle::{VerificationBundle, VerifierCallArgs, MERKLE_NODE_LEN};
pub use decoder::VerificationDataDecoder;
pub use error::{ProofError, ProofResult};
