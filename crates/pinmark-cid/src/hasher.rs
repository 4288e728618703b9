use pinmark_types::Digest;
use sha2::{Digest as _, Sha256};

/// sha2-256 hasher for image content.
///
/// No domain separation: the digest must equal what any other content
/// addressing node computes for the same bytes.
pub struct ContentHasher;

impl ContentHasher {
    pub fn sha256(data: &[u8]) -> Digest {
        Digest::from_array(Sha256::digest(data).into())
    }

    /// Verify that data hashes to the expected digest.
    pub fn verify(data: &[u8], expected: &Digest) -> bool {
        Self::sha256(data) == *expected
    }
}
