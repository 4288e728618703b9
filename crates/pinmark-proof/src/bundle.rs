use std::slice::Chunks;

use pinmark_types::{Address, Digest, TypeError};

use crate::error::{ProofError, ProofResult};

/// Width of one merkle path level.
pub const MERKLE_NODE_LEN: usize = 32;

/// Decoded verification data for one proof in a batch.
///
/// Byte fields are kept as the batcher supplied them. A bundle produced by a
/// strict decoder is guaranteed to have 32-byte commitments and root, a
/// 20-byte generator address, and a merkle proof made of whole 32-byte levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationBundle {
    pub proof_commitment: Vec<u8>,
    pub pub_input_commitment: Vec<u8>,
    pub proving_system_aux_data_commitment: Vec<u8>,
    pub proof_generator_addr: Vec<u8>,
    pub batch_merkle_root: Vec<u8>,
    /// Merkle path levels concatenated leaf to root.
    pub merkle_proof: Vec<u8>,
    pub index_in_batch: u64,
}

/// The verifier's positional arguments:
/// `(proofCommitment, pubInputCommitment, provingSystemAuxDataCommitment,
/// proofGeneratorAddr, batchMerkleRoot, merkleProof, indexInBatch)`.
///
/// The on-chain call consumes these by position. Do not reorder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierCallArgs(
    pub Vec<u8>,
    pub Vec<u8>,
    pub Vec<u8>,
    pub Vec<u8>,
    pub Vec<u8>,
    pub Vec<u8>,
    pub u64,
);

impl VerificationBundle {
    /// Move the fields into the verifier's positional order.
    pub fn into_call_args(self) -> VerifierCallArgs {
        VerifierCallArgs(
            self.proof_commitment,
            self.pub_input_commitment,
            self.proving_system_aux_data_commitment,
            self.proof_generator_addr,
            self.batch_merkle_root,
            self.merkle_proof,
            self.index_in_batch,
        )
    }

    pub fn proof_commitment_digest(&self) -> ProofResult<Digest> {
        digest_field("proof_commitment", &self.proof_commitment)
    }

    pub fn pub_input_commitment_digest(&self) -> ProofResult<Digest> {
        digest_field("pub_input_commitment", &self.pub_input_commitment)
    }

    pub fn proving_system_aux_data_commitment_digest(&self) -> ProofResult<Digest> {
        digest_field(
            "proving_system_aux_data_commitment",
            &self.proving_system_aux_data_commitment,
        )
    }

    pub fn batch_merkle_root_digest(&self) -> ProofResult<Digest> {
        digest_field("batch_merkle_root", &self.batch_merkle_root)
    }

    /// The generator address, failing unless it is exactly 20 bytes.
    pub fn proof_generator(&self) -> ProofResult<Address> {
        Address::from_slice(&self.proof_generator_addr)
            .map_err(|e| field_error("proof_generator_addr", e))
    }

    /// Iterate the merkle proof one 32-byte level at a time, leaf first.
    ///
    /// The last item is shorter only if the proof came from a lenient decode.
    pub fn merkle_segments(&self) -> Chunks<'_, u8> {
        self.merkle_proof.chunks(MERKLE_NODE_LEN)
    }

    /// Number of tree levels in the merkle proof.
    pub fn depth(&self) -> usize {
        self.merkle_proof.len().div_ceil(MERKLE_NODE_LEN)
    }
}

fn digest_field(field: &'static str, bytes: &[u8]) -> ProofResult<Digest> {
    Digest::from_slice(bytes).map_err(|e| field_error(field, e))
}

fn field_error(field: &'static str, err: TypeError) -> ProofError {
    match err {
        TypeError::InvalidLength { expected, actual } => ProofError::InvalidFieldLength {
            field,
            expected,
            actual,
        },
        other => ProofError::MalformedInput(format!("{field}: {other}")),
    }
}
