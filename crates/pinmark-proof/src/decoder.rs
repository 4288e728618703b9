use pinmark_types::{ADDRESS_LEN, DIGEST_LEN};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::bundle::{VerificationBundle, MERKLE_NODE_LEN};
use crate::error::{ProofError, ProofResult};

#[derive(Deserialize)]
struct RawVerificationData {
    verification_data_commitment: RawCommitment,
    batch_merkle_root: Vec<u8>,
    batch_inclusion_proof: RawInclusionProof,
    index_in_batch: u64,
}

#[derive(Deserialize)]
struct RawCommitment {
    proof_commitment: Vec<u8>,
    pub_input_commitment: Vec<u8>,
    proving_system_aux_data_commitment: Vec<u8>,
    proof_generator_addr: Vec<u8>,
}

#[derive(Deserialize)]
struct RawInclusionProof {
    merkle_path: Vec<Vec<u8>>,
}

/// Decodes batcher verification data JSON into a [`VerificationBundle`].
///
/// A strict decoder rejects any commitment, root, address, or merkle level
/// whose width does not match what the verifier reads. A lenient decoder
/// accepts any width and only logs the mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerificationDataDecoder {
    strict: bool,
}

impl Default for VerificationDataDecoder {
    fn default() -> Self {
        Self::strict()
    }
}

impl VerificationDataDecoder {
    /// Reject any field whose byte width differs from what the verifier
    /// reads.
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Accept any field width, logging a warning on mismatch. Matches the
    /// unchecked behavior of older front ends.
    pub const fn lenient() -> Self {
        Self { strict: false }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Decode a verification data JSON document.
    ///
    /// Invalid JSON, a missing field, a byte value above 255, or a negative
    /// index is [`ProofError::MalformedInput`]. Merkle path levels are
    /// concatenated in the order given.
    pub fn decode(&self, json: &str) -> ProofResult<VerificationBundle> {
        self.decode_slice(json.as_bytes())
    }

    /// [`VerificationDataDecoder::decode`] over raw UTF-8 bytes.
    pub fn decode_slice(&self, json: &[u8]) -> ProofResult<VerificationBundle> {
        let raw: RawVerificationData =
            serde_json::from_slice(json).map_err(|e| ProofError::MalformedInput(e.to_string()))?;
        let commitment = raw.verification_data_commitment;

        self.check_width("proof_commitment", &commitment.proof_commitment, DIGEST_LEN)?;
        self.check_width("pub_input_commitment", &commitment.pub_input_commitment, DIGEST_LEN)?;
        self.check_width(
            "proving_system_aux_data_commitment",
            &commitment.proving_system_aux_data_commitment,
            DIGEST_LEN,
        )?;
        self.check_width("proof_generator_addr", &commitment.proof_generator_addr, ADDRESS_LEN)?;
        self.check_width("batch_merkle_root", &raw.batch_merkle_root, DIGEST_LEN)?;

        let levels = raw.batch_inclusion_proof.merkle_path;
        for level in &levels {
            self.check_width("merkle_path", level, MERKLE_NODE_LEN)?;
        }
        let merkle_proof = concat_levels(levels);

        debug!(
            index = raw.index_in_batch,
            proof_len = merkle_proof.len(),
            strict = self.strict,
            "decoded verification data"
        );

        Ok(VerificationBundle {
            proof_commitment: commitment.proof_commitment,
            pub_input_commitment: commitment.pub_input_commitment,
            proving_system_aux_data_commitment: commitment.proving_system_aux_data_commitment,
            proof_generator_addr: commitment.proof_generator_addr,
            batch_merkle_root: raw.batch_merkle_root,
            merkle_proof,
            index_in_batch: raw.index_in_batch,
        })
    }

    fn check_width(&self, field: &'static str, bytes: &[u8], expected: usize) -> ProofResult<()> {
        if bytes.len() == expected {
            return Ok(());
        }
        if self.strict {
            return Err(ProofError::InvalidFieldLength {
                field,
                expected,
                actual: bytes.len(),
            });
        }
        warn!(field, expected, actual = bytes.len(), "unexpected field width");
        Ok(())
    }
}

/// Flatten merkle path levels in the order given.
fn concat_levels(levels: Vec<Vec<u8>>) -> Vec<u8> {
    let total = levels.iter().map(Vec::len).sum();
    let mut out = Vec::with_capacity(total);
    for level in levels {
        out.extend_from_slice(&level);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::VerifierCallArgs;
    use proptest::prelude::*;
    use serde_json::json;

    const SAMPLE: &str = r#"{"verification_data_commitment":{"proof_commitment":[1,2,3],"pub_input_commitment":[4,5],"proving_system_aux_data_commitment":[6],"proof_generator_addr":[7,8,9,10]},"batch_merkle_root":[9,9],"batch_inclusion_proof":{"merkle_path":[[1,1],[2,2,2]]},"index_in_batch":5}"#;

    fn well_formed(levels: usize) -> serde_json::Value {
        let path: Vec<Vec<u8>> = (0..levels).map(|i| vec![i as u8; 32]).collect();
        json!({
            "verification_data_commitment": {
                "proof_commitment": vec![1u8; 32],
                "pub_input_commitment": vec![2u8; 32],
                "proving_system_aux_data_commitment": vec![3u8; 32],
                "proof_generator_addr": vec![4u8; 20],
            },
            "batch_merkle_root": vec![5u8; 32],
            "batch_inclusion_proof": { "merkle_path": path },
            "index_in_batch": 12,
        })
    }

    #[test]
    fn lenient_decodes_sample_in_fixed_order() {
        let bundle = VerificationDataDecoder::lenient().decode(SAMPLE).unwrap();
        assert_eq!(bundle.merkle_proof, vec![1, 1, 2, 2, 2]);
        assert_eq!(bundle.index_in_batch, 5);

        let VerifierCallArgs(proof, pub_input, aux, addr, root, merkle, index) =
            bundle.into_call_args();
        assert_eq!(proof, vec![1, 2, 3]);
        assert_eq!(pub_input, vec![4, 5]);
        assert_eq!(aux, vec![6]);
        assert_eq!(addr, vec![7, 8, 9, 10]);
        assert_eq!(root, vec![9, 9]);
        assert_eq!(merkle, vec![1, 1, 2, 2, 2]);
        assert_eq!(index, 5);
    }

    #[test]
    fn strict_rejects_sample_widths() {
        assert_eq!(
            VerificationDataDecoder::default().decode(SAMPLE),
            Err(ProofError::InvalidFieldLength {
                field: "proof_commitment",
                expected: 32,
                actual: 3,
            })
        );
    }

    #[test]
    fn strict_accepts_well_formed() {
        let text = well_formed(3).to_string();
        let bundle = VerificationDataDecoder::strict().decode(&text).unwrap();
        assert_eq!(bundle.depth(), 3);
        assert_eq!(bundle.index_in_batch, 12);
        let levels: Vec<&[u8]> = bundle.merkle_segments().collect();
        assert_eq!(levels[0], &[0u8; 32][..]);
        assert_eq!(levels[2], &[2u8; 32][..]);
    }

    #[test]
    fn strict_checks_address_width() {
        let mut value = well_formed(1);
        value["verification_data_commitment"]["proof_generator_addr"] = json!(vec![4u8; 32]);
        assert_eq!(
            VerificationDataDecoder::strict().decode(&value.to_string()),
            Err(ProofError::InvalidFieldLength {
                field: "proof_generator_addr",
                expected: 20,
                actual: 32,
            })
        );
    }

    #[test]
    fn strict_checks_merkle_levels() {
        let mut value = well_formed(2);
        value["batch_inclusion_proof"]["merkle_path"][1] = json!([1, 2, 3]);
        assert!(matches!(
            VerificationDataDecoder::strict().decode(&value.to_string()),
            Err(ProofError::InvalidFieldLength { field: "merkle_path", expected: 32, actual: 3 })
        ));
    }

    #[test]
    fn empty_merkle_path_is_empty_proof() {
        let bundle = VerificationDataDecoder::strict()
            .decode(&well_formed(0).to_string())
            .unwrap();
        assert!(bundle.merkle_proof.is_empty());
    }

    #[test]
    fn non_json_is_malformed() {
        let err = VerificationDataDecoder::lenient().decode("not json").unwrap_err();
        assert!(matches!(err, ProofError::MalformedInput(_)));
    }

    #[test]
    fn missing_root_is_malformed() {
        let mut value = well_formed(1);
        value.as_object_mut().unwrap().remove("batch_merkle_root");
        let err = VerificationDataDecoder::lenient()
            .decode(&value.to_string())
            .unwrap_err();
        assert!(matches!(err, ProofError::MalformedInput(_)));
    }

    #[test]
    fn missing_nested_commitment_is_malformed() {
        let mut value = well_formed(1);
        value["verification_data_commitment"]
            .as_object_mut()
            .unwrap()
            .remove("pub_input_commitment");
        assert!(matches!(
            VerificationDataDecoder::strict().decode(&value.to_string()),
            Err(ProofError::MalformedInput(_))
        ));
    }

    #[test]
    fn out_of_range_byte_is_malformed() {
        let mut value = well_formed(1);
        value["batch_merkle_root"][0] = json!(256);
        assert!(matches!(
            VerificationDataDecoder::lenient().decode(&value.to_string()),
            Err(ProofError::MalformedInput(_))
        ));
    }

    #[test]
    fn negative_index_is_malformed() {
        let mut value = well_formed(1);
        value["index_in_batch"] = json!(-1);
        assert!(matches!(
            VerificationDataDecoder::strict().decode(&value.to_string()),
            Err(ProofError::MalformedInput(_))
        ));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut value = well_formed(1);
        value["batch_inclusion_proof"]["extra"] = json!("ignored");
        value["batch_header"] = json!({ "x": 1 });
        assert!(VerificationDataDecoder::strict().decode(&value.to_string()).is_ok());
    }

    proptest! {
        #[test]
        fn segments_land_at_prefix_sums(
            levels in proptest::collection::vec(
                proptest::collection::vec(any::<u8>(), 0..40),
                0..12,
            )
        ) {
            let mut value = well_formed(0);
            value["batch_inclusion_proof"]["merkle_path"] = json!(levels.clone());
            let bundle = VerificationDataDecoder::lenient()
                .decode(&value.to_string())
                .unwrap();

            let total: usize = levels.iter().map(Vec::len).sum();
            prop_assert_eq!(bundle.merkle_proof.len(), total);

            let mut offset = 0;
            for level in &levels {
                prop_assert_eq!(&bundle.merkle_proof[offset..offset + level.len()], &level[..]);
                offset += level.len();
            }
        }
    }
}
