//! Deploy payload and signed envelope types.

use serde::Deserialize;
use serde::Serialize;

/// The unsigned deploy payload supplied by the caller.
///
/// All numeric fields are millisecond timestamps or non-negative resource
/// bounds; `term` is the source code to execute and may be empty. Serde
/// names match the node's JSON API (`phloPrice`, `phloLimit`,
/// `validAfterBlockNumber`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeployData {
    /// Source code to deploy.
    pub term: String,
    /// Millisecond Unix timestamp.
    pub timestamp: i64,
    /// Price per unit of phlo.
    pub phlo_price: i64,
    /// Phlo limit for the execution.
    pub phlo_limit: i64,
    /// Block number after which the deploy becomes valid.
    pub valid_after_block_number: i64,
}

/// The transport-ready signed deploy envelope.
///
/// Built from a [`DeployData`] and the raw signature material:
/// 1. Canonically encode the payload and hash it with BLAKE2b-256
/// 2. ECDSA-sign the digest → DER bytes, low-S form
/// 3. Hex-encode the signature and the uncompressed deployer public key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignedDeploy {
    /// The payload fields, echoed unchanged from the signing request.
    pub data: DeployData,
    /// Name of the curve used to sign (e.g. `"secp256k1"`).
    pub sig_algorithm: String,
    /// DER-encoded ECDSA signature, lowercase hex.
    pub signature: String,
    /// Uncompressed SEC1 public key of the signer, lowercase hex.
    pub deployer: String,
}

impl SignedDeploy {
    /// Assemble the envelope from the payload and raw signature material.
    ///
    /// Binary fields are rendered as lowercase hex, exactly two digits per
    /// byte, most-significant nibble first.
    pub fn build(
        data: DeployData,
        sig_algorithm: &str,
        signature: &[u8],
        deployer: &[u8],
    ) -> Self {
        SignedDeploy {
            data,
            sig_algorithm: sig_algorithm.to_string(),
            signature: hex::encode(signature),
            deployer: hex::encode(deployer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_wire_field_names() {
        let signed = SignedDeploy::build(
            DeployData {
                term: "Nil".to_string(),
                timestamp: 1,
                phlo_price: 1,
                phlo_limit: 2,
                valid_after_block_number: 3,
            },
            "secp256k1",
            &[0xab, 0xcd],
            &[0x04, 0x01],
        );

        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["sigAlgorithm"], "secp256k1");
        assert_eq!(json["signature"], "abcd");
        assert_eq!(json["deployer"], "0401");
        assert_eq!(json["data"]["term"], "Nil");
        assert_eq!(json["data"]["phloPrice"], 1);
        assert_eq!(json["data"]["phloLimit"], 2);
        assert_eq!(json["data"]["validAfterBlockNumber"], 3);
    }

    #[test]
    fn envelope_json_roundtrip() {
        let signed = SignedDeploy::build(DeployData::default(), "secp256k1", &[0x01], &[0x02]);
        let json = serde_json::to_string(&signed).unwrap();
        let back: SignedDeploy = serde_json::from_str(&json).unwrap();
        assert_eq!(signed, back);
    }

    #[test]
    fn hex_fields_are_lowercase_two_digits_per_byte() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let signed = SignedDeploy::build(DeployData::default(), "secp256k1", &bytes, &bytes);

        assert_eq!(signed.signature.len(), 2 * bytes.len());
        assert_eq!(signed.signature, signed.signature.to_lowercase());
        assert_eq!(hex::decode(&signed.signature).unwrap(), bytes);
        assert_eq!(hex::decode(&signed.deployer).unwrap(), bytes);
    }
}
