//! Signed-deploy verification.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::Signature;
use k256::ecdsa::VerifyingKey;

use crate::codec;
use crate::deploy::SignedDeploy;
use crate::digest;
use crate::error::SigningError;

/// Verify a signed deploy envelope.
///
/// Steps:
/// 1. Re-encode `deploy.data` and recompute the BLAKE2b-256 digest
/// 2. Decode the deployer key and DER signature from hex
/// 3. Reject non-canonical (high-S) signatures
/// 4. Verify the signature over the digest
pub fn verify_deploy(deploy: &SignedDeploy) -> Result<(), SigningError> {
    let encoded = codec::encode_deploy_data(&deploy.data)?;
    let digest = digest::blake2b_256(&encoded);

    let deployer_bytes = hex::decode(&deploy.deployer)?;
    let verifying_key =
        VerifyingKey::from_sec1_bytes(&deployer_bytes).map_err(SigningError::InvalidPublicKey)?;

    let sig_bytes = hex::decode(&deploy.signature)?;
    let signature = Signature::from_der(&sig_bytes).map_err(SigningError::InvalidSignature)?;
    if signature.normalize_s().is_some() {
        return Err(SigningError::NonCanonicalSignature);
    }

    verifying_key
        .verify_prehash(&digest, &signature)
        .map_err(|_| SigningError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use k256::ecdsa::SigningKey;

    use super::*;
    use crate::deploy::DeployData;
    use crate::signer::sign_deploy;

    fn test_key() -> SigningKey {
        SigningKey::from_slice(&[0x42; 32]).expect("32 nonzero bytes is a valid scalar")
    }

    fn signed_deploy() -> SignedDeploy {
        let deploy = DeployData {
            term: "new x in { x!(1) }".to_string(),
            timestamp: 1_624_000_000_000,
            phlo_price: 1,
            phlo_limit: 500_000,
            valid_after_block_number: 42,
        };
        sign_deploy(&deploy, None, &test_key()).unwrap()
    }

    #[test]
    fn valid_envelope_verifies() {
        assert!(verify_deploy(&signed_deploy()).is_ok());
    }

    #[test]
    fn tampered_term_fails() {
        let mut signed = signed_deploy();
        signed.data.term.push_str(" | Nil");
        let err = verify_deploy(&signed).unwrap_err();
        assert!(matches!(err, SigningError::VerificationFailed));
    }

    #[test]
    fn tampered_resource_bound_fails() {
        let mut signed = signed_deploy();
        signed.data.phlo_limit += 1;
        let err = verify_deploy(&signed).unwrap_err();
        assert!(matches!(err, SigningError::VerificationFailed));
    }

    #[test]
    fn wrong_deployer_key_fails() {
        let other = SigningKey::from_slice(&[0x43; 32]).unwrap();
        let mut signed = signed_deploy();
        signed.deployer = crate::keys::deployer_hex(&other);
        let err = verify_deploy(&signed).unwrap_err();
        assert!(matches!(err, SigningError::VerificationFailed));
    }

    #[test]
    fn invalid_hex_deployer_fails() {
        let mut signed = signed_deploy();
        signed.deployer = "not-valid-hex!".to_string();
        let err = verify_deploy(&signed).unwrap_err();
        assert!(matches!(err, SigningError::InvalidHex(_)));
    }

    #[test]
    fn non_point_deployer_fails() {
        let mut signed = signed_deploy();
        signed.deployer = hex::encode([0x04; 65]);
        let err = verify_deploy(&signed).unwrap_err();
        assert!(matches!(err, SigningError::InvalidPublicKey(_)));
    }

    #[test]
    fn garbage_der_signature_fails() {
        let mut signed = signed_deploy();
        signed.signature = hex::encode([0xde, 0xad, 0xbe, 0xef]);
        let err = verify_deploy(&signed).unwrap_err();
        assert!(matches!(err, SigningError::InvalidSignature(_)));
    }

    #[test]
    fn high_s_signature_is_rejected() {
        let mut signed = signed_deploy();
        let der = hex::decode(&signed.signature).unwrap();
        let signature = Signature::from_der(&der).unwrap();

        // Re-encode the signature with s negated: same DER shape, but the
        // non-canonical twin of a valid signature.
        let (r, s) = signature.split_scalars();
        let high = Signature::from_scalars(r.to_bytes(), (-*s).to_bytes()).unwrap();
        signed.signature = hex::encode(high.to_der().as_bytes());

        let err = verify_deploy(&signed).unwrap_err();
        assert!(matches!(err, SigningError::NonCanonicalSignature));
    }
}
