//! Deploy signing: encode, hash, ECDSA-sign, assemble the envelope.

use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::Signature;
use k256::ecdsa::SigningKey;

use crate::codec;
use crate::deploy::DeployData;
use crate::deploy::SignedDeploy;
use crate::digest;
use crate::error::SigningError;
use crate::keys::KeyMaterial;
use crate::keys::SECP256K1;

/// Sign a deploy payload, producing the transport envelope.
///
/// Pipeline: canonically encode the payload, hash the bytes with
/// BLAKE2b-256, ECDSA-sign the digest, then hex-wrap the DER signature
/// and the uncompressed deployer key. `sig_algorithm` defaults to
/// `"secp256k1"` when `None`.
///
/// Each invocation owns its buffer and digest; a prepared key may be
/// shared across concurrent calls.
pub fn sign_deploy(
    data: &DeployData,
    sig_algorithm: Option<&str>,
    key: impl Into<KeyMaterial>,
) -> Result<SignedDeploy, SigningError> {
    let sig_algorithm = sig_algorithm.unwrap_or(SECP256K1);
    let key = key.into().resolve(sig_algorithm)?;

    let encoded = codec::encode_deploy_data(data)?;
    let digest = digest::blake2b_256(&encoded);
    let signature = sign_digest(&key, &digest)?;
    let deployer = key.verifying_key().to_encoded_point(false);

    Ok(SignedDeploy::build(
        data.clone(),
        sig_algorithm,
        &signature,
        deployer.as_bytes(),
    ))
}

/// ECDSA-sign a 32-byte digest, returning the DER signature bytes.
///
/// The signature is normalized to low-S canonical form before DER
/// encoding; verifiers reject the high-S twin.
pub fn sign_digest(key: &SigningKey, digest: &[u8; 32]) -> Result<Vec<u8>, SigningError> {
    let signature: Signature = key.sign_prehash(digest).map_err(SigningError::InvalidKey)?;
    let signature = signature.normalize_s().unwrap_or(signature);
    Ok(signature.to_der().as_bytes().to_vec())
}
