//! secp256k1 key material and key-file handling.

use std::path::Path;

use k256::ecdsa::SigningKey;

use crate::error::SigningError;

/// Name of the only supported signature algorithm.
pub const SECP256K1: &str = "secp256k1";

/// Private key input accepted by the signer.
///
/// Callers either hold raw secret scalar bytes (e.g. read from a hex
/// config value) or a signing key they already constructed and reuse
/// across many deploys. Both resolve to the same thing once, at the
/// start of signing.
#[derive(Clone)]
pub enum KeyMaterial {
    /// 32 raw big-endian secret scalar bytes.
    Raw(Vec<u8>),
    /// An already-usable signing key.
    Prepared(SigningKey),
}

impl KeyMaterial {
    /// Resolve into a signing key for the named curve.
    pub fn resolve(self, sig_algorithm: &str) -> Result<SigningKey, SigningError> {
        if sig_algorithm != SECP256K1 {
            return Err(SigningError::UnsupportedAlgorithm(sig_algorithm.to_string()));
        }
        match self {
            KeyMaterial::Prepared(key) => Ok(key),
            KeyMaterial::Raw(bytes) => {
                SigningKey::from_slice(&bytes).map_err(SigningError::InvalidKey)
            }
        }
    }
}

impl From<SigningKey> for KeyMaterial {
    fn from(key: SigningKey) -> Self {
        KeyMaterial::Prepared(key)
    }
}

impl From<&SigningKey> for KeyMaterial {
    fn from(key: &SigningKey) -> Self {
        KeyMaterial::Prepared(key.clone())
    }
}

impl From<Vec<u8>> for KeyMaterial {
    fn from(bytes: Vec<u8>) -> Self {
        KeyMaterial::Raw(bytes)
    }
}

impl From<&[u8]> for KeyMaterial {
    fn from(bytes: &[u8]) -> Self {
        KeyMaterial::Raw(bytes.to_vec())
    }
}

/// Generate a new secp256k1 keypair for deploy signing.
pub fn generate_keypair() -> SigningKey {
    SigningKey::random(&mut rand_core::OsRng)
}

/// Save a secret key to a file in hex format.
///
/// Sets file permissions to 0o600 on Unix.
pub fn save_secret_key(path: &Path, key: &SigningKey) -> Result<(), SigningError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let hex_key = hex::encode(key.to_bytes());
    std::fs::write(path, hex_key)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}

/// Load a secret key from a hex-encoded file.
pub fn load_secret_key(path: &Path) -> Result<SigningKey, SigningError> {
    let hex_key = std::fs::read_to_string(path)?;
    let bytes = hex::decode(hex_key.trim())?;
    if bytes.len() != 32 {
        return Err(SigningError::InvalidKeyLength(bytes.len()));
    }
    SigningKey::from_slice(&bytes).map_err(SigningError::InvalidKey)
}

/// Hex deployer id (uncompressed SEC1 public key) for a signing key.
pub fn deployer_hex(key: &SigningKey) -> String {
    hex::encode(key.verifying_key().to_encoded_point(false).as_bytes())
}
