//! Error types for deploy signing and verification.

/// Errors from deploy signing and verification.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The named signature algorithm is not a recognized curve.
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Raw key bytes are not a valid secp256k1 secret scalar.
    #[error("invalid private key: {0}")]
    InvalidKey(#[source] k256::ecdsa::Error),

    /// A numeric deploy field is negative and has no canonical encoding.
    #[error("negative value {value} for field {field}")]
    NegativeField {
        /// Wire name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The deployer bytes are not a valid SEC1 public key.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(#[source] k256::ecdsa::Error),

    /// The signature bytes are not valid DER.
    #[error("invalid DER signature: {0}")]
    InvalidSignature(#[source] k256::ecdsa::Error),

    /// The signature is valid DER but not in low-S canonical form.
    #[error("signature is not in canonical low-S form")]
    NonCanonicalSignature,

    /// The signature did not verify against the digest and deployer key.
    #[error("signature verification failed")]
    VerificationFailed,

    /// The secret key holds the wrong number of bytes (expected 32).
    #[error("invalid secret key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    /// File I/O error while reading or writing key material.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
