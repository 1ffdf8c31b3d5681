//! Deploy signing for RNode-compatible networks.
//!
//! A deploy is signed by serializing its payload fields to the canonical
//! protobuf wire form ([`codec`]), hashing the bytes with BLAKE2b-256
//! ([`digest`]), and signing the digest with ECDSA over secp256k1
//! ([`signer`]). The resulting [`SignedDeploy`] envelope carries the
//! payload, the algorithm name, and the hex-encoded DER signature and
//! uncompressed deployer public key, ready for JSON transport to a node.
//!
//! # Signing
//!
//! ```
//! use rnode_deploy_signing::{keys, signer, verifier, DeployData};
//!
//! let key = keys::generate_keypair();
//! let deploy = DeployData {
//!     term: "new x in { x!(1) }".to_string(),
//!     timestamp: 1_624_000_000_000,
//!     phlo_price: 1,
//!     phlo_limit: 500_000,
//!     valid_after_block_number: 0,
//! };
//! let signed = signer::sign_deploy(&deploy, None, &key).unwrap();
//! assert!(verifier::verify_deploy(&signed).is_ok());
//! ```
//!
//! # Key Material
//!
//! The signer accepts either raw 32-byte secret scalars or an
//! already-constructed `k256` signing key via [`KeyMaterial`]. Key
//! material is always caller-supplied; nothing in this crate embeds or
//! loads a default key.

pub mod codec;
pub mod deploy;
pub mod digest;
pub mod error;
pub mod keys;
pub mod signer;
pub mod verifier;

pub use deploy::DeployData;
pub use deploy::SignedDeploy;
pub use error::SigningError;
pub use keys::KeyMaterial;
