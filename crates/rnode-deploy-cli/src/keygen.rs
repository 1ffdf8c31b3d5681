//! `rnode-deploy keygen` — generate a secp256k1 keypair.

use std::path::PathBuf;

use rnode_deploy_signing::keys;

pub fn run(output: Option<&str>) -> anyhow::Result<()> {
    let key = keys::generate_keypair();
    let deployer = keys::deployer_hex(&key);

    let out_path = output.map(PathBuf::from).unwrap_or_else(default_key_path);

    // Don't overwrite existing keys
    if out_path.exists() {
        anyhow::bail!(
            "key file already exists at {}. Remove it first or use --output.",
            out_path.display()
        );
    }

    keys::save_secret_key(&out_path, &key)?;

    println!("✓ Generated secp256k1 keypair");
    println!("  Secret key: {}", out_path.display());
    println!("  Deployer:   {deployer}");
    println!();
    println!("  Keep your secret key safe! Share only the deployer public key.");
    println!("  Sign deploys with:");
    println!("    rnode-deploy sign --key {} --term-file contract.rho", out_path.display());

    Ok(())
}

/// Default path for the signing key.
fn default_key_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from("/tmp"));

    config_dir.join("rnode-deploy").join("signing-key")
}
