//! `rnode-deploy verify` — check a signed deploy envelope.

use rnode_deploy_signing::verifier;
use rnode_deploy_signing::SignedDeploy;

pub fn run(envelope_path: &str) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(envelope_path)?;
    let signed: SignedDeploy = serde_json::from_str(&data)?;

    verifier::verify_deploy(&signed)?;

    println!("✓ Signature valid");
    println!("  Deployer:  {}…", &signed.deployer[..16]);
    println!("  Algorithm: {}", signed.sig_algorithm);
    Ok(())
}
