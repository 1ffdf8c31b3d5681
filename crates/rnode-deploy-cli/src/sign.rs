//! `rnode-deploy sign` — build and sign a deploy envelope.

use std::path::Path;

use rnode_deploy_signing::keys;
use rnode_deploy_signing::signer;
use rnode_deploy_signing::DeployData;

#[allow(clippy::too_many_arguments)]
pub fn run(
    key_path: &str,
    term: Option<&str>,
    term_file: Option<&str>,
    phlo_price: i64,
    phlo_limit: i64,
    valid_after_block_number: i64,
    timestamp: Option<i64>,
) -> anyhow::Result<()> {
    let signing_key = keys::load_secret_key(Path::new(key_path))?;

    let term = match (term, term_file) {
        (Some(t), _) => t.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => anyhow::bail!("either --term or --term-file is required"),
    };

    let deploy = DeployData {
        term,
        timestamp: timestamp.unwrap_or_else(now_ms),
        phlo_price,
        phlo_limit,
        valid_after_block_number,
    };

    let signed = signer::sign_deploy(&deploy, None, &signing_key)?;

    // The envelope goes to stdout so it can be piped straight to a node.
    println!("{}", serde_json::to_string_pretty(&signed)?);
    Ok(())
}

/// Current wall-clock time in Unix milliseconds.
fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
