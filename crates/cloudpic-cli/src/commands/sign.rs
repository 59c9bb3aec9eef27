use cloudpic_core::Authorization;

use crate::commands::common::{load_client, normalize_public_id};
use crate::error::CliError;

pub fn run_sign(public_id: &str, as_json: bool) -> Result<(), CliError> {
    let public_id = normalize_public_id(public_id)?;
    let client = load_client()?;
    let auth = client.generate_authorization(&public_id);

    for line in format_authorization(&auth, as_json)? {
        println!("{line}");
    }
    Ok(())
}

pub fn format_authorization(auth: &Authorization, as_json: bool) -> Result<Vec<String>, CliError> {
    if as_json {
        return Ok(vec![serde_json::to_string_pretty(auth)?]);
    }
    Ok(vec![
        format!("timestamp: {}", auth.timestamp),
        format!("signature: {}", auth.signature),
    ])
}
