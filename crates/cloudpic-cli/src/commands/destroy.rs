use crate::commands::common::{load_client, normalize_public_id};
use crate::error::CliError;

pub async fn run_destroy(public_id: &str) -> Result<(), CliError> {
    let public_id = normalize_public_id(public_id)?;
    let client = load_client()?;

    client.destroy_image(&public_id).await?;
    println!("{public_id}");
    Ok(())
}
