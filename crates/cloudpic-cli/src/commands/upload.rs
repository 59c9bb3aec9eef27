use std::io;
use std::path::PathBuf;

use crate::commands::common::{derive_public_id, load_client, normalize_public_id, prompt_file_name};
use crate::error::CliError;

pub async fn run_upload(
    file: Option<PathBuf>,
    public_id: Option<&str>,
    as_json: bool,
) -> Result<(), CliError> {
    let path = match file {
        Some(path) => path,
        None => PathBuf::from(prompt_file_name(&mut io::stdin().lock(), &mut io::stdout())?),
    };
    let public_id = match public_id {
        Some(raw) => normalize_public_id(raw)?,
        None => derive_public_id(&path)?,
    };

    let content = std::fs::read(&path)?;
    tracing::debug!("Read {} bytes from {}", content.len(), path.display());

    let client = load_client()?;
    let image = client.upload_image_detailed(&public_id, content).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&image)?);
    } else {
        println!("{}", image.secure_url);
    }
    Ok(())
}
