use std::io::{BufRead, Write};
use std::path::Path;

use cloudpic_core::{ClientConfig, SignedMediaClient};

use crate::error::CliError;

const FILE_NAME_PROMPT: &str = "Enter file name";

pub fn load_client() -> Result<SignedMediaClient, CliError> {
    let config = ClientConfig::from_env().map_err(|error| match error {
        cloudpic_core::Error::Config(message) => CliError::NotConfigured(message),
        other => CliError::Core(other),
    })?;
    tracing::debug!("Loaded media API config: {:?}", config);
    Ok(SignedMediaClient::new(config)?)
}

/// Ask for a file name on `output` and read one line from `input`.
pub fn prompt_file_name(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<String, CliError> {
    write!(output, "{FILE_NAME_PROMPT}: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let file_name = line.trim();
    if file_name.is_empty() {
        return Err(CliError::EmptyInput("File name"));
    }
    Ok(file_name.to_string())
}

/// Public id for an uploaded file: its name up to the first `.`.
pub fn derive_public_id(path: &Path) -> Result<String, CliError> {
    let stem = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .map(str::trim)
        .unwrap_or_default();

    if stem.is_empty() {
        return Err(CliError::UnresolvedPublicId(path.display().to_string()));
    }
    Ok(stem.to_string())
}

pub fn normalize_public_id(raw: &str) -> Result<String, CliError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(CliError::EmptyInput("Public id"));
    }
    Ok(value.to_string())
}
