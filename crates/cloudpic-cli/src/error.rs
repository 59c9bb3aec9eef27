use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] cloudpic_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
    #[error("Cannot derive a public id from '{0}'. Pass --public-id explicitly.")]
    UnresolvedPublicId(String),
    #[error("{0}. Set CLOUD_NAME, API_KEY and API_SECRET in the environment or a .env file.")]
    NotConfigured(String),
}
