//! cloudpic-core - Core library for cloudpic
//!
//! Signs, submits, and decodes image upload and deletion requests against a
//! hosted media API. The CLI is a thin wrapper over [`SignedMediaClient`].
//!
//! ```no_run
//! use cloudpic_core::{ClientConfig, SignedMediaClient};
//!
//! # async fn demo() -> cloudpic_core::Result<()> {
//! let client = SignedMediaClient::new(ClientConfig::new("demo", "key", "secret")?)?;
//! let url = client.upload_image("cat", std::fs::read("cat.png").unwrap()).await?;
//! client.destroy_image("cat").await?;
//! # let _ = url;
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod media;
pub mod signing;
pub mod util;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use media::{ApiError, SignedMediaClient, UploadedImage};
pub use signing::Authorization;
