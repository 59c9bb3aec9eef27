//! Signed media client for image upload and deletion.
//!
//! Every call derives a fresh [`Authorization`] from the injected clock,
//! submits one multipart form, and decodes the JSON reply. Nothing is cached
//! between calls and nothing is retried.

mod form;
mod response;
mod transport;

use serde::de::DeserializeOwned;

pub use form::{FieldValue, FormField, SignedForm};
pub use response::{decode_response, ApiError, ApiOutcome, DestroyResponse, UploadedImage};
pub use transport::{HttpTransport, RawResponse, Transport};

use crate::clock::{Clock, SystemClock};
use crate::config::ClientConfig;
use crate::signing::Authorization;
use crate::util::truncate_error_body;
use crate::{Error, Result};

const UPLOAD_ACTION: &str = "upload";
const DESTROY_ACTION: &str = "destroy";

/// Client for the signed `image/upload` and `image/destroy` endpoints.
#[derive(Debug, Clone)]
pub struct SignedMediaClient<T = HttpTransport, C = SystemClock> {
    config: ClientConfig,
    transport: T,
    clock: C,
}

impl SignedMediaClient {
    /// Builds a client using the system clock and a default HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_parts(config, HttpTransport::new()?, SystemClock))
    }
}

impl<T: Transport, C: Clock> SignedMediaClient<T, C> {
    /// Builds a client from explicit transport and clock implementations.
    pub const fn with_parts(config: ClientConfig, transport: T, clock: C) -> Self {
        Self {
            config,
            transport,
            clock,
        }
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Signs `resource_id` at the clock's current second.
    pub fn generate_authorization(&self, resource_id: &str) -> Authorization {
        Authorization::derive(
            resource_id,
            self.clock.unix_timestamp(),
            self.config.access_secret(),
        )
    }

    /// Endpoint URL for an image action (`upload`, `destroy`).
    pub fn endpoint_url(&self, action: &str) -> String {
        format!(
            "{}/v1_1/{}/image/{action}",
            self.config.api_base_url(),
            self.config.account_name()
        )
    }

    /// Uploads `content` under `resource_id` and returns its secure URL.
    pub async fn upload_image(&self, resource_id: &str, content: Vec<u8>) -> Result<String> {
        self.upload_image_detailed(resource_id, content)
            .await
            .map(|image| image.secure_url)
    }

    /// Uploads `content` under `resource_id` and returns the full payload.
    pub async fn upload_image_detailed(
        &self,
        resource_id: &str,
        content: Vec<u8>,
    ) -> Result<UploadedImage> {
        let form = self.upload_form(resource_id, content)?;
        let url = self.endpoint_url(UPLOAD_ACTION);
        tracing::debug!("Uploading image {resource_id} to {url}");

        let response = self.transport.post_form(&url, form).await?;
        let image: UploadedImage = interpret(UPLOAD_ACTION, &response)?;

        tracing::info!("Uploaded image {resource_id} to {}", image.secure_url);
        Ok(image)
    }

    /// Deletes the image stored under `resource_id`.
    pub async fn destroy_image(&self, resource_id: &str) -> Result<()> {
        let form = self.destroy_form(resource_id)?;
        let url = self.endpoint_url(DESTROY_ACTION);
        tracing::debug!("Destroying image {resource_id} via {url}");

        let response = self.transport.post_form(&url, form).await?;
        let payload: DestroyResponse = interpret(DESTROY_ACTION, &response)?;

        if payload.result == "ok" {
            tracing::info!("Destroyed image {resource_id}");
        } else {
            tracing::warn!(
                "Destroy for {resource_id} returned result '{}'",
                payload.result
            );
        }
        Ok(())
    }

    fn upload_form(&self, resource_id: &str, content: Vec<u8>) -> Result<SignedForm> {
        let resource_id = validate_resource_id(resource_id)?;
        if content.is_empty() {
            return Err(Error::InvalidInput(
                "image payload must not be empty".to_string(),
            ));
        }

        let auth = self.generate_authorization(resource_id);
        Ok(SignedForm::new()
            .file("file", resource_id, content)
            .text("public_id", resource_id)
            .text("timestamp", auth.timestamp)
            .text("signature", auth.signature)
            .text("api_key", self.config.access_key()))
    }

    fn destroy_form(&self, resource_id: &str) -> Result<SignedForm> {
        let resource_id = validate_resource_id(resource_id)?;
        let auth = self.generate_authorization(resource_id);
        Ok(SignedForm::new()
            .text("public_id", resource_id)
            .text("timestamp", auth.timestamp)
            .text("signature", auth.signature)
            .text("api_key", self.config.access_key()))
    }
}

fn validate_resource_id(resource_id: &str) -> Result<&str> {
    if resource_id.is_empty() {
        return Err(Error::InvalidInput(
            "resource id must not be empty".to_string(),
        ));
    }
    Ok(resource_id)
}

fn interpret<P: DeserializeOwned>(operation: &'static str, response: &RawResponse) -> Result<P> {
    match decode_response::<P>(&response.body) {
        Ok(ApiOutcome::Success(payload)) => Ok(payload),
        Ok(ApiOutcome::Failure(error)) => Err(Error::Api(error)),
        Err(_) if !response.is_success() => Err(Error::Http {
            status: response.status,
            body: truncate_error_body(&response.body),
        }),
        Err(source) => Err(Error::MalformedResponse { operation, source }),
    }
}
