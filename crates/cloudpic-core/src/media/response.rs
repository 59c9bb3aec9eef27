//! Media API response payloads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error object returned by the media API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

/// Decoded response: either the typed success payload or the API's error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure(ApiError),
}

/// Successful upload payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub secure_url: String,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Successful destroy payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestroyResponse {
    pub result: String,
}

/// Decode a response body.
///
/// A non-null `error` field selects [`ApiOutcome::Failure`] regardless of
/// any other fields; otherwise the body must match `T`.
pub fn decode_response<T: DeserializeOwned>(
    body: &str,
) -> Result<ApiOutcome<T>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if let Some(error) = value.get("error").filter(|error| !error.is_null()) {
        return ApiError::deserialize(error).map(ApiOutcome::Failure);
    }
    T::deserialize(value).map(ApiOutcome::Success)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn upload_success_decodes_secure_url() {
        let outcome =
            decode_response::<UploadedImage>(r#"{"secure_url":"https://res.example/img.png"}"#)
                .unwrap();
        match outcome {
            ApiOutcome::Success(image) => {
                assert_eq!(image.secure_url, "https://res.example/img.png");
                assert_eq!(image.public_id, None);
            }
            ApiOutcome::Failure(error) => panic!("unexpected failure: {error:?}"),
        }
    }

    #[test]
    fn upload_success_keeps_metadata_and_ignores_unknown_fields() {
        let body = r#"{
            "asset_id": "b5e6d2b3",
            "public_id": "cat",
            "version": 1312461204,
            "format": "png",
            "width": 864,
            "height": 576,
            "bytes": 120253,
            "secure_url": "https://res.example/v1312461204/cat.png"
        }"#;
        let ApiOutcome::Success(image) = decode_response::<UploadedImage>(body).unwrap() else {
            panic!("expected success");
        };
        assert_eq!(image.public_id.as_deref(), Some("cat"));
        assert_eq!(image.version, Some(1_312_461_204));
        assert_eq!(image.width, Some(864));
    }

    #[test]
    fn error_object_wins_over_payload_fields() {
        let outcome = decode_response::<UploadedImage>(
            r#"{"secure_url":"","error":{"message":"Invalid signature"}}"#,
        )
        .unwrap();
        assert_eq!(
            outcome,
            ApiOutcome::Failure(ApiError {
                message: "Invalid signature".to_string()
            })
        );
    }

    #[test]
    fn null_error_is_treated_as_absent() {
        let outcome = decode_response::<DestroyResponse>(r#"{"result":"ok","error":null}"#).unwrap();
        assert_eq!(
            outcome,
            ApiOutcome::Success(DestroyResponse {
                result: "ok".to_string()
            })
        );
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(decode_response::<UploadedImage>(r#"{"public_id":"cat"}"#).is_err());
    }

    #[test]
    fn error_without_message_is_an_error() {
        assert!(decode_response::<DestroyResponse>(r#"{"error":{"code":1}}"#).is_err());
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(decode_response::<DestroyResponse>("<html>bad gateway</html>").is_err());
    }
}
