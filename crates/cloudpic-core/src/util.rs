//! Small text helpers shared by config loading and response handling.

/// Upper bound on how much of an undecodable response body is kept in errors.
pub const MAX_ERROR_BODY_CHARS: usize = 180;

/// Trimmed value, or `None` when absent or blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Whether `value` carries an `http://` or `https://` scheme.
pub fn is_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.starts_with(scheme))
}

/// Trimmed response body cut to [`MAX_ERROR_BODY_CHARS`] characters.
pub fn truncate_error_body(body: &str) -> String {
    body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect()
}
