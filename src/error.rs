use std::fmt;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Base URL is not a valid absolute URL, or an endpoint path could not
    /// be joined to it.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Request body could not be serialized as JSON.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The API reported a failure, or a response body could not be decoded.
    #[error(transparent)]
    Api(Box<ApiError>),

    /// The deadline expired or the in-flight request was aborted.
    #[error("request cancelled: {0}")]
    Cancelled(#[source] reqwest::Error),

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Cancelled(err)
        } else {
            Self::Request(err)
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Self::Api(Box::new(err))
    }
}

/// A failed API call: non-2xx status, empty response, or an undecodable
/// response body.
///
/// Carries the request coordinates alongside the decoded [`ErrorEnvelope`]
/// so the rendered message identifies which call failed.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status of the failed response.
    pub status: StatusCode,
    /// Method of the originating request.
    pub method: Method,
    /// URL of the originating request.
    pub url: Url,
    /// Structured error payload reported by the API, or a synthesized one
    /// for undecodable responses.
    pub envelope: ErrorEnvelope,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} ({} {})",
            self.method,
            self.url,
            self.status.as_u16(),
            self.envelope.errors.detail(),
            self.envelope.errors.info
        )
    }
}

impl std::error::Error for ApiError {}

/// The API's structured error payload, used only on failures.
///
/// ```json
/// {
///    "version" : "1.0",
///    "errors" : {
///       "validationErrors" : [
///          { "fieldId" : "data.invoiceLine", "fieldMessage" : "..." }
///       ],
///       "message" : "Required field is missing from the request...",
///       "id" : "9ee67962-d927-4235-b557-46267e8b743d",
///       "type" : "VALIDATION",
///       "info" : "Required field is missing from the request...",
///       "code" : "Error.004.0002"
///    }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorEnvelope {
    pub version: String,
    pub errors: ErrorDetails,
}

/// Fault details inside an [`ErrorEnvelope`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorDetails {
    /// Field-level validation errors, in the order the API reported them.
    pub validation_errors: Vec<ValidationError>,

    /// Fault message.
    pub message: String,

    /// Fault identifier assigned by the API.
    pub id: String,

    /// Fault type, for example `VALIDATION`.
    #[serde(rename = "type")]
    pub kind: String,

    pub info: String,

    /// Fault code, for example `Error.004.0002`.
    pub code: String,
}

impl ErrorDetails {
    /// Joins all validation errors as `"{fieldId}: {fieldMessage}"` pairs,
    /// order preserved. Falls back to the fault message when the API
    /// reported no field-level errors.
    pub fn detail(&self) -> String {
        if self.validation_errors.is_empty() {
            return self.message.clone();
        }
        self.validation_errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// One field-level validation error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationError {
    pub field_id: String,
    pub field_message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_id, self.field_message)
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Method, StatusCode};
    use url::Url;

    use super::{ApiError, ErrorDetails, ErrorEnvelope, ValidationError};

    fn validation_error(field_id: &str, field_message: &str) -> ValidationError {
        ValidationError {
            field_id: field_id.to_owned(),
            field_message: field_message.to_owned(),
        }
    }

    #[test]
    fn joins_validation_errors_in_reported_order() {
        let details = ErrorDetails {
            validation_errors: vec![
                validation_error("data.invoiceLine", "required"),
                validation_error("data.issueDate", "bad format"),
            ],
            ..ErrorDetails::default()
        };
        assert_eq!(
            details.detail(),
            "data.invoiceLine: required; data.issueDate: bad format"
        );
    }

    #[test]
    fn detail_falls_back_to_fault_message() {
        let details = ErrorDetails {
            message: "401 Unauthorized".to_owned(),
            ..ErrorDetails::default()
        };
        assert_eq!(details.detail(), "401 Unauthorized");
    }

    #[test]
    fn api_error_renders_method_url_status_and_detail() {
        let error = ApiError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            method: Method::POST,
            url: Url::parse("https://test-api.basware.com/v1/invoices/abc-123").expect("valid url"),
            envelope: ErrorEnvelope {
                version: "1.0".to_owned(),
                errors: ErrorDetails {
                    validation_errors: vec![validation_error("data.invoiceLine", "required")],
                    info: "Required field is missing".to_owned(),
                    ..ErrorDetails::default()
                },
            },
        };
        assert_eq!(
            error.to_string(),
            "POST https://test-api.basware.com/v1/invoices/abc-123: 422 \
             (data.invoiceLine: required Required field is missing)"
        );
    }

    #[test]
    fn envelope_decodes_partial_payloads() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"errors":{"message":"boom"}}"#).expect("partial decode");
        assert_eq!(envelope.errors.message, "boom");
        assert!(envelope.errors.validation_errors.is_empty());
        assert!(envelope.version.is_empty());
    }

    #[test]
    fn envelope_decodes_full_payloads() {
        let payload = r#"{
            "version": "1.0",
            "errors": {
                "validationErrors": [
                    {"fieldId": "data.invoiceLine", "fieldMessage": "required"}
                ],
                "message": "Required field is missing",
                "id": "9ee67962-d927-4235-b557-46267e8b743d",
                "type": "VALIDATION",
                "info": "Required field is missing",
                "code": "Error.004.0002"
            }
        }"#;
        let envelope: ErrorEnvelope = serde_json::from_str(payload).expect("full decode");
        assert_eq!(envelope.version, "1.0");
        assert_eq!(envelope.errors.kind, "VALIDATION");
        assert_eq!(envelope.errors.code, "Error.004.0002");
        assert_eq!(envelope.errors.validation_errors.len(), 1);
        assert_eq!(envelope.errors.detail(), "data.invoiceLine: required");
    }
}
