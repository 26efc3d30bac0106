use serde::{Deserialize, Serialize};

use crate::client::{Client, render_endpoint};
use crate::error::Error;
use crate::types::{FileRef, Link};

const ENDPOINT: &str = "v1/files/{bumId}";

/// Operations on the `v1/files` resource.
///
/// Attachments are uploaded here first; the returned [`FileRef`] is then
/// referenced from an invoice or credit note submission.
pub struct FilesService<'a> {
    client: &'a Client,
}

impl<'a> FilesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches stored attachment metadata and content.
    pub async fn get(&self, params: &FilePathParams) -> Result<FileGetResponse, Error> {
        self.client
            .get(&render_endpoint(ENDPOINT, &params.bum_id))
            .await
    }

    /// Uploads an attachment. Retries of the same logical upload must
    /// reuse the body's `client_token`.
    pub async fn post(
        &self,
        params: &FilePathParams,
        body: &FilePostRequestBody,
    ) -> Result<FilePostResponse, Error> {
        self.client
            .post(&render_endpoint(ENDPOINT, &params.bum_id), body)
            .await
    }
}

/// Path parameters addressing one file attachment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilePathParams {
    /// Business document identifier, substituted verbatim into the path.
    pub bum_id: String,
}

impl FilePathParams {
    pub fn new(bum_id: impl Into<String>) -> Self {
        Self {
            bum_id: bum_id.into(),
        }
    }
}

/// A stored file attachment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    pub file_type: String,

    /// Reference identifier usable in invoice and credit note `fileRefs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,

    /// Base64-encoded file content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// A file attachment as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileGetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<FileData>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A file attachment upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilePostRequestBody {
    /// Caller-generated idempotency token (uuid), reused across retries of
    /// the same logical upload.
    pub client_token: String,

    pub file_name: String,

    /// Attachment type, for example `image`.
    pub file_type: String,

    /// Base64-encoded file content.
    pub data: String,
}

/// Result of a file upload: the reference to attach to a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilePostResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<FileRef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
