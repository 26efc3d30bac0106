use serde::{Deserialize, Serialize};

use crate::client::{Client, render_endpoint};
use crate::error::Error;
use crate::types::{DocumentData, FileRef, Link};

const ENDPOINT: &str = "v1/creditNotes/{bumId}";

/// Operations on the `v1/creditNotes` resource.
///
/// Credit notes carry the same business document payload as invoices; the
/// document's billing reference points back at the invoice being credited.
pub struct CreditNotesService<'a> {
    client: &'a Client,
}

impl<'a> CreditNotesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches a credit note by business document identifier.
    pub async fn get(&self, params: &CreditNotePathParams) -> Result<CreditNoteGetResponse, Error> {
        self.client
            .get(&render_endpoint(ENDPOINT, &params.bum_id))
            .await
    }

    /// Submits a credit note. Retries of the same logical submission must
    /// reuse the body's `client_token`.
    pub async fn post(
        &self,
        params: &CreditNotePathParams,
        body: &CreditNotePostRequestBody,
    ) -> Result<CreditNotePostResponse, Error> {
        self.client
            .post(&render_endpoint(ENDPOINT, &params.bum_id), body)
            .await
    }
}

/// Path parameters addressing one credit note.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditNotePathParams {
    /// Business document identifier, substituted verbatim into the path.
    pub bum_id: String,
}

impl CreditNotePathParams {
    pub fn new(bum_id: impl Into<String>) -> Self {
        Self {
            bum_id: bum_id.into(),
        }
    }
}

/// A credit note as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditNoteGetResponse {
    pub data: DocumentData,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_refs: Vec<FileRef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    pub version: String,
}

/// A credit note submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditNotePostRequestBody {
    /// Caller-generated idempotency token (uuid), reused across retries of
    /// the same logical submission.
    pub client_token: String,

    pub data: DocumentData,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_channel_preference: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_refs: Vec<FileRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider_id: Option<String>,
}

/// Result of a credit note submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditNotePostResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DocumentData>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_refs: Vec<FileRef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
