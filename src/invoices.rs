use serde::{Deserialize, Serialize};

use crate::client::{Client, render_endpoint};
use crate::error::Error;
use crate::types::{DocumentData, FileRef, Link};

const ENDPOINT: &str = "v1/invoices/{bumId}";

/// Operations on the `v1/invoices` resource.
///
/// Obtained from [`Client::invoices`]; borrows the client and shares its
/// configuration and connection pool.
pub struct InvoicesService<'a> {
    client: &'a Client,
}

impl<'a> InvoicesService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches an invoice by business document identifier.
    pub async fn get(&self, params: &InvoicePathParams) -> Result<InvoiceGetResponse, Error> {
        self.client
            .get(&render_endpoint(ENDPOINT, &params.bum_id))
            .await
    }

    /// Submits an invoice.
    ///
    /// The body's `client_token` is the idempotency token: retries of the
    /// same logical submission must reuse it so the API processes the
    /// invoice at most once.
    pub async fn post(
        &self,
        params: &InvoicePathParams,
        body: &InvoicePostRequestBody,
    ) -> Result<InvoicePostResponse, Error> {
        self.client
            .post(&render_endpoint(ENDPOINT, &params.bum_id), body)
            .await
    }
}

/// Path parameters addressing one invoice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePathParams {
    /// Business document identifier. Substituted verbatim into the path;
    /// callers supply URL-safe values.
    pub bum_id: String,
}

impl InvoicePathParams {
    pub fn new(bum_id: impl Into<String>) -> Self {
        Self {
            bum_id: bum_id.into(),
        }
    }
}

/// An invoice as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceGetResponse {
    pub data: DocumentData,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_refs: Vec<FileRef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    pub version: String,
}

/// An invoice submission. The business document can reference previously
/// uploaded attachments via `file_refs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePostRequestBody {
    /// Caller-generated token (uuid) used to verify that a specific
    /// invoice is sent and processed only once. If the response times out,
    /// the retry must be executed with the same token.
    pub client_token: String,

    pub data: DocumentData,

    /// Routing preference: `printing-always` goes for printing,
    /// `only-eInvoicing` for normal processing, `printing-allowed` tries
    /// e-invoicing first and falls back to printing. Empty defaults to
    /// `only-eInvoicing`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_channel_preference: Option<String>,

    /// File/attachment reference identifiers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_refs: Vec<FileRef>,

    /// Identifier for the intermediate service provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider_id: Option<String>,
}

/// Result of an invoice submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoicePostResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DocumentData>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub file_refs: Vec<FileRef>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
