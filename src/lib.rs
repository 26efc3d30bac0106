//! Typed Rust client for the Basware invoicing REST API.
//!
//! Public API layers:
//! - [`Configuration`]: immutable credentials, hosts and header settings.
//! - [`Client`]: shared transport plus one service façade per API resource
//!   ([`InvoicesService`], [`CreditNotesService`], [`FilesService`],
//!   [`NotificationsService`]).
//! - [`Error`]: unified error type; API-reported faults carry a decoded
//!   [`ErrorEnvelope`].
//! - [`types`]: the UBL-derived business document data model.
//!
//! Every operation performs exactly one HTTPS round trip; retries are the
//! caller's responsibility and are supported through the idempotency
//! `client_token` carried in submission bodies. Set the debug flag on the
//! configuration to emit verbatim request/response dumps as `tracing`
//! debug events.

mod client;
mod config;
mod credit_notes;
mod error;
mod files;
mod invoices;
mod notifications;
pub mod types;

pub use client::{Client, REQUEST_ID_HEADER, RequestCompletionCallback};
pub use config::{Configuration, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use credit_notes::{
    CreditNoteGetResponse, CreditNotePathParams, CreditNotePostRequestBody, CreditNotePostResponse,
    CreditNotesService,
};
pub use error::{ApiError, Error, ErrorDetails, ErrorEnvelope, ValidationError};
pub use files::{
    FileData, FileGetResponse, FilePathParams, FilePostRequestBody, FilePostResponse, FilesService,
};
pub use invoices::{
    InvoiceGetResponse, InvoicePathParams, InvoicePostRequestBody, InvoicePostResponse,
    InvoicesService,
};
pub use notifications::{
    Notification, NotificationGetResponse, NotificationPathParams, NotificationPostRequestBody,
    NotificationPostResponse, NotificationsService,
};
