use serde::{Deserialize, Serialize};

use crate::client::{Client, render_endpoint};
use crate::error::Error;
use crate::types::Link;

const ENDPOINT: &str = "v1/notifications/{bumId}";

/// Operations on the `v1/notifications` resource.
///
/// Notifications report delivery progress of a submitted business
/// document.
pub struct NotificationsService<'a> {
    client: &'a Client,
}

impl<'a> NotificationsService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists delivery notifications for a business document.
    pub async fn get(
        &self,
        params: &NotificationPathParams,
    ) -> Result<NotificationGetResponse, Error> {
        self.client
            .get(&render_endpoint(ENDPOINT, &params.bum_id))
            .await
    }

    /// Acknowledges notifications by identifier so they are not reported
    /// again.
    pub async fn post(
        &self,
        params: &NotificationPathParams,
        body: &NotificationPostRequestBody,
    ) -> Result<NotificationPostResponse, Error> {
        self.client
            .post(&render_endpoint(ENDPOINT, &params.bum_id), body)
            .await
    }
}

/// Path parameters addressing the notifications of one business document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPathParams {
    /// Business document identifier, substituted verbatim into the path.
    pub bum_id: String,
}

impl NotificationPathParams {
    pub fn new(bum_id: impl Into<String>) -> Self {
        Self {
            bum_id: bum_id.into(),
        }
    }
}

/// One delivery notification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    pub id: String,

    /// Business document the notification refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bum_id: Option<String>,

    /// Notification type, for example `DELIVERY`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Creation timestamp as reported by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Notifications for a business document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationGetResponse {
    pub data: Vec<Notification>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A notification acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPostRequestBody {
    /// Caller-generated idempotency token (uuid), reused across retries of
    /// the same logical acknowledgement.
    pub client_token: String,

    /// Identifiers of the notifications to acknowledge.
    pub notification_ids: Vec<String>,
}

/// Result of a notification acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationPostResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
