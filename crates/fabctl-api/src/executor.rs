// CRUD executor
//
// Uniform verb protocol over the controller's REST endpoints. Every verb
// is a single fail-fast attempt: the outcome is classified by
// `status::is_success`, success becomes an `Outcome`, failure becomes an
// `Error::Execution` carrying the URL, submitted body, and server
// message. Transport failures are recorded under the `NO_CONNECTION`
// sentinel status and classified through the same predicate.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::registry::ResourceKind;
use crate::resolver::Condition;
use crate::session::{ACCESS_TOKEN_HEADER, Session, preview};
use crate::status;

/// The success half of an operation result.
///
/// Carries the HTTP method used, the final URL, the raw response body
/// and status, and whether controller state was changed.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub method: String,
    pub url: String,
    pub status: i64,
    pub response: String,
    pub changed: bool,
    pub message: String,
    /// The submitted request body, echoed back by a successful
    /// [`Session::operate`]. Absent for the named verbs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Body forms accepted by [`Session::operate`].
#[derive(Debug, Clone)]
pub enum OperateBody {
    /// Structured payload, JSON-encoded before sending.
    Json(Value),
    /// Pre-serialized payload, sent as-is.
    Raw(String),
}

impl OperateBody {
    fn into_string(self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Raw(text) => text,
        }
    }
}

impl Session {
    /// POST `body` to `url`. Success reports "Create success" with
    /// `changed = true`; failure embeds the attempted body.
    pub async fn create(&self, url: Url, body: &Value) -> Result<Outcome, Error> {
        self.execute(Method::POST, url, Some(body.to_string()), "Create success")
            .await
    }

    /// PUT `body` to `url`. Same shape as [`create`](Self::create) with
    /// "Update success".
    pub async fn update(&self, url: Url, body: &Value) -> Result<Outcome, Error> {
        self.execute(Method::PUT, url, Some(body.to_string()), "Update success")
            .await
    }

    /// DELETE `url`. No body is submitted, so the failure report omits
    /// one.
    pub async fn delete(&self, url: Url) -> Result<Outcome, Error> {
        self.execute(Method::DELETE, url, None, "Delete success").await
    }

    /// GET the collection for `kind` and return its records.
    ///
    /// The response body is decoded as JSON and the array under
    /// `kind.key()` extracted (absent or null key yields an empty list).
    /// When `condition` is supplied the records are filtered client-side
    /// by exact field equality; server order is preserved either way.
    pub async fn query(
        &self,
        kind: ResourceKind,
        condition: Option<&Condition>,
    ) -> Result<Vec<Value>, Error> {
        let url = self.collection_url(kind);
        debug!("GET {url}");

        let (status, text) = self.send(Method::GET, url.clone(), None).await;
        if !status::is_success(status) {
            return Err(Error::Execution {
                method: Method::GET.to_string(),
                url: url.to_string(),
                status,
                message: preview(&text),
                body: None,
            });
        }

        let value: Value = serde_json::from_str(&text).map_err(|e| Error::Deserialization {
            message: format!("query response is not JSON: {e}"),
            body: text.clone(),
        })?;

        let records = match value.get(kind.key()) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(_) => {
                return Err(Error::Deserialization {
                    message: format!("expected an array under '{}'", kind.key()),
                    body: text,
                });
            }
        };

        Ok(match condition {
            Some(condition) => condition.filter(records),
            None => records,
        })
    }

    /// Generic verb dispatch for endpoints the registry does not model.
    ///
    /// `path` may be absolute (`http…`) or controller-relative. The body
    /// may be omitted, structured JSON, or a pre-serialized string.
    pub async fn operate(
        &self,
        path: &str,
        method: Method,
        body: Option<OperateBody>,
    ) -> Result<Outcome, Error> {
        let url = self.request_url(path)?;
        let body = body.map(OperateBody::into_string);
        let mut outcome = self
            .execute(method, url, body.clone(), "Operate success")
            .await?;
        outcome.body = body;
        Ok(outcome)
    }

    // ── Internals ───────────────────────────────────────────────────

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
        success_message: &str,
    ) -> Result<Outcome, Error> {
        debug!("{method} {url}");

        let (status, text) = self.send(method.clone(), url.clone(), body.clone()).await;

        if status::is_success(status) {
            Ok(Outcome {
                method: method.to_string(),
                url: url.to_string(),
                status,
                response: text,
                changed: true,
                message: success_message.to_owned(),
                body: None,
            })
        } else {
            Err(Error::Execution {
                method: method.to_string(),
                url: url.to_string(),
                status,
                message: preview(&text),
                body,
            })
        }
    }

    /// Single attempt: returns the HTTP status and body text, or the
    /// `NO_CONNECTION` sentinel with the transport error's message.
    async fn send(&self, method: Method, url: Url, body: Option<String>) -> (i64, String) {
        let mut request = self
            .http()
            .request(method, url)
            .header(ACCESS_TOKEN_HEADER, self.token());
        if let Some(body) = body {
            request = request.body(body);
        }

        match request.send().await {
            Err(e) => (status::NO_CONNECTION, e.to_string()),
            Ok(resp) => {
                let status = i64::from(resp.status().as_u16());
                (status, resp.text().await.unwrap_or_default())
            }
        }
    }
}
