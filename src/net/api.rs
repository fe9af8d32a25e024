//! REST API helpers for the activities backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: `HttpActivityApi` reports a network error, since these
//! endpoints are only reachable from the browser. Tests drive the board
//! through their own `ActivityApi` implementation instead.
//!
//! ERROR HANDLING
//! ==============
//! Status and body interpretation lives in plain functions so the mapping
//! from HTTP outcome to `ApiError` is testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;
use super::types::{ActivityCatalog, SignupAck};
use crate::config::BoardConfig;

/// Backend operations the board depends on.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    /// `GET /activities`.
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`.
    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupAck, ApiError>;

    /// `DELETE /activities/{activity}/participants?email={email}`.
    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), ApiError>;
}

impl<T: ActivityApi> ActivityApi for std::rc::Rc<T> {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        (**self).fetch_activities().await
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupAck, ApiError> {
        (**self).sign_up(activity, email).await
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        (**self).remove_participant(activity, email).await
    }
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn activities_endpoint(base: &str) -> String {
    format!("{base}/activities")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn signup_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn participants_endpoint(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{base}/activities/{}/participants?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// Map a catalog response onto the catalog or a load error.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn interpret_catalog(ok: bool, status: u16, body: &str) -> Result<ActivityCatalog, ApiError> {
    if !ok {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a signup response. A body that is not JSON at all counts as a decode
/// failure, so the caller treats it like a dropped connection. Any JSON is
/// accepted otherwise; `message` is read only from an object.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn interpret_signup(ok: bool, status: u16, body: &str) -> Result<SignupAck, ApiError> {
    let value = parse_json(body)?;
    if ok {
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned();
        Ok(SignupAck { message })
    } else {
        Err(rejection(status, value))
    }
}

/// Map a removal response. Any JSON body is accepted on success.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn interpret_removal(ok: bool, status: u16, body: &str) -> Result<(), ApiError> {
    let value = parse_json(body)?;
    if ok { Ok(()) } else { Err(rejection(status, value)) }
}

#[cfg(any(test, feature = "csr"))]
fn parse_json(body: &str) -> Result<serde_json::Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// A JSON failure body that is not an object carries no text for the user.
#[cfg(any(test, feature = "csr"))]
fn rejection(status: u16, value: serde_json::Value) -> ApiError {
    let body = if value.is_object() {
        serde_json::from_value::<ErrorBody>(value).unwrap_or_default()
    } else {
        ErrorBody::default()
    };
    ApiError::Rejected { status, body }
}

/// `ActivityApi` over the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct HttpActivityApi {
    base: String,
}

impl HttpActivityApi {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            base: config.api_base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

#[cfg(feature = "csr")]
async fn read_response(request: gloo_net::http::RequestBuilder) -> Result<(bool, u16, String), ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    Ok((ok, status, body))
}

impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = activities_endpoint(&self.base);
            let (ok, status, body) = read_response(gloo_net::http::Request::get(&url)).await?;
            interpret_catalog(ok, status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupAck, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = signup_endpoint(&self.base, activity, email);
            let (ok, status, body) = read_response(gloo_net::http::Request::post(&url)).await?;
            interpret_signup(ok, status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = participants_endpoint(&self.base, activity, email);
            let (ok, status, body) = read_response(gloo_net::http::Request::delete(&url)).await?;
            interpret_removal(ok, status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (activity, email);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}
