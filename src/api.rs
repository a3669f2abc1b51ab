//! Client for the activities REST backend.
//!
//! The three calls mirror the backend routes one to one. URL building and
//! response interpretation are kept in free functions so they can be tested
//! without a browser.

use gloo_net::http::Request;
use serde_json::Value;
use urlencoding::encode;

use crate::error::{ApiError, Result};
use crate::model::{json_text, parse_activities, Activity, ErrorBody};

pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base.trim_end_matches('/'))
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/signup?email={}",
        activities_url(base),
        encode(activity),
        encode(email)
    )
}

pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/{}/participants?email={}",
        activities_url(base),
        encode(activity),
        encode(email)
    )
}

/// Interprets a `GET /activities` response.
pub fn activities_response(ok: bool, status: u16, text: &str) -> Result<Vec<Activity>> {
    if !ok {
        return Err(ApiError::Backend {
            status,
            body: ErrorBody::parse_lenient(text),
        });
    }
    Ok(parse_activities(text)?)
}

/// Interprets a signup response. Returns the backend's confirmation
/// `message`; a body that is not JSON is a parse error whatever the status.
pub fn signup_response(ok: bool, status: u16, text: &str) -> Result<String> {
    let body: Value = serde_json::from_str(text)?;
    if !ok {
        return Err(ApiError::Backend {
            status,
            body: ErrorBody::from_value(&body),
        });
    }
    Ok(body.get("message").and_then(json_text).unwrap_or_default())
}

/// Interprets an unregister response. A 2xx is success regardless of body.
pub fn unregister_response(ok: bool, status: u16, text: &str) -> Result<()> {
    if ok {
        return Ok(());
    }
    Err(ApiError::Backend {
        status,
        body: ErrorBody::parse_lenient(text),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitiesApi {
    base: String,
}

impl ActivitiesApi {
    /// `base` is the backend origin; empty means same origin as the page.
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
        }
    }

    /// GET /activities
    pub async fn fetch_activities(&self) -> Result<Vec<Activity>> {
        let resp = Request::get(&activities_url(&self.base)).send().await?;
        let text = resp.text().await?;
        activities_response(resp.ok(), resp.status(), &text)
    }

    /// POST /activities/{activity}/signup?email=...
    pub async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let resp = Request::post(&signup_url(&self.base, activity, email))
            .send()
            .await?;
        let text = resp.text().await?;
        signup_response(resp.ok(), resp.status(), &text)
    }

    /// DELETE /activities/{activity}/participants?email=...
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let resp = Request::delete(&unregister_url(&self.base, activity, email))
            .send()
            .await?;
        let text = if resp.ok() {
            String::new()
        } else {
            resp.text().await.unwrap_or_default()
        };
        unregister_response(resp.ok(), resp.status(), &text)
    }
}
