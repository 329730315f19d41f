//! REST helpers for the triedthat.io backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! header attached from stored tokens where an endpoint wants auth.
//! Outside the browser the same functions are inert stubs, so the crate
//! compiles and unit tests run on the host.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use crate::net::types::{Experience, SubmitRequest, SubmitResponse, TokenPair};
#[cfg(feature = "hydrate")]
use crate::net::types::{AuthUrl, ExperienceList, RefreshResponse, UserProfile};
use crate::session::flow::{AuthApi, MeOutcome};
#[cfg(feature = "hydrate")]
use crate::session::store::{BrowserTokens, TokenStore};

/// Failure modes of a backend call.
///
/// Mutation views surface these inline; the session check path maps them
/// into [`MeOutcome`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Http { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("entry not found")]
    NotFound,
    #[error("not available outside the browser")]
    Unavailable,
}

/// Query scope for `GET /api/experience`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExperienceFilter {
    pub experience_id: Option<i64>,
    pub user_id: Option<i64>,
    pub max_number: Option<u32>,
}

impl ExperienceFilter {
    /// Query string for the list endpoint, empty when unscoped.
    pub fn query(&self) -> String {
        let mut params = Vec::new();
        if let Some(id) = self.experience_id {
            params.push(format!("experienceId={id}"));
        }
        if let Some(id) = self.user_id {
            params.push(format!("userId={id}"));
        }
        if let Some(n) = self.max_number {
            params.push(format!("maxNumber={n}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// An id-scoped lookup must yield exactly one entry; anything else is
/// treated as "not found".
pub fn exactly_one(mut results: Vec<Experience>) -> Result<Experience, ApiError> {
    if results.len() == 1 {
        Ok(results.remove(0))
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(feature = "hydrate")]
fn bearer(
    req: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Attach the stored access token, if any. Listing endpoints take auth
/// optionally; the backend only uses it to reveal the caller's own
/// anonymized entries.
#[cfg(feature = "hydrate")]
fn stored_bearer(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let token = BrowserTokens.access_token();
    bearer(req, token.as_deref())
}

/// List experiences, optionally scoped by entry id, author id, and count.
pub async fn fetch_experiences(filter: ExperienceFilter) -> Result<Vec<Experience>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url(&format!("/api/experience{}", filter.query()));
        let resp = stored_bearer(gloo_net::http::Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Http {
                status: resp.status(),
            });
        }
        let list: ExperienceList = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(list.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filter;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single entry by id.
pub async fn fetch_experience(id: i64) -> Result<Experience, ApiError> {
    let results = fetch_experiences(ExperienceFilter {
        experience_id: Some(id),
        ..ExperienceFilter::default()
    })
    .await?;
    exactly_one(results)
}

/// Create a new entry, or update one when `existing_experience_id` is set.
pub async fn submit_experience(req: &SubmitRequest) -> Result<SubmitResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url("/api/experience/submit");
        let resp = stored_bearer(gloo_net::http::Request::post(&url))
            .json(req)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Http {
                status: resp.status(),
            });
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Delete an entry owned by the current user.
pub async fn delete_experience(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url(&format!("/api/experience?experienceId={id}"));
        let resp = stored_bearer(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ApiError::Http {
                status: resp.status(),
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Delete the current user and all their data.
pub async fn delete_account() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url("/api/delete-account");
        let resp = stored_bearer(gloo_net::http::Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ApiError::Http {
                status: resp.status(),
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend for the LinkedIn authorization URL.
pub async fn linkedin_auth_url() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url("/api/auth/linkedin/login");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Http {
                status: resp.status(),
            });
        }
        let body: AuthUrl = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.auth_url)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Exchange a LinkedIn authorization code for a session token pair.
pub async fn linkedin_callback(code: &str) -> Result<TokenPair, ApiError> {
    exchange_code("/api/auth/linkedin/callback", code).await
}

/// Exchange a Google authorization code for a session token pair.
pub async fn google_callback(code: &str) -> Result<TokenPair, ApiError> {
    exchange_code("/api/auth/google/callback", code).await
}

async fn exchange_code(path: &str, code: &str) -> Result<TokenPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url(path);
        let resp = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({ "code": code }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Http {
                status: resp.status(),
            });
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, code);
        Err(ApiError::Unavailable)
    }
}

/// Exchange a Vimeo authorization code, linking Vimeo to the current
/// session. Requires a live access token.
pub async fn vimeo_callback(code: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url("/api/vimeo/callback");
        let resp = stored_bearer(gloo_net::http::Request::post(&url))
            .json(&serde_json::json!({ "code": code }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ApiError::Http {
                status: resp.status(),
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err(ApiError::Unavailable)
    }
}

/// `AuthApi` backed by `gloo-net`, used by the live session flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooAuthApi;

impl AuthApi for GlooAuthApi {
    async fn fetch_me(&self, access: &str) -> MeOutcome {
        #[cfg(feature = "hydrate")]
        {
            let url = crate::net::config::api_url("/api/me");
            let resp = match bearer(gloo_net::http::Request::get(&url), Some(access))
                .header("Accept", "application/json")
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => return MeOutcome::Failed(e.to_string()),
            };
            if resp.ok() {
                match resp.json::<UserProfile>().await {
                    Ok(profile) => MeOutcome::Ok(profile),
                    Err(e) => MeOutcome::Failed(e.to_string()),
                }
            } else if resp.status() == 401 {
                MeOutcome::Unauthorized
            } else {
                MeOutcome::Failed(format!("status {}", resp.status()))
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access;
            MeOutcome::Failed("not available outside the browser".to_owned())
        }
    }

    async fn refresh(&self, refresh: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let url = crate::net::config::api_url("/api/refresh");
            let resp = bearer(gloo_net::http::Request::post(&url), Some(refresh))
                .send()
                .await
                .ok()?;
            if !resp.ok() {
                return None;
            }
            resp.json::<RefreshResponse>()
                .await
                .ok()
                .map(|r| r.access_token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh;
            None
        }
    }
}
