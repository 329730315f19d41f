//! Serde types for the triedthat.io REST API.
//!
//! Shapes mirror the backend's JSON exactly. Author fields on an
//! [`Experience`] are null when the entry is anonymized.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Current-user snapshot returned by `GET /api/me`.
///
/// Owned by the auth context while a session is live; never persisted
/// locally and discarded on logout or any check failure.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_picture_url: Option<String>,
}

/// Bearer token pair issued by a login or OAuth callback.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Response body of `POST /api/refresh`.
#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Response body of `GET /api/auth/linkedin/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthUrl {
    pub auth_url: String,
}

/// One experience entry as returned by `GET /api/experience`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub raw_text: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub anonymize: bool,
    #[serde(default)]
    pub fields_extracted: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

impl Experience {
    /// Author display name, falling back when the entry is anonymized or
    /// the profile is incomplete.
    pub fn author_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => "Anonymous LinkedIn User".to_owned(),
        }
    }
}

/// Envelope of `GET /api/experience`.
#[derive(Clone, Debug, Deserialize)]
pub struct ExperienceList {
    pub results: Vec<Experience>,
}

/// Request body of `POST /api/experience/submit`.
///
/// `existing_experience_id` switches the backend from create to update.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_experience_id: Option<i64>,
    pub experience_name: String,
    pub experience: String,
    pub anonymize: bool,
}

/// Response body of `POST /api/experience/submit`: for each extraction
/// field, whether the submitted text addressed it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub fields_extracted: BTreeMap<String, bool>,
}

impl SubmitResponse {
    /// `(addressed, total)` counts for the report summary line.
    pub fn summary(&self) -> (usize, usize) {
        let total = self.fields_extracted.len();
        let found = self.fields_extracted.values().filter(|v| **v).count();
        (found, total)
    }
}
