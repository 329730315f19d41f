//! Google OAuth sign-in (alternative identity provider).

use crate::net::api::{self, ApiError};
use crate::net::types::TokenPair;

/// Google authorization URL for the given client and redirect target.
pub fn authorize_url(client_id: &str, redirect_uri: &str) -> String {
    format!(
        "https://accounts.google.com/o/oauth2/v2/auth\
         ?client_id={client_id}\
         &redirect_uri={redirect_uri}\
         &response_type=code\
         &scope=openid+email+profile"
    )
}

/// Redirect to Google's authorization page.
pub fn initiate() {
    let redirect_uri = format!("{}/auth/google/callback", crate::services::frontend_origin());
    let client_id = option_env!("TRIEDTHAT_GOOGLE_CLIENT_ID").unwrap_or("");
    crate::services::full_page_redirect(&authorize_url(client_id, &redirect_uri));
}

/// Exchange a Google authorization code for a session token pair; the
/// caller hands the pair to the login operation.
pub async fn handle_callback(code: &str) -> Result<TokenPair, ApiError> {
    api::google_callback(code).await
}
