//! Microsoft Entra ID (Azure AD) identity provider.
//!
//! Implements the v2.0 authorization-code flow for a confidential client.
//! Account claims are read from the `id_token` payload without signature
//! verification; the token arrives directly from the token endpoint over
//! TLS.

use crate::auth::{
    domain::{AccessToken, OAuthState, TokenGrant},
    ports::{IdentityProvider, IdentityProviderError, IdentityProviderResult},
};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

/// Scopes always requested alongside the configured ones.
const RESERVED_SCOPES: [&str; 3] = ["offline_access", "openid", "profile"];

/// Client registration used against Entra ID.
#[derive(Debug, Clone)]
pub struct EntraConfig {
    /// Application (client) identifier.
    pub client_id: String,
    /// Client secret.
    pub client_secret: String,
    /// Directory (tenant) identifier.
    pub tenant_id: String,
    /// Redirect URI registered for the application.
    pub redirect_uri: Url,
    /// Authority host, e.g. `https://login.microsoftonline.com`.
    pub authority_host: Url,
    /// Delegated scopes requested for Graph.
    pub scopes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Identity provider backed by the Entra ID v2.0 endpoints.
#[derive(Debug, Clone)]
pub struct EntraIdentityProvider {
    config: EntraConfig,
    http: reqwest::Client,
}

impl EntraIdentityProvider {
    /// Creates the provider.
    #[must_use]
    pub const fn new(config: EntraConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    fn endpoint(&self, leaf: &str) -> Url {
        let mut url = self.config.authority_host.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend([self.config.tenant_id.as_str(), "oauth2", "v2.0", leaf]);
        }
        url
    }

    fn scope(&self) -> String {
        self.config
            .scopes
            .iter()
            .map(String::as_str)
            .chain(RESERVED_SCOPES)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Decodes the claims segment of a compact JWT.
///
/// Returns `None` for anything that is not three dot-separated segments with
/// a base64url JSON object in the middle.
pub fn decode_id_token_claims(id_token: &str) -> Option<Value> {
    let mut segments = id_token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) => payload,
        _ => return None,
    };
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;
    claims.is_object().then_some(claims)
}

#[async_trait]
impl IdentityProvider for EntraIdentityProvider {
    fn authorization_url(&self, state: &OAuthState) -> Url {
        let mut url = self.endpoint("authorize");
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", self.config.redirect_uri.as_str())
            .append_pair("response_mode", "query")
            .append_pair("scope", &self.scope())
            .append_pair("state", state.as_str());
        url
    }

    async fn exchange_code(&self, code: &str) -> IdentityProviderResult<TokenGrant> {
        let scope = self.scope();
        let form = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", scope.as_str()),
        ];
        debug!(tenant = %self.config.tenant_id, "exchanging authorization code");

        let response = self
            .http
            .post(self.endpoint("token"))
            .form(&form)
            .send()
            .await
            .map_err(IdentityProviderError::transport)?;
        let body: TokenResponse = response
            .json()
            .await
            .map_err(|err| IdentityProviderError::InvalidResponse(err.to_string()))?;

        if let Some(code) = body.error {
            let description = body.error_description.unwrap_or_else(|| code.clone());
            error!(error = %code, "token exchange rejected");
            return Err(IdentityProviderError::Rejected {
                error: code,
                description,
            });
        }

        let access_token = body
            .access_token
            .ok_or_else(|| {
                IdentityProviderError::InvalidResponse("missing access_token".to_owned())
            })
            .and_then(|token| {
                AccessToken::new(token)
                    .map_err(|err| IdentityProviderError::InvalidResponse(err.to_string()))
            })?;
        let account = body.id_token.as_deref().and_then(decode_id_token_claims);
        Ok(TokenGrant::new(access_token, account))
    }
}
