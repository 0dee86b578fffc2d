mod org;
mod rde;
pub mod types;
mod vapp;

use std::time::Duration;

use reqwest::header::{
    ACCEPT,
    CONTENT_TYPE,
};
use reqwest::{
    RequestBuilder,
    StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::*;
use url::{
    Url,
    form_urlencoded,
};

use self::types::TokenResponse;
use crate::errors::*;
use crate::prelude::*;

err_impl! {pub VcdError,
    #[error("invalid control plane URL: {0}")]
    InvalidUrl(String),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("task failed: {0}")]
    TaskFailed(String),

    #[error("'{0}' cannot be used in a query filter")]
    InvalidFilterValue(String),
}

// Callers treat "not found" as a success case in a few places, so this is a typed check
// against the error chain rather than anything that looks at the message text.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|e| matches!(e.downcast_ref::<VcdError>(), Some(VcdError::EntityNotFound(_))))
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub api_version: String,
    pub insecure: bool,
    pub log_http: bool,
    pub task_poll_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            api_version: DEFAULT_API_VERSION.into(),
            insecure: false,
            log_http: false,
            task_poll_interval: DEFAULT_TASK_POLL_INTERVAL,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Api {
    Legacy,
    OpenApi,
}

/// An authenticated session against a single VCD organization.
///
/// The session is established once, with [`VcdClient::connect`], by exchanging a VCD API token
/// (which is really an OAuth refresh token) for a bearer access token.  Every subsequent call
/// goes out with that bearer token; there's no refresh, so a session is only good for as long as
/// the access token lives, which is plenty for a one-shot cleanup.
#[derive(Debug)]
pub struct VcdClient {
    http: reqwest::Client,
    root: String,
    endpoint: Url,
    org: String,
    access_token: String,
    config: SessionConfig,
}

impl VcdClient {
    pub async fn connect(url: &str, org: &str, api_token: &str, config: SessionConfig) -> anyhow::Result<VcdClient> {
        let root = url.trim_end_matches('/').to_string();
        let endpoint = Url::parse(&format!("{root}{LEGACY_API_PATH}"))
            .map_err(|err| VcdError::invalid_url(&format!("'{url}': {err}")))?;
        if endpoint.cannot_be_a_base() {
            return Err(VcdError::invalid_url(&format!("'{url}' is not a base URL")));
        }

        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .build()?;

        let mut client = VcdClient {
            http,
            root,
            endpoint,
            org: org.into(),
            access_token: String::new(),
            config,
        };
        client.access_token = client.exchange_api_token(api_token).await?;
        info!("authenticated to {} as a member of org {}", client.endpoint, client.org);

        Ok(client)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    async fn exchange_api_token(&self, api_token: &str) -> anyhow::Result<String> {
        let url = self.token_url()?;
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", "refresh_token")
            .append_pair("refresh_token", api_token)
            .finish();
        let req = self
            .http
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);

        // The response carries the access token, so don't echo it into the logs
        let (status, body) = self.send(req, true).await?;
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(VcdError::authentication_failed(&format!("{status} from {url}: {}", error_detail(&body))))
            },
            _ => {
                check_status(status, &url, &body)?;
                let token: TokenResponse = parse_body(&url, &body)?;
                Ok(token.access_token)
            },
        }
    }

    fn token_url(&self) -> anyhow::Result<Url> {
        if self.org.eq_ignore_ascii_case(SYSTEM_ORG) {
            return self.url_for(PROVIDER_TOKEN_PATH);
        }

        let mut url = self.url_for("")?;
        url.path_segments_mut()
            .map_err(|_| VcdError::invalid_url(&self.root))?
            .pop_if_empty()
            .extend(["oauth", "tenant", self.org.as_str(), "token"]);
        Ok(url)
    }

    pub(crate) fn url_for(&self, path: &str) -> anyhow::Result<Url> {
        Url::parse(&format!("{}{path}", self.root)).map_err(|err| VcdError::invalid_url(&format!("{path}: {err}")))
    }

    pub(crate) fn openapi_url(&self, path: &str) -> anyhow::Result<Url> {
        self.url_for(&format!("{OPENAPI_PATH}{path}"))
    }

    fn accept(&self, api: Api) -> String {
        match api {
            Api::Legacy => format!("application/*+json;version={}", self.config.api_version),
            Api::OpenApi => format!("application/json;version={}", self.config.api_version),
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, api: Api, url: Url) -> anyhow::Result<T> {
        let req = self
            .http
            .get(url.clone())
            .header(ACCEPT, self.accept(api))
            .bearer_auth(&self.access_token);
        let (status, body) = self.send(req, false).await?;
        check_status(status, &url, &body)?;
        parse_body(&url, &body)
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, api: Api, url: Url) -> anyhow::Result<T> {
        let (status, body) = self.send_delete(api, &url).await?;
        check_status(status, &url, &body)?;
        parse_body(&url, &body)
    }

    pub(crate) async fn delete(&self, api: Api, url: Url) -> EmptyResult {
        let (status, body) = self.send_delete(api, &url).await?;
        check_status(status, &url, &body)
    }

    async fn send_delete(&self, api: Api, url: &Url) -> anyhow::Result<(StatusCode, String)> {
        let req = self
            .http
            .delete(url.clone())
            .header(ACCEPT, self.accept(api))
            .bearer_auth(&self.access_token);
        self.send(req, false).await
    }

    async fn send(&self, req: RequestBuilder, redact_response: bool) -> anyhow::Result<(StatusCode, String)> {
        let req = req.build()?;
        if self.config.log_http {
            info!("--> {} {}", req.method(), req.url());
        }

        let resp = self.http.execute(req).await?;
        let status = resp.status();
        let url = resp.url().clone();
        let body = resp.text().await?;
        if self.config.log_http {
            if redact_response {
                info!("<-- {status} {url} <response body redacted>");
            } else {
                info!("<-- {status} {url} {body}");
            }
        }

        Ok((status, body))
    }
}

pub(crate) fn parse_href(href: &str) -> anyhow::Result<Url> {
    Url::parse(href).map_err(|err| VcdError::malformed_response(&format!("bad href '{href}': {err}")))
}

fn parse_body<T: DeserializeOwned>(url: &Url, body: &str) -> anyhow::Result<T> {
    serde_json::from_str(body).map_err(|err| VcdError::malformed_response(&format!("{url}: {err}")))
}

// VCD error bodies (both the legacy API and OpenAPI) carry a human-readable `message`;
// if the body isn't one of those, fall back to whatever text came back.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|err| err.message)
        .unwrap_or_else(|| body.trim().to_string())
}

fn check_status(status: StatusCode, url: &Url, body: &str) -> EmptyResult {
    if status.is_success() {
        return Ok(());
    }

    let detail = error_detail(body);
    match status {
        StatusCode::UNAUTHORIZED => Err(VcdError::authentication_failed(&format!("{url}: {detail}"))),
        StatusCode::FORBIDDEN => Err(VcdError::access_denied(&format!("{url}: {detail}"))),
        StatusCode::NOT_FOUND => Err(VcdError::entity_not_found(url.as_str())),
        _ => Err(VcdError::api_error(&format!("{status} from {url}: {detail}"))),
    }
}

#[cfg(test)]
mod tests;
