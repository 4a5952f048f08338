use std::{future::Future, time::Duration};

use cannonball_config::Settings;

use crate::{
    error::{TransportError, make_snippet},
    wire::{ChatRequest, ChatResponse},
};

/// Delivers one chat request and returns the decoded response.
pub trait ChatTransport {
    fn send(
        &self,
        request: &ChatRequest,
        api_key: &str,
    ) -> impl Future<Output = Result<ChatResponse, TransportError>> + Send;
}

/// [`ChatTransport`] over HTTPS with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub const CHAT_PATH: &'static str = "/v1/chat/completions";

    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: Self::chat_url(endpoint),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, TransportError> {
        Self::new(
            &settings.endpoint,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn chat_url(endpoint: &str) -> String {
        format!("{}{}", endpoint.trim().trim_end_matches('/'), Self::CHAT_PATH)
    }
}

impl ChatTransport for HttpTransport {
    async fn send(
        &self,
        request: &ChatRequest,
        api_key: &str,
    ) -> Result<ChatResponse, TransportError> {
        log::debug!("POST {} model={}", self.url, request.model);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet = make_snippet(&body);
            log::error!("{} returned {status}: {snippet}", self.url);
            return Err(TransportError::Status { status, snippet });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("undecodable response from {}: {e}", self.url);
            TransportError::Decode(format!(
                "{e}; expected `choices[0].message.content`"
            ))
        })
    }
}
