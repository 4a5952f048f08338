use std::time::Instant;

use cannonball_config::Settings;

use crate::{
    error::CompletionError,
    transport::ChatTransport,
    wire::{ChatRequest, ChatResponse},
};

/// Sends `system` and `user` as one chat request and returns the reply text.
///
/// Nothing is sent when the API key is blank. The first choice's content is
/// returned with trailing whitespace removed; leading whitespace such as a
/// newline before a new list item is kept. A choice with no content yields
/// an empty string. Failures are not retried.
pub async fn complete<T: ChatTransport>(
    system: &str,
    user: &str,
    settings: &Settings,
    transport: &T,
) -> Result<String, CompletionError> {
    let api_key = settings.resolved_api_key();
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(CompletionError::Config(
            "API key is not set; add `api_key` to the settings file".into(),
        ));
    }

    let request = ChatRequest::new(settings, system, user);
    let started = Instant::now();
    let response = transport
        .send(&request, api_key)
        .await
        .inspect_err(|e| log::warn!("completion with {} failed: {e}", settings.model))?;

    let text = first_choice_text(response)?;
    log::info!(
        "completion with {} returned {} chars in {} ms",
        settings.model,
        text.chars().count(),
        started.elapsed().as_millis()
    );
    Ok(text)
}

fn first_choice_text(response: ChatResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::EmptyResponse)?;
    let content = choice.message.content.unwrap_or_default();
    Ok(content.trim_end().to_string())
}
