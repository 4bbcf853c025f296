//! Shared HTTP plumbing for the provider clients.

use std::time::Duration;

use crate::ProviderError;

pub(crate) fn build_http_client(request_timeout_secs: u64) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(request_timeout_secs))
        .build()
        .map_err(|e| ProviderError::Network(format!("failed to build HTTP client: {e}")))
}

pub(crate) fn map_send_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Network(err.to_string())
    }
}

/// Map a non-success status to the matching error variant.
pub(crate) fn status_error(status: reqwest::StatusCode, body: String) -> ProviderError {
    match status {
        reqwest::StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            ProviderError::Auth(format!("HTTP {status}: {body}"))
        }
        _ => ProviderError::Api(format!("HTTP {status}: {body}")),
    }
}

/// Check the status and decode the JSON body.
pub(crate) async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(status_error(status, text));
    }

    response
        .json()
        .await
        .map_err(|e| ProviderError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn too_many_requests_is_rate_limited() {
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
            ProviderError::RateLimited
        ));
    }

    #[test]
    fn unauthorized_and_forbidden_are_auth() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            assert!(matches!(
                status_error(status, "API key not valid".into()),
                ProviderError::Auth(_)
            ));
        }
    }

    #[test]
    fn other_failures_carry_status_and_body() {
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert_eq!(err.to_string(), "API error: HTTP 500 Internal Server Error: boom");
    }
}
