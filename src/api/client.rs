/// Employee list fetcher
///
/// Issues the single GET request the dashboard depends on and converts every
/// way it can go wrong (transport, status, body) into a `FetchError`. No
/// failure escapes past this boundary to the rendering layer.

use thiserror::Error;

use crate::state::data::{parse_employees, Employee};

/// Base URL of the reverse proxy fronting the REST API.
/// Which backend it forwards to is the proxy's concern, not the dashboard's.
pub const SERVER_BASE: &str = "http://127.0.0.1:8080";

/// Endpoint path serving the employee list
pub const USERS_ENDPOINT: &str = "/api/users/";

/// Everything a fetch cycle can fail with
///
/// The user sees one fixed message for all three; the variants exist so the
/// stderr diagnostics say what actually happened. Cloneable because the
/// result travels inside an application message.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body was not a valid employee list
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Fetch the employee list from `{base_url}/api/users/`
///
/// `base_url` is always `SERVER_BASE` in the application; tests pass the
/// address of a mock server instead.
pub async fn fetch_employees(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Employee>, FetchError> {
    let url = format!("{}{}", base_url, USERS_ENDPOINT);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    parse_employees(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
