//! Asking the echo endpoint for our address

use anyhow::Context;
use anyhow::Result;

/// Fetch the current public IP from the echo endpoint
///
/// The response body is the bare address; surrounding whitespace is
/// trimmed, nothing else is validated.
///
/// # Errors
///
/// Will return `Err` when the endpoint is unreachable or answers with an
/// error status
pub async fn fetch(ip_server: &str) -> Result<String> {
    let response = reqwest::get(ip_server)
        .await
        .with_context(|| format!("could not reach the IP server at {ip_server}"))?
        .error_for_status()
        .context("the IP server did not return the address")?;

    let body = response
        .text()
        .await
        .context("could not read the IP server response")?;

    Ok(body.trim().to_string())
}
