use crate::error::Error;
use std::time::Duration;

/// What a single availability check of the site returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteProbe {
    pub status_code: reqwest::StatusCode,
    pub response_time: Duration,
    /// Whether the brand substring occurs in the response body.
    pub brand_found: bool,
}

/// Builds the HTTP client used for the site availability check.
///
/// # Arguments
///
/// * `user_agent` - The `User-Agent` header sent with the request.
/// * `timeout_secs` - Upper bound for the whole request, in seconds.
pub fn build_client(user_agent: &str, timeout_secs: u64) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| Error::Unexpected(format!("Could not build HTTP client: {}", e)))
}

/// Fetches `url` once and records the status code, the elapsed time and
/// whether `brand` appears in the body.
///
/// Non-success status codes are not errors: they are part of the probe.
/// Timeouts, connection failures and unreadable bodies are returned as
/// [`Error::Network`] for the caller to record.
pub async fn probe_site(
    url: &str,
    brand: &str,
    client: &reqwest::Client,
) -> Result<SiteProbe, Error> {
    let start_time = tokio::time::Instant::now();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::network(url, &e))?;

    let status_code = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::network(url, &e))?;
    let response_time = start_time.elapsed();

    log::debug!(
        "Probed {} -> {} in {}ms ({} bytes)",
        url,
        status_code,
        response_time.as_millis(),
        body.len()
    );

    Ok(SiteProbe {
        status_code,
        response_time,
        brand_found: !brand.is_empty() && body.contains(brand),
    })
}
