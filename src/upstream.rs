use crate::models::OverviewSnapshot;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("session expired or not authorized")]
    Unauthorized,
    #[error("stats backend unavailable: {0}")]
    Upstream(String),
}

/// Fetch the pre-aggregated overview for `[from, to]` from the stats backend.
/// The window is passed through uninspected; the backend owns interpretation
/// of inverted or malformed boundaries.
pub async fn fetch_overview(
    client: &Client,
    backend_url: &str,
    from: &str,
    to: &str,
) -> Result<OverviewSnapshot, FetchError> {
    let url = format!("{backend_url}/api/stats/overview");
    let response = client
        .get(url)
        .query(&[("from", from), ("to", to)])
        .send()
        .await
        .map_err(|err| {
            warn!("stats backend request failed: {err}");
            FetchError::Upstream(err.to_string())
        })?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(FetchError::Unauthorized);
    }
    if !status.is_success() {
        warn!("stats backend returned {status}");
        return Err(FetchError::Upstream(format!("backend returned {status}")));
    }

    response
        .json()
        .await
        .map_err(|err| FetchError::Upstream(err.to_string()))
}
