use gloo_net::http::Request;
use log::debug;
use serde::de::DeserializeOwned;
use shared::{ConstructorWinsDto, DriverRankingDto, FetchError, WinsOverTimeDto};

use crate::api::api_url;

/// One read-only GET against a dashboard endpoint. No retries, no timeout;
/// the caller issues exactly one of these per widget mount.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetches the driver ranking. The range parameter is a backend limit hint
/// (top 10); the client renders whatever comes back without truncating.
pub async fn fetch_top_drivers(base_url: &str) -> Result<Vec<DriverRankingDto>, FetchError> {
    let url = format!(
        "{}?range=[0,9]",
        api_url(base_url, "/dashboard/top_drivers_by_wins")
    );
    let rows: Vec<DriverRankingDto> = get_json(&url).await?;
    debug!("Fetched {} top drivers", rows.len());
    Ok(rows)
}

/// Fetches constructor win totals, already ordered and capped by the backend.
pub async fn fetch_top_constructors(base_url: &str) -> Result<Vec<ConstructorWinsDto>, FetchError> {
    let url = api_url(base_url, "/dashboard/top_teams_by_wins");
    let rows: Vec<ConstructorWinsDto> = get_json(&url).await?;
    debug!("Fetched {} constructor win totals", rows.len());
    Ok(rows)
}

/// Fetches the flat (driver, year, wins) series; grouping happens client-side.
pub async fn fetch_wins_over_time(base_url: &str) -> Result<Vec<WinsOverTimeDto>, FetchError> {
    let url = api_url(base_url, "/dashboard/wins_over_time");
    let points: Vec<WinsOverTimeDto> = get_json(&url).await?;
    debug!("Fetched {} wins-over-time points", points.len());
    Ok(points)
}
