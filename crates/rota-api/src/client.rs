//! Planning backend HTTP client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use rota_core::Station;

use crate::error::ApiError;

/// Which station directory a render pass works from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StationScope {
    /// Active stations only (`/stations`) - the user-facing route view.
    #[default]
    Active,
    /// Every station including passive ones (`/admin/stations`) - the
    /// admin planning-result view.
    All,
}

impl StationScope {
    fn path(self) -> &'static str {
        match self {
            StationScope::Active => "/stations",
            StationScope::All => "/admin/stations",
        }
    }
}

/// Client for the route planning backend.
#[derive(Debug, Clone)]
pub struct PlannerClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ExpandRouteRequest<'a> {
    station_ids: &'a [i64],
}

#[derive(Debug, Deserialize)]
struct ExpandRouteResponse {
    expanded_station_ids: Vec<i64>,
}

impl PlannerClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch the station directory for the given scope.
    ///
    /// Called once per render cycle and shared by all routes in it.
    pub async fn fetch_stations(&self, scope: StationScope) -> Result<Vec<Station>, ApiError> {
        let url = format!("{}{}", self.base_url, scope.path());
        tracing::debug!(url = %url, "fetching station directory");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("station directory request failed: {e}");
            ApiError::DirectoryUnavailable(e.to_string())
        })?;

        if !response.status().is_success() {
            tracing::error!(status = %response.status(), "station directory returned an error");
            return Err(ApiError::DirectoryUnavailable(format!(
                "{} returned {}",
                scope.path(),
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("station directory body could not be parsed: {e}");
            ApiError::DirectoryUnavailable(e.to_string())
        })
    }

    /// Expand an ordered stop sequence into the full travel path,
    /// inclusive of the original stops.
    pub async fn expand_route(&self, station_ids: &[i64]) -> Result<Vec<i64>, ApiError> {
        let url = format!("{}/graph/expand-route", self.base_url);
        tracing::debug!(stops = station_ids.len(), "expanding route");

        let response = self
            .client
            .post(&url)
            .json(&ExpandRouteRequest { station_ids })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("route expansion request failed: {e}");
                ApiError::ExpansionFailed(e.to_string())
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "route expansion returned an error");
            return Err(ApiError::ExpansionFailed(format!(
                "expand-route returned {}",
                response.status()
            )));
        }

        let body: ExpandRouteResponse = response.json().await.map_err(|e| {
            tracing::warn!("route expansion body could not be parsed: {e}");
            ApiError::ExpansionFailed(e.to_string())
        })?;

        Ok(body.expanded_station_ids)
    }
}
