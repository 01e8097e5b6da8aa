//! Render pipeline task: expansion fan-out, cancellation, state publishing.

use std::collections::HashMap;

use futures_util::future::join_all;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use rota_api::{ApiError, PlannerClient, StationScope};
use rota_core::{build_polyline, fit_bounds, RouteInput, Station};

use crate::state::RenderState;

/// Handle to a spawned render pipeline.
///
/// Feeding a new route set (or clearing) cancels any in-flight cycle and
/// drops its pending HTTP calls; a superseded cycle never publishes, so a
/// slow old request can never overwrite a newer result.
pub struct RenderPipeline {
    input: watch::Sender<Option<Vec<RouteInput>>>,
    state: watch::Receiver<RenderState>,
    task: JoinHandle<()>,
}

impl RenderPipeline {
    /// Spawn the pipeline task against the given backend.
    pub fn spawn(client: PlannerClient, scope: StationScope) -> Self {
        let (input_tx, input_rx) = watch::channel(None);
        let (state_tx, state_rx) = watch::channel(RenderState::cleared());
        let task = tokio::spawn(run(client, scope, input_rx, state_tx));
        Self {
            input: input_tx,
            state: state_rx,
            task,
        }
    }

    /// Trigger a render cycle for a new route set.
    pub fn set_routes(&self, routes: Vec<RouteInput>) {
        let _ = self.input.send(Some(routes));
    }

    /// Clear all rendered output without calling any service.
    pub fn clear(&self) {
        let _ = self.input.send(None);
    }

    /// Subscribe to published render states.
    pub fn subscribe(&self) -> watch::Receiver<RenderState> {
        self.state.clone()
    }
}

impl Drop for RenderPipeline {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    client: PlannerClient,
    scope: StationScope,
    mut input: watch::Receiver<Option<Vec<RouteInput>>>,
    state: watch::Sender<RenderState>,
) {
    let mut current = RenderState::cleared();

    loop {
        if input.changed().await.is_err() {
            break;
        }

        // Restart the cycle from scratch whenever the input changes before
        // the previous one settles.
        loop {
            let routes = match input.borrow_and_update().clone() {
                Some(routes) if !routes.is_empty() => routes,
                _ => {
                    current = RenderState::cleared();
                    let _ = state.send(current.clone());
                    break;
                }
            };

            // Keep the previous content visible while the cycle runs.
            let _ = state.send(RenderState {
                loading: true,
                ..current.clone()
            });

            tokio::select! {
                changed = input.changed() => {
                    if changed.is_err() {
                        return;
                    }
                    tracing::debug!("render cycle superseded before settling");
                }
                settled = render_cycle(&client, scope, &routes) => {
                    current = settled;
                    let _ = state.send(current.clone());
                    break;
                }
            }
        }
    }
}

/// Run one full render cycle: directory fetch, per-route expansion fan-out,
/// polyline assembly, viewport fit.
///
/// Expansions run concurrently but results are consumed in input order, so
/// color slots and display order never depend on completion order. A single
/// route's failure is caught here and turned into a warning entry; the rest
/// of the cycle still settles.
pub async fn render_cycle(
    client: &PlannerClient,
    scope: StationScope,
    routes: &[RouteInput],
) -> RenderState {
    let stations = match client.fetch_stations(scope).await {
        Ok(stations) => stations,
        Err(err) => {
            tracing::error!("station directory fetch failed: {err}");
            return RenderState::directory_failed();
        }
    };
    let directory: HashMap<i64, Station> = stations.iter().map(|s| (s.id, s.clone())).collect();

    // Routes without stops are ignored and never take a color slot.
    let attempted: Vec<&RouteInput> = routes.iter().filter(|r| !r.stop_ids.is_empty()).collect();
    let outcomes = join_all(attempted.iter().map(|route| expand_attempt(client, route))).await;

    let mut polylines = Vec::new();
    let mut failed: Vec<String> = Vec::new();
    for (index, (route, outcome)) in attempted.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(expanded) => {
                if let Some(line) = build_polyline(index, &route.label, &expanded, &directory) {
                    polylines.push(line);
                }
            }
            Err(err) => {
                tracing::warn!(route = %route.label, "route expansion failed: {err}");
                failed.push(format!("{}: path could not be computed", route.label));
            }
        }
    }

    let warning = if failed.is_empty() {
        None
    } else {
        Some(failed.join("; "))
    };
    let viewport = fit_bounds(&polylines, &stations);

    RenderState {
        stations,
        polylines,
        viewport,
        loading: false,
        warning,
    }
}

/// Single-stop routes skip the backend call: the stop list already is the
/// full path (the backend rejects sequences shorter than two), and a
/// one-point path is dropped downstream without counting as a failure.
async fn expand_attempt(client: &PlannerClient, route: &RouteInput) -> Result<Vec<i64>, ApiError> {
    if route.stop_ids.len() < 2 {
        return Ok(route.stop_ids.clone());
    }
    client.expand_route(&route.stop_ids).await
}
