//! One-shot planning-result viewer: expands a route set against a live
//! backend and prints what the map would draw.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rota_api::{PlannerClient, StationScope};
use rota_core::RouteInput;
use rota_render::render_cycle;

#[derive(Parser)]
#[command(name = "rota", about = "Render a planning result against a rota backend")]
struct Args {
    /// JSON file holding the planning result routes:
    /// [{"label": "V1", "stop_ids": [10, 20]}, ...]
    routes: std::path::PathBuf,

    /// Backend base URL (falls back to ROTA_SERVER_URL)
    #[arg(long)]
    server: Option<String>,

    /// Use the admin directory, which includes passive stations
    #[arg(long)]
    all_stations: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let server = args.server.unwrap_or_else(|| {
        std::env::var("ROTA_SERVER_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
    });

    let raw = std::fs::read_to_string(&args.routes)
        .with_context(|| format!("reading {}", args.routes.display()))?;
    let routes: Vec<RouteInput> = serde_json::from_str(&raw).context("parsing route file")?;

    let scope = if args.all_stations {
        StationScope::All
    } else {
        StationScope::Active
    };
    let client = PlannerClient::new(server);
    let state = render_cycle(&client, scope, &routes).await;

    // A fatal cycle never got off the ground; a partial failure still has
    // printable output and exits cleanly.
    if state.is_directory_failure() {
        let warning = state.warning.as_deref().unwrap_or_default();
        bail!("{warning}");
    }

    println!(
        "{} stations, {} of {} routes drawn",
        state.stations.len(),
        state.polylines.len(),
        routes.len()
    );
    for line in &state.polylines {
        println!("  {}  {}  {} points", line.id, line.color, line.points.len());
    }
    let b = state.viewport;
    println!(
        "viewport: ({:.4}, {:.4}) .. ({:.4}, {:.4})",
        b.min_lat, b.min_lon, b.max_lat, b.max_lon
    );
    if let Some(warning) = &state.warning {
        println!("warning: {warning}");
    }

    Ok(())
}
