//! Render pipeline for planning results.
//!
//! Takes a set of coarse vehicle routes, expands each one into its full
//! travel path via the planning backend, assembles colored polylines, fits
//! a viewport, and publishes the result as a [`RenderState`]. A new route
//! set cancels whatever is still in flight.

pub mod orchestrator;
pub mod state;


pub use orchestrator::{render_cycle, RenderPipeline};
pub use state::{RenderState, DIRECTORY_WARNING};
