//! Application framework for the Sandlot sandbox.
//!
//! This crate provides a trait-based application framework that handles
//! common boilerplate like:
//! - Logging setup
//! - World construction from a scene and configuration
//! - The fixed-tick loop: input, world update, camera follow
//! - Optional wall-clock pacing
//!
//! # Example
//!
//! ```no_run
//! use sandlot_app::{SandboxApp, AppContext, FrameContext, AppConfig, run_app};
//!
//! struct MyApp {
//!     // Application state
//! }
//!
//! impl SandboxApp for MyApp {
//!     fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
//!         Ok(MyApp {})
//!     }
//!
//!     fn update(&mut self, ctx: &AppContext, frame: &FrameContext) {
//!         // React to frame.report
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     run_app::<MyApp>(AppConfig::default().with_max_ticks(600))
//! }
//! ```

mod app;
mod camera;
mod context;
mod frame;
mod runner;

pub use app::SandboxApp;
pub use camera::{Camera, FOLLOW_SMOOTHING};
pub use context::AppContext;
pub use frame::FrameContext;
pub use runner::{run_app, run_loop, AppConfig, Scene};

// Re-export commonly used types for convenience
pub use sandlot_input::{InputManager, Key, MouseButton};
pub use sandlot_world::{TickReport, World, WorldEvent};
