//! Sandlot headless demo
//!
//! Runs the starter scene with a scripted player: walking, jumping,
//! digging, building, switching hotbar slots and toggling game mode.
//! Progress and a summary are logged through `tracing`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p sandlot-headless -- [OPTIONS]
//! ```
//!
//! ## Options
//!
//! - `--ticks <N>`: Ticks to simulate (default: 600)
//! - `--seed <N>`: Seed for terrain and drop scatter (default: 42)
//! - `--creative`: Start in creative mode
//! - `--terrain <N>`: Generate N columns of terrain under the starter scene
//! - `--realtime`: Pace ticks to wall-clock time
//! - `-h, --help`: Print help message
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod app;

use sandlot_app::{run_app, AppConfig};
use sandlot_core::GameConfig;

use crate::app::{Demo, DemoParams};

fn main() -> anyhow::Result<()> {
    // Check for help flag before starting the app
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    let params = DemoParams::from_args();
    run_app::<Demo>(
        AppConfig::new("Sandlot headless demo")
            .with_game(GameConfig::default().with_seed(params.seed))
            .with_max_ticks(params.ticks)
            .with_realtime(params.realtime),
    )
}

fn print_help() {
    eprintln!(
        "Sandlot headless demo

USAGE:
    cargo run -p sandlot-headless -- [OPTIONS]

OPTIONS:
    --ticks <N>             Ticks to simulate (default: 600)
    --seed <N>              Seed for terrain and drop scatter (default: 42)
    --creative              Start in creative mode
    --terrain <N>           Generate N columns of terrain (default: 0)
    --realtime              Pace ticks to wall-clock time
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}
