#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod render;
pub mod utils;

// The update orchestrator
pub mod engine;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

// Re-export commonly used types
pub use analysis::{PriceWindow, generate_levels, maybe_recompute_pivots};
pub use config::LevelsConfig;
pub use data::{ReplayFile, ReplayHost};
pub use domain::{DailyBar, LineColor, LineStyle};
pub use engine::{ChartHost, EngineState, LevelEngine, LevelRenderer, LevelSnapshot};
pub use models::{AnchorSet, Level, PivotSet};
pub use render::LogRenderer;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Replay file with daily bars and ticks (JSON)
    #[arg(long)]
    pub replay: PathBuf,

    /// Overlay configuration (JSON). Built-in defaults when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How many ladder levels around the price to log per tick
    #[arg(long, default_value_t = 4)]
    pub nearest: usize,

    /// Log every generated level
    #[arg(long, default_value_t = false)]
    pub verbose_levels: bool,
}

/// Feed every tick of a replay through a fresh engine, rendering after each one.
/// Returns the last published snapshot.
pub fn run_replay(
    config: LevelsConfig,
    replay: &ReplayFile,
    renderer: &mut impl LevelRenderer,
) -> Result<Arc<LevelSnapshot>> {
    let mut engine = LevelEngine::new(config)?;

    for tick in &replay.ticks {
        #[cfg(debug_assertions)]
        if config::PRINT_REPLAY_TICKS {
            log::info!("Tick {} @ {:.2}", tick.time, tick.price);
        }
        let host = replay.host_at(tick);
        engine.update_and_render(&host, renderer);
    }

    Ok(engine.snapshot())
}
