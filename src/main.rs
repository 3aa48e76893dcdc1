use anyhow::Result;
use clap::Parser;

use pivot_grid::{Cli, LevelsConfig, LogRenderer, ReplayFile, run_replay};

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Load inputs
    let config = match &args.config {
        Some(path) => LevelsConfig::from_json_file(path)?,
        None => LevelsConfig::default(),
    };
    let replay = ReplayFile::load_from_path(&args.replay)?;
    log::info!(
        "Replaying {} ticks over {} daily bars of {}",
        replay.ticks.len(),
        replay.daily_bars.len(),
        replay.symbol
    );

    // D. Run
    let mut renderer = LogRenderer::new(args.nearest, args.verbose_levels);
    let last = run_replay(config, &replay, &mut renderer)?;

    log::info!(
        "Done: {} frames, final state {:?}, {} levels",
        renderer.frames_rendered(),
        last.state,
        last.levels.len()
    );
    Ok(())
}
