use std::io::BufReader;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context};

use invaders_app::autopilot::Autopilot;
use invaders_app::config;
use invaders_app::dialog::TerminalDialog;
use invaders_app::game_loop::{self, LoopOptions};
use invaders_sim::persistence::{FileHighScoreStore, HighScoreGateway};
use invaders_sim::SimulationEngine;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> anyhow::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let env_file = config::load_env();
    init_tracing();
    if let Some(path) = env_file {
        tracing::debug!(path = %path.display(), "loaded env file");
    }

    let sim_config = config::sim_config();
    let save_dir = config::save_dir();
    tracing::info!(
        seed = sim_config.seed,
        save_dir = %save_dir.display(),
        "starting invaders"
    );

    let engine = SimulationEngine::new(
        sim_config.clone(),
        HighScoreGateway::new(FileHighScoreStore::new(save_dir)),
    );
    let dialog = TerminalDialog::new(BufReader::new(std::io::stdin()), std::io::stdout());
    let options = LoopOptions {
        realtime: config::realtime(),
        max_ticks: config::max_ticks(),
    };
    let latest_snapshot = Arc::new(Mutex::new(None));

    let (cmd_tx, handle) = game_loop::spawn_game_loop(
        engine,
        Box::new(dialog),
        Autopilot::new(sim_config.seed),
        options,
        latest_snapshot,
    )
    .context("failed to spawn game loop thread")?;

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    drop(cmd_tx);

    tracing::info!(
        ticks = summary.ticks,
        phase = ?summary.phase,
        score = summary.score,
        level = summary.level,
        high_score = summary.high_score.score,
        high_score_name = %summary.high_score.name,
        "session finished"
    );
    Ok(())
}
