mod app;
mod camera;
mod config;
mod player;
mod terrain;

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use strata_physics::{MoveIntent, Walker};
use strata_world::MAX_CHUNK_SIDE;

use crate::app::App;
use crate::config::{AppConfig, load_or_default};
use crate::terrain::Terrain;

#[derive(Parser, Debug)]
#[command(name = "strata", about = "Outlined voxel height-field viewer with AABB collision")]
struct Cli {
    /// TOML config with [world], [mesh], [player] and [render] sections
    #[arg(long, default_value = "strata.toml")]
    config: PathBuf,
    /// Override the worldgen seed
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i32>,
    /// Override the chunk size (square)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_CHUNK_SIDE as u64))]
    size: Option<u64>,
    /// Generate and mesh once, log stats, and exit without opening a window
    #[arg(long)]
    headless: bool,
    /// Do not watch the config file for changes
    #[arg(long)]
    no_watch: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut cfg = match load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("failed to load {}: {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    cfg.apply_overrides(cli.seed, cli.size.map(|s| s as usize));
    if let Err(e) = cfg.validate() {
        log::error!("invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    let result = if cli.headless {
        run_headless(&cfg)
    } else {
        run_viewer(cfg, cli.config, !cli.no_watch)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// Seconds of simulated fall used to report where the spawn point settles.
const HEADLESS_SETTLE_SECS: f32 = 5.0;

fn run_headless(cfg: &AppConfig) -> Result<(), Box<dyn Error>> {
    let terrain = Terrain::build(&cfg.world, &cfg.mesh)?;
    let tris = terrain.mesh.triangles_interleaved();
    let lines = terrain.mesh.outline_interleaved();
    log::info!(
        "mesh buffers: {} triangle floats, {} outline floats",
        tris.len(),
        lines.len()
    );

    let mut walker = Walker::from_config(&cfg.player)?;
    let resolver = cfg.player.resolver();
    let dt = 1.0 / 60.0;
    let steps = (HEADLESS_SETTLE_SECS / dt) as usize;
    for _ in 0..steps {
        walker.step(&MoveIntent::default(), 0.0, dt, &terrain.field, &resolver);
    }
    log::info!(
        "spawn settles at ({:.2}, {:.2}, {:.2}) grounded={}",
        walker.pos.x,
        walker.pos.y,
        walker.pos.z,
        walker.grounded
    );
    Ok(())
}

fn run_viewer(cfg: AppConfig, config_path: PathBuf, watch: bool) -> Result<(), Box<dyn Error>> {
    let (mut rl, thread) = raylib::init()
        .size(1280, 720)
        .title("Strata: outlined voxels")
        .build();
    rl.set_target_fps(60);
    rl.disable_cursor();

    let mut app = App::new(&mut rl, &thread, cfg, config_path, watch)?;
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        app.step(&mut rl, &thread, dt);
        app.render(&mut rl, &thread);
    }
    Ok(())
}
