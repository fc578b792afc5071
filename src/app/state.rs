use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use strata_physics::{Resolver, Walker};
use strata_render_raylib::ChunkRender;

use crate::camera::LookCamera;
use crate::config::AppConfig;
use crate::terrain::Terrain;

/// Per-frame numbers shown in the overlay.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    pub corrections: usize,
    pub iterations: u32,
    pub resolved: bool,
}

pub struct App {
    pub cfg: AppConfig,
    pub config_path: PathBuf,
    pub terrain: Terrain,
    pub render: Option<ChunkRender>,
    pub walker: Walker,
    pub resolver: Resolver,
    pub cam: LookCamera,
    pub config_event_rx: Receiver<()>,
    pub stats: FrameStats,
    pub terrain_dirty: bool,
}
