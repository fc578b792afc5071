use raylib::prelude::*;
use std::error::Error;
use std::path::PathBuf;

use strata_physics::Walker;

use super::{App, FrameStats};
use crate::camera::LookCamera;
use crate::config::AppConfig;
use crate::terrain::Terrain;

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cfg: AppConfig,
        config_path: PathBuf,
        watch_config: bool,
    ) -> Result<Self, Box<dyn Error>> {
        let terrain = Terrain::build(&cfg.world, &cfg.mesh)?;
        let walker = Walker::from_config(&cfg.player)?;
        let resolver = cfg.player.resolver();

        // File watcher for the config file
        let (cfg_tx, cfg_rx) = std::sync::mpsc::channel::<()>();
        if watch_config {
            let tx = cfg_tx.clone();
            let path = config_path.clone();
            std::thread::spawn(move || {
                use notify::{EventKind, RecursiveMode, Watcher};
                match notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                    if let Ok(event) = res {
                        match event.kind {
                            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any => {
                                let _ = tx.send(());
                            }
                            _ => {}
                        }
                    }
                }) {
                    Ok(mut watcher) => {
                        if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
                            log::warn!("cannot watch {}: {}", path.display(), e);
                            return;
                        }
                        loop {
                            std::thread::sleep(std::time::Duration::from_secs(3600));
                        }
                    }
                    Err(e) => log::warn!("file watcher unavailable: {}", e),
                }
            });
        }

        let mut app = Self {
            cfg,
            config_path,
            terrain,
            render: None,
            walker,
            resolver,
            cam: LookCamera::new(),
            config_event_rx: cfg_rx,
            stats: FrameStats::default(),
            terrain_dirty: false,
        };
        app.upload_terrain(rl, thread);
        Ok(app)
    }

    pub(super) fn upload_terrain(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let mesh = &self.terrain.mesh;
        self.render = strata_render_raylib::ChunkRender::upload(
            rl,
            thread,
            &mesh.triangles_interleaved(),
            &mesh.outline_interleaved(),
        );
        if self.render.is_none() {
            log::warn!("terrain upload failed; nothing will be drawn");
        }
        self.terrain_dirty = false;
    }
}
