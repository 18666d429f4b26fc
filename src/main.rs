//! Repulse entry point
//!
//! Native: headless runner that steps a scene for a fixed number of frames.
//! Web: draws the default scene on `#canvas`, one frame per display refresh.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use repulse::renderer::CanvasRenderer;
    use repulse::{FrameLoop, SimConfig};

    /// Log run statistics every this many frames
    const STATS_INTERVAL: u64 = 600;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Repulse starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let config = SimConfig {
            canvas_width: width as f32,
            canvas_height: height as f32,
            seed: js_sys::Date::now() as u64,
            ..Default::default()
        };

        let frames = match FrameLoop::from_config(&config, CanvasRenderer::new(ctx)) {
            Ok(frames) => frames,
            Err(e) => {
                log::error!("Invalid scene: {}", e);
                return;
            }
        };

        request_animation_frame(Rc::new(RefCell::new(frames)));
        log::info!("Repulse running!");
    }

    fn request_animation_frame(frames: Rc<RefCell<FrameLoop<CanvasRenderer>>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(frames);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(frames: Rc<RefCell<FrameLoop<CanvasRenderer>>>) {
        {
            let mut f = frames.borrow_mut();
            let stats = f.advance();
            if stats.frame % STATS_INTERVAL == 0 {
                log::info!(
                    "frame {}: mean speed {:.3}, {} occluded pairs",
                    stats.frame,
                    stats.mean_speed,
                    stats.occluded_pairs
                );
            }
        }

        request_animation_frame(frames);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use repulse::renderer::MeshRenderer;
    use repulse::{ConfigError, FrameLoop, SimConfig};

    /// Headless particle repulsion runner
    #[derive(Parser, Debug)]
    #[command(name = "repulse")]
    #[command(version, about = "Step a particle repulsion scene without a window", long_about = None)]
    pub struct Cli {
        /// JSON scene file (defaults to the built-in demo scene)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,

        /// Override the placement seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Log statistics every N frames (0 = only at the end)
        #[arg(long, default_value = "60")]
        report_every: u64,

        /// Print the final simulation state as JSON on stdout
        #[arg(long)]
        dump: bool,
    }

    pub fn run(cli: Cli) -> Result<(), ConfigError> {
        let mut config = match &cli.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(seed) = cli.seed {
            config.seed = seed;
        }

        let mut frames = FrameLoop::from_config(&config, MeshRenderer::new())?;

        for _ in 0..cli.frames {
            let stats = frames.advance();
            if cli.report_every > 0 && stats.frame % cli.report_every == 0 {
                log::info!(
                    "frame {:>6}: {:>6} repelling, {:>6} occluded, {:>4} pushes, mean speed {:.3}",
                    stats.frame,
                    stats.repelling_pairs,
                    stats.occluded_pairs,
                    stats.obstacle_pushes,
                    stats.mean_speed
                );
            }
        }

        let stats = frames.last_stats();
        log::info!(
            "Finished {} frames (mean speed {:.3}, {} vertices in last mesh)",
            stats.frame,
            stats.mean_speed,
            frames.renderer().vertices().len()
        );

        if cli.dump {
            match serde_json::to_string_pretty(frames.simulation()) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Failed to serialize state: {}", e),
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Repulse (native) starting...");

    if let Err(e) = native::run(native::Cli::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
