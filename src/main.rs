use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use constellation::cli::Cli;
use constellation::core::{Button, Clock, Controller, FpsCounter, WinitController};
use constellation::overlay::{Overlay, Stats};
use constellation::renderer::SceneRenderer;
use constellation::{Camera, Scene, SceneConfig};

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 800;

// === Application ===

struct App {
    config: SceneConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    scene: Scene,
    camera: Camera,
    overlay: Overlay,
    input: WinitController,
    clock: Clock,
    fps: FpsCounter,
    failure: Option<anyhow::Error>,
}

impl App {
    fn new(config: SceneConfig, show_diagnostics: bool) -> Self {
        let (scene, camera) = Scene::mount(&config);
        let overlay = Overlay::new(&config.text, show_diagnostics);

        Self {
            config,
            window: None,
            renderer: None,
            scene,
            camera,
            overlay,
            input: WinitController::new(),
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.failure = Some(error);
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();
        if self.fps.tick(frame.delta) {
            log::debug!("FPS: {:.1}", self.fps.fps());
        }

        self.scene.update(&frame, &mut self.camera, &self.input);
        self.input.reset_deltas();

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };
        let stats = Stats {
            fps: self.fps.fps(),
        };

        match renderer.render(window, &mut self.scene, &self.camera, &self.overlay, stats) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Constellation")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(event_loop, anyhow::Error::new(e).context("Failed to create window"));
                return;
            }
        };

        let renderer = match pollster::block_on(SceneRenderer::new(
            window.clone(),
            &self.scene,
            &self.config,
        )) {
            Ok(r) => r,
            Err(e) => {
                self.fail(event_loop, e.context("Failed to initialize renderer"));
                return;
            }
        };

        let (width, height) = renderer.size();
        self.camera.set_aspect(width as f32, height as f32);

        // The intro zoom is timed from the first rendered frame
        self.clock = Clock::new();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                self.input.process_ui_event(&event);
                return;
            }
        }

        self.input.process_event(&event);
        if self.input.is_down(Button::Escape) {
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.camera.set_aspect(size.width as f32, size.height as f32);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.scene_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, !cli.no_ui);

    println!(
        "Constellation - Controls: left drag rotate, right drag pan, wheel zoom, Escape to quit"
    );
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
