use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{Receiver, TryRecvError};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use media::{ClockPlayback, MediaToggle, Playback};
use presets::ShaderVariant;
use sequencer::{GateEvent, GateSequencer};

use crate::assets::{spawn_asset_loader, AssetLoad};
use crate::driver::HeroDriver;
use crate::gpu::FrameInputs;
use crate::layout::{panel_rect, surface_extent, PanelRect};
use crate::types::RendererConfig;

/// Opens the landing window and drives the event loop until close.
pub(crate) fn run(config: &RendererConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to initialize event loop")?;
    let window_size = PhysicalSize::new(config.window_size.0, config.window_size.1);
    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(window_size)
        .build(&event_loop)
        .context("failed to create landing window")?;
    let window = Arc::new(window);

    let mut state = PageState::new(window.clone(), config);
    state.window().request_redraw();

    event_loop
        .run(move |event, elwt| {
            // Drive redraws via vblank by waiting between events.
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                Event::WindowEvent { window_id, event } if window_id == state.window().id() => {
                    match event {
                        WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                            state.shutdown();
                            elwt.exit();
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            state.handle_key(&event, elwt);
                        }
                        WindowEvent::CursorMoved { position, .. } => {
                            state.handle_cursor_moved(position);
                        }
                        WindowEvent::CursorLeft { .. } => {
                            state.handle_cursor_left();
                        }
                        WindowEvent::MouseInput {
                            state: button_state,
                            button,
                            ..
                        } => {
                            if button == MouseButton::Left
                                && button_state == ElementState::Pressed
                            {
                                state.handle_click();
                            }
                        }
                        WindowEvent::Resized(new_size) => {
                            state.handle_resized(new_size);
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            // Keep the current logical size when the scale factor changes.
                            let _ = inner_size_writer
                                .request_inner_size(state.window().inner_size());
                        }
                        WindowEvent::RedrawRequested => {
                            state.redraw(elwt);
                        }
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    // Schedule the next frame once winit is about to wait again.
                    state.window().request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|err| anyhow!("event loop error: {err}"))
}

/// Everything the event loop mutates: the three page components plus input
/// bookkeeping. Each component owns its own resources and is torn down (or
/// simply dropped) independently.
struct PageState {
    window: Arc<Window>,
    driver: HeroDriver,
    gate: GateSequencer,
    media: MediaToggle,
    playback: ClockPlayback,
    /// Pending load signal; `None` once the signal has been consumed.
    assets: Option<Receiver<AssetLoad>>,
    pixel_ratio_cap: f64,
    media_source: String,
    panel: PanelRect,
    cursor: Option<PhysicalPosition<f64>>,
}

impl PageState {
    fn new(window: Arc<Window>, config: &RendererConfig) -> Self {
        let extent = surface_extent(
            window.inner_size(),
            window.scale_factor(),
            config.pixel_ratio_cap,
        );
        let driver = HeroDriver::activate(
            window.as_ref(),
            extent,
            config.variant,
            config.cover_rgb,
        );
        let assets = spawn_asset_loader(config.media.poster_path.clone());

        Self {
            window,
            driver,
            gate: GateSequencer::new(config.gate),
            media: MediaToggle::new(),
            playback: ClockPlayback::new(config.media.duration),
            assets: Some(assets),
            pixel_ratio_cap: config.pixel_ratio_cap,
            media_source: config.media.source_url.clone(),
            panel: PanelRect::default(),
            cursor: None,
        }
    }

    fn window(&self) -> &Window {
        self.window.as_ref()
    }

    /// Cancels the animation and releases GPU resources; the gate and media
    /// widget hold no scheduled work beyond this loop, so dropping suffices.
    fn shutdown(&mut self) {
        self.driver.teardown();
    }

    fn handle_key(&mut self, event: &KeyEvent, elwt: &EventLoopWindowTarget<()>) {
        if event.state != ElementState::Pressed {
            return;
        }
        match &event.logical_key {
            Key::Named(NamedKey::Escape) => {
                self.shutdown();
                elwt.exit();
            }
            Key::Character(text) => match text.as_str() {
                "q" => {
                    self.shutdown();
                    elwt.exit();
                }
                "1" | "2" | "3" => {
                    let variants = ShaderVariant::all();
                    let index = (text.as_str().as_bytes()[0] - b'1') as usize;
                    self.switch_variant(variants[index]);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn switch_variant(&mut self, variant: ShaderVariant) {
        let extent = self.current_extent();
        self.driver
            .set_variant(self.window.as_ref(), extent, variant);
    }

    fn current_extent(&self) -> PhysicalSize<u32> {
        surface_extent(
            self.window.inner_size(),
            self.window.scale_factor(),
            self.pixel_ratio_cap,
        )
    }

    fn handle_resized(&mut self, new_size: PhysicalSize<u32>) {
        let extent = surface_extent(new_size, self.window.scale_factor(), self.pixel_ratio_cap);
        self.driver.resize(extent);
    }

    fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
        self.sync_hover();
    }

    fn handle_cursor_left(&mut self) {
        self.cursor = None;
        self.sync_hover();
    }

    fn handle_click(&mut self) {
        if self.media.is_hovered() {
            self.media.handle_click(&mut self.playback);
            tracing::info!(
                source = %self.media_source,
                playing = self.media.is_playing(),
                "media toggled"
            );
        }
    }

    /// Maps the cursor into surface coordinates (bottom-left origin) and
    /// updates the widget's hover flag. Hover only restyles the overlay.
    fn sync_hover(&mut self) {
        let hovered = match self.cursor {
            Some(position) => {
                let inner = self.window.inner_size();
                let extent = self.driver.size().unwrap_or(inner);
                let scale_x = extent.width.max(1) as f64 / inner.width.max(1) as f64;
                let scale_y = extent.height.max(1) as f64 / inner.height.max(1) as f64;
                let x = (position.x * scale_x) as f32;
                let y = extent.height as f32 - (position.y * scale_y) as f32;
                self.panel.contains(x, y)
            }
            None => false,
        };
        self.media.handle_hover(hovered);
    }

    /// Consumes the load signal once the asset pass reports in.
    fn poll_assets(&mut self, now: Instant) {
        let Some(receiver) = self.assets.as_ref() else {
            return;
        };
        match receiver.try_recv() {
            Ok(AssetLoad { poster }) => {
                if let Some(image) = poster {
                    if let Err(err) = self.driver.set_poster(&image) {
                        tracing::warn!(error = %format!("{err:#}"), "failed to upload poster");
                    }
                }
                self.gate.signal_loaded(now);
                self.assets = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Loader died; treat it as loaded so the cover cannot wedge.
                tracing::warn!("asset loader disappeared before reporting");
                self.gate.signal_loaded(now);
                self.assets = None;
            }
        }
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let now = Instant::now();

        self.poll_assets(now);

        self.playback.advance(now);
        if self.playback.poll_ended() {
            self.media.handle_ended();
        }

        for event in self.gate.tick(now) {
            match event {
                GateEvent::FadeStarted => tracing::debug!("loading cover fading out"),
                GateEvent::Revealed => tracing::info!("page revealed"),
            }
        }

        // Recompute the physical extent every frame; this covers viewport
        // resizes without racing a separate resize observer.
        let extent = self.current_extent();
        self.driver.resize(extent);
        self.panel = panel_rect(extent);
        self.sync_hover();

        let inputs = FrameInputs {
            cover_opacity: self.gate.cover_opacity(now),
            panel: self.panel,
            overlay: self.media.overlay(),
            pixel_ratio: self
                .window
                .scale_factor()
                .min(self.pixel_ratio_cap) as f32,
        };

        match self.driver.render(inputs) {
            None | Some(Ok(())) => {}
            Some(Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.driver.reconfigure();
            }
            Some(Err(wgpu::SurfaceError::OutOfMemory)) => {
                tracing::error!("surface out of memory; exiting");
                self.shutdown();
                elwt.exit();
            }
            Some(Err(wgpu::SurfaceError::Timeout)) => {
                tracing::warn!("surface timeout; retrying next frame");
            }
            Some(Err(other)) => {
                tracing::warn!(error = ?other, "surface error; retrying next frame");
            }
        }
    }
}
