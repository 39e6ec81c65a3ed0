//! Renderer crate for heroshade.
//!
//! Glues the preview window, the `wgpu` hero pipeline, and the page's two
//! small interactive pieces (reveal gate, media toggle) together. The flow:
//!
//! ```text
//!   CLI / page.toml
//!          │ RendererConfig
//!          ▼
//!   Renderer::run ──▶ PageState ──▶ winit event loop ──▶ redraw()
//!          ▲                                  │
//!          │                                  ├─▶ gate.tick() / media sync
//!          │                                  └─▶ HeroDriver ─▶ GPU UBO + draw
//! ```
//!
//! `HeroDriver` owns the GPU pipeline for the selected shader variant behind
//! an animation handle that is cancelled exactly once on teardown; `PageState`
//! owns the driver plus the gate sequencer and the media widget and feeds
//! them the per-frame clock. Catalog fragment bodies are wrapped at runtime
//! with a GLSL prelude so one uniform block serves every variant.

mod assets;
mod compile;
mod driver;
mod gpu;
mod layout;
mod time;
mod types;
mod uniforms;
mod window;

use anyhow::Result;

pub use time::{BoxedTimeSource, SystemTimeSource, TimeSample, TimeSource};
pub use types::{MediaPanelConfig, RendererConfig};

/// High-level entry point that owns the chosen configuration.
///
/// The heavy lifting lives inside the window loop; `Renderer` simply owns
/// the immutable start-up configuration and forwards the request.
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    /// Builds a renderer for the supplied configuration.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Opens the landing window and blocks until it closes.
    ///
    /// Graphics initialisation failures inside do not propagate here; the
    /// window runs with the animation disabled instead. Only window-system
    /// failures (no event loop, no window) are errors.
    pub fn run(&mut self) -> Result<()> {
        window::run(&self.config)
    }
}
