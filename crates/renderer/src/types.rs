use std::path::PathBuf;
use std::time::Duration;

use presets::ShaderVariant;
use sequencer::GateTiming;

/// Media panel inputs handed to the window loop.
///
/// The poster decodes on a background thread; the URL is presentational and
/// is what the playback sink would be pointed at.
#[derive(Debug, Clone)]
pub struct MediaPanelConfig {
    /// Media URL shown in logs and listings; never fetched here.
    pub source_url: String,
    /// Poster image decoded into the panel texture.
    pub poster_path: Option<PathBuf>,
    /// Length of the stub playback clock.
    pub duration: Duration,
}

impl Default for MediaPanelConfig {
    fn default() -> Self {
        Self {
            source_url: String::new(),
            poster_path: None,
            duration: Duration::from_secs(10),
        }
    }
}

/// Immutable configuration passed to the renderer at start-up.
///
/// Mirrors the CLI and `page.toml`: which background variant to compile, how
/// large the window opens, how the reveal gate behaves, and what the media
/// panel shows.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Initial window size in physical pixels.
    pub window_size: (u32, u32),
    /// Title for the preview window.
    pub window_title: String,
    /// Hero background variant to compile.
    pub variant: ShaderVariant,
    /// Cap on the device-pixel-ratio contribution to the surface size.
    pub pixel_ratio_cap: f64,
    /// Loading-cover fill color, normalized RGB.
    pub cover_rgb: [f32; 3],
    /// Reveal gate hold/fade timing.
    pub gate: GateTiming,
    /// Media panel content.
    pub media: MediaPanelConfig,
}

impl Default for RendererConfig {
    /// 720p window, default variant, brand-green cover.
    fn default() -> Self {
        Self {
            window_size: (1280, 720),
            window_title: "heroshade".to_string(),
            variant: ShaderVariant::default(),
            pixel_ratio_cap: 2.0,
            cover_rgb: [0.0, 152.0 / 255.0, 105.0 / 255.0],
            gate: GateTiming::default(),
            media: MediaPanelConfig::default(),
        }
    }
}
