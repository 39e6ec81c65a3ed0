use bytemuck::{Pod, Zeroable};

use media::OverlayStyle;

use crate::time::TimeSample;

/// CPU-side mirror of the page uniform block.
///
/// The layout matches the GLSL prelude injected by `compile.rs` and must
/// observe std140 alignment; every field group is a full 16-byte slot. The
/// fourth component of `resolution` mirrors the elapsed time so front-ends
/// that collapse padding still see an animating value.
#[repr(C, align(16))]
#[derive(Clone, Copy)]
pub(crate) struct PageUniforms {
    /// xy: surface size in physical pixels, z: pixel ratio, w: time mirror.
    pub resolution: [f32; 4],
    pub time: f32,
    pub time_delta: f32,
    pub frame: i32,
    /// Loading-cover opacity, 1.0 (covered) to 0.0 (revealed).
    pub cover: f32,
    /// Cover fill color; w unused.
    pub cover_color: [f32; 4],
    /// Media panel rect: xy origin (bottom-left), zw size. Zero size hides it.
    pub panel_rect: [f32; 4],
    /// x: scrim, y: button opacity, z: button scale, w: poster visibility.
    pub overlay: [f32; 4],
    /// xy: poster texture size in texels; zw unused.
    pub poster_size: [f32; 4],
}

unsafe impl Zeroable for PageUniforms {}
unsafe impl Pod for PageUniforms {}

impl PageUniforms {
    pub fn new(width: u32, height: u32, cover_rgb: [f32; 3]) -> Self {
        Self {
            resolution: [width as f32, height as f32, 1.0, 0.0],
            time: 0.0,
            time_delta: 0.0,
            frame: 0,
            cover: 1.0,
            cover_color: [cover_rgb[0], cover_rgb[1], cover_rgb[2], 0.0],
            panel_rect: [0.0; 4],
            overlay: [0.0; 4],
            poster_size: [1.0, 1.0, 0.0, 0.0],
        }
    }

    pub fn set_resolution(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.resolution[0] = width;
        self.resolution[1] = height;
        self.resolution[2] = pixel_ratio;
    }

    /// Advances the per-frame time values from a sampled clock.
    pub fn set_time(&mut self, sample: TimeSample) {
        self.time_delta = (sample.seconds - self.time).max(0.0);
        self.time = sample.seconds;
        self.frame = sample.frame_index.min(i32::MAX as u64) as i32;
        self.resolution[3] = self.time;
    }

    pub fn set_cover(&mut self, opacity: f32) {
        self.cover = opacity.clamp(0.0, 1.0);
    }

    pub fn set_panel_rect(&mut self, rect: [f32; 4]) {
        self.panel_rect = rect;
    }

    pub fn set_overlay(&mut self, style: OverlayStyle) {
        self.overlay = [
            style.scrim,
            style.button_opacity,
            style.button_scale,
            if style.poster_visible { 1.0 } else { 0.0 },
        ];
    }

    pub fn set_poster_size(&mut self, width: u32, height: u32) {
        self.poster_size[0] = width.max(1) as f32;
        self.poster_size[1] = height.max(1) as f32;
    }
}
