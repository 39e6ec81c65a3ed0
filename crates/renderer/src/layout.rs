//! Pixel math for the hero surface and the media panel.
//!
//! Everything here works in physical pixels. Panel coordinates use a
//! bottom-left origin to match what the fragment stage sees; cursor hit
//! testing converts from winit's top-left origin at the call site.

use winit::dpi::PhysicalSize;

/// Panel width as a fraction of the surface width.
const PANEL_WIDTH_FRACTION: f32 = 0.55;
/// Panel aspect ratio (width / height).
const PANEL_ASPECT: f32 = 16.0 / 9.0;
/// Panel center height as a fraction of the surface, from the bottom.
const PANEL_CENTER_Y: f32 = 0.42;

/// Axis-aligned rectangle: origin at the bottom-left, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct PanelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelRect {
    pub(crate) fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Packs the rect for the uniform block.
    pub(crate) fn as_uniform(&self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

/// Places the media panel: horizontally centered, fixed aspect, sized
/// relative to the surface and clamped so tiny windows keep a margin.
pub(crate) fn panel_rect(surface: PhysicalSize<u32>) -> PanelRect {
    let surface_w = surface.width.max(1) as f32;
    let surface_h = surface.height.max(1) as f32;

    let mut width = surface_w * PANEL_WIDTH_FRACTION;
    let mut height = width / PANEL_ASPECT;
    // Never let the panel swallow the hero; 60% of the height is the limit.
    let max_height = surface_h * 0.6;
    if height > max_height {
        height = max_height;
        width = height * PANEL_ASPECT;
    }

    PanelRect {
        x: (surface_w - width) * 0.5,
        y: surface_h * PANEL_CENTER_Y - height * 0.5,
        width,
        height,
    }
}

/// Physical surface size honoring the pixel-ratio cap.
///
/// The window reports `inner` at the compositor's full scale factor; when
/// that factor exceeds the cap the surface is sized as if the display were
/// at the capped ratio, bounding fill cost on very dense screens.
pub(crate) fn surface_extent(
    inner: PhysicalSize<u32>,
    scale_factor: f64,
    pixel_ratio_cap: f64,
) -> PhysicalSize<u32> {
    let scale = scale_factor.max(0.01);
    let cap = pixel_ratio_cap.max(0.01);
    if scale <= cap {
        return PhysicalSize::new(inner.width.max(1), inner.height.max(1));
    }
    let shrink = cap / scale;
    PhysicalSize::new(
        ((inner.width as f64 * shrink).round() as u32).max(1),
        ((inner.height as f64 * shrink).round() as u32).max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_extent_passes_through_under_the_cap() {
        let inner = PhysicalSize::new(1920, 1080);
        assert_eq!(surface_extent(inner, 1.0, 2.0), inner);
        assert_eq!(surface_extent(inner, 2.0, 2.0), inner);
    }

    #[test]
    fn surface_extent_shrinks_past_the_cap() {
        let inner = PhysicalSize::new(3000, 2000);
        let capped = surface_extent(inner, 3.0, 2.0);
        assert_eq!(capped, PhysicalSize::new(2000, 1333));
    }

    #[test]
    fn surface_extent_never_collapses_to_zero() {
        let capped = surface_extent(PhysicalSize::new(1, 1), 10.0, 2.0);
        assert!(capped.width >= 1 && capped.height >= 1);
    }

    #[test]
    fn panel_is_horizontally_centered_with_the_expected_aspect() {
        let rect = panel_rect(PhysicalSize::new(2000, 2000));
        assert!((rect.x - (2000.0 - rect.width) * 0.5).abs() < 0.5);
        assert!((rect.width / rect.height - PANEL_ASPECT).abs() < 1e-3);
        assert!((rect.width - 2000.0 * PANEL_WIDTH_FRACTION).abs() < 0.5);
    }

    #[test]
    fn panel_shrinks_on_short_surfaces() {
        let rect = panel_rect(PhysicalSize::new(4000, 500));
        assert!(rect.height <= 500.0 * 0.6 + 0.5);
        assert!((rect.width / rect.height - PANEL_ASPECT).abs() < 1e-3);
    }

    #[test]
    fn contains_matches_the_borders() {
        let rect = PanelRect {
            x: 10.0,
            y: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(109.0, 69.0));
        assert!(!rect.contains(110.0, 20.0));
        assert!(!rect.contains(9.0, 30.0));
        assert!(!rect.contains(50.0, 70.0));
    }
}
