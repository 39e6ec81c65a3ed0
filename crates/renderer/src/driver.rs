use anyhow::Result;
use image::RgbaImage;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::dpi::PhysicalSize;

use presets::ShaderVariant;

use crate::gpu::{FrameInputs, GpuState};

/// Owned liveness token for the redraw loop.
///
/// The handle must be cancelled exactly once on teardown; after that no
/// frame work is admitted, so a stale redraw arriving late cannot touch a
/// torn-down pipeline.
#[derive(Debug)]
pub(crate) struct AnimationHandle {
    cancelled: bool,
    frames: u64,
}

impl AnimationHandle {
    pub(crate) fn active() -> Self {
        Self {
            cancelled: false,
            frames: 0,
        }
    }

    /// Admits one frame of work; refuses after cancellation.
    pub(crate) fn begin_frame(&mut self) -> bool {
        if self.cancelled {
            return false;
        }
        self.frames = self.frames.saturating_add(1);
        true
    }

    /// Cancels the loop. Returns whether this call did the cancelling.
    pub(crate) fn cancel(&mut self) -> bool {
        !std::mem::replace(&mut self.cancelled, true)
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub(crate) fn frames(&self) -> u64 {
        self.frames
    }
}

/// The shader animation driver: one variant, one pipeline, one redraw loop.
///
/// Activation is fail-soft. When the GPU pipeline cannot be built (no
/// adapter, compile failure) the driver logs once and runs with no
/// animation; the page itself keeps working. Switching variants tears the
/// whole pipeline down and re-activates from scratch.
pub(crate) struct HeroDriver {
    variant: ShaderVariant,
    cover_rgb: [f32; 3],
    gpu: Option<GpuState>,
    animation: AnimationHandle,
}

impl HeroDriver {
    /// Builds the pipeline for `variant`, degrading to a dormant driver on
    /// any graphics failure.
    pub(crate) fn activate<T>(
        target: &T,
        size: PhysicalSize<u32>,
        variant: ShaderVariant,
        cover_rgb: [f32; 3],
    ) -> Self
    where
        T: HasDisplayHandle + HasWindowHandle,
    {
        match GpuState::new(target, size, variant, cover_rgb) {
            Ok(gpu) => Self {
                variant,
                cover_rgb,
                gpu: Some(gpu),
                animation: AnimationHandle::active(),
            },
            Err(err) => {
                tracing::warn!(%variant, error = %format!("{err:#}"), "hero background disabled");
                let mut animation = AnimationHandle::active();
                animation.cancel();
                Self {
                    variant,
                    cover_rgb,
                    gpu: None,
                    animation,
                }
            }
        }
    }

    pub(crate) fn variant(&self) -> ShaderVariant {
        self.variant
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.gpu.is_some() && !self.animation.is_cancelled()
    }

    /// Tears down and rebuilds the pipeline for a new variant.
    pub(crate) fn set_variant<T>(
        &mut self,
        target: &T,
        size: PhysicalSize<u32>,
        variant: ShaderVariant,
    ) where
        T: HasDisplayHandle + HasWindowHandle,
    {
        if variant == self.variant && self.is_animating() {
            return;
        }
        tracing::info!(from = %self.variant, to = %variant, "switching hero variant");
        self.teardown();
        *self = Self::activate(target, size, variant, self.cover_rgb);
    }

    /// Cancels the animation and releases every GPU resource.
    pub(crate) fn teardown(&mut self) {
        if self.animation.cancel() {
            tracing::debug!(
                variant = %self.variant,
                frames = self.animation.frames(),
                "hero driver torn down"
            );
        }
        self.gpu = None;
    }

    pub(crate) fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(new_size);
        }
    }

    /// Re-applies the swapchain configuration after a lost surface.
    pub(crate) fn reconfigure(&mut self) {
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.reconfigure();
        }
    }

    pub(crate) fn size(&self) -> Option<PhysicalSize<u32>> {
        self.gpu.as_ref().map(|gpu| gpu.size())
    }

    pub(crate) fn set_poster(&mut self, poster: &RgbaImage) -> Result<()> {
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.set_poster(poster)?;
        }
        Ok(())
    }

    /// Renders one frame; `None` when dormant or torn down.
    pub(crate) fn render(&mut self, inputs: FrameInputs) -> Option<Result<(), wgpu::SurfaceError>> {
        if !self.animation.begin_frame() {
            return None;
        }
        self.gpu.as_mut().map(|gpu| gpu.render(inputs))
    }
}

impl Drop for HeroDriver {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_admits_frames_until_cancelled() {
        let mut handle = AnimationHandle::active();
        assert!(handle.begin_frame());
        assert!(handle.begin_frame());
        assert_eq!(handle.frames(), 2);

        assert!(handle.cancel());
        assert!(!handle.begin_frame());
        assert_eq!(handle.frames(), 2, "no frame admitted after cancel");
    }

    #[test]
    fn cancel_reports_only_the_first_call() {
        let mut handle = AnimationHandle::active();
        assert!(handle.cancel());
        assert!(!handle.cancel());
        assert!(handle.is_cancelled());
    }
}
