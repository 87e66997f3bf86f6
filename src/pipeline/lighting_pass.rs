//! Fullscreen lighting pass
//!
//! Evaluates the light mask for every pixel of the output and applies it to the
//! sampled base color. Rows are distributed over the rayon thread pool, each worker
//! reading the frame and the base color through shared borrows.

use glam::Vec4;
use rayon::prelude::*;
use std::time::Instant;

use crate::error::{LightingError, LightingResult};
use crate::lighting::{evaluate, shade, Fragment, MarchSettings};
use crate::resources::ColorBuffer;
use crate::scene::LightingFrame;
use crate::LightingConfig;

/// Lighting pass
pub struct LightingPass {
    config: LightingConfig,
    settings: MarchSettings,
}

impl LightingPass {
    /// Create a pass, rejecting unusable raymarch parameters
    pub fn new(config: LightingConfig) -> LightingResult<Self> {
        config.validate()?;
        let settings = config.march_settings();
        Ok(Self { config, settings })
    }

    pub fn config(&self) -> &LightingConfig {
        &self.config
    }

    /// Light `base` and return a buffer of the frame's screen size
    pub fn run(&self, frame: &LightingFrame, base: &ColorBuffer) -> LightingResult<ColorBuffer> {
        let (width, height) = Self::target_size(frame)?;
        let start = Instant::now();

        let mut output = ColorBuffer::new(width, height, Vec4::ZERO);
        output
            .pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| self.shade_row(frame, base, y as u32, row));

        log::debug!(
            "Lighting pass: {}x{} px, {} point lights, {} occluders in {:?}",
            width,
            height,
            frame.point_lights.len(),
            frame.occluders.len(),
            start.elapsed()
        );

        Ok(output)
    }

    /// Same as [`LightingPass::run`] on the calling thread
    pub fn run_serial(
        &self,
        frame: &LightingFrame,
        base: &ColorBuffer,
    ) -> LightingResult<ColorBuffer> {
        let (width, height) = Self::target_size(frame)?;

        let mut output = ColorBuffer::new(width, height, Vec4::ZERO);
        for (y, row) in output.pixels.chunks_mut(width as usize).enumerate() {
            self.shade_row(frame, base, y as u32, row);
        }

        Ok(output)
    }

    /// Lit color of a single pixel
    pub fn shade_pixel(&self, frame: &LightingFrame, base: &ColorBuffer, x: u32, y: u32) -> Vec4 {
        let screen_size = frame.screen_size();
        let fragment = Fragment::from_pixel(x, y, screen_size);
        let base_color = base.sample(fragment.uv, self.config.sampling);
        let multiplier = evaluate(
            &fragment,
            frame.point_lights.as_slice(),
            frame.occluders.as_slice(),
            &frame.ambient,
            &frame.view,
            screen_size,
            &self.settings,
        );
        shade(base_color, multiplier)
    }

    fn shade_row(&self, frame: &LightingFrame, base: &ColorBuffer, y: u32, row: &mut [Vec4]) {
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = self.shade_pixel(frame, base, x as u32, y);
        }
    }

    fn target_size(frame: &LightingFrame) -> LightingResult<(u32, u32)> {
        let size = frame.screen_size();
        if !(size.x >= 1.0 && size.y >= 1.0) {
            return Err(LightingError::InvalidViewport {
                width: size.x,
                height: size.y,
            });
        }
        Ok((size.x as u32, size.y as u32))
    }
}

impl Default for LightingPass {
    fn default() -> Self {
        let config = LightingConfig::default();
        let settings = config.march_settings();
        Self { config, settings }
    }
}
