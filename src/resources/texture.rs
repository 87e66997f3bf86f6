//! Color buffers sampled and written by the lighting pass

use glam::{Vec2, Vec4};
use image::{DynamicImage, GenericImageView, RgbaImage};
use std::path::Path;

use crate::error::{LightingError, LightingResult};
use crate::SamplingMode;

/// Linear RGBA color buffer, row-major with the first row at the top
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec4>,
}

impl ColorBuffer {
    /// Create a buffer filled with one color
    pub fn new(width: u32, height: u32, fill: Vec4) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Wrap existing pixels, checking the length matches the dimensions
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Vec4>) -> LightingResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(LightingError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Load a color buffer from file
    pub fn open<P: AsRef<Path>>(path: P) -> LightingResult<Self> {
        let img = image::open(path)?;
        Ok(Self::from_image(&img))
    }

    /// Load a color buffer from encoded bytes
    pub fn from_bytes(bytes: &[u8]) -> LightingResult<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(&img))
    }

    /// Create a color buffer from a decoded image
    pub fn from_image(img: &DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba32f();
        let pixels = rgba
            .pixels()
            .map(|p| Vec4::from_array(p.0))
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a checkerboard buffer
    pub fn checkerboard(width: u32, height: u32, cell: u32, color1: Vec4, color2: Vec4) -> Self {
        let cell = cell.max(1);
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let is_even = ((x / cell) + (y / cell)) % 2 == 0;
                pixels.push(if is_even { color1 } else { color2 });
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Texel at integer coordinates, clamped to edge
    pub fn texel(&self, x: i64, y: i64) -> Vec4 {
        if self.pixels.is_empty() {
            return Vec4::ZERO;
        }
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        self.pixels[y * self.width as usize + x]
    }

    /// Sample at a normalized coordinate
    pub fn sample(&self, uv: Vec2, mode: SamplingMode) -> Vec4 {
        let texel_pos = uv * self.size();
        match mode {
            SamplingMode::Nearest => {
                self.texel(texel_pos.x.floor() as i64, texel_pos.y.floor() as i64)
            }
            SamplingMode::Linear => {
                // Texel centers sit at half-integer coordinates
                let p = texel_pos - Vec2::splat(0.5);
                let base = p.floor();
                let t = p - base;
                let (x0, y0) = (base.x as i64, base.y as i64);

                let top = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), t.x);
                let bottom = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), t.x);
                top.lerp(bottom, t.y)
            }
        }
    }

    /// Convert to an 8-bit image, clamping HDR values
    pub fn to_rgba8(&self) -> RgbaImage {
        let bytes = self
            .pixels
            .iter()
            .flat_map(|p| {
                p.clamp(Vec4::ZERO, Vec4::ONE)
                    .to_array()
                    .map(|c| (c * 255.0).round() as u8)
            })
            .collect();
        RgbaImage::from_raw(self.width, self.height, bytes)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Save as an 8-bit image, format chosen from the extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> LightingResult<()> {
        self.to_rgba8().save(path)?;
        Ok(())
    }
}
