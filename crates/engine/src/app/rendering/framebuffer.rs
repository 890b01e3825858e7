use glam::DAffine2;

use crate::app::sprite_sheet::{SourceRect, SpriteSheet};

use super::transform::{clipped_bounds, source_point_for_pixel, Viewport};

/// Destination for a game's draw calls.
pub trait RenderTarget {
    fn viewport(&self) -> Viewport;

    /// Blits `source` from `image` through `transform`. The transform maps
    /// source-local coordinates (origin at the rectangle's top-left) to
    /// target pixels.
    fn draw_image(&mut self, image: &SpriteSheet, source: SourceRect, transform: DAffine2);
}

/// RGBA8 frame borrowed from the presentation surface.
pub struct FrameBuffer<'a> {
    frame: &'a mut [u8],
    viewport: Viewport,
}

impl<'a> FrameBuffer<'a> {
    /// Returns `None` when `frame` is not exactly `width * height * 4` bytes.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if frame.len() != expected {
            return None;
        }
        Some(Self {
            frame,
            viewport: Viewport { width, height },
        })
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.pixel_offset(x, y)?;
        let bytes = &self.frame[offset..offset + 4];
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn pixel_offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.viewport.width || y >= self.viewport.height {
            return None;
        }
        Some((y as usize * self.viewport.width as usize + x as usize) * 4)
    }
}

impl RenderTarget for FrameBuffer<'_> {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn draw_image(&mut self, image: &SpriteSheet, source: SourceRect, transform: DAffine2) {
        if source.width == 0 || source.height == 0 || !image.contains(source) {
            return;
        }
        let Some(bounds) = clipped_bounds(transform, source.width, source.height, self.viewport)
        else {
            return;
        };
        if transform.matrix2.determinant() == 0.0 {
            return;
        }
        let inverse = transform.inverse();

        for out_y in bounds.top..bounds.bottom {
            for out_x in bounds.left..bounds.right {
                let local = source_point_for_pixel(inverse, out_x, out_y);
                if local.x < 0.0
                    || local.y < 0.0
                    || local.x >= source.width as f64
                    || local.y >= source.height as f64
                {
                    continue;
                }
                let src_x = source.x + local.x.floor() as u32;
                let src_y = source.y + local.y.floor() as u32;
                let Some(texel) = image.texel(src_x, src_y) else {
                    continue;
                };
                if texel[3] == 0 {
                    continue;
                }
                if let Some(offset) = self.pixel_offset(out_x, out_y) {
                    self.frame[offset..offset + 4].copy_from_slice(&texel);
                }
            }
        }
    }
}
