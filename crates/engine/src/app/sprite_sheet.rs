use std::path::{Path, PathBuf};

use image::ImageReader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpriteSheetError {
    #[error("failed to open sprite sheet {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sprite sheet {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(
        "sprite sheet is {sheet_width}x{sheet_height} but must contain the region \
x={x} y={y} w={width} h={height}"
    )]
    TooSmall {
        sheet_width: u32,
        sheet_height: u32,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Sub-rectangle of a sprite sheet, in texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SourceRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn right(self) -> u64 {
        self.x as u64 + self.width as u64
    }

    fn bottom(self) -> u64 {
        self.y as u64 + self.height as u64
    }
}

/// Decoded RGBA8 image, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheet {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl SpriteSheet {
    pub fn load(path: &Path) -> Result<Self, SpriteSheetError> {
        let reader = ImageReader::open(path).map_err(|source| SpriteSheetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = reader.decode().map_err(|source| SpriteSheetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let image = decoded.to_rgba8();
        Ok(Self {
            width: image.width(),
            height: image.height(),
            rgba: image.into_raw(),
        })
    }

    /// Builds a sheet from raw RGBA8 bytes. Returns `None` when the buffer
    /// length does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (rgba.len() == expected).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn ensure_contains(&self, rect: SourceRect) -> Result<(), SpriteSheetError> {
        if self.contains(rect) {
            return Ok(());
        }
        Err(SpriteSheetError::TooSmall {
            sheet_width: self.width,
            sheet_height: self.height,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        })
    }

    pub fn contains(&self, rect: SourceRect) -> bool {
        rect.right() <= self.width as u64 && rect.bottom() <= self.height as u64
    }

    pub(crate) fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let bytes = self.rgba.get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
