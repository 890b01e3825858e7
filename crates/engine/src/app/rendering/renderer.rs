use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use tracing::warn;
use winit::window::Window;

use crate::app::Game;

use super::{FrameBuffer, Viewport, CLEAR_COLOR};

/// Presents a fixed-size logical frame buffer scaled onto the window surface.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    buffer_size: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>, buffer_size: Viewport) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), buffer_size, size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            buffer_size,
        })
    }

    pub fn buffer_size(&self) -> Viewport {
        self.buffer_size
    }

    /// Rebuilds the surface for a new window size and, when it changed, the
    /// logical buffer.
    pub fn resize(&mut self, width: u32, height: u32, buffer_size: Viewport) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), buffer_size, width, height)?;
        self.buffer_size = buffer_size;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        buffer_size: Viewport,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width, surface_height, window);
        Pixels::new(buffer_size.width, buffer_size.height, surface)
    }

    pub(crate) fn render_game(&mut self, game: &dyn Game) -> Result<(), Error> {
        let Viewport { width, height } = self.buffer_size;
        match FrameBuffer::new(self.pixels.frame_mut(), width, height) {
            Some(mut target) => {
                target.clear(CLEAR_COLOR);
                game.render(&mut target);
            }
            None => warn!(width, height, "renderer_frame_size_mismatch"),
        }
        self.pixels.render()
    }
}
