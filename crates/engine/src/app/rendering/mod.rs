mod framebuffer;
mod renderer;
mod transform;

pub use framebuffer::{FrameBuffer, RenderTarget};
pub use renderer::Renderer;
pub use transform::Viewport;

pub(crate) const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 255];
