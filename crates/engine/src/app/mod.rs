mod game;
mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod sprite_sheet;

pub use game::{Game, InputSnapshot};
pub use input::InputAction;
pub use loop_runner::{run_app, AppError, LoopConfig, SLOW_FRAME_ENV_VAR};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{FrameBuffer, RenderTarget, Renderer, Viewport};
pub use sprite_sheet::{SourceRect, SpriteSheet, SpriteSheetError};
