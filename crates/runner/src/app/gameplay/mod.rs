mod animation;
mod motion;
mod scene_impl;
mod state;
mod tuning;

pub(crate) use motion::HorizontalMotion;
pub(crate) use scene_impl::GameLoop;
pub(crate) use tuning::Tuning;

pub(crate) const SCREEN_WIDTH: u32 = 640;
pub(crate) const SCREEN_HEIGHT: u32 = 480;
