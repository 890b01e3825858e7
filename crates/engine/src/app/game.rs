use super::input::{ActionStates, InputAction};
use super::rendering::{RenderTarget, Viewport};

/// Key state sampled once per simulation tick.
///
/// Actions are level-triggered: a key held across several ticks reports
/// `is_down` on every one of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, actions: ActionStates) -> Self {
        Self {
            quit_requested,
            actions,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }
}

/// Callbacks the host loop drives once per tick (`tick`) and once per
/// presented frame (`render`).
pub trait Game {
    fn tick(&mut self, input: &InputSnapshot);
    fn render(&self, target: &mut dyn RenderTarget);
    /// Logical resolution for a window of `outside` physical pixels.
    fn viewport(&self, outside: Viewport) -> Viewport;
}
