#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Jump,
    MoveLeft,
    MoveRight,
    Quit,
}

const ACTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::Jump => 0,
            InputAction::MoveLeft => 1,
            InputAction::MoveRight => 2,
            InputAction::Quit => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_are_tracked_independently() {
        let mut states = ActionStates::default();
        states.set(InputAction::Jump, true);
        states.set(InputAction::MoveLeft, true);
        states.set(InputAction::MoveLeft, false);

        assert!(states.is_down(InputAction::Jump));
        assert!(!states.is_down(InputAction::MoveLeft));
        assert!(!states.is_down(InputAction::MoveRight));
        assert!(!states.is_down(InputAction::Quit));
    }
}
