use std::fmt;
use std::str::FromStr;

use engine::{InputAction, InputSnapshot};

use super::state::SimulationState;

/// How the runner moves horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum HorizontalMotion {
    /// Arrow keys walk left/right; the animation pauses while idle.
    #[default]
    PlayerControlled,
    /// The runner walks right on its own and wraps at the screen edge.
    AutoScroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepDirection {
    Left,
    Right,
}

impl StepDirection {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            StepDirection::Left => "left",
            StepDirection::Right => "right",
        }
    }
}

impl HorizontalMotion {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            HorizontalMotion::PlayerControlled => "player",
            HorizontalMotion::AutoScroll => "auto_scroll",
        }
    }

    /// Applies one tick of horizontal motion. Returns the step taken by a
    /// player-controlled runner, if any.
    pub(crate) fn advance(
        self,
        state: &mut SimulationState,
        input: &InputSnapshot,
        step_speed: f64,
    ) -> Option<StepDirection> {
        match self {
            HorizontalMotion::PlayerControlled => {
                if input.is_down(InputAction::MoveRight) {
                    state.position_x += step_speed;
                    state.advance_animation();
                    state.facing_right = true;
                    Some(StepDirection::Right)
                } else if input.is_down(InputAction::MoveLeft) {
                    state.position_x -= step_speed;
                    state.advance_animation();
                    state.facing_right = false;
                    Some(StepDirection::Left)
                } else {
                    None
                }
            }
            HorizontalMotion::AutoScroll => {
                state.advance_animation();
                None
            }
        }
    }

    /// Screen x of the sprite's anchor. Auto-scroll moves one pixel per tick
    /// and restarts at the left edge every `wrap_period` ticks.
    pub(crate) fn screen_x(self, state: &SimulationState, wrap_period: u64) -> f64 {
        match self {
            HorizontalMotion::PlayerControlled => state.position_x,
            HorizontalMotion::AutoScroll => (state.tick_count % wrap_period.max(1)) as f64,
        }
    }

    pub(crate) fn mirrors_when_facing_left(self) -> bool {
        matches!(self, HorizontalMotion::PlayerControlled)
    }
}

impl fmt::Display for HorizontalMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HorizontalMotion {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "player" | "player_controlled" | "walk" => Ok(HorizontalMotion::PlayerControlled),
            "auto_scroll" | "autoscroll" | "scroll" => Ok(HorizontalMotion::AutoScroll),
            other => Err(format!(
                "unknown motion '{other}': expected 'player' or 'auto_scroll'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_with(actions: &[InputAction]) -> InputSnapshot {
        actions
            .iter()
            .fold(InputSnapshot::empty(), |snapshot, action| {
                snapshot.with_action_down(*action, true)
            })
    }

    #[test]
    fn right_arrow_steps_right_and_advances_animation() {
        let mut state = SimulationState {
            facing_right: false,
            ..SimulationState::default()
        };
        let step = HorizontalMotion::PlayerControlled.advance(
            &mut state,
            &input_with(&[InputAction::MoveRight]),
            2.0,
        );

        assert_eq!(step, Some(StepDirection::Right));
        assert_eq!(state.position_x, 2.0);
        assert_eq!(state.tick_count, 1);
        assert!(state.facing_right);
    }

    #[test]
    fn left_arrow_steps_left_and_faces_left() {
        let mut state = SimulationState::default();
        let step = HorizontalMotion::PlayerControlled.advance(
            &mut state,
            &input_with(&[InputAction::MoveLeft]),
            2.0,
        );

        assert_eq!(step, Some(StepDirection::Left));
        assert_eq!(state.position_x, -2.0);
        assert_eq!(state.tick_count, 1);
        assert!(!state.facing_right);
    }

    #[test]
    fn right_wins_when_both_arrows_are_held() {
        let mut state = SimulationState::default();
        let step = HorizontalMotion::PlayerControlled.advance(
            &mut state,
            &input_with(&[InputAction::MoveLeft, InputAction::MoveRight]),
            2.0,
        );

        assert_eq!(step, Some(StepDirection::Right));
        assert_eq!(state.position_x, 2.0);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn idle_player_does_not_advance() {
        let mut state = SimulationState::default();
        let step =
            HorizontalMotion::PlayerControlled.advance(&mut state, &InputSnapshot::empty(), 2.0);

        assert_eq!(step, None);
        assert_eq!(state, SimulationState::default());
    }

    #[test]
    fn auto_scroll_advances_and_ignores_arrows() {
        let mut state = SimulationState::default();
        for _ in 0..3 {
            HorizontalMotion::AutoScroll.advance(
                &mut state,
                &input_with(&[InputAction::MoveLeft]),
                2.0,
            );
        }

        assert_eq!(state.tick_count, 3);
        assert_eq!(state.position_x, 0.0);
        assert!(state.facing_right);
    }

    #[test]
    fn auto_scroll_screen_x_wraps() {
        let mut state = SimulationState::default();
        state.tick_count = 703;
        assert_eq!(HorizontalMotion::AutoScroll.screen_x(&state, 704), 703.0);
        state.tick_count = 704;
        assert_eq!(HorizontalMotion::AutoScroll.screen_x(&state, 704), 0.0);
        state.tick_count = 710;
        assert_eq!(HorizontalMotion::AutoScroll.screen_x(&state, 704), 6.0);
    }

    #[test]
    fn player_screen_x_is_position() {
        let state = SimulationState {
            position_x: -14.0,
            tick_count: 999,
            ..SimulationState::default()
        };
        assert_eq!(
            HorizontalMotion::PlayerControlled.screen_x(&state, 704),
            -14.0
        );
    }

    #[test]
    fn parses_motion_names() {
        assert_eq!(
            "player".parse::<HorizontalMotion>(),
            Ok(HorizontalMotion::PlayerControlled)
        );
        assert_eq!(
            " Auto_Scroll ".parse::<HorizontalMotion>(),
            Ok(HorizontalMotion::AutoScroll)
        );
        assert!("sideways".parse::<HorizontalMotion>().is_err());
    }

    #[test]
    fn only_player_motion_mirrors() {
        assert!(HorizontalMotion::PlayerControlled.mirrors_when_facing_left());
        assert!(!HorizontalMotion::AutoScroll.mirrors_when_facing_left());
    }
}
