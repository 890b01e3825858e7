use std::sync::Arc;

use engine::{
    DAffine2, DVec2, Game, InputAction, InputSnapshot, RenderTarget, SourceRect, SpriteSheet,
    Viewport,
};
use tracing::debug;

use super::animation::{draw_transform, frame_index, source_rect, wrap_period};
use super::motion::HorizontalMotion;
use super::state::{Phase, SimulationState};
use super::tuning::Tuning;
use super::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Walk cycle plus jump arc for a single sprite.
pub(crate) struct GameLoop {
    sheet: Arc<SpriteSheet>,
    motion: HorizontalMotion,
    tuning: Tuning,
    state: SimulationState,
}

impl GameLoop {
    pub(crate) fn new(sheet: Arc<SpriteSheet>, motion: HorizontalMotion, tuning: Tuning) -> Self {
        Self {
            sheet,
            motion,
            tuning,
            state: SimulationState::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &SimulationState {
        &self.state
    }

    pub(crate) fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub(crate) fn frame_index(&self) -> u32 {
        frame_index(
            self.state.tick_count,
            self.tuning.frame_hold_ticks,
            self.tuning.frame_count,
        )
    }

    pub(crate) fn source_rect(&self) -> SourceRect {
        source_rect(&self.tuning, self.frame_index())
    }

    pub(crate) fn draw_transform(&self) -> DAffine2 {
        let mirrored = self.motion.mirrors_when_facing_left() && !self.state.facing_right;
        let anchor = DVec2::new(
            self.motion
                .screen_x(&self.state, wrap_period(SCREEN_WIDTH, &self.tuning)),
            f64::from(SCREEN_HEIGHT) / 2.0 + self.state.position_y,
        );
        draw_transform(&self.tuning, mirrored, anchor)
    }
}

impl Game for GameLoop {
    fn tick(&mut self, input: &InputSnapshot) {
        let phase_before = self.phase();

        if input.is_down(InputAction::Jump) && self.state.try_jump(self.tuning.jump_velocity) {
            debug!(velocity = self.state.vertical_velocity, "jump_started");
        }

        if let Some(direction) = self
            .motion
            .advance(&mut self.state, input, self.tuning.step_speed)
        {
            debug!(
                direction = direction.as_str(),
                x = self.state.position_x,
                tick_count = self.state.tick_count,
                "walk_step"
            );
        }

        self.state.integrate_gravity(self.tuning.gravity);

        if phase_before == Phase::Airborne && self.phase() == Phase::Grounded {
            debug!(tick_count = self.state.tick_count, "landed");
        }
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        target.draw_image(&self.sheet, self.source_rect(), self.draw_transform());
    }

    fn viewport(&self, _outside: Viewport) -> Viewport {
        Viewport {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}
