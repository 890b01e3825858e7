/// Vertical state of the runner. Ground is `position_y == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Grounded,
    Airborne,
}

/// Everything the loop mutates between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SimulationState {
    /// Ticks the animation has advanced; never decreases.
    pub(crate) tick_count: u64,
    pub(crate) position_x: f64,
    /// Offset from the ground line, `<= 0` after every tick. Negative is up.
    pub(crate) position_y: f64,
    /// Positive is falling.
    pub(crate) vertical_velocity: f64,
    pub(crate) facing_right: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            tick_count: 0,
            position_x: 0.0,
            position_y: 0.0,
            vertical_velocity: 0.0,
            facing_right: true,
        }
    }
}

impl SimulationState {
    pub(crate) fn phase(&self) -> Phase {
        if self.position_y == 0.0 {
            Phase::Grounded
        } else {
            Phase::Airborne
        }
    }

    /// Starts a jump when grounded. Returns whether the velocity was set.
    pub(crate) fn try_jump(&mut self, jump_velocity: f64) -> bool {
        if self.phase() != Phase::Grounded {
            return false;
        }
        self.vertical_velocity = jump_velocity;
        true
    }

    pub(crate) fn advance_animation(&mut self) {
        self.tick_count = self.tick_count.saturating_add(1);
    }

    /// Accelerates, then integrates position, then clamps to the ground.
    /// Returns whether the ground clamp fired.
    pub(crate) fn integrate_gravity(&mut self, gravity: f64) -> bool {
        self.vertical_velocity += gravity;
        self.position_y += self.vertical_velocity;

        if self.position_y > 0.0 {
            self.position_y = 0.0;
            self.vertical_velocity = 0.0;
            return true;
        }
        false
    }
}
