use crate::config::{MomentumParams, MOMENTUM_DECAY_PER_TICK};
use crate::gallery::Direction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumStep {
    pub delta: f64,
    pub done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Momentum {
    initial: f64,
    velocity: f64,
    direction: Direction,
    decay: f64,
    ticks: u32,
    done: bool,
}

impl Momentum {
    pub fn new(velocity: f64, direction: Direction, decay: f64) -> Self {
        let decay = if decay.is_finite() && decay > 0.0 {
            decay
        } else {
            MOMENTUM_DECAY_PER_TICK
        };
        Self {
            initial: velocity,
            velocity,
            direction,
            decay,
            ticks: 0,
            done: false,
        }
    }

    pub fn from_release(
        last_delta: f64,
        direction: Direction,
        params: &MomentumParams,
    ) -> Option<Self> {
        if last_delta == 0.0 || !last_delta.is_finite() {
            return None;
        }
        let max = params.max_velocity.abs();
        let velocity = last_delta.clamp(-max, max);
        Some(Self::new(velocity, direction, params.decay_per_tick))
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn step(&mut self) -> MomentumStep {
        if self.done {
            return MomentumStep {
                delta: 0.0,
                done: true,
            };
        }
        let delta = self.velocity;
        self.ticks += 1;
        // Recomputed from the tick count so rounding does not accumulate.
        self.velocity = self.initial - self.direction.sign() * self.decay * self.ticks as f64;
        self.done = match self.direction {
            Direction::Forward => self.velocity <= 0.0,
            Direction::Backward => self.velocity >= 0.0,
        };
        MomentumStep {
            delta,
            done: self.done,
        }
    }
}
