//! RNG module - deterministic input generation
//!
//! The simulation itself is fully deterministic and never draws random
//! numbers. This small LCG drives seeded "random walk" input for the trace
//! tool and for soak tests, so that a seed always reproduces the same run.

use crate::types::InputState;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        let hi = (self.next_u32() >> 16) as u64;
        ((hi * max as u64) >> 16) as u32
    }

    /// True with probability `percent / 100`.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}

/// Random-walk input: a direction is held for a random number of frames,
/// jumps are pressed now and then.
#[derive(Debug, Clone)]
pub struct RandomInput {
    rng: SimpleRng,
    current: InputState,
    frames_left: u32,
    jump_percent: u32,
}

impl RandomInput {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            current: InputState::NONE,
            frames_left: 0,
            jump_percent: 10,
        }
    }

    pub fn with_jump_percent(mut self, percent: u32) -> Self {
        self.jump_percent = percent.min(100);
        self
    }

    /// Input for the next frame.
    pub fn next_input(&mut self) -> InputState {
        if self.frames_left == 0 {
            self.frames_left = 5 + self.rng.next_range(25);
            let dir = self.rng.next_range(3);
            self.current.left = dir == 0;
            self.current.right = dir == 2;
        }
        self.frames_left -= 1;
        self.current.jump = self.rng.chance(self.jump_percent);
        self.current
    }
}
