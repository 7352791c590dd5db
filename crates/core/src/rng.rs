//! RNG module - seedable uniform shape selection
//!
//! Every spawn draws a shape id uniformly from `[1, 7]`. The draw is backed by a
//! small LCG so that a seed fully determines the shape sequence, which keeps
//! replays and tests deterministic.

use crate::types::{Shape, NUMBER_OF_SHAPES};

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
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG cycle
    /// with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Uniform shape source for spawning
#[derive(Debug, Clone)]
pub struct ShapePicker {
    seed: u32,
    rng: SimpleRng,
}

impl ShapePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next playable shape
    pub fn draw(&mut self) -> Shape {
        let index = self.rng.next_range(NUMBER_OF_SHAPES as u32) as usize;
        Shape::PLAYABLE[index]
    }

    /// Seed this picker was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Restart the sequence from its seed
    pub fn rewind(&mut self) {
        self.rng = SimpleRng::new(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_picker_never_draws_placeholder() {
        let mut picker = ShapePicker::new(7);
        for _ in 0..1_000 {
            let shape = picker.draw();
            assert!(shape.is_playable());
            assert!((1..=7).contains(&shape.id()));
        }
    }

    #[test]
    fn test_picker_covers_every_shape() {
        let mut picker = ShapePicker::new(42);
        let mut seen = [false; 8];
        for _ in 0..500 {
            seen[picker.draw().id() as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|s| *s), "missing shapes: {:?}", seen);
    }

    #[test]
    fn test_picker_rewind_replays_sequence() {
        let mut picker = ShapePicker::new(2024);
        let first: Vec<Shape> = (0..10).map(|_| picker.draw()).collect();
        picker.rewind();
        let second: Vec<Shape> = (0..10).map(|_| picker.draw()).collect();
        assert_eq!(first, second);
        assert_eq!(picker.seed(), 2024);
    }
}
