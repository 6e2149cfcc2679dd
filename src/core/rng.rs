//! RNG module - deterministic random draws for the engine
//!
//! A small LCG keeps the whole session reproducible from one seed: the
//! starting board, every refill color, and every fall-animation speed
//! come from the same stream. Tests rely on this determinism.

use crate::types::{TokenColor, FALL_SPEED_MAX, FALL_SPEED_MIN};

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
        self.next_u32() % max
    }

    /// Draw a uniformly random palette color
    pub fn token_color(&mut self) -> TokenColor {
        TokenColor::from_index(self.next_range(TokenColor::COUNT))
    }

    /// Draw a fall speed in sub-cell units per tick
    pub fn fall_speed(&mut self) -> u16 {
        let span = (FALL_SPEED_MAX - FALL_SPEED_MIN + 1) as u32;
        FALL_SPEED_MIN + self.next_range(span) as u16
    }

    /// Get the current RNG state (for restarting with a fresh sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_fall_speed_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let speed = rng.fall_speed();
            assert!((FALL_SPEED_MIN..=FALL_SPEED_MAX).contains(&speed));
        }
    }

    #[test]
    fn test_token_color_covers_the_palette() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; TokenColor::COUNT as usize];
        for _ in 0..1000 {
            let color = rng.token_color();
            let idx = TokenColor::ALL.iter().position(|&c| c == color).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "all palette colors drawn");
    }
}
