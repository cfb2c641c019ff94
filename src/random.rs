//! Seeded pseudo-random generator.
//!
//! Four 32-bit registers are mixed from the seed text, then advanced with an
//! xorshift step on every draw. The arithmetic is bit-exact with the
//! blockies reference generator so the same seed always yields the same icon.

/// `2^31`, the divisor applied to the unsigned value of the last register.
const DIVISOR: f64 = 2_147_483_648.0;

/// Deterministic number stream derived from a seed string.
///
/// Also usable as an endless [`Iterator`] over the same values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRandom {
    state: [i32; 4],
}

impl SeedRandom {
    /// Mix `seed` into a fresh generator. Characters are consumed as UTF-16
    /// code units, each one folded into register `index % 4`.
    pub fn new(seed: &str) -> Self {
        let mut state = [0i32; 4];
        for (index, unit) in seed.encode_utf16().enumerate() {
            let register = &mut state[index % 4];
            *register = register
                .wrapping_shl(5)
                .wrapping_sub(*register)
                .wrapping_add(i32::from(unit));
        }
        Self { state }
    }

    /// Advance the generator and return the next value.
    ///
    /// Both xor terms of the new register keep their sign bit cleared
    /// (`x ^ (x >> k)` with an arithmetic shift), so the result is always
    /// below 1.0 even though the divisor is `2^31`.
    pub fn next_f64(&mut self) -> f64 {
        let [a0, a1, a2, a3] = self.state;
        let t = a0 ^ a0.wrapping_shl(11);
        let next = a3 ^ (a3 >> 19) ^ t ^ (t >> 8);
        self.state = [a1, a2, a3, next];
        f64::from(next as u32) / DIVISOR
    }

    /// Raw register values, mostly useful for debugging.
    pub fn state(&self) -> [i32; 4] {
        self.state
    }
}

impl Iterator for SeedRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
