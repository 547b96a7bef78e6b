//! Random number sources for particle spawning and velocity drift.

use rand::rngs::SmallRng;
use rand::{Rng as _, SeedableRng as _};

/// Uniform `[0, 1)` source. Injected so tests can script exact sequences.
pub trait RandomSource {
	/// Next uniform draw in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// `floor(rand * n)`, an integer-valued draw in `[0, n)`.
	fn floored(&mut self, n: f64) -> f64 {
		(self.next_f64() * n).floor()
	}

	/// A fair coin: `true` when the draw exceeds one half.
	fn coin(&mut self) -> bool {
		self.next_f64() > 0.5
	}
}

/// Small, fast, seedable generator used in the browser.
pub struct SeededRandom(SmallRng);

impl SeededRandom {
	/// Deterministic generator for a fixed seed.
	pub fn from_seed(seed: u64) -> Self {
		Self(SmallRng::seed_from_u64(seed))
	}

	/// Seed from the browser clock and `Math.random`.
	pub fn from_clock() -> Self {
		let now = js_sys::Date::now() as u64;
		let jitter = (js_sys::Math::random() * u32::MAX as f64) as u64;
		Self::from_seed(now ^ (jitter << 32))
	}
}

impl RandomSource for SeededRandom {
	fn next_f64(&mut self) -> f64 {
		self.0.r#gen::<f64>()
	}
}
