//! Ember particle pool: spawning, per-frame motion, drift and recycling.

use super::config::SimulationLimits;
use super::random::RandomSource;
use super::surface::Surface;
use super::theme::EmberStyle;

/// A single ember.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Current horizontal position.
	pub x: f64,
	/// Current vertical position.
	pub y: f64,
	/// Spawn point; the particle returns here once it leaves the canvas.
	pub start_x: f64,
	/// Vertical spawn coordinate.
	pub start_y: f64,
	/// Fixed rotation in radians.
	pub r: f64,
	/// Rightward speed per frame.
	pub vx: f64,
	/// Upward speed per frame.
	pub vy: f64,
	/// Side length of the square in pixels.
	pub size: f64,
	/// CSS color string, fixed at spawn.
	pub color: String,
}

/// Fixed-size pool of embers bound to a canvas of `width` x `height`.
pub struct ParticleSystem {
	/// Live particles, in draw order.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	frame_count: u32,
	limits: SimulationLimits,
	style: EmberStyle,
}

impl ParticleSystem {
	/// Empty pool for a `width` x `height` canvas.
	pub fn new(limits: SimulationLimits, style: EmberStyle, width: f64, height: f64) -> Self {
		Self {
			particles: Vec::new(),
			width,
			height,
			frame_count: 0,
			limits,
			style,
		}
	}

	/// Replace the pool with `count` freshly spawned particles and restart the frame counter.
	pub fn initialize(&mut self, count: usize, rng: &mut impl RandomSource) {
		let particles: Vec<Particle> = (0..count).map(|_| self.spawn(rng)).collect();
		self.particles = particles;
		self.frame_count = 0;
	}

	/// Half of the particles enter from off-screen left and below ("x delayed"),
	/// the rest rise straight up from under the bottom edge.
	fn spawn(&self, rng: &mut impl RandomSource) -> Particle {
		let (width, height) = (self.width, self.height);
		let size = rng.floored(self.limits.upper_size) + self.limits.lower_size;
		let r = rng.floored(360.0).to_radians();
		let green = rng.floored(self.style.green_spread);
		let alpha = rng.next_f64();
		let color = self.style.particle_color(green, alpha).to_css();

		let x_delayed = rng.coin();
		let start_x = if x_delayed {
			-(size + rng.floored(width))
		} else {
			rng.floored(width * 0.25)
		};
		let start_y = if x_delayed {
			size + rng.floored(height * 0.25) + (height * 0.75).floor()
		} else {
			height + size + rng.floored(height)
		};

		let vx = rng.floored(self.limits.upper_limit / 4.0);
		let vy = rng.floored(self.limits.upper_limit / 4.0);

		Particle {
			x: start_x,
			y: start_y,
			start_x,
			start_y,
			r,
			vx,
			vy,
			size,
			color,
		}
	}

	/// Draw every particle, then advance it.
	///
	/// The advance conditions look at the spawn point as well as the live
	/// position, which is what shapes the two entry trajectories.
	pub fn step(&mut self, surface: &mut impl Surface, rng: &mut impl RandomSource) {
		let Self {
			particles,
			width,
			height,
			frame_count,
			limits,
			..
		} = self;
		let drift_vx = *frame_count % limits.vx_period == 0;
		let drift_vy = *frame_count % limits.vy_period == 0;

		for p in particles.iter_mut() {
			let half = p.size / 2.0;
			surface.fill_rotated_square(p.x + half, p.y + half, p.size, p.r, &p.color);

			if p.y < *height || p.start_x < 0.0 {
				p.x += p.vx;
			}
			if p.x > 0.0 || p.start_y > *height {
				p.y -= p.vy;
			}

			if drift_vx && rng.coin() {
				p.vx = drift(p.vx, limits, rng);
			}
			if drift_vy && rng.coin() {
				p.vy = drift(p.vy, limits, rng);
			}

			if p.x > *width || p.y < -p.size {
				p.x = p.start_x;
				p.y = p.start_y;
			}
		}

		*frame_count = frame_count.wrapping_add(1);
	}

	/// Update the bounds. Positions are left alone and settle as particles recycle.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Canvas width in pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Canvas height in pixels.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Steps taken since the last `initialize`.
	pub fn frame_count(&self) -> u32 {
		self.frame_count
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the pool has no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

/// Nudge a velocity component one unit down or up, clamped to the limits.
fn drift(value: f64, limits: &SimulationLimits, rng: &mut impl RandomSource) -> f64 {
	if rng.coin() {
		limits.lower_limit.max(value - 1.0)
	} else {
		(value + 1.0).min(limits.upper_limit)
	}
}
