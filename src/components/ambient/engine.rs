//! The ambient engine: particle pool, render loop and resize handling behind
//! one set of operations.
//!
//! Created once when the canvas mounts. Every browser dependency is injected
//! (frame scheduler, random source, clock, stage and surface), so the whole
//! lifecycle runs synchronously under test.

use log::{debug, info};

use super::config::{AmbientConfig, SimulationLimits};
use super::debounce::{Clock, Debouncer, RESIZE_DEBOUNCE_MS};
use super::particles::ParticleSystem;
use super::random::RandomSource;
use super::scheduler::{AnimationLoop, FrameScheduler};
use super::surface::{CanvasSize, Stage, Surface};
use super::theme::EmberStyle;

/// Particle pool, render loop and debounced resize for one canvas.
pub struct AmbientEngine<S, R, C> {
	system: ParticleSystem,
	animation: AnimationLoop<S>,
	resize: Debouncer<C>,
	rng: R,
	particle_count: usize,
	device_pixel_ratio: f64,
	size: CanvasSize,
}

impl<S, R, C> AmbientEngine<S, R, C>
where
	S: FrameScheduler,
	R: RandomSource,
	C: Clock,
{
	/// Size the canvas, fill the pool and start the loop.
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		config: &AmbientConfig,
		stage: &impl Stage,
		device_pixel_ratio: f64,
		scheduler: S,
		rng: R,
		clock: C,
		limits: SimulationLimits,
		style: EmberStyle,
	) -> Self {
		let mut engine = Self {
			system: ParticleSystem::new(limits, style, 0.0, 0.0),
			animation: AnimationLoop::new(scheduler),
			resize: Debouncer::new(clock, RESIZE_DEBOUNCE_MS),
			rng,
			particle_count: config.particle_number,
			device_pixel_ratio,
			size: CanvasSize::default(),
		};
		engine.reinitialize(stage);
		engine
	}

	/// Takes effect on the next [`reinitialize`](Self::reinitialize).
	pub fn set_particle_count(&mut self, count: usize) {
		self.particle_count = count;
	}

	/// Full reset: re-read the viewport, rebuild the pool, unpause and restart the loop.
	pub fn reinitialize(&mut self, stage: &impl Stage) {
		self.apply_viewport(stage);
		self.system.initialize(self.particle_count, &mut self.rng);
		self.animation.play();
		self.animation.start();
		info!(
			"ember-ambient: initialized {} particles on {}x{}",
			self.system.len(),
			self.size.backing_width,
			self.size.backing_height
		);
	}

	/// Flip the pause flag.
	pub fn toggle(&mut self) {
		self.animation.toggle();
		debug!("ember-ambient: paused = {}", self.animation.is_paused());
	}

	/// Whether drawing is paused.
	pub fn is_paused(&self) -> bool {
		self.animation.is_paused()
	}

	/// Window resized; acted on once things have been quiet long enough.
	pub fn request_resize(&mut self) {
		self.resize.call();
	}

	/// One delivered display frame.
	pub fn tick(&mut self, stage: &impl Stage, surface: &mut impl Surface) {
		if self.resize.poll() {
			self.apply_viewport(stage);
		}
		let Self {
			system,
			animation,
			rng,
			..
		} = self;
		animation.tick(|| {
			surface.clear(system.width(), system.height());
			system.step(surface, rng);
		});
	}

	/// Stop scheduling frames and drop any pending resize.
	pub fn teardown(&mut self) {
		self.animation.stop();
		self.resize.cancel();
		info!("ember-ambient: torn down");
	}

	/// The live particle pool.
	pub fn particles(&self) -> &ParticleSystem {
		&self.system
	}

	/// Canvas size last applied to the stage.
	pub fn size(&self) -> CanvasSize {
		self.size
	}

	/// Whether frames are still being scheduled.
	pub fn is_running(&self) -> bool {
		self.animation.is_running()
	}

	fn apply_viewport(&mut self, stage: &impl Stage) {
		let Some((width, height)) = stage.viewport() else {
			return;
		};
		self.size = CanvasSize::from_viewport(width, height, self.device_pixel_ratio);
		stage.apply_size(&self.size);
		self.system.resize(self.size.backing_width, self.size.backing_height);
		debug!(
			"ember-ambient: canvas {}x{} (css {}x{})",
			self.size.backing_width,
			self.size.backing_height,
			self.size.css_width,
			self.size.css_height
		);
	}
}
