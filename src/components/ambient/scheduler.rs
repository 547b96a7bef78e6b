//! Frame scheduling for the render loop.
//!
//! The browser implementation wraps `requestAnimationFrame`; [`AnimationLoop`]
//! only sees the [`FrameScheduler`] trait, so a test can drive ticks by hand.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// Identifier of a pending frame request.
pub type FrameHandle = i32;

/// Source of display-frame callbacks.
pub trait FrameScheduler {
	/// Ask for one callback on the next display frame.
	fn request_frame(&mut self) -> Option<FrameHandle>;

	/// Drop a request made by `request_frame`.
	fn cancel_frame(&mut self, handle: FrameHandle);
}

/// The shared frame callback; the component fills it, the scheduler re-arms it.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler.
pub struct RafScheduler {
	callback: FrameCallback,
}

impl RafScheduler {
	/// Scheduler that hands `callback` to `requestAnimationFrame`.
	pub fn new(callback: FrameCallback) -> Self {
		Self { callback }
	}
}

impl FrameScheduler for RafScheduler {
	fn request_frame(&mut self) -> Option<FrameHandle> {
		let window = web_sys::window()?;
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}
}

/// Self-re-arming render loop with a pause flag.
///
/// While paused the loop keeps requesting frames so resuming is instant; it
/// just skips the frame body.
pub struct AnimationLoop<S> {
	scheduler: S,
	pending: Option<FrameHandle>,
	running: bool,
	paused: bool,
}

impl<S: FrameScheduler> AnimationLoop<S> {
	/// Stopped, unpaused loop.
	pub fn new(scheduler: S) -> Self {
		Self {
			scheduler,
			pending: None,
			running: false,
			paused: false,
		}
	}

	/// (Re)start the loop. Any frame already in flight is cancelled first.
	pub fn start(&mut self) {
		self.cancel_pending();
		self.running = true;
		self.pending = self.scheduler.request_frame();
	}

	/// Cancel the pending frame and ignore late ticks.
	pub fn stop(&mut self) {
		self.cancel_pending();
		self.running = false;
	}

	/// Flip the pause flag.
	pub fn toggle(&mut self) {
		self.paused = !self.paused;
	}

	/// Clear the pause flag.
	pub fn play(&mut self) {
		self.paused = false;
	}

	/// Whether frame bodies are skipped.
	pub fn is_paused(&self) -> bool {
		self.paused
	}

	/// Whether the loop is scheduling frames.
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Handle one delivered frame: re-arm, then run `frame` unless paused.
	/// Returns whether `frame` ran.
	pub fn tick(&mut self, frame: impl FnOnce()) -> bool {
		if !self.running {
			return false;
		}
		self.pending = self.scheduler.request_frame();
		if self.paused {
			return false;
		}
		frame();
		true
	}

	fn cancel_pending(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
	}
}
