//! Last-call-wins debouncing against an injectable clock.

/// Milliseconds of quiet required after the last resize event.
pub const RESIZE_DEBOUNCE_MS: f64 = 300.0;

/// Monotonic-enough millisecond clock.
pub trait Clock {
	/// Current time in milliseconds.
	fn now_ms(&self) -> f64;
}

/// `Date.now()` in the browser.
pub struct BrowserClock;

impl Clock for BrowserClock {
	fn now_ms(&self) -> f64 {
		js_sys::Date::now()
	}
}

/// Collapses bursts of calls into one firing `delay_ms` after the last call.
///
/// Nothing fires by itself: the owner polls, typically once per frame.
pub struct Debouncer<C> {
	clock: C,
	delay_ms: f64,
	deadline: Option<f64>,
}

impl<C: Clock> Debouncer<C> {
	/// Idle debouncer firing `delay_ms` after the last call.
	pub fn new(clock: C, delay_ms: f64) -> Self {
		Self {
			clock,
			delay_ms,
			deadline: None,
		}
	}

	/// Record a call, pushing the deadline back.
	pub fn call(&mut self) {
		self.deadline = Some(self.clock.now_ms() + self.delay_ms);
	}

	/// `true` exactly once when the deadline has passed.
	pub fn poll(&mut self) -> bool {
		match self.deadline {
			Some(deadline) if self.clock.now_ms() >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}

	/// Forget a pending call.
	pub fn cancel(&mut self) {
		self.deadline = None;
	}
}
