//! Synchronous test doubles for the browser seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::debounce::Clock;
use super::random::RandomSource;
use super::scheduler::{FrameHandle, FrameScheduler};
use super::surface::{CanvasSize, Stage, Surface};

/// Replays a fixed sequence of draws, then either repeats `fallback` forever
/// or starts the sequence over.
pub struct ScriptedRandom {
	values: Vec<f64>,
	cursor: usize,
	fallback: Option<f64>,
}

impl ScriptedRandom {
	pub fn new(values: &[f64], fallback: f64) -> Self {
		Self {
			values: values.to_vec(),
			cursor: 0,
			fallback: Some(fallback),
		}
	}

	pub fn constant(value: f64) -> Self {
		Self::new(&[], value)
	}

	pub fn cycle(values: &[f64]) -> Self {
		Self {
			values: values.to_vec(),
			cursor: 0,
			fallback: None,
		}
	}
}

impl RandomSource for ScriptedRandom {
	fn next_f64(&mut self) -> f64 {
		if self.cursor >= self.values.len() {
			match self.fallback {
				Some(value) => return value,
				None => self.cursor = 0,
			}
		}
		let value = self.values[self.cursor];
		self.cursor += 1;
		value
	}
}

/// Shared view of what a [`ManualScheduler`] has been asked to do.
#[derive(Clone, Default)]
pub struct SchedulerLog {
	pub requested: Rc<Cell<usize>>,
	pub cancelled: Rc<RefCell<Vec<FrameHandle>>>,
}

/// Hands out increasing handles and records requests and cancellations.
#[derive(Default)]
pub struct ManualScheduler {
	next: FrameHandle,
	pub log: SchedulerLog,
}

impl FrameScheduler for ManualScheduler {
	fn request_frame(&mut self) -> Option<FrameHandle> {
		self.next += 1;
		self.log.requested.set(self.log.requested.get() + 1);
		Some(self.next)
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		self.log.cancelled.borrow_mut().push(handle);
	}
}

/// Clock whose time only moves when a test advances it.
#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<f64>>);

impl ManualClock {
	pub fn advance(&self, ms: f64) {
		self.0.set(self.0.get() + ms);
	}
}

impl Clock for ManualClock {
	fn now_ms(&self) -> f64 {
		self.0.get()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear { width: f64, height: f64 },
	Square { cx: f64, cy: f64, size: f64, rotation: f64, color: String },
}

#[derive(Default)]
pub struct RecordingSurface {
	pub calls: Vec<DrawCall>,
}

impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.calls.push(DrawCall::Clear { width, height });
	}

	fn fill_rotated_square(&mut self, cx: f64, cy: f64, size: f64, rotation: f64, color: &str) {
		self.calls.push(DrawCall::Square {
			cx,
			cy,
			size,
			rotation,
			color: color.to_string(),
		});
	}
}

/// Stage with a viewport the test can change, remembering the last applied size.
#[derive(Default)]
pub struct FakeStage {
	pub viewport: Cell<(f64, f64)>,
	pub applied: Cell<Option<CanvasSize>>,
}

impl FakeStage {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			viewport: Cell::new((width, height)),
			applied: Cell::new(None),
		}
	}
}

impl Stage for FakeStage {
	fn viewport(&self) -> Option<(f64, f64)> {
		Some(self.viewport.get())
	}

	fn apply_size(&self, size: &CanvasSize) {
		self.applied.set(Some(*size));
	}
}
