//! Leptos component wrapping the ember canvas.
//!
//! The component creates a full-window canvas, builds an [`AmbientEngine`] on
//! mount and drives it from `requestAnimationFrame`. A debounced window
//! `resize` listener feeds the engine, and everything is released on unmount.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::{AmbientConfig, SimulationLimits};
use super::debounce::BrowserClock;
use super::engine::AmbientEngine;
use super::random::SeededRandom;
use super::scheduler::{FrameCallback, RafScheduler};
use super::surface::{CanvasStage, device_pixel_ratio};
use super::theme::EmberStyle;

type BrowserEngine = AmbientEngine<RafScheduler, SeededRandom, BrowserClock>;

/// Everything that lives between mount and unmount.
struct Mounted {
	engine: BrowserEngine,
	stage: CanvasStage,
	ctx: CanvasRenderingContext2d,
	animate: FrameCallback,
	on_resize: Closure<dyn FnMut()>,
}

/// Shared handle to the mounted ember effect.
///
/// Cloned into the canvas component and the control panel; operations are
/// no-ops until the canvas has mounted and after it unmounts.
#[derive(Clone, Default)]
pub struct AmbientHandle {
	inner: Rc<RefCell<Option<Mounted>>>,
}

impl AmbientHandle {
	/// Whether the canvas is currently mounted.
	pub fn is_mounted(&self) -> bool {
		self.inner.borrow().is_some()
	}

	/// Pause or resume drawing.
	pub fn toggle(&self) {
		if let Some(m) = self.inner.borrow_mut().as_mut() {
			m.engine.toggle();
		}
	}

	/// Used with [`reinitialize`](Self::reinitialize) after the count changes.
	pub fn set_particle_count(&self, count: usize) {
		if let Some(m) = self.inner.borrow_mut().as_mut() {
			m.engine.set_particle_count(count);
		}
	}

	/// Rebuild the pool from scratch and restart drawing.
	pub fn reinitialize(&self) {
		if let Some(m) = self.inner.borrow_mut().as_mut() {
			m.engine.reinitialize(&m.stage);
		}
	}

	fn frame(&self) {
		if let Some(m) = self.inner.borrow_mut().as_mut() {
			m.engine.tick(&m.stage, &mut m.ctx);
		}
	}

	fn request_resize(&self) {
		if let Some(m) = self.inner.borrow_mut().as_mut() {
			m.engine.request_resize();
		}
	}

	/// Cancel the pending frame, remove the resize listener and drop the engine.
	pub fn unmount(&self) {
		let Some(mut mounted) = self.inner.borrow_mut().take() else {
			return;
		};
		mounted.engine.teardown();
		if let Some(window) = web_sys::window() {
			let _ = window.remove_event_listener_with_callback(
				"resize",
				mounted.on_resize.as_ref().unchecked_ref(),
			);
		}
		// The frame closure holds a handle clone; dropping it breaks the cycle.
		mounted.animate.borrow_mut().take();
	}
}

/// Renders the ember effect on a full-window canvas.
///
/// `config` supplies the initial particle count; later edits reach the engine
/// through `handle` rather than by re-running this component.
#[component]
pub fn AmbientCanvas(
	#[prop(into)] config: Signal<AmbientConfig>,
	handle: AmbientHandle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let handle_init = handle.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if handle_init.is_mounted() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("ember-ambient: 2d context unavailable");
			return;
		};

		let style = EmberStyle::default();
		let _ = web_sys::HtmlElement::style(&canvas).set_property("filter", &style.canvas_filter());
		mount(&handle_init, &window, canvas, ctx, &config.get_untracked(), style);
	});

	let stored = StoredValue::new_local(handle);
	on_cleanup(move || {
		let _ = stored.try_with_value(AmbientHandle::unmount);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="ambient-canvas"
			style="display: block; position: fixed; top: 0; left: 0; pointer-events: none;"
		/>
	}
}

fn mount(
	handle: &AmbientHandle,
	window: &Window,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	config: &AmbientConfig,
	style: EmberStyle,
) {
	// The frame callback must exist before the engine requests its first frame.
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let handle_frame = handle.clone();
	*animate.borrow_mut() = Some(Closure::new(move || handle_frame.frame()));

	let handle_resize = handle.clone();
	let on_resize: Closure<dyn FnMut()> = Closure::new(move || handle_resize.request_resize());
	let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

	let stage = CanvasStage::new(window.clone(), canvas);
	let engine = AmbientEngine::new(
		config,
		&stage,
		device_pixel_ratio(window),
		RafScheduler::new(animate.clone()),
		SeededRandom::from_clock(),
		BrowserClock,
		SimulationLimits::default(),
		style,
	);

	*handle.inner.borrow_mut() = Some(Mounted {
		engine,
		stage,
		ctx,
		animate,
		on_resize,
	});
}
