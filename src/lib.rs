//! ember-ambient: decorative ember particle effect for the browser.
//!
//! This crate provides a WASM canvas component that animates a pool of
//! rising embers, plus an optional debug panel for tweaking the effect live.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod bootstrap;
pub mod components;

pub use bootstrap::LaunchFlags;
pub use components::ambient::{AmbientCanvas, AmbientConfig, AmbientHandle};
pub use components::control_panel::ControlPanel;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("ember-ambient: logging initialized");
}

/// Main application component.
/// Renders the ember canvas, and the control panel when `?controller` is set.
#[component]
pub fn App(config: AmbientConfig, flags: LaunchFlags) -> impl IntoView {
	provide_meta_context();

	let config = RwSignal::new(config);
	let handle = AmbientHandle::default();
	let panel = flags
		.controller
		.then(|| view! { <ControlPanel config=config handle=handle.clone() /> });

	view! {
		<Title text="Ember Ambient" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="o2team_ambient_main">
			<AmbientCanvas config=config handle=handle />
		</div>
		{panel}
	}
}
