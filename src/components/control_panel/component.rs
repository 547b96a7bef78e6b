//! Debug control panel for the ember effect.
//!
//! Edits the shared configuration and pushes changes to the running effect
//! through its [`AmbientHandle`]. Count and texture edits trigger a full
//! reinitialization; the background color only touches the page body.

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;

use super::settings::{
	PARTICLE_RANGE, PanelSettings, apply_background, parse_particle_count, texture_label,
};
use crate::components::ambient::{AmbientConfig, AmbientHandle};

/// Floating panel with play/pause, particle count, background and texture controls.
///
/// The particle slider is only offered when the injected config asked for
/// particles, and the texture folder only when it carries textures.
#[component]
pub fn ControlPanel(config: RwSignal<AmbientConfig>, handle: AmbientHandle) -> impl IntoView {
	let settings = RwSignal::new(PanelSettings::default());
	apply_background(&settings.get_untracked().background_color);

	let handle_play = handle.clone();
	let on_play = move |_: MouseEvent| handle_play.toggle();

	let on_background = move |ev: Event| {
		let color = event_target_value(&ev);
		apply_background(&color);
		settings.update(|s| s.background_color = color);
	};

	let initial = config.get_untracked();

	let count_row = (initial.particle_number > 0).then(|| {
		let handle_count = handle.clone();
		let on_count = move |ev: Event| {
			let Some(count) = parse_particle_count(&event_target_value(&ev)) else {
				return;
			};
			config.update(|c| c.particle_number = count);
			handle_count.set_particle_count(count);
			handle_count.reinitialize();
		};
		view! {
			<label class="control-row">
				<span>"Particles"</span>
				<input
					type="range"
					min={PARTICLE_RANGE.0.to_string()}
					max={PARTICLE_RANGE.1.to_string()}
					step="1"
					prop:value=move || config.get().particle_number.to_string()
					on:change=on_count
				/>
				<span>{move || config.get().particle_number}</span>
			</label>
		}
	});

	let texture_folder = (!initial.textures.is_empty()).then(|| {
		let rows = initial
			.textures
			.into_iter()
			.enumerate()
			.map(|(idx, (key, value))| {
				let handle_texture = handle.clone();
				let on_texture = move |ev: Event| {
					let value = event_target_value(&ev);
					config.update(|c| {
						c.textures.insert(key.clone(), value);
					});
					handle_texture.reinitialize();
				};
				view! {
					<label class="control-row">
						<span>{texture_label(idx)}</span>
						<input type="text" value=value on:change=on_texture />
					</label>
				}
			})
			.collect_view();
		view! {
			<fieldset class="control-folder">
				<legend>"Textures"</legend>
				{rows}
			</fieldset>
		}
	});

	view! {
		<div
			class="ambient-control-panel"
			style="position: fixed; top: 0; right: 0; z-index: 2; padding: 8px; background: rgba(26, 26, 26, 0.85); color: #eee; font: 11px sans-serif;"
		>
			<div class="control-title">{move || settings.get().message}</div>
			<button on:click=on_play>"Play / Pause"</button>
			{count_row}
			<label class="control-row">
				<span>"Background (demo only)"</span>
				<input
					type="color"
					prop:value=move || settings.get().background_color
					on:change=on_background
				/>
			</label>
			{texture_folder}
		</div>
	}
}
