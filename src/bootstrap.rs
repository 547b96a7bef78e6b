//! Startup: query flags, injected configuration and the wait-for-config loop.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlScriptElement;

use crate::components::ambient::AmbientConfig;

/// Id of the `<script type="application/json">` element carrying the config.
pub const CONFIG_ELEMENT_ID: &str = "ambient-config";

/// How often to look for the config element while it is missing.
pub const POLL_INTERVAL_MS: i32 = 1000;

/// Flags read from the page's query string. Only presence matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaunchFlags {
	/// `?loop`: the host asked for a looping preview.
	pub looping: bool,
	/// `?controller`: show the control panel.
	pub controller: bool,
}

impl LaunchFlags {
	/// Parse a `location.search` string such as `?loop&controller=1`.
	pub fn parse(search: &str) -> Self {
		Self {
			looping: has_param(search, "loop"),
			controller: has_param(search, "controller"),
		}
	}

	/// Flags for the current page; all false outside a browser.
	pub fn from_location() -> Self {
		web_sys::window()
			.and_then(|w| w.location().search().ok())
			.map(|search| Self::parse(&search))
			.unwrap_or_default()
	}
}

fn has_param(search: &str, name: &str) -> bool {
	search
		.trim_start_matches('?')
		.split('&')
		.filter(|pair| !pair.is_empty())
		.any(|pair| pair.split('=').next() == Some(name))
}

/// Read the injected config, if the element is present.
///
/// Only a missing element yields `None`. Once the element exists its content
/// is final, so a malformed body falls back to the defaults.
pub fn load_config() -> Option<AmbientConfig> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let text = element
		.dyn_into::<HtmlScriptElement>()
		.ok()
		.and_then(|script| script.text().ok())
		.unwrap_or_default();
	Some(parse_config(&text))
}

/// Parse the config element's body, degrading to [`AmbientConfig::default`]
/// (no particles, no textures) when it is not valid JSON.
pub fn parse_config(text: &str) -> AmbientConfig {
	match AmbientConfig::from_json(text) {
		Ok(config) => {
			info!(
				"ember-ambient: loaded config with {} particles, {} textures",
				config.particle_number,
				config.textures.len()
			);
			config
		}
		Err(e) => {
			warn!("ember-ambient: failed to parse config, using defaults: {}", e);
			AmbientConfig::default()
		}
	}
}

/// Run `mount` with the config as soon as it is available.
///
/// Mounts immediately when the config element is already in the page,
/// otherwise polls every [`POLL_INTERVAL_MS`] until it appears. `mount` runs
/// at most once.
pub fn start(mount: impl FnOnce(AmbientConfig) + 'static) {
	if let Some(config) = load_config() {
		mount(config);
		return;
	}
	let Some(window) = web_sys::window() else {
		return;
	};
	debug!("ember-ambient: waiting for #{}", CONFIG_ELEMENT_ID);

	let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let interval_inner = interval.clone();
	let mut mount = Some(mount);
	let poll = Closure::<dyn FnMut()>::new(move || {
		let Some(config) = load_config() else {
			return;
		};
		if let (Some(id), Some(window)) = (interval_inner.take(), web_sys::window()) {
			window.clear_interval_with_handle(id);
		}
		if let Some(mount) = mount.take() {
			mount(config);
		}
	});

	match window.set_interval_with_callback_and_timeout_and_arguments_0(
		poll.as_ref().unchecked_ref(),
		POLL_INTERVAL_MS,
	) {
		Ok(id) => interval.set(Some(id)),
		Err(e) => warn!("ember-ambient: could not schedule config polling: {:?}", e),
	}
	// Lives until the page goes away; the interval is cleared once mounted.
	poll.forget();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flags_detected_by_presence() {
		assert_eq!(
			LaunchFlags::parse("?loop&controller=1"),
			LaunchFlags {
				looping: true,
				controller: true
			}
		);
		assert_eq!(
			LaunchFlags::parse("?controller="),
			LaunchFlags {
				looping: false,
				controller: true
			}
		);
	}

	#[test]
	fn absent_flags_are_false() {
		assert_eq!(LaunchFlags::parse(""), LaunchFlags::default());
		assert_eq!(LaunchFlags::parse("?"), LaunchFlags::default());
		assert_eq!(LaunchFlags::parse("?theme=dark"), LaunchFlags::default());
	}

	#[test]
	fn config_body_is_parsed() {
		let config = parse_config(r#"{"particleNumber": 30, "textures": {"ember": "a.png"}}"#);
		assert_eq!(config.particle_number, 30);
		assert_eq!(config.textures.get("ember").map(String::as_str), Some("a.png"));
	}

	#[test]
	fn malformed_config_falls_back_to_defaults() {
		assert_eq!(parse_config("{\"particleNumber\": "), AmbientConfig::default());
		assert_eq!(parse_config(""), AmbientConfig::default());
		assert_eq!(
			parse_config(r#"{"particleNumber": "many"}"#),
			AmbientConfig::default()
		);
	}

	#[test]
	fn flag_names_must_match_exactly() {
		let flags = LaunchFlags::parse("?loops=1&xcontroller");
		assert!(!flags.looping);
		assert!(!flags.controller);
	}
}
