//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use ember_ambient::{App, LaunchFlags, bootstrap, init_logging};
use leptos::prelude::*;
use log::info;

fn main() {
	init_logging();

	let flags = LaunchFlags::from_location();
	info!(
		"ember-ambient: loop = {}, controller = {}",
		flags.looping, flags.controller
	);

	bootstrap::start(move |config| {
		mount_to_body(move || {
			view! { <App config=config flags=flags /> }
		});
	});
}
