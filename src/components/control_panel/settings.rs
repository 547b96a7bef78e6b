//! Panel-only settings and input parsing.

use crate::components::ambient::theme::DEFAULT_BACKGROUND;

/// Bounds of the particle-count slider.
pub const PARTICLE_RANGE: (usize, usize) = (3, 100);

/// Display-only fields. The background color goes to the page, never the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelSettings {
	/// Panel title.
	pub message: String,
	/// CSS color applied to the page body.
	pub background_color: String,
}

impl Default for PanelSettings {
	fn default() -> Self {
		Self {
			message: "Ambient".to_string(),
			background_color: DEFAULT_BACKGROUND.to_string(),
		}
	}
}

/// Parse a slider value, snapping it into [`PARTICLE_RANGE`].
pub fn parse_particle_count(raw: &str) -> Option<usize> {
	let value: f64 = raw.trim().parse().ok()?;
	if !value.is_finite() {
		return None;
	}
	let (min, max) = PARTICLE_RANGE;
	Some((value.round().max(0.0) as usize).clamp(min, max))
}

/// One-based label for the `index`-th texture entry.
pub fn texture_label(index: usize) -> String {
	format!("Texture {}", index + 1)
}

/// Set the page background, the panel's only side channel.
pub fn apply_background(color: &str) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	let _ = body.style().set_property("background-color", color);
}
