//! Visual styling for the ember effect.
//!
//! Embers are orange squares whose green channel and alpha are chosen per
//! particle at spawn time; the whole canvas is softened with a CSS blur.

/// Page background used until the control panel picks another one.
pub const DEFAULT_BACKGROUND: &str = "#bddaf7";

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a new alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Hex when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Ember color and canvas filter configuration.
#[derive(Clone, Debug)]
pub struct EmberStyle {
	/// Base color; its green channel is the lower bound of the per-particle range.
	pub base: Color,
	/// Width of the random green range added on top of `base.g`.
	pub green_spread: f64,
	/// CSS blur radius applied to the whole canvas, in pixels.
	pub blur_px: f64,
}

impl EmberStyle {
	/// Color for a particle given its green offset (`0..green_spread`) and alpha.
	pub fn particle_color(&self, green_offset: f64, alpha: f64) -> Color {
		let g = (self.base.g as f64 + green_offset).clamp(0.0, 255.0) as u8;
		Color { g, ..self.base }.with_alpha(alpha)
	}

	/// CSS `filter` value for the canvas element.
	pub fn canvas_filter(&self) -> String {
		format!("blur({}px)", self.blur_px)
	}
}

impl Default for EmberStyle {
	fn default() -> Self {
		Self {
			base: Color::rgb(255, 100, 0),
			green_spread: 70.0,
			blur_px: 2.0,
		}
	}
}
