//! Drawing and canvas-sizing seams between the simulation and the DOM.
//!
//! [`Surface`] is what the simulation draws onto; [`Stage`] owns the canvas
//! element's size and knows the viewport. Both have browser implementations
//! here and recording doubles in tests.

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// A 2D drawing target.
pub trait Surface {
	/// Clear the rectangle `(0, 0, width, height)`.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill a square of side `size` centred at `(cx, cy)`, rotated by `rotation` radians.
	fn fill_rotated_square(&mut self, cx: f64, cy: f64, size: f64, rotation: f64, color: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_rotated_square(&mut self, cx: f64, cy: f64, size: f64, rotation: f64, color: &str) {
		self.save();
		let _ = self.translate(cx, cy);
		let _ = self.rotate(rotation);
		self.set_fill_style_str(color);
		self.fill_rect(-size / 2.0, -size / 2.0, size, size);
		self.restore();
	}
}

/// Canvas dimensions in both physical (backing store) and CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasSize {
	/// Canvas `width` attribute.
	pub backing_width: f64,
	/// Canvas `height` attribute.
	pub backing_height: f64,
	/// CSS width of the element.
	pub css_width: f64,
	/// CSS height of the element.
	pub css_height: f64,
}

impl CanvasSize {
	/// Size a full-viewport canvas for the given device pixel ratio.
	pub fn from_viewport(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
		let backing_width = width * device_pixel_ratio;
		let backing_height = height * device_pixel_ratio;
		Self {
			backing_width,
			backing_height,
			css_width: backing_width / device_pixel_ratio,
			css_height: backing_height / device_pixel_ratio,
		}
	}
}

/// Owner of the canvas element: reports the viewport and applies sizes.
pub trait Stage {
	/// Viewport size in CSS pixels, if it can be read.
	fn viewport(&self) -> Option<(f64, f64)>;

	/// Resize the canvas backing store and element.
	fn apply_size(&self, size: &CanvasSize);
}

/// Full-window canvas stage.
pub struct CanvasStage {
	window: Window,
	canvas: HtmlCanvasElement,
}

impl CanvasStage {
	/// Stage for `canvas` sized against `window`.
	pub fn new(window: Window, canvas: HtmlCanvasElement) -> Self {
		Self { window, canvas }
	}
}

impl Stage for CanvasStage {
	fn viewport(&self) -> Option<(f64, f64)> {
		Some((
			self.window.inner_width().ok()?.as_f64()?,
			self.window.inner_height().ok()?.as_f64()?,
		))
	}

	fn apply_size(&self, size: &CanvasSize) {
		self.canvas.set_width(size.backing_width as u32);
		self.canvas.set_height(size.backing_height as u32);
		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", size.css_width));
		let _ = style.set_property("height", &format!("{}px", size.css_height));
	}
}

/// The window's device pixel ratio, falling back to 1 when unreported.
pub fn device_pixel_ratio(window: &Window) -> f64 {
	let ratio = window.device_pixel_ratio();
	if ratio > 0.0 { ratio } else { 1.0 }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn retina_viewport_doubles_backing_store() {
		let size = CanvasSize::from_viewport(800.0, 600.0, 2.0);
		assert_eq!(size.backing_width, 1600.0);
		assert_eq!(size.backing_height, 1200.0);
		assert_eq!(size.css_width, 800.0);
		assert_eq!(size.css_height, 600.0);
	}

	#[test]
	fn unit_ratio_keeps_sizes_equal() {
		let size = CanvasSize::from_viewport(1024.0, 768.0, 1.0);
		assert_eq!((size.backing_width, size.backing_height), (1024.0, 768.0));
		assert_eq!((size.css_width, size.css_height), (1024.0, 768.0));
	}
}
