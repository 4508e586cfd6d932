//! Canvas rendering for the particle field.
//!
//! Drawing goes through the small [`Surface`] trait so the pass order can be
//! checked without a browser. Two passes per frame:
//! 1. Connection lines between nearby particles
//! 2. Particles, each with an optional soft glow

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::Color;
use super::state::FieldState;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// The drawing operations the particle field needs.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
	fn fill_circle(&self, center: (f64, f64), radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn fill_circle(&self, center: (f64, f64), radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}
}

/// Renders the current frame of `state` onto `surface`.
pub fn render<S: Surface + ?Sized>(state: &FieldState, surface: &S) {
	let config = state.config();
	surface.clear(state.width, state.height);

	let link = &config.link;
	for connection in state.connections() {
		surface.stroke_line(
			connection.from,
			connection.to,
			link.color.with_alpha(connection.alpha),
			link.width,
		);
	}

	for p in state.particles() {
		let alpha = p.alpha(config.alpha_amplitude);
		let center = (p.x, p.y);
		surface.fill_circle(center, p.radius(), p.color().with_alpha(alpha));

		if let Some(glow) = config.glow {
			surface.fill_circle(
				center,
				p.radius() * glow.radius_scale,
				p.color().with_alpha(alpha * glow.alpha_scale),
			);
		}
	}
}
