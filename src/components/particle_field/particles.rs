//! The particle entity.

use rand::Rng;

use super::config::{Color, FieldConfig, pick_color};

/// A single moving point.
///
/// Radius and color are fixed at spawn; only position, velocity and phase
/// change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	radius: f64,
	color: Color,
	base_alpha: f64,
	phase: f64,
	phase_speed: f64,
}

impl Particle {
	/// Spawns a particle at a uniformly random position inside `width x height`.
	pub fn spawn<R: Rng>(
		config: &FieldConfig,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let color = pick_color(&config.palette, rng.random());
		Self {
			x: rng.random::<f64>() * width,
			y: rng.random::<f64>() * height,
			vx: (rng.random::<f64>() - 0.5) * config.max_speed,
			vy: (rng.random::<f64>() - 0.5) * config.max_speed,
			radius: config.radius.sample(rng.random()),
			color,
			base_alpha: config.base_alpha.sample(rng.random()),
			phase: FieldConfig::PHASE_RANGE.sample(rng.random()),
			phase_speed: config.phase_speed.sample(rng.random()),
		}
	}

	pub fn radius(&self) -> f64 {
		self.radius
	}

	pub fn color(&self) -> Color {
		self.color
	}

	pub fn phase(&self) -> f64 {
		self.phase
	}

	pub fn speed(&self) -> f64 {
		self.vx.hypot(self.vy)
	}

	pub(super) fn advance_phase(&mut self) {
		self.phase += self.phase_speed;
	}

	/// Current opacity: base plus a sinusoidal twinkle.
	pub fn alpha(&self, amplitude: f64) -> f64 {
		self.base_alpha + self.phase.sin() * amplitude
	}
}

#[cfg(test)]
impl Particle {
	/// Fixed-motion particle for physics tests.
	pub(crate) fn at(x: f64, y: f64, vx: f64, vy: f64) -> Self {
		Self {
			x,
			y,
			vx,
			vy,
			radius: 1.0,
			color: super::config::GOLD,
			base_alpha: 0.5,
			phase: 0.0,
			phase_speed: 0.01,
		}
	}
}
