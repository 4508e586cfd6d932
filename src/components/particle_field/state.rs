//! Particle field simulation state.
//!
//! [`FieldState`] owns one generation of particles, the surface bounds and the
//! last known pointer position. It has no browser dependencies: the driver
//! feeds it events and calls [`FieldState::tick`] once per animation frame,
//! so tests can step it directly.

use log::info;
use rand::Rng;

use super::config::{FieldConfig, LinkStyle, PointerStyle};
use super::particles::Particle;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// A line to draw between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub alpha: f64,
}

/// Opacity of a link spanning `distance`, or `None` when the pair is too far
/// apart. The bound is strict: a pair exactly `style.distance` apart is not
/// linked.
pub fn link_alpha(distance: f64, style: &LinkStyle) -> Option<f64> {
	(distance < style.distance).then(|| (1.0 - distance / style.distance) * style.max_alpha)
}

/// Velocity delta pushing a particle at `(x, y)` away from the pointer.
///
/// Returns `None` outside the pointer radius, and when the pointer sits
/// exactly on the particle (no direction to push in).
pub fn repulsion(pointer: (f64, f64), x: f64, y: f64, style: &PointerStyle) -> Option<(f64, f64)> {
	let (dx, dy) = (x - pointer.0, y - pointer.1);
	let dist = dx.hypot(dy);
	if dist >= style.radius || dist <= 0.0 {
		return None;
	}
	let force = (style.radius - dist) / style.radius;
	Some((
		dx / dist * force * style.strength,
		dy / dist * force * style.strength,
	))
}

/// One particle field: configuration, bounds, particles and pointer.
///
/// The particle collection is only replaced by [`FieldState::regenerate`] and
/// only moved by [`FieldState::tick`]; callers get read access.
pub struct FieldState {
	config: FieldConfig,
	particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	pointer: Option<(f64, f64)>,
	generation: u32,
}

impl FieldState {
	/// Creates the first generation for a surface of `width x height`, with the
	/// particle count taken from `viewport_width`.
	pub fn new<R: Rng>(
		config: FieldConfig,
		viewport_width: f64,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let mut state = Self {
			config,
			particles: Vec::new(),
			width,
			height,
			pointer: None,
			generation: 0,
		};
		state.regenerate(viewport_width, width, height, rng);
		state
	}

	/// Discards every particle and spawns a fresh generation for new bounds.
	pub fn regenerate<R: Rng>(
		&mut self,
		viewport_width: f64,
		width: f64,
		height: f64,
		rng: &mut R,
	) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		let count = self.config.count.count_for(viewport_width);
		self.particles = (0..count)
			.map(|_| Particle::spawn(&self.config, self.width, self.height, rng))
			.collect();
		self.generation += 1;
		info!(
			"particle-field: {} generation {} with {} particles ({}x{})",
			self.config.name, self.generation, count, self.width, self.height
		);
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn generation(&self) -> u32 {
		self.generation
	}

	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	/// Records the pointer position in surface coordinates.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	/// The pointer left the surface.
	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	/// Physics step: pointer repulsion, integration, damping, edge reflection.
	pub fn update(&mut self) {
		let push = self.config.pointer.zip(self.pointer);
		let damping = self.config.damping;
		let (width, height) = (self.width, self.height);

		for p in &mut self.particles {
			if let Some((style, pointer)) = push {
				if let Some((ax, ay)) = repulsion(pointer, p.x, p.y, &style) {
					p.vx += ax;
					p.vy += ay;
				}
			}

			p.x += p.vx;
			p.y += p.vy;

			p.vx *= damping;
			p.vy *= damping;

			if p.x < 0.0 {
				p.x = 0.0;
				p.vx = -p.vx;
			}
			if p.x > width {
				p.x = width;
				p.vx = -p.vx;
			}
			if p.y < 0.0 {
				p.y = 0.0;
				p.vy = -p.vy;
			}
			if p.y > height {
				p.y = height;
				p.vy = -p.vy;
			}
		}
	}

	/// Advances every particle's twinkle phase by its own speed.
	pub fn advance_phases(&mut self) {
		for p in &mut self.particles {
			p.advance_phase();
		}
	}

	/// One animation frame worth of state change.
	pub fn tick(&mut self) {
		self.update();
		self.advance_phases();
	}

	/// Links between every unordered pair closer than the link distance.
	///
	/// Quadratic in the particle count, which the count rules keep small.
	pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
		let link = &self.config.link;
		self.particles.iter().enumerate().flat_map(move |(i, a)| {
			self.particles[i + 1..].iter().filter_map(move |b| {
				let dist = (a.x - b.x).hypot(a.y - b.y);
				link_alpha(dist, link).map(|alpha| Connection {
					from: (a.x, a.y),
					to: (b.x, b.y),
					alpha,
				})
			})
		})
	}
}

#[cfg(test)]
impl FieldState {
	/// Swaps in hand-placed particles for render tests.
	pub(crate) fn with_particles(mut self, particles: Vec<Particle>) -> Self {
		self.particles = particles;
		self
	}
}
