//! Visual and physical configuration for a particle field.
//!
//! Two presets cover the page: [`FieldConfig::hero`] for the interactive hero
//! background and [`FieldConfig::backdrop`] for the full-page decorative layer.

use std::f64::consts::TAU;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Brand gold used by the hero field.
pub const GOLD: Color = Color::rgb(201, 168, 76);
/// Electric blue accent.
pub const ELECTRIC: Color = Color::rgb(59, 130, 246);

/// One weighted color choice. Weights across a palette should sum to 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteEntry {
	pub weight: f64,
	pub color: Color,
}

/// Picks a palette color from a uniform sample in `[0, 1)`.
///
/// Walks the entries subtracting weights; the last entry absorbs any rounding
/// remainder so a non-empty palette always yields a color.
pub fn pick_color(palette: &[PaletteEntry], sample: f64) -> Color {
	let mut rest = sample;
	for entry in palette {
		if rest < entry.weight {
			return entry.color;
		}
		rest -= entry.weight;
	}
	palette.last().map_or(ELECTRIC, |e| e.color)
}

/// Upper bound on particles per field. Link detection compares every pair,
/// so the count has to stay small.
pub const MAX_PARTICLES: usize = 80;

/// Particle count as a function of viewport width, never above
/// [`MAX_PARTICLES`].
#[derive(Clone, Debug, PartialEq)]
pub enum CountRule {
	/// Same count at every width.
	Constant(usize),
	/// `(max_width, count)` steps checked in order with an inclusive upper
	/// bound; widths above every step get `fallback`.
	Breakpoints {
		steps: Vec<(f64, usize)>,
		fallback: usize,
	},
}

impl CountRule {
	pub fn count_for(&self, viewport_width: f64) -> usize {
		let count = match self {
			CountRule::Constant(n) => *n,
			CountRule::Breakpoints { steps, fallback } => steps
				.iter()
				.find(|(max_width, _)| viewport_width <= *max_width)
				.map_or(*fallback, |(_, count)| *count),
		};
		count.min(MAX_PARTICLES)
	}
}

/// How the drawing surface takes its size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sizing {
	/// Match the canvas element's laid-out size.
	Container,
	/// Match the window's inner size.
	Viewport,
}

impl Sizing {
	/// Inline CSS for a canvas the field creates itself, so the displayed box
	/// matches the backing store.
	pub fn canvas_style(self) -> &'static str {
		match self {
			Sizing::Container => "display: block; width: 100%; height: 100%;",
			Sizing::Viewport => {
				"display: block; position: fixed; inset: 0; width: 100vw; height: 100vh; pointer-events: none;"
			}
		}
	}
}

/// A uniform range `base + sample * spread`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spread {
	pub base: f64,
	pub spread: f64,
}

impl Spread {
	pub const fn new(base: f64, spread: f64) -> Self {
		Self { base, spread }
	}

	pub const fn fixed(value: f64) -> Self {
		Self::new(value, 0.0)
	}

	pub fn sample(self, unit: f64) -> f64 {
		self.base + unit * self.spread
	}
}

/// Soft halo drawn behind each particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowStyle {
	/// Glow radius as a multiple of the particle radius.
	pub radius_scale: f64,
	/// Glow opacity as a multiple of the particle opacity.
	pub alpha_scale: f64,
}

/// Connecting lines between nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
	/// Pairs strictly closer than this are connected.
	pub distance: f64,
	pub color: Color,
	/// Opacity of a zero-length link.
	pub max_alpha: f64,
	pub width: f64,
}

/// Pointer repulsion parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerStyle {
	/// Distance within which particles are pushed away.
	pub radius: f64,
	/// Velocity added per frame at full force.
	pub strength: f64,
}

/// Complete configuration for one particle field instance.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	pub name: &'static str,
	pub count: CountRule,
	pub palette: Vec<PaletteEntry>,
	/// Initial velocity per axis is `(sample - 0.5) * max_speed`.
	pub max_speed: f64,
	pub radius: Spread,
	pub base_alpha: Spread,
	/// Amplitude of the sinusoidal opacity oscillation.
	pub alpha_amplitude: f64,
	pub phase_speed: Spread,
	pub glow: Option<GlowStyle>,
	pub link: LinkStyle,
	/// `None` disables pointer interaction.
	pub pointer: Option<PointerStyle>,
	/// Per-frame velocity multiplier.
	pub damping: f64,
	pub sizing: Sizing,
	/// Quiet period before a resize regenerates the field.
	pub resize_debounce_ms: u32,
}

impl FieldConfig {
	/// Interactive hero background: width-dependent count, gold with blue
	/// accents, twinkling glow and pointer repulsion.
	pub fn hero() -> Self {
		Self {
			name: "hero",
			count: CountRule::Breakpoints {
				steps: vec![(480.0, 25), (768.0, 35), (1024.0, 50)],
				fallback: 70,
			},
			palette: vec![
				PaletteEntry {
					weight: 0.15,
					color: ELECTRIC,
				},
				PaletteEntry {
					weight: 0.85,
					color: GOLD,
				},
			],
			max_speed: 0.4,
			radius: Spread::new(0.5, 1.8),
			base_alpha: Spread::new(0.2, 0.5),
			alpha_amplitude: 0.15,
			phase_speed: Spread::new(0.005, 0.01),
			glow: Some(GlowStyle {
				radius_scale: 3.0,
				alpha_scale: 0.1,
			}),
			link: LinkStyle {
				distance: 150.0,
				color: GOLD,
				max_alpha: 0.12,
				width: 0.5,
			},
			pointer: Some(PointerStyle {
				radius: 120.0,
				strength: 0.02,
			}),
			damping: 0.999,
			sizing: Sizing::Container,
			resize_debounce_ms: 250,
		}
	}

	/// Decorative full-page layer: constant count, flat blue, no pointer.
	pub fn backdrop() -> Self {
		Self {
			name: "backdrop",
			count: CountRule::Constant(80),
			palette: vec![PaletteEntry {
				weight: 1.0,
				color: ELECTRIC,
			}],
			max_speed: 0.5,
			radius: Spread::new(0.0, 2.0),
			base_alpha: Spread::fixed(0.5),
			alpha_amplitude: 0.0,
			phase_speed: Spread::fixed(0.0),
			glow: None,
			link: LinkStyle {
				distance: 150.0,
				color: ELECTRIC,
				max_alpha: 0.2,
				width: 0.5,
			},
			pointer: None,
			damping: 1.0,
			sizing: Sizing::Viewport,
			resize_debounce_ms: 250,
		}
	}

	/// Full phase range for initial phase angles.
	pub(crate) const PHASE_RANGE: Spread = Spread::new(0.0, TAU);
}
