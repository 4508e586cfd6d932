//! Page-level configuration.
//!
//! The page may embed a JSON block to move mount points or tune the fields:
//!
//! ```html
//! <script id="particle-config" type="application/json">
//!   { "hero": { "connection_distance": 120 }, "cursor": false }
//! </script>
//! ```
//!
//! Every key is optional; anything missing keeps its default.

use serde::Deserialize;

use crate::components::particle_field::FieldConfig;
use crate::components::particle_field::config::{CountRule, MAX_PARTICLES, PointerStyle};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "particle-config";

/// Pointer strength used when interaction is switched on for a field that
/// has none by default.
const DEFAULT_POINTER_STRENGTH: f64 = 0.02;
const DEFAULT_POINTER_RADIUS: f64 = 120.0;

/// Tweaks applied on top of a field preset.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldOverrides {
	/// Fixed particle count, replacing the preset's count rule. Capped at
	/// [`MAX_PARTICLES`].
	pub count: Option<usize>,
	pub connection_distance: Option<f64>,
	pub pointer_interaction: Option<bool>,
	pub pointer_radius: Option<f64>,
	pub damping: Option<f64>,
}

impl FieldOverrides {
	/// Applies the overrides. Non-positive distances and damping outside
	/// `(0, 1]` are ignored.
	pub fn apply(&self, mut config: FieldConfig) -> FieldConfig {
		if let Some(count) = self.count {
			config.count = CountRule::Constant(count.min(MAX_PARTICLES));
		}
		if let Some(distance) = self.connection_distance.filter(|d| *d > 0.0) {
			config.link.distance = distance;
		}
		if let Some(damping) = self.damping.filter(|d| *d > 0.0 && *d <= 1.0) {
			config.damping = damping;
		}
		match self.pointer_interaction {
			Some(false) => config.pointer = None,
			Some(true) if config.pointer.is_none() => {
				config.pointer = Some(PointerStyle {
					radius: DEFAULT_POINTER_RADIUS,
					strength: DEFAULT_POINTER_STRENGTH,
				});
			}
			_ => {}
		}
		if let (Some(style), Some(radius)) = (
			config.pointer.as_mut(),
			self.pointer_radius.filter(|r| *r > 0.0),
		) {
			style.radius = radius;
		}
		config
	}
}

/// Where the effects mount and how they are tuned.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
	/// Id of the element hosting the hero field: a `<canvas>` to draw on, or a
	/// container to render one into.
	pub hero_host: String,
	/// Id of the element hosting the full-page backdrop field, canvas or
	/// container.
	pub backdrop_host: String,
	pub hero: FieldOverrides,
	pub backdrop: FieldOverrides,
	/// Mount counters into `.stat-number` elements.
	pub counters: bool,
	/// Id of the section whose appearance starts the counters.
	pub stats_section: String,
	/// Enable the custom cursor.
	pub cursor: bool,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			hero_host: "heroCanvas".to_owned(),
			backdrop_host: "tech-canvas".to_owned(),
			hero: FieldOverrides::default(),
			backdrop: FieldOverrides::default(),
			counters: true,
			stats_section: "stats".to_owned(),
			cursor: true,
		}
	}
}

impl PageConfig {
	pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	pub fn hero_config(&self) -> FieldConfig {
		self.hero.apply(FieldConfig::hero())
	}

	pub fn backdrop_config(&self) -> FieldConfig {
		self.backdrop.apply(FieldConfig::backdrop())
	}
}
