use super::*;
use crate::components::particle_field::config::Sizing;

#[test]
fn container_canvas_fills_its_parent() {
	let style = FieldConfig::hero().sizing.canvas_style();
	assert!(style.contains("width: 100%"));
	assert!(!style.contains("fixed"));
}

#[test]
fn viewport_canvas_is_pinned_to_the_viewport() {
	let style = FieldConfig::backdrop().sizing.canvas_style();
	assert_eq!(FieldConfig::backdrop().sizing, Sizing::Viewport);
	assert!(style.contains("position: fixed"));
	assert!(style.contains("100vw") && style.contains("100vh"));
	assert!(style.contains("pointer-events: none"));
}
