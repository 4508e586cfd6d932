//! Leptos component wrapping a particle field canvas.
//!
//! The component renders a `<canvas>` that fills its container, or the whole
//! viewport for [`Sizing::Viewport`](super::config::Sizing) fields. Once the
//! element mounts, a [`FieldDriver`] takes over sizing, animation and event
//! handling; the driver is stopped when the component is cleaned up.

use leptos::prelude::*;
use log::warn;
use web_sys::HtmlCanvasElement;

use super::config::FieldConfig;
use super::driver::FieldDriver;

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

/// Renders an animated particle network on a canvas element.
///
/// If the canvas cannot provide a 2D context the component stays blank and
/// logs a warning; the rest of the page is unaffected.
#[component]
pub fn ParticleFieldCanvas(
	config: FieldConfig,
	#[prop(optional, into)] class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let driver = StoredValue::new_local(None::<FieldDriver>);
	let style = config.sizing.canvas_style();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if driver.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match FieldDriver::start(canvas, config.clone()) {
			Ok(started) => driver.set_value(Some(started)),
			Err(e) => warn!("particle-field: {} field not started: {}", config.name, e),
		}
	});

	on_cleanup(move || {
		driver.update_value(|slot| {
			if let Some(mut running) = slot.take() {
				running.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			style=style
		/>
	}
}
