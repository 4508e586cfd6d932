//! particle-field: canvas particle networks and small page effects for the
//! CSF Consulting site.
//!
//! This crate compiles to WebAssembly and attaches to the existing marketing
//! page: an interactive particle network behind the hero, a decorative one
//! behind the whole page, animated stat counters and a trailing cursor. Any
//! effect whose host element is missing is skipped silently.

use leptos::mount::mount_to;
use leptos::prelude::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement, HtmlScriptElement, Window};

pub mod components;
pub mod config;
pub mod error;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub use components::counter::{CounterGate, StatCounter};
pub use components::cursor::CursorFollower;
pub use components::particle_field::{FieldConfig, FieldDriver, ParticleFieldCanvas};
pub use config::PageConfig;
pub use error::MountError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Load page configuration from a script element with id="particle-config".
/// Missing element means defaults; malformed JSON is logged and ignored.
fn load_page_config(document: &Document) -> Option<PageConfig> {
	let element = document.get_element_by_id(config::CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PageConfig::parse(&json_text) {
		Ok(config) => {
			info!("particle-field: loaded page configuration");
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse page configuration: {}", e);
			None
		}
	}
}

fn host_element(document: &Document, id: &str) -> Option<HtmlElement> {
	document.get_element_by_id(id)?.dyn_into().ok()
}

/// What a field's host element is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HostKind {
	/// The page already has the canvas; draw on it directly.
	Canvas,
	/// Any other element; a canvas is rendered inside it.
	Container,
}

impl HostKind {
	fn of(tag_name: &str) -> Self {
		if tag_name.eq_ignore_ascii_case("canvas") {
			HostKind::Canvas
		} else {
			HostKind::Container
		}
	}
}

/// Starts a particle field on the element with id `host_id`, which may be a
/// `<canvas>` or a container.
fn mount_field(document: &Document, host_id: &str, config: FieldConfig) {
	let Some(host) = host_element(document, host_id) else {
		debug!("particle-field: no #{} on this page, {} field skipped", host_id, config.name);
		return;
	};
	match HostKind::of(&host.tag_name()) {
		HostKind::Canvas => {
			let Ok(canvas) = host.dyn_into::<HtmlCanvasElement>() else {
				return;
			};
			let name = config.name;
			match FieldDriver::start(canvas, config) {
				// Lives as long as the page.
				Ok(driver) => std::mem::forget(driver),
				Err(e) => warn!("particle-field: {} field not started: {}", name, e),
			}
		}
		HostKind::Container => {
			mount_to(host, move || view! { <ParticleFieldCanvas config=config /> }).forget();
		}
	}
}

/// Replaces the text of every `.stat-number` with a counter up to its
/// `data-target`. The counters start together when the stats section scrolls
/// into view; without that section they are left alone.
fn mount_counters(document: &Document, section_id: &str) -> Result<(), MountError> {
	let nodes = document.query_selector_all(".stat-number")?;
	if nodes.length() == 0 {
		return Ok(());
	}
	let Some(section) = document.get_element_by_id(section_id) else {
		debug!("particle-field: no #{} on this page, counters skipped", section_id);
		return Ok(());
	};

	let gate = RwSignal::new(CounterGate::Waiting);
	for i in 0..nodes.length() {
		let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
			continue;
		};
		let Some(target) = el
			.get_attribute("data-target")
			.as_deref()
			.and_then(components::counter::parse_target)
		else {
			continue;
		};
		el.set_text_content(None);
		mount_to(el, move || view! { <StatCounter target=target gate=gate /> }).forget();
	}
	components::counter::watch_section(&section, gate);
	Ok(())
}

fn mount_cursor(window: &Window, document: &Document) {
	match CursorFollower::attach(window, document) {
		// Lives as long as the page.
		Ok(Some(cursor)) => std::mem::forget(cursor),
		Ok(None) => {}
		Err(e) => debug!("particle-field: custom cursor skipped: {}", e),
	}
}

/// Attaches every configured effect to the current document.
pub fn mount_page() {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let config = load_page_config(&document).unwrap_or_default();

	mount_field(&document, &config.backdrop_host, config.backdrop_config());
	mount_field(&document, &config.hero_host, config.hero_config());

	if config.counters {
		if let Err(e) = mount_counters(&document, &config.stats_section) {
			warn!("particle-field: counters skipped: {}", e);
		}
	}
	if config.cursor {
		mount_cursor(&window, &document);
	}
}
