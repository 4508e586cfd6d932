//! Custom cursor: a dot pinned to the pointer and an outline that trails it.
//!
//! Only enabled on devices with a hovering, fine pointer. Hovering an
//! interactive element toggles `cursor-hover` on `<body>` so the stylesheet
//! can grow the outline.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

use crate::components::frames::FrameTask;
use crate::components::listener::Listener;
use crate::error::MountError;

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Fraction of the remaining distance the outline covers each frame.
pub const FOLLOW_FACTOR: f64 = 0.12;

const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";
const HOVER_TARGETS: &str =
	"a, button, .service-card-inner, .path-card, input, textarea, select";
const HOVER_CLASS: &str = "cursor-hover";

/// Eased position chasing a target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower {
	pub x: f64,
	pub y: f64,
}

impl Follower {
	/// Moves a fixed fraction of the way toward `target`.
	pub fn step(&mut self, target: (f64, f64)) -> (f64, f64) {
		self.x += (target.0 - self.x) * FOLLOW_FACTOR;
		self.y += (target.1 - self.y) * FOLLOW_FACTOR;
		(self.x, self.y)
	}
}

fn place(el: &HtmlElement, (x, y): (f64, f64)) {
	let style = el.style();
	let _ = style.set_property("left", &format!("{x}px"));
	let _ = style.set_property("top", &format!("{y}px"));
}

fn find(document: &Document, selector: &str) -> Result<HtmlElement, MountError> {
	document
		.query_selector(selector)?
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.ok_or_else(|| MountError::MissingElement(selector.to_owned()))
}

/// Whether the event target sits inside an interactive element.
fn over_interactive(event: &Event) -> bool {
	event
		.target()
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
		.is_some()
}

/// Live cursor effect. Dropping it detaches the listeners and stops the trail.
pub struct CursorFollower {
	_listeners: Vec<Listener>,
	_trail: FrameTask,
}

impl CursorFollower {
	/// Binds `.cursor-dot` and `.cursor-outline`.
	///
	/// `Ok(None)` on touch or coarse pointers, where the native cursor stays.
	pub fn attach(window: &Window, document: &Document) -> Result<Option<Self>, MountError> {
		let fine = window
			.match_media(FINE_POINTER_QUERY)?
			.is_some_and(|query| query.matches());
		if !fine {
			debug!("particle-field: coarse pointer, custom cursor disabled");
			return Ok(None);
		}

		let dot = find(document, ".cursor-dot")?;
		let outline = find(document, ".cursor-outline")?;
		let body = document.body().ok_or(MountError::NoWindow)?;
		let pointer = Rc::new(Cell::new((0.0, 0.0)));

		let target = pointer.clone();
		let mut listeners = vec![Listener::attach(document, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let at = (f64::from(ev.client_x()), f64::from(ev.client_y()));
			target.set(at);
			place(&dot, at);
		})?];

		let hovered = body.clone();
		listeners.push(Listener::attach(document, "mouseover", move |ev| {
			if over_interactive(&ev) {
				let _ = hovered.class_list().add_1(HOVER_CLASS);
			}
		})?);
		listeners.push(Listener::attach(document, "mouseout", move |ev| {
			if over_interactive(&ev) {
				let _ = body.class_list().remove_1(HOVER_CLASS);
			}
		})?);

		let mut follower = Follower::default();
		let trail = FrameTask::spawn(window, move || {
			place(&outline, follower.step(pointer.get()));
			true
		});

		Ok(Some(Self {
			_listeners: listeners,
			_trail: trail,
		}))
	}
}
