//! Browser runtime for one particle field.
//!
//! [`FieldDriver`] binds a [`FieldState`] to a canvas: it sizes the surface,
//! runs the animation loop through `requestAnimationFrame`, and translates
//! DOM events into state changes:
//!
//! | Event | Effect |
//! |-------|--------|
//! | `mousemove` on the canvas | pointer set (pointer-interactive fields only) |
//! | `mouseleave` on the canvas | pointer cleared |
//! | `resize` on the window | debounced: cancel frame, resize, regenerate, restart |
//! | `visibilitychange` | hidden: cancel frame; visible: resume |
//!
//! Events and frame callbacks never overlap on the browser's single thread,
//! so the particles are only ever touched inside one or the other.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, Window};

use super::config::{FieldConfig, Sizing};
use super::render::render;
use super::state::FieldState;
use crate::components::frames::{FrameCallback, FrameLoop, LoopState, WindowFrames};
use crate::components::listener::Listener;
use crate::error::MountError;

/// Window inner width, used to pick the particle count.
fn viewport_width(window: &Window) -> f64 {
	window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0)
}

fn viewport_height(window: &Window) -> f64 {
	window
		.inner_height()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0)
}

/// Sizes the canvas backing store and returns the new dimensions.
fn fit_canvas(canvas: &HtmlCanvasElement, window: &Window, sizing: Sizing) -> (f64, f64) {
	let (w, h) = match sizing {
		Sizing::Container => (
			f64::from(canvas.offset_width()),
			f64::from(canvas.offset_height()),
		),
		Sizing::Viewport => (viewport_width(window), viewport_height(window)),
	};
	let (w, h) = (w.max(0.0), h.max(0.0));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

/// Seed from the host's random source.
fn seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Everything the frame callback and event handlers share.
struct Runtime {
	state: FieldState,
	frames: FrameLoop<WindowFrames>,
	window: Window,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	rng: SmallRng,
	resize_timer: Option<Timeout>,
}

impl Runtime {
	fn frame(&mut self) {
		if !self.frames.begin_frame() {
			return;
		}
		self.state.tick();
		render(&self.state, &self.ctx);
		self.frames.end_frame();
	}

	fn regenerate(&mut self) {
		let sizing = self.state.config().sizing;
		let (w, h) = fit_canvas(&self.canvas, &self.window, sizing);
		let viewport = viewport_width(&self.window);
		self.state.regenerate(viewport, w, h, &mut self.rng);
		if self.frames.state() == LoopState::Running {
			self.frames.restart();
		}
	}
}

/// A running particle field bound to a canvas. Dropping it stops the field.
pub struct FieldDriver {
	runtime: Rc<RefCell<Runtime>>,
	callback: FrameCallback,
	listeners: Vec<Listener>,
}

impl FieldDriver {
	/// Sizes `canvas`, spawns the first generation and starts animating.
	///
	/// Fails when the page has no window or the canvas has no 2D context.
	pub fn start(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Self, MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoWindow)?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(MountError::NoContext)?
			.dyn_into()
			.map_err(|_| MountError::NoContext)?;

		let (w, h) = fit_canvas(&canvas, &window, config.sizing);
		let mut rng = SmallRng::seed_from_u64(seed());
		let state = FieldState::new(config, viewport_width(&window), w, h, &mut rng);

		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let runtime = Rc::new(RefCell::new(Runtime {
			state,
			frames: FrameLoop::new(WindowFrames::new(window.clone(), callback.clone())),
			window: window.clone(),
			canvas: canvas.clone(),
			ctx,
			rng,
			resize_timer: None,
		}));

		let weak = Rc::downgrade(&runtime);
		*callback.borrow_mut() = Some(Closure::new(move || {
			if let Some(rt) = weak.upgrade() {
				rt.borrow_mut().frame();
			}
		}));

		let mut driver = Self {
			runtime,
			callback,
			listeners: Vec::new(),
		};
		driver.listen(&canvas, &window, &document)?;

		let mut rt = driver.runtime.borrow_mut();
		rt.frames.start();
		info!(
			"particle-field: {} field started on {}x{} canvas",
			rt.state.config().name,
			w,
			h
		);
		drop(rt);
		Ok(driver)
	}

	fn listen(
		&mut self,
		canvas: &HtmlCanvasElement,
		window: &Window,
		document: &Document,
	) -> Result<(), MountError> {
		let interactive = self.runtime.borrow().state.config().pointer.is_some();
		let debounce_ms = self.runtime.borrow().state.config().resize_debounce_ms;

		if interactive {
			let (weak, target) = (Rc::downgrade(&self.runtime), canvas.clone());
			self.listeners.push(Listener::attach(canvas, "mousemove", move |ev| {
				let (Some(rt), Some(ev)) = (weak.upgrade(), ev.dyn_ref::<MouseEvent>()) else {
					return;
				};
				let rect = target.get_bounding_client_rect();
				rt.borrow_mut().state.set_pointer(
					f64::from(ev.client_x()) - rect.left(),
					f64::from(ev.client_y()) - rect.top(),
				);
			})?);

			let weak = Rc::downgrade(&self.runtime);
			self.listeners.push(Listener::attach(canvas, "mouseleave", move |_| {
				if let Some(rt) = weak.upgrade() {
					rt.borrow_mut().state.clear_pointer();
				}
			})?);
		}

		let weak = Rc::downgrade(&self.runtime);
		self.listeners.push(Listener::attach(window, "resize", move |_| {
			let Some(rt) = weak.upgrade() else {
				return;
			};
			// Replacing the timer drops, and so cancels, the previous one.
			rt.borrow_mut().resize_timer = Some(debounced_regenerate(weak.clone(), debounce_ms));
		})?);

		let (weak, doc) = (Rc::downgrade(&self.runtime), document.clone());
		self.listeners.push(Listener::attach(document, "visibilitychange", move |_| {
			let Some(rt) = weak.upgrade() else {
				return;
			};
			let mut rt = rt.borrow_mut();
			if doc.hidden() {
				rt.frames.pause();
			} else {
				rt.frames.start();
				debug!("particle-field: {} resumed", rt.state.config().name);
			}
		})?);

		Ok(())
	}

	/// Cancels the pending frame and any pending resize, and detaches every
	/// listener. Safe to call more than once.
	pub fn stop(&mut self) {
		if let Ok(mut rt) = self.runtime.try_borrow_mut() {
			if rt.frames.state() != LoopState::Stopped {
				debug!("particle-field: {} stopped", rt.state.config().name);
			}
			rt.frames.stop();
			rt.resize_timer = None;
		}
		self.listeners.clear();
		self.callback.borrow_mut().take();
	}
}

impl Drop for FieldDriver {
	fn drop(&mut self) {
		self.stop();
	}
}

fn debounced_regenerate(runtime: Weak<RefCell<Runtime>>, delay_ms: u32) -> Timeout {
	Timeout::new(delay_ms, move || {
		if let Some(rt) = runtime.upgrade() {
			rt.borrow_mut().regenerate();
		}
	})
}
