//! Single-in-flight animation frame scheduling.
//!
//! [`FrameLoop`] wraps a host "run before next repaint" primitive and keeps at
//! most one frame request outstanding. The browser host is [`WindowFrames`];
//! tests drive the loop with an in-memory host.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

#[cfg(test)]
#[path = "frames_test.rs"]
mod frames_test;

/// Host primitive for requesting and cancelling animation frames.
pub trait FrameHost {
	type Handle: Copy;

	/// Asks for one callback before the next repaint. `None` if the host
	/// refused the request.
	fn request_frame(&mut self) -> Option<Self::Handle>;

	fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Whether the loop wants frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	Running,
	Paused,
	Stopped,
}

/// Frame loop holding at most one pending request.
pub struct FrameLoop<H: FrameHost> {
	host: H,
	pending: Option<H::Handle>,
	state: LoopState,
}

impl<H: FrameHost> FrameLoop<H> {
	/// A loop that has not yet requested anything.
	pub fn new(host: H) -> Self {
		Self {
			host,
			pending: None,
			state: LoopState::Paused,
		}
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Starts or resumes the loop. No-op once stopped.
	pub fn start(&mut self) {
		if self.state == LoopState::Stopped {
			return;
		}
		self.state = LoopState::Running;
		self.schedule();
	}

	/// Marks the pending frame as delivered. Returns whether the callback
	/// should do its work.
	pub fn begin_frame(&mut self) -> bool {
		self.pending = None;
		self.state == LoopState::Running
	}

	/// Requests the next frame after a callback finished its work.
	pub fn end_frame(&mut self) {
		self.schedule();
	}

	/// Cancels the pending frame but keeps the loop resumable.
	pub fn pause(&mut self) {
		if self.state == LoopState::Running {
			self.state = LoopState::Paused;
			debug!("particle-field: frame loop paused");
		}
		self.cancel_pending();
	}

	/// Cancels the pending frame and schedules a new one.
	pub fn restart(&mut self) {
		self.cancel_pending();
		self.start();
	}

	/// Cancels the pending frame for good.
	pub fn stop(&mut self) {
		self.cancel_pending();
		self.state = LoopState::Stopped;
	}

	fn schedule(&mut self) {
		if self.state == LoopState::Running && self.pending.is_none() {
			self.pending = self.host.request_frame();
		}
	}

	fn cancel_pending(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.host.cancel_frame(handle);
		}
	}
}

/// Callback slot shared between a frame host and the closure it schedules.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` host bound to one callback closure.
pub struct WindowFrames {
	window: Window,
	callback: FrameCallback,
}

impl WindowFrames {
	pub fn new(window: Window, callback: FrameCallback) -> Self {
		Self { window, callback }
	}
}

impl FrameHost for WindowFrames {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

/// Runs a step closure once per animation frame until it returns `false` or
/// the task is dropped.
pub struct FrameTask {
	frames: Rc<RefCell<FrameLoop<WindowFrames>>>,
	callback: FrameCallback,
}

impl FrameTask {
	pub fn spawn(window: &Window, mut step: impl FnMut() -> bool + 'static) -> Self {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let frames = Rc::new(RefCell::new(FrameLoop::new(WindowFrames::new(
			window.clone(),
			callback.clone(),
		))));

		let weak = Rc::downgrade(&frames);
		*callback.borrow_mut() = Some(Closure::new(move || {
			let Some(frames) = weak.upgrade() else {
				return;
			};
			if !frames.borrow_mut().begin_frame() {
				return;
			}
			if step() {
				frames.borrow_mut().end_frame();
			} else {
				frames.borrow_mut().stop();
			}
		}));

		frames.borrow_mut().start();
		Self { frames, callback }
	}
}

impl Drop for FrameTask {
	fn drop(&mut self) {
		if let Ok(mut frames) = self.frames.try_borrow_mut() {
			frames.stop();
		}
		self.callback.borrow_mut().take();
	}
}
