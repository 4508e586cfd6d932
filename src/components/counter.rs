//! Animated stat counters.
//!
//! Counts from zero up to a target with an ease-out-quart curve over two
//! seconds. The first sampled frame fixes the start time. Counters wait on a
//! shared [`CounterGate`] that opens when the stats section scrolls into view.

use js_sys::Array;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::components::frames::FrameTask;

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Default counting duration.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Visible fraction of the stats section that starts the counters.
pub const STATS_VISIBLE_THRESHOLD: f64 = 0.3;

/// `1 - (1 - t)^4`: fast start, slow finish.
pub fn ease_out_quart(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(4)
}

/// Reads a counter target the way the markup writes it: leading digits,
/// anything after them ignored (`"150+"` is 150).
pub fn parse_target(raw: &str) -> Option<u64> {
	let raw = raw.trim_start();
	let end = raw
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(raw.len());
	raw[..end].parse().ok()
}

/// One sampled counter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
	pub value: u64,
	pub done: bool,
}

/// Time-driven count from zero to `target`.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
	target: u64,
	duration_ms: f64,
	started_at: Option<f64>,
}

impl CounterAnimation {
	pub fn new(target: u64) -> Self {
		Self::with_duration(target, COUNTER_DURATION_MS)
	}

	pub fn with_duration(target: u64, duration_ms: f64) -> Self {
		Self {
			target,
			duration_ms,
			started_at: None,
		}
	}

	/// Value to show at `now_ms`. The last frame always shows the exact target.
	pub fn sample(&mut self, now_ms: f64) -> CounterFrame {
		let start = *self.started_at.get_or_insert(now_ms);
		let progress = if self.duration_ms > 0.0 {
			((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
		} else {
			1.0
		};
		if progress >= 1.0 {
			return CounterFrame {
				value: self.target,
				done: true,
			};
		}
		CounterFrame {
			value: (ease_out_quart(progress) * self.target as f64).floor() as u64,
			done: false,
		}
	}
}

/// When the counters on a page may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterGate {
	/// Stats section not seen yet; counters show zero.
	Waiting,
	/// Counting up.
	Running,
	/// Show the targets without animating.
	Settled,
}

impl CounterGate {
	/// State after an intersection report. Counting starts once and never
	/// rewinds when the section scrolls away again.
	pub fn observe(self, intersecting: bool) -> Self {
		match self {
			CounterGate::Waiting if intersecting => CounterGate::Running,
			other => other,
		}
	}
}

/// Opens `gate` the first time `section` is [`STATS_VISIBLE_THRESHOLD`]
/// visible, then stops observing. Without `IntersectionObserver` the gate
/// settles at once so the final numbers still show.
pub fn watch_section(section: &Element, gate: RwSignal<CounterGate>) {
	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			let intersecting = entries.iter().any(|entry| {
				entry
					.dyn_ref::<IntersectionObserverEntry>()
					.is_some_and(IntersectionObserverEntry::is_intersecting)
			});
			let current = gate.get_untracked();
			let next = current.observe(intersecting);
			if next != current {
				debug!("particle-field: stats in view, counters started");
				gate.set(next);
				observer.disconnect();
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(STATS_VISIBLE_THRESHOLD));
	match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
		Ok(observer) => {
			observer.observe(section);
			// The observer holds the only JS reference to the callback.
			callback.forget();
		}
		Err(_) => {
			debug!("particle-field: no IntersectionObserver, showing final counts");
			gate.set(CounterGate::Settled);
		}
	}
}

/// Text node that counts up to `target` once `gate` opens.
#[component]
pub fn StatCounter(target: u64, #[prop(into)] gate: Signal<CounterGate>) -> impl IntoView {
	let value = RwSignal::new(0_u64);
	let task = StoredValue::new_local(None::<FrameTask>);

	Effect::new(move |_| match gate.get() {
		CounterGate::Waiting => {}
		CounterGate::Settled => value.set(target),
		CounterGate::Running => {
			if task.with_value(Option::is_some) {
				return;
			}
			let Some(window) = web_sys::window() else {
				value.set(target);
				return;
			};
			let mut animation = CounterAnimation::new(target);
			task.set_value(Some(FrameTask::spawn(&window, move || {
				let frame = animation.sample(js_sys::Date::now());
				value.set(frame.value);
				!frame.done
			})));
		}
	});

	view! { {move || value.get()} }
}
