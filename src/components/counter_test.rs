use super::*;

// =============================================================
// Easing
// =============================================================

#[test]
fn ease_endpoints() {
	assert_eq!(ease_out_quart(0.0), 0.0);
	assert_eq!(ease_out_quart(1.0), 1.0);
}

#[test]
fn ease_is_ahead_of_linear() {
	for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
		assert!(ease_out_quart(t) > t);
	}
}

// =============================================================
// Animation
// =============================================================

#[test]
fn first_sample_starts_at_zero() {
	let mut counter = CounterAnimation::new(500);
	assert_eq!(
		counter.sample(12_345.0),
		CounterFrame {
			value: 0,
			done: false
		}
	);
}

#[test]
fn halfway_uses_eased_progress() {
	let mut counter = CounterAnimation::new(100);
	counter.sample(0.0);
	// 1 - 0.5^4 = 0.9375
	assert_eq!(counter.sample(1000.0).value, 93);
}

#[test]
fn values_never_decrease() {
	let mut counter = CounterAnimation::new(1_000);
	let mut last = 0;
	for step in 0..=130 {
		let frame = counter.sample(f64::from(step) * 16.0);
		assert!(frame.value >= last);
		last = frame.value;
	}
	assert_eq!(last, 1_000);
}

#[test]
fn finishes_exactly_on_target() {
	let mut counter = CounterAnimation::new(37);
	counter.sample(100.0);
	assert_eq!(
		counter.sample(100.0 + COUNTER_DURATION_MS),
		CounterFrame {
			value: 37,
			done: true
		}
	);
}

#[test]
fn late_frames_stay_on_target() {
	let mut counter = CounterAnimation::new(8);
	counter.sample(0.0);
	assert_eq!(counter.sample(60_000.0).value, 8);
}

#[test]
fn zero_duration_completes_immediately() {
	let mut counter = CounterAnimation::with_duration(12, 0.0);
	assert!(counter.sample(5.0).done);
}

// =============================================================
// Target parsing
// =============================================================

#[test]
fn parse_plain_number() {
	assert_eq!(parse_target("250"), Some(250));
}

#[test]
fn parse_ignores_trailing_text() {
	assert_eq!(parse_target(" 98%"), Some(98));
	assert_eq!(parse_target("150+"), Some(150));
}

#[test]
fn parse_rejects_non_numeric() {
	assert_eq!(parse_target("many"), None);
	assert_eq!(parse_target(""), None);
}

// =============================================================
// Gate
// =============================================================

#[test]
fn gate_waits_until_section_is_seen() {
	assert_eq!(CounterGate::Waiting.observe(false), CounterGate::Waiting);
	assert_eq!(CounterGate::Waiting.observe(true), CounterGate::Running);
}

#[test]
fn gate_opens_only_once() {
	let gate = CounterGate::Waiting.observe(true);
	assert_eq!(gate.observe(false), CounterGate::Running);
	assert_eq!(gate.observe(true), CounterGate::Running);
}

#[test]
fn settled_gate_ignores_scrolling() {
	assert_eq!(CounterGate::Settled.observe(true), CounterGate::Settled);
	assert_eq!(CounterGate::Settled.observe(false), CounterGate::Settled);
}
