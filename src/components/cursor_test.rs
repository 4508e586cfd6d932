use super::*;

#[test]
fn follower_starts_at_origin() {
	assert_eq!(Follower::default(), Follower { x: 0.0, y: 0.0 });
}

#[test]
fn step_covers_fixed_fraction() {
	let mut follower = Follower::default();
	let (x, y) = follower.step((100.0, -50.0));
	assert!((x - 12.0).abs() < 1e-12);
	assert!((y + 6.0).abs() < 1e-12);
}

#[test]
fn follower_converges_without_overshoot() {
	let mut follower = Follower::default();
	let target = (640.0, 360.0);
	let mut last = 0.0;
	for _ in 0..200 {
		let (x, _) = follower.step(target);
		assert!(x >= last && x <= target.0);
		last = x;
	}
	assert!((follower.x - target.0).abs() < 0.01);
	assert!((follower.y - target.1).abs() < 0.01);
}

#[test]
fn resting_on_target_stays_put() {
	let mut follower = Follower { x: 5.0, y: 7.0 };
	assert_eq!(follower.step((5.0, 7.0)), (5.0, 7.0));
}
