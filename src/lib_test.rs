use super::*;

#[test]
fn canvas_hosts_are_drawn_on_directly() {
	assert_eq!(HostKind::of("CANVAS"), HostKind::Canvas);
	assert_eq!(HostKind::of("canvas"), HostKind::Canvas);
}

#[test]
fn other_hosts_get_a_canvas_inside() {
	for tag in ["DIV", "SECTION", "canvas-wrapper"] {
		assert_eq!(HostKind::of(tag), HostKind::Container, "{tag}");
	}
}

