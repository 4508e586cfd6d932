use super::*;

#[test]
fn empty_json_is_default() {
	let config = PageConfig::parse("{}").unwrap_or_else(|e| panic!("parse failed: {e}"));
	assert_eq!(config, PageConfig::default());
	assert_eq!(config.hero_host, "heroCanvas");
	assert_eq!(config.backdrop_host, "tech-canvas");
	assert_eq!(config.stats_section, "stats");
}

#[test]
fn defaults_match_presets() {
	let config = PageConfig::default();
	assert_eq!(config.hero_config(), FieldConfig::hero());
	assert_eq!(config.backdrop_config(), FieldConfig::backdrop());
}

#[test]
fn invalid_json_is_an_error() {
	assert!(PageConfig::parse("{ hero: ").is_err());
	assert!(PageConfig::parse(r#"{ "counters": "yes" }"#).is_err());
}

#[test]
fn partial_overrides_keep_other_defaults() {
	let config = PageConfig::parse(
		r#"{ "hero_host": "banner", "hero": { "connection_distance": 120, "damping": 0.98 } }"#,
	)
	.unwrap_or_else(|e| panic!("parse failed: {e}"));

	assert_eq!(config.hero_host, "banner");
	assert_eq!(config.backdrop_host, "tech-canvas");

	let hero = config.hero_config();
	assert_eq!(hero.link.distance, 120.0);
	assert_eq!(hero.damping, 0.98);
	assert_eq!(hero.count, FieldConfig::hero().count);
	assert_eq!(hero.pointer, FieldConfig::hero().pointer);
}

#[test]
fn count_override_is_constant() {
	let overrides = FieldOverrides {
		count: Some(12),
		..FieldOverrides::default()
	};
	let config = overrides.apply(FieldConfig::hero());
	assert_eq!(config.count.count_for(320.0), 12);
	assert_eq!(config.count.count_for(1920.0), 12);
}

#[test]
fn pointer_can_be_disabled() {
	let overrides = FieldOverrides {
		pointer_interaction: Some(false),
		pointer_radius: Some(80.0),
		..FieldOverrides::default()
	};
	assert_eq!(overrides.apply(FieldConfig::hero()).pointer, None);
}

#[test]
fn pointer_can_be_enabled_on_backdrop() {
	let overrides = FieldOverrides {
		pointer_interaction: Some(true),
		pointer_radius: Some(90.0),
		..FieldOverrides::default()
	};
	let pointer = overrides.apply(FieldConfig::backdrop()).pointer;
	assert_eq!(
		pointer,
		Some(PointerStyle {
			radius: 90.0,
			strength: 0.02
		})
	);
}

#[test]
fn out_of_range_values_are_ignored() {
	let overrides = FieldOverrides {
		connection_distance: Some(-5.0),
		damping: Some(1.5),
		pointer_radius: Some(0.0),
		..FieldOverrides::default()
	};
	assert_eq!(overrides.apply(FieldConfig::hero()), FieldConfig::hero());
}

#[test]
fn oversized_count_is_capped() {
	let config = PageConfig::parse(r#"{ "hero": { "count": 5000 } }"#)
		.unwrap_or_else(|e| panic!("parse failed: {e}"));
	let hero = config.hero_config();
	assert_eq!(hero.count, CountRule::Constant(MAX_PARTICLES));
	assert_eq!(hero.count.count_for(1200.0), 80);
}

#[test]
fn breakpoint_rule_never_exceeds_cap() {
	let rule = CountRule::Breakpoints {
		steps: vec![(480.0, 500)],
		fallback: 1000,
	};
	assert_eq!(rule.count_for(320.0), MAX_PARTICLES);
	assert_eq!(rule.count_for(1920.0), MAX_PARTICLES);
}

#[test]
fn stats_section_can_be_moved() {
	let config = PageConfig::parse(r#"{ "stats_section": "numbers" }"#)
		.unwrap_or_else(|e| panic!("parse failed: {e}"));
	assert_eq!(config.stats_section, "numbers");
	assert!(config.counters);
}
