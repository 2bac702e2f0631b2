use rand::rngs::StdRng;
use rand::SeedableRng;

use gravsim::simulation::states::radius_for_mass;
use gravsim::{generate_bodies, ConfigError, GeneratorConfig, NVec2, Rgb, Scenario, ScenarioConfig};

const FULL: &str = r#"
engine:
  tick_hz: 30.0
  max_ticks: 100

parameters:
  G: 1.5
  dt: 0.02
  elasticity: 0.5
  bounds: [600.0, 400.0]

generator:
  body_count: 5
  mass_range: [10.0, 20.0]
  seed: 9
  speed: 1.0
  margin: 50.0

bodies:
  - x: [10.0, 20.0]
    v: [0.5, -0.5]
    m: 9.0
    color: [1, 2, 3]
  - x: [300.0, 200.0]
    v: [0.0, 0.0]
    m: 25.0
"#;

pub fn generator(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        body_count: 50,
        mass_range: [10.0, 50.0],
        seed,
        speed: 3.0,
        margin: 100.0,
    }
}

/// Expect a validation failure naming `field`
fn assert_invalid(yaml: &str, field: &str) {
    match ScenarioConfig::from_yaml_str(yaml) {
        Err(ConfigError::Invalid { field: f, .. }) => assert_eq!(f, field),
        other => panic!("expected invalid `{field}`, got {other:?}"),
    }
}

// ==================================================================================
// Parsing tests
// ==================================================================================

#[test]
fn parses_full_scenario() {
    let cfg = ScenarioConfig::from_yaml_str(FULL).expect("valid scenario");

    assert_eq!(cfg.engine.tick_hz, 30.0);
    assert_eq!(cfg.engine.max_ticks, Some(100));
    assert_eq!(cfg.parameters.G, 1.5);
    assert_eq!(cfg.parameters.bounds, [600.0, 400.0]);
    assert_eq!(cfg.generator.as_ref().map(|g| g.body_count), Some(5));
    assert_eq!(cfg.bodies.len(), 2);
    assert_eq!(cfg.bodies[0].color, Some([1, 2, 3]));
    assert_eq!(cfg.bodies[1].color, None);
}

#[test]
fn missing_sections_use_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(
        r#"
bodies:
  - x: [100.0, 100.0]
    v: [0.0, 0.0]
    m: 4.0
"#,
    )
    .expect("valid scenario");

    assert_eq!(cfg.engine.tick_hz, 60.0);
    assert_eq!(cfg.engine.max_ticks, None);
    assert_eq!(cfg.parameters.G, 0.67);
    assert_eq!(cfg.parameters.dt, 0.05);
    assert_eq!(cfg.parameters.elasticity, 0.9);
    assert_eq!(cfg.parameters.bounds, [1000.0, 800.0]);
    assert!(cfg.generator.is_none());
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = ScenarioConfig::from_yaml_str("parameters: [not, a, map]").unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)), "got {err:?}");
}

#[test]
fn loading_missing_file_is_an_io_error() {
    let err = ScenarioConfig::load(std::path::Path::new("no/such/scenario.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
}

#[test]
fn bundled_scenarios_are_valid() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["default.yaml", "crowded.yaml", "head_on.yaml"] {
        let cfg = ScenarioConfig::load(&dir.join(name)).unwrap_or_else(|e| panic!("{name}: {e}"));
        Scenario::build_scenario(cfg).unwrap_or_else(|e| panic!("{name}: {e}"));
    }
}

// ==================================================================================
// Validation tests
// ==================================================================================

#[test]
fn rejects_empty_scenario() {
    let err = ScenarioConfig::from_yaml_str("engine:\n  tick_hz: 60.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Empty), "got {err:?}");
}

#[test]
fn rejects_non_positive_mass() {
    assert_invalid("bodies:\n  - {x: [1.0, 1.0], v: [0.0, 0.0], m: 0.0}\n", "bodies[0].m");
    assert_invalid("bodies:\n  - {x: [1.0, 1.0], v: [0.0, 0.0], m: -3.0}\n", "bodies[0].m");
    assert_invalid("generator: {body_count: 3, mass_range: [0.0, 5.0]}\n", "generator.mass_range[0]");
}

#[test]
fn rejects_bad_ranges_and_parameters() {
    assert_invalid("generator: {body_count: 3, mass_range: [9.0, 5.0]}\n", "generator.mass_range");
    assert_invalid("generator: {body_count: 0, mass_range: [1.0, 5.0]}\n", "generator.body_count");
    assert_invalid("generator: {body_count: 3, mass_range: [1.0, 5.0], margin: 500.0}\n", "generator.margin");
    assert_invalid("parameters: {elasticity: 1.5}\ngenerator: {body_count: 3, mass_range: [1.0, 5.0]}\n", "parameters.elasticity");
    assert_invalid("parameters: {dt: 0.0}\ngenerator: {body_count: 3, mass_range: [1.0, 5.0]}\n", "parameters.dt");
    assert_invalid("parameters: {G: -1.0}\ngenerator: {body_count: 3, mass_range: [1.0, 5.0]}\n", "parameters.G");
    assert_invalid("engine: {tick_hz: 0.0}\ngenerator: {body_count: 3, mass_range: [1.0, 5.0]}\n", "engine.tick_hz");
}

#[test]
fn rejects_wrong_vector_lengths() {
    assert_invalid("bodies:\n  - {x: [1.0, 1.0, 1.0], v: [0.0, 0.0], m: 1.0}\n", "bodies[0].x");
    assert_invalid("bodies:\n  - {x: [1.0, 1.0], v: [0.0], m: 1.0}\n", "bodies[0].v");
}

// ==================================================================================
// Scenario building tests
// ==================================================================================

#[test]
fn generated_bodies_come_before_explicit_ones() {
    let cfg = ScenarioConfig::from_yaml_str(FULL).expect("valid scenario");
    let scenario = Scenario::build_scenario(cfg).expect("buildable scenario");
    let bodies = scenario.simulator.bodies();

    assert_eq!(bodies.len(), 7);
    assert_eq!(scenario.engine.tick_hz, 30.0);
    assert_eq!(scenario.engine.max_ticks, Some(100));
    assert_eq!(scenario.simulator.parameters().bounds, NVec2::new(600.0, 400.0));

    let explicit = &bodies[5];
    assert_eq!(explicit.x, NVec2::new(10.0, 20.0));
    assert_eq!(explicit.v, NVec2::new(0.5, -0.5));
    assert_eq!(explicit.radius, 3);
    assert_eq!(explicit.color, Rgb::new(1, 2, 3));
    assert_eq!(bodies[6].color, Rgb::from_mass(25.0));
}

#[test]
fn engine_limit_stops_ticking() {
    let cfg = ScenarioConfig::from_yaml_str(FULL).expect("valid scenario");
    let mut scenario = Scenario::build_scenario(cfg).expect("buildable scenario");

    while !scenario.engine.finished(scenario.simulator.ticks()) {
        scenario.simulator.tick();
    }
    assert_eq!(scenario.simulator.ticks(), 100);
}

#[test]
fn generated_bodies_respect_ranges() {
    let g = generator(42);
    let bounds = NVec2::new(1000.0, 800.0);
    let bodies = generate_bodies(&g, bounds, &mut StdRng::seed_from_u64(g.seed));

    assert_eq!(bodies.len(), 50);
    for b in &bodies {
        assert!(b.alive);
        assert!((10.0..50.0).contains(&b.m), "mass {} out of range", b.m);
        assert_eq!(b.radius, radius_for_mass(b.m));
        assert_eq!(b.color, Rgb::from_mass(b.m));
        assert!((100.0..=900.0).contains(&b.x.x));
        assert!((100.0..=700.0).contains(&b.x.y));
        assert!(b.v.x.abs() <= 3.0 && b.v.y.abs() <= 3.0);
    }
}

#[test]
fn same_seed_gives_same_bodies() {
    let g = generator(7);
    let bounds = NVec2::new(1000.0, 800.0);

    let a = generate_bodies(&g, bounds, &mut StdRng::seed_from_u64(7));
    let b = generate_bodies(&g, bounds, &mut StdRng::seed_from_u64(7));
    let c = generate_bodies(&g, bounds, &mut StdRng::seed_from_u64(8));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn degenerate_mass_range_gives_fixed_mass() {
    let mut g = generator(1);
    g.mass_range = [16.0, 16.0];
    let bodies = generate_bodies(&g, NVec2::new(1000.0, 800.0), &mut StdRng::seed_from_u64(1));
    assert!(bodies.iter().all(|b| b.m == 16.0 && b.radius == 4));
}
