//! End-to-end tests: configuration through generation, stepping and export.

use galaxy::{AnalyticDiskVerlet, FieldSnapshot, GalaxyConfig, ParticleField, VelocityMass};

fn milky_way_like() -> GalaxyConfig {
    GalaxyConfig::new(8_000, 2_000, 200.0, 20.0, 0.1, 100.0, 0.1, 2024)
}

#[test]
fn generated_disk_is_flattened() {
    let field = ParticleField::new(milky_way_like()).unwrap();

    let n = field.len() as f64;
    let mean_r = field
        .current_positions()
        .iter()
        .map(|p| p.coords.xy().norm())
        .sum::<f64>()
        / n;
    let mean_z = field
        .current_positions()
        .iter()
        .map(|p| p.z.abs())
        .sum::<f64>()
        / n;

    println!("mean R = {:.1}, mean |z| = {:.1}", mean_r, mean_z);
    assert!((mean_r - 200.0).abs() < 10.0, "Mean radius {}", mean_r);
    assert!((mean_z - 20.0).abs() < 1.5, "Mean |z| {}", mean_z);
}

#[test]
fn long_run_stays_finite_and_bound() {
    let mut field = ParticleField::new(milky_way_like()).unwrap();
    let integrator = AnalyticDiskVerlet::new();

    field.run(&integrator, 200);

    let max_r = field
        .current_positions()
        .iter()
        .map(|p| p.coords.norm())
        .fold(0.0, f64::max);
    assert!(max_r.is_finite());
    assert!(
        field
            .current_positions()
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()))
    );
}

#[test]
fn both_velocity_strategies_evolve() {
    for velocity_mass in [VelocityMass::RunningTotal, VelocityMass::ConvergedTotal] {
        let config = milky_way_like().with_velocity_mass(velocity_mass);
        let mut field = ParticleField::new(config).unwrap();
        let start = field.current_positions().to_vec();

        field.run(&AnalyticDiskVerlet::new(), 10);

        let moved = field
            .current_positions()
            .iter()
            .zip(&start)
            .filter(|(a, b)| a != b)
            .count();
        assert!(moved > field.len() / 2, "{:?}: only {} stars moved", velocity_mass, moved);
    }
}

#[test]
fn two_runs_with_same_seed_match_after_stepping() {
    let mut a = ParticleField::new(milky_way_like()).unwrap();
    let mut b = ParticleField::new(milky_way_like()).unwrap();

    a.run(&AnalyticDiskVerlet::new(), 25);
    b.run(&AnalyticDiskVerlet::sequential(), 25);

    assert_eq!(a.current_positions(), b.current_positions());
    assert_eq!(a.previous_positions(), b.previous_positions());
}

#[test]
fn snapshot_roundtrips_through_yaml() {
    let config = GalaxyConfig::new(20, 5, 10.0, 1.0, 0.2, 10.0, 0.05, 3);
    let mut field = ParticleField::new(config).unwrap();
    field.run(&AnalyticDiskVerlet::new(), 3);

    let snapshot = field.snapshot();
    let yaml = serde_yaml::to_string(&snapshot).unwrap();
    let parsed: FieldSnapshot = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(parsed.steps, 3);
    assert_eq!(parsed.masses.len(), 25);
    assert_eq!(parsed.colors.len(), 25);
}
