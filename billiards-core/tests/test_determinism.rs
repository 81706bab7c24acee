//! Determinism tests - the same table and input must give identical states

use billiards_core::tests::test_helpers::{load_table_file, results_approx_equal, states_bit_equal};
use billiards_core::{run_table, run_table_source};
use glam::Vec2;
use std::path::PathBuf;

fn test_data_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(filename);
    path
}

#[test]
fn test_break_shot_determinism() {
    let path = test_data_path("break_shot.yaml");
    let table = load_table_file(path.to_str().unwrap()).expect("Failed to load table");

    let result1 = run_table(&table, 600, &[]);
    let result2 = run_table(&table, 600, &[]);

    assert!(states_bit_equal(&result1.bodies, &result2.bodies),
        "Running the same table twice should produce identical states");
}

#[test]
fn test_clicks_determinism() {
    let path = test_data_path("default_table.yaml");
    let table = load_table_file(path.to_str().unwrap()).expect("Failed to load table");
    let clicks = [Vec2::new(55.0, 53.0), Vec2::new(95.0, 108.0), Vec2::new(140.0, 140.0)];

    let result1 = run_table(&table, 400, &clicks);
    let result2 = run_table(&table, 400, &clicks);

    assert!(states_bit_equal(&result1.bodies, &result2.bodies),
        "Clicks followed by stepping should be deterministic");
}

#[test]
fn test_multiple_runs_determinism() {
    let source = r#"
surface: { width: 300, height: 300 }
bodies:
  - { position: [40, 40], radius: 12, color: red, velocity: [5, 3] }
  - { position: [150, 150], radius: 18, color: blue, velocity: [-2, 4] }
  - { position: [250, 60], radius: 9, color: yellow, velocity: [-6, 1] }
"#;

    let results: Vec<_> = (0..5)
        .map(|_| run_table_source(source, 1000, &[]).expect("Run failed"))
        .collect();

    for i in 1..results.len() {
        assert!(results_approx_equal(&results[0], &results[i], 0.0),
            "Run {} should match run 0", i);
    }
}
