use rf_model::{RawParameters, compute_profile, summarize, validate};
use rf_results::*;

fn manifest_for(run_id: &str, timestamp: &str, profile: &rf_model::RadialProfile) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        case_name: "Base case".to_string(),
        timestamp: timestamp.to_string(),
        model_version: "v1".to_string(),
        sample_count: profile.len(),
        parameters: RawParameters::default(),
        summary: summarize(profile),
    }
}

#[test]
fn save_and_load_run() {
    let temp_dir = std::env::temp_dir().join("rf_results_test");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = ProfileStore::new(temp_dir.clone()).unwrap();
    let params = validate(&RawParameters::default()).unwrap();
    let profile = compute_profile(&params, 300).unwrap();
    let manifest = manifest_for("run_abc", "2026-02-25T12:00:00+00:00", &profile);

    store.save_run(&manifest, &profile).unwrap();
    assert!(store.has_run("run_abc"));

    let loaded = store.load_manifest("run_abc").unwrap();
    assert_eq!(loaded, manifest);

    let rows = store.load_profile("run_abc").unwrap();
    assert_eq!(rows.len(), 300);
    assert_eq!(rows[0].radius_ft, 0.25);
    assert_eq!(rows[299].pressure_psi, 3000.0);

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn list_runs_is_ordered_by_timestamp() {
    let temp_dir = std::env::temp_dir().join("rf_results_test_list");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = ProfileStore::new(temp_dir.clone()).unwrap();
    let params = validate(&RawParameters::default()).unwrap();
    let profile = compute_profile(&params, 10).unwrap();

    store
        .save_run(&manifest_for("later", "2026-03-01T00:00:00+00:00", &profile), &profile)
        .unwrap();
    store
        .save_run(&manifest_for("earlier", "2026-01-01T00:00:00+00:00", &profile), &profile)
        .unwrap();

    let runs = store.list_runs().unwrap();
    let ids: Vec<_> = runs.iter().map(|m| m.run_id.as_str()).collect();
    assert_eq!(ids, vec!["earlier", "later"]);

    store.delete_run("earlier").unwrap();
    assert!(!store.has_run("earlier"));
    assert_eq!(store.list_runs().unwrap().len(), 1);

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn missing_run_is_reported() {
    let temp_dir = std::env::temp_dir().join("rf_results_test_missing");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let store = ProfileStore::new(temp_dir.clone()).unwrap();

    assert!(matches!(
        store.load_manifest("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));
    assert!(matches!(
        store.load_profile("nope"),
        Err(ResultsError::RunNotFound { .. })
    ));

    let _ = std::fs::remove_dir_all(&temp_dir);
}

#[test]
fn store_for_case_lives_next_to_case_file() {
    let case_dir = std::env::temp_dir().join("rf_results_test_case");
    let _ = std::fs::remove_dir_all(&case_dir);
    std::fs::create_dir_all(&case_dir).unwrap();

    let store = ProfileStore::for_case(&case_dir.join("base.yaml")).unwrap();
    assert_eq!(
        store.root_dir(),
        case_dir.join(".radialflow").join("runs").as_path()
    );

    let _ = std::fs::remove_dir_all(&case_dir);
}
