// Parameter files on disk: load, save and format selection
use rover_core::params::{EstimatorParams, ModelMatrix};
use rover_core::RoverError;

fn custom_params() -> EstimatorParams {
    EstimatorParams {
        earth_radius_m: 6_378_137.0,
        max_linear_velocity: 0.8,
        forward_model: ModelMatrix::new(0.007, 0.006, 0.002, -0.004),
        inverse_model: None,
        ..EstimatorParams::default()
    }
}

#[test]
fn test_yaml_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("estimator.yaml");

    let params = custom_params();
    params.save_to_disk(&path).unwrap();

    let loaded = EstimatorParams::load_from_disk(&path).unwrap();
    assert_eq!(loaded, params);
}

#[test]
fn test_toml_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimator.toml");

    let params = EstimatorParams::default();
    params.save_to_disk(&path).unwrap();

    let loaded = EstimatorParams::load_from_disk(&path).unwrap();
    assert_eq!(loaded, params);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimator.json");
    std::fs::write(&path, "{}").unwrap();

    let result = EstimatorParams::load_from_disk(&path);
    assert!(matches!(result, Err(RoverError::UnsupportedFormat(_))));
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("estimator.yml");
    std::fs::write(&path, "earth_radius_m: -1.0\n").unwrap();

    let result = EstimatorParams::load_from_disk(&path);
    assert!(matches!(
        result,
        Err(RoverError::InvalidParam {
            name: "earth_radius_m",
            ..
        })
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = EstimatorParams::load_from_disk(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(RoverError::Io(_))));
}
