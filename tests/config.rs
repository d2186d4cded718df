//! Config file loading

use trail::{Backing, Path, PathConfig, PathError};
use tempfile::tempdir;

#[test]
fn test_load_config_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("trail.toml");
    std::fs::write(&file, "backing = \"mutable\"\n").unwrap();

    let config = PathConfig::load(&file).unwrap();
    assert_eq!(config.backing, Backing::Mutable);
    assert_eq!(config.new_path::<u8>().backing(), Backing::Mutable);
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("trail.toml");

    PathConfig::with_backing(Backing::Mutable).save(&file).unwrap();
    let content = std::fs::read_to_string(&file).unwrap();
    assert!(content.contains("backing = \"mutable\""));

    let config = PathConfig::load(&file).unwrap();
    assert_eq!(config, PathConfig::with_backing(Backing::Mutable));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = PathConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, PathError::Io(_)));
    assert!(!err.is_precondition());
}

#[test]
fn test_load_malformed_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("trail.toml");
    std::fs::write(&file, "backing = [").unwrap();

    let err = PathConfig::load(&file).unwrap_err();
    assert!(matches!(err, PathError::Toml(_)));
    assert_eq!(err.to_json()["error"]["type"], "toml_error");
}

#[test]
fn test_loaded_config_builds_working_paths() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("trail.toml");
    std::fs::write(&file, "").unwrap();

    let config = PathConfig::load(&file).unwrap();
    let path = config.new_path().extend("a", 'x').extend("b", 'y');
    assert_eq!(path.backing(), Backing::Immutable);
    assert_eq!(path.objects(), vec![&'x', &'y']);
}
