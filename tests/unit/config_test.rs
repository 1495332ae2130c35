//! Tests for configuration validation

use std::io::Write;

use gradekeeper::config::{RegistryConfig, TeacherConfig, CONFIG_PATH_ENV};

fn teacher(name: &str, weight_assignments: f64, weight_exams: f64) -> TeacherConfig {
    TeacherConfig {
        name: name.to_string(),
        weight_assignments,
        weight_exams,
        extra_credit_bonus: 2.0,
    }
}

#[test]
fn test_teacher_config_validation() {
    assert!(teacher("Ms. Beth", 0.8, 0.2).validate().is_ok());
}

#[test]
fn test_teacher_config_empty_name() {
    let err = teacher("  ", 0.8, 0.2).validate().unwrap_err();
    assert_eq!(err, "name must not be empty");
}

#[test]
fn test_teacher_config_bad_weights() {
    let err = teacher("Ms. Beth", 0.9, 0.2).validate().unwrap_err();
    assert!(err.starts_with("invalid preferences"), "{err}");
}

#[test]
fn test_teacher_config_preferences() {
    let prefs = teacher("Ms. Beth", 0.4, 0.6).preferences().unwrap();
    assert_eq!(prefs.weight_assignments(), 0.4);
    assert_eq!(prefs.weight_exams(), 0.6);
    assert_eq!(prefs.extra_credit_bonus(), 2.0);
}

#[test]
fn test_registry_config_empty_is_valid() {
    assert!(RegistryConfig::default().validate().is_ok());
}

#[test]
fn test_registry_config_duplicate_names() {
    let config = RegistryConfig {
        teachers: vec![teacher("a", 0.5, 0.5), teacher("a", 0.2, 0.8)],
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err, "teacher `a` defined more than once");
}

#[test]
fn test_registry_config_names_invalid_teacher() {
    let config = RegistryConfig {
        teachers: vec![teacher("a", 0.5, 0.5), teacher("b", 0.5, 0.6)],
    };
    let err = config.validate().unwrap_err();
    assert!(err.starts_with("teacher `b` invalid:"), "{err}");
}

#[test]
fn test_registry_config_from_json() {
    let json = r#"{
        "teachers": [
            { "name": "Ms. Beth", "weight_assignments": 0.8, "weight_exams": 0.2, "extra_credit_bonus": 1.0 },
            { "name": "Mr. Tom", "weight_assignments": 0.101, "weight_exams": 0.899 }
        ]
    }"#;

    let config = RegistryConfig::from_json_str(json).unwrap();
    assert_eq!(config.teachers.len(), 2);
    assert_eq!(config.teachers[0].extra_credit_bonus, 1.0);
    assert_eq!(config.teachers[1].extra_credit_bonus, 0.02);
}

#[test]
fn test_registry_config_from_json_parse_error() {
    let err = RegistryConfig::from_json_str("{ not json").unwrap_err();
    assert!(err.starts_with("parse error"), "{err}");
}

#[test]
fn test_registry_config_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"teachers":[{{"name":"t","weight_assignments":0.5,"weight_exams":0.5}}]}}"#
    )
    .unwrap();

    let config = RegistryConfig::from_path(file.path()).unwrap();
    assert_eq!(config.teachers[0].name, "t");
}

#[test]
fn test_registry_config_from_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = RegistryConfig::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(format!("{err:#}").contains("reading registry config"));
}

/// Every `from_env` case lives in one test because they share the process environment.
#[test]
fn test_registry_config_from_env() {
    std::env::remove_var(CONFIG_PATH_ENV);
    let config = RegistryConfig::from_env().unwrap();
    assert!(config.teachers.is_empty());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"teachers":[{{"name":"t","weight_assignments":0.2,"weight_exams":0.8}}]}}"#
    )
    .unwrap();
    std::env::set_var(CONFIG_PATH_ENV, file.path());
    let config = RegistryConfig::from_env().unwrap();
    let names: Vec<_> = config.teachers.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["t"]);

    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(CONFIG_PATH_ENV, dir.path().join("x.json"));
    let err = RegistryConfig::from_env().unwrap_err();
    assert!(format!("{err:#}").contains("reading registry config"), "{err:#}");

    std::env::remove_var(CONFIG_PATH_ENV);
}
