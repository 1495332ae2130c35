//! Tests for builder modules

use gradekeeper::builders::build_registry;
use gradekeeper::config::{RegistryConfig, TeacherConfig};
use gradekeeper::core::{GradeError, ScoringPreferences};

fn teacher(name: &str, weight_assignments: f64, weight_exams: f64) -> TeacherConfig {
    TeacherConfig {
        name: name.to_string(),
        weight_assignments,
        weight_exams,
        extra_credit_bonus: 1.0,
    }
}

#[test]
fn test_build_registry_seeds_teachers() {
    let config = RegistryConfig {
        teachers: vec![teacher("a", 0.8, 0.2), teacher("b", 0.3, 0.7)],
    };

    let registry = build_registry(&config).unwrap();
    assert_eq!(registry.teacher_count(), 2);

    let roster = registry.teacher("b").unwrap();
    assert_eq!(
        roster.preferences(),
        ScoringPreferences::new(0.3, 0.7, 1.0).unwrap()
    );
    assert_eq!(roster.student_count(), 0);
}

#[test]
fn test_build_registry_empty() {
    let registry = build_registry(&RegistryConfig::default()).unwrap();
    assert_eq!(registry.teacher_count(), 0);
}

#[test]
fn test_build_registry_rejects_invalid_config() {
    let config = RegistryConfig {
        teachers: vec![teacher("a", 0.8, 0.2), teacher("a", 0.8, 0.2)],
    };

    let err = build_registry(&config).unwrap_err();
    assert_eq!(
        err,
        GradeError::InvalidConfig("teacher `a` defined more than once".to_string())
    );
}
