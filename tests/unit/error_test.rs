//! Tests for error types

use gradekeeper::core::{EntityKind, GradeError};

#[test]
fn test_teacher_collision_error() {
    let err = GradeError::collision(EntityKind::Teacher, "teacher collides");
    assert_eq!(format!("{}", err), "teacher `teacher collides` already exists");
}

#[test]
fn test_student_collision_error() {
    let err = GradeError::collision(EntityKind::Student, "student");
    assert_eq!(format!("{}", err), "student `student` already exists");
}

#[test]
fn test_not_found_error() {
    let err = GradeError::not_found(EntityKind::Teacher, "Missing Teacher");
    assert_eq!(format!("{}", err), "teacher `Missing Teacher` not found");
}

#[test]
fn test_invalid_preferences_error() {
    let err = GradeError::InvalidPreferences {
        weight_assignments: 0.5,
        weight_exams: 0.25,
        sum: 0.75,
    };
    assert_eq!(
        format!("{}", err),
        "invalid preferences: weight_assignments (0.5) + weight_exams (0.25) must sum to 1, got 0.75"
    );
}

#[test]
fn test_invalid_config_error() {
    let err = GradeError::InvalidConfig("bad".to_string());
    assert_eq!(format!("{}", err), "invalid configuration: bad");
}
