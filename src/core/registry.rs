//! Grade registry service.
//!
//! The registry owns every [`TeacherRoster`] and routes score recording to the
//! right student, provisioning students on first use.
//!
//! # Example
//!
//! ```
//! use gradekeeper::core::{GradeRegistry, ScoringPreferences};
//!
//! let registry = GradeRegistry::new();
//! let prefs = ScoringPreferences::new(0.2, 0.8, 2.0)?;
//! registry.add_teacher("teacher", prefs)?;
//!
//! registry.record_exam_score("teacher", "student", 60.0)?;
//! registry.record_assignment_score("teacher", "student", 80.0)?;
//! assert_eq!(registry.student_average("teacher", "student")?, 60.0 * 0.8 + 80.0 * 0.2);
//! # Ok::<(), gradekeeper::core::GradeError>(())
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::error::{EntityKind, GradeError, GradeResult};
use super::preferences::ScoringPreferences;
use super::roster::TeacherRoster;
use super::student::StudentRecord;

/// Service API for recording scores and querying averages.
pub trait GradeTracker: Send + Sync {
    /// Add a teacher.
    ///
    /// # Errors
    ///
    /// [`GradeError::NameCollision`] if the teacher already exists.
    fn add_teacher(&self, name: &str, preferences: ScoringPreferences) -> GradeResult<()>;

    /// Replace a teacher's preferences, creating the teacher if missing.
    fn update_teacher(&self, name: &str, preferences: ScoringPreferences);

    /// Record an assignment score.
    ///
    /// # Errors
    ///
    /// [`GradeError::ObjectNotFound`] if the teacher does not exist.
    fn record_assignment_score(&self, teacher: &str, student: &str, score: f64)
        -> GradeResult<()>;

    /// Record an exam score.
    ///
    /// # Errors
    ///
    /// [`GradeError::ObjectNotFound`] if the teacher does not exist.
    fn record_exam_score(&self, teacher: &str, student: &str, score: f64) -> GradeResult<()>;

    /// Record one extra credit.
    ///
    /// # Errors
    ///
    /// [`GradeError::ObjectNotFound`] if the teacher does not exist.
    fn record_extra_credit(&self, teacher: &str, student: &str) -> GradeResult<()>;

    /// Current weighted average of a student.
    ///
    /// # Errors
    ///
    /// [`GradeError::ObjectNotFound`] if the teacher or the student does not exist.
    fn student_average(&self, teacher: &str, student: &str) -> GradeResult<f64>;
}

/// In-memory registry of teachers, rosters and student records.
///
/// Safe to share across threads behind an [`Arc`]. Recording scores for
/// different students only contends on the read side of the map locks.
#[derive(Debug, Default)]
pub struct GradeRegistry {
    teachers: RwLock<HashMap<String, Arc<TeacherRoster>>>,
}

impl GradeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a teacher with the given preferences.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::NameCollision`] if a teacher with that name
    /// exists; its roster and preferences are left unchanged.
    pub fn add_teacher(&self, name: &str, preferences: ScoringPreferences) -> GradeResult<()> {
        match self.teachers.write().entry(name.to_string()) {
            Entry::Occupied(_) => {
                tracing::warn!(teacher = %name, "teacher already exists");
                Err(GradeError::collision(EntityKind::Teacher, name))
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(TeacherRoster::new(name, preferences)));
                tracing::info!(teacher = %name, %preferences, "teacher added");
                Ok(())
            }
        }
    }

    /// Replace a teacher's preferences in place, or add the teacher with an
    /// empty roster if the name is unknown.
    pub fn update_teacher(&self, name: &str, preferences: ScoringPreferences) {
        if let Some(roster) = self.teacher(name) {
            roster.set_preferences(preferences);
            return;
        }
        match self.teachers.write().entry(name.to_string()) {
            Entry::Occupied(slot) => slot.get().set_preferences(preferences),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(TeacherRoster::new(name, preferences)));
                tracing::info!(teacher = %name, %preferences, "teacher created by update");
            }
        }
    }

    /// Record an assignment score, provisioning the student if needed.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::ObjectNotFound`] if the teacher does not exist.
    pub fn record_assignment_score(
        &self,
        teacher: &str,
        student: &str,
        score: f64,
    ) -> GradeResult<()> {
        self.provision_student(teacher, student)?
            .record_assignment(score);
        Ok(())
    }

    /// Record an exam score, provisioning the student if needed.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::ObjectNotFound`] if the teacher does not exist.
    pub fn record_exam_score(&self, teacher: &str, student: &str, score: f64) -> GradeResult<()> {
        self.provision_student(teacher, student)?.record_exam(score);
        Ok(())
    }

    /// Record one extra credit, provisioning the student if needed.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::ObjectNotFound`] if the teacher does not exist.
    pub fn record_extra_credit(&self, teacher: &str, student: &str) -> GradeResult<()> {
        self.provision_student(teacher, student)?
            .record_extra_credit();
        Ok(())
    }

    /// Weighted average of a student under the teacher's current preferences.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::ObjectNotFound`] if the teacher or the student is
    /// missing. Students are never provisioned by this call.
    pub fn student_average(&self, teacher: &str, student: &str) -> GradeResult<f64> {
        let roster = self.require_teacher(teacher)?;
        let record = roster
            .get_student(student)
            .ok_or_else(|| GradeError::not_found(EntityKind::Student, student))?;
        Ok(record.weighted_average(&roster.preferences()))
    }

    /// Look up a teacher's roster.
    #[must_use]
    pub fn teacher(&self, name: &str) -> Option<Arc<TeacherRoster>> {
        self.teachers.read().get(name).cloned()
    }

    /// Names of all teachers, in no particular order.
    #[must_use]
    pub fn teacher_names(&self) -> Vec<String> {
        self.teachers.read().keys().cloned().collect()
    }

    /// Number of teachers.
    #[must_use]
    pub fn teacher_count(&self) -> usize {
        self.teachers.read().len()
    }

    fn require_teacher(&self, name: &str) -> GradeResult<Arc<TeacherRoster>> {
        self.teacher(name).ok_or_else(|| {
            tracing::warn!(teacher = %name, "unknown teacher");
            GradeError::not_found(EntityKind::Teacher, name)
        })
    }

    fn provision_student(&self, teacher: &str, student: &str) -> GradeResult<Arc<StudentRecord>> {
        Ok(self.require_teacher(teacher)?.get_or_add_student(student))
    }
}

impl GradeTracker for GradeRegistry {
    fn add_teacher(&self, name: &str, preferences: ScoringPreferences) -> GradeResult<()> {
        Self::add_teacher(self, name, preferences)
    }

    fn update_teacher(&self, name: &str, preferences: ScoringPreferences) {
        Self::update_teacher(self, name, preferences);
    }

    fn record_assignment_score(
        &self,
        teacher: &str,
        student: &str,
        score: f64,
    ) -> GradeResult<()> {
        Self::record_assignment_score(self, teacher, student, score)
    }

    fn record_exam_score(&self, teacher: &str, student: &str, score: f64) -> GradeResult<()> {
        Self::record_exam_score(self, teacher, student, score)
    }

    fn record_extra_credit(&self, teacher: &str, student: &str) -> GradeResult<()> {
        Self::record_extra_credit(self, teacher, student)
    }

    fn student_average(&self, teacher: &str, student: &str) -> GradeResult<f64> {
        Self::student_average(self, teacher, student)
    }
}
