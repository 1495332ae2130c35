//! A teacher's roster of students and active scoring policy.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::error::{EntityKind, GradeError, GradeResult};
use super::preferences::ScoringPreferences;
use super::student::StudentRecord;

/// Students and scoring preferences owned by one teacher.
///
/// The student map is guarded by a reader-writer lock. Creation performs the
/// uniqueness check and the insert inside a single write-locked section, so
/// racing callers can never both create the same name.
#[derive(Debug)]
pub struct TeacherRoster {
    name: String,
    preferences: RwLock<ScoringPreferences>,
    students: RwLock<HashMap<String, Arc<StudentRecord>>>,
}

impl TeacherRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new(name: impl Into<String>, preferences: ScoringPreferences) -> Self {
        Self {
            name: name.into(),
            preferences: RwLock::new(preferences),
            students: RwLock::new(HashMap::new()),
        }
    }

    /// The teacher's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a student. Absence is a normal outcome.
    #[must_use]
    pub fn get_student(&self, name: &str) -> Option<Arc<StudentRecord>> {
        self.students.read().get(name).cloned()
    }

    /// Add a new student with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::NameCollision`] if the name is taken; the
    /// existing record is left untouched.
    pub fn add_student(&self, name: &str) -> GradeResult<Arc<StudentRecord>> {
        match self.students.write().entry(name.to_string()) {
            Entry::Occupied(_) => {
                tracing::warn!(teacher = %self.name, student = %name, "student already exists");
                Err(GradeError::collision(EntityKind::Student, name))
            }
            Entry::Vacant(slot) => {
                let record = Arc::new(StudentRecord::new(name));
                slot.insert(Arc::clone(&record));
                tracing::debug!(teacher = %self.name, student = %name, "student added");
                Ok(record)
            }
        }
    }

    /// Return the named student, creating it if absent.
    #[must_use]
    pub fn get_or_add_student(&self, name: &str) -> Arc<StudentRecord> {
        if let Some(record) = self.get_student(name) {
            return record;
        }
        let mut students = self.students.write();
        // Re-check under the write lock; another caller may have won the race.
        let record = students.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(teacher = %self.name, student = %name, "student provisioned");
            Arc::new(StudentRecord::new(name))
        });
        Arc::clone(record)
    }

    /// Snapshot of all students, in no particular order.
    #[must_use]
    pub fn students(&self) -> Vec<Arc<StudentRecord>> {
        self.students.read().values().cloned().collect()
    }

    /// Number of students on the roster.
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.read().len()
    }

    /// Replace the scoring policy. Applies to every later average, including
    /// students recorded before the change.
    pub fn set_preferences(&self, preferences: ScoringPreferences) {
        *self.preferences.write() = preferences;
        tracing::info!(teacher = %self.name, %preferences, "scoring preferences replaced");
    }

    /// The active scoring policy.
    #[must_use]
    pub fn preferences(&self) -> ScoringPreferences {
        *self.preferences.read()
    }
}
