//! Per-student score aggregation.
//!
//! Only running sums and counts are kept; individual scores are not retained.

use parking_lot::Mutex;
use serde::Serialize;

use super::preferences::ScoringPreferences;

/// Snapshot of a student's running counters.
///
/// Counters saturate at `u32::MAX` instead of wrapping, so a full counter
/// never drops its category out of the average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreTally {
    /// Number of exams recorded.
    pub exam_count: u32,
    /// Sum of all exam scores.
    pub exam_sum: f64,
    /// Number of assignments recorded.
    pub assignment_count: u32,
    /// Sum of all assignment scores.
    pub assignment_sum: f64,
    /// Number of extra credits earned.
    pub extra_credit_count: u32,
}

impl ScoreTally {
    fn add_assignment(&mut self, score: f64) {
        self.assignment_count = self.assignment_count.saturating_add(1);
        self.assignment_sum += score;
    }

    fn add_exam(&mut self, score: f64) {
        self.exam_count = self.exam_count.saturating_add(1);
        self.exam_sum += score;
    }

    fn add_extra_credit(&mut self) {
        self.extra_credit_count = self.extra_credit_count.saturating_add(1);
    }

    /// Compute the weighted average under `prefs`.
    ///
    /// Weights only apply once both exams and assignments have entries. With
    /// a single category recorded, that category counts for 100%. Extra credit
    /// is added to the assignment mean and is ignored while there are no
    /// assignments.
    #[must_use]
    pub fn weighted_average(&self, prefs: &ScoringPreferences) -> f64 {
        let exam_avg = if self.exam_count > 0 {
            self.exam_sum / f64::from(self.exam_count)
        } else {
            0.0
        };
        let assignment_avg = if self.assignment_count > 0 {
            self.assignment_sum / f64::from(self.assignment_count)
                + f64::from(self.extra_credit_count) * prefs.extra_credit_bonus()
        } else {
            0.0
        };

        match (self.exam_count > 0, self.assignment_count > 0) {
            (true, true) => {
                exam_avg * prefs.weight_exams() + assignment_avg * prefs.weight_assignments()
            }
            (true, false) => exam_avg,
            _ => assignment_avg,
        }
    }
}

/// A student's record within one teacher's roster.
///
/// Each record carries its own lock so recording scores for different
/// students never contends.
#[derive(Debug)]
pub struct StudentRecord {
    name: String,
    tally: Mutex<ScoreTally>,
}

impl StudentRecord {
    /// Create a record with all counters at zero.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tally: Mutex::new(ScoreTally::default()),
        }
    }

    /// The student's name, unique within the roster.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record an assignment score. Scores are not range checked.
    pub fn record_assignment(&self, score: f64) {
        self.tally.lock().add_assignment(score);
    }

    /// Record an exam score. Scores are not range checked.
    pub fn record_exam(&self, score: f64) {
        self.tally.lock().add_exam(score);
    }

    /// Record one completed extra-credit assignment.
    pub fn record_extra_credit(&self) {
        self.tally.lock().add_extra_credit();
    }

    /// Weighted average under `prefs`, consistent with all completed recordings.
    #[must_use]
    pub fn weighted_average(&self, prefs: &ScoringPreferences) -> f64 {
        self.tally.lock().weighted_average(prefs)
    }

    /// Copy of the current counters.
    #[must_use]
    pub fn tally(&self) -> ScoreTally {
        *self.tally.lock()
    }
}
