//! Per-teacher scoring policy.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::error::{GradeError, GradeResult};

/// Immutable scoring weights and extra-credit bonus for one teacher.
///
/// Equality and hashing compare the bit patterns of all three fields, so two
/// values built from identical inputs are interchangeable as map keys.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoringPreferences {
    weight_assignments: f64,
    weight_exams: f64,
    extra_credit_bonus: f64,
}

impl ScoringPreferences {
    /// Create a new policy.
    ///
    /// The two weights must sum to exactly `1.0` under IEEE-754 addition.
    /// There is no tolerance: weights produced by earlier arithmetic can be
    /// rejected even when they sum to one on paper.
    ///
    /// # Errors
    ///
    /// Returns [`GradeError::InvalidPreferences`] when the weights do not sum to one.
    #[allow(clippy::float_cmp)]
    pub fn new(
        weight_assignments: f64,
        weight_exams: f64,
        extra_credit_bonus: f64,
    ) -> GradeResult<Self> {
        let sum = weight_assignments + weight_exams;
        if sum != 1.0 {
            return Err(GradeError::InvalidPreferences {
                weight_assignments,
                weight_exams,
                sum,
            });
        }
        Ok(Self {
            weight_assignments,
            weight_exams,
            extra_credit_bonus,
        })
    }

    /// Share of the average taken from assignments.
    #[must_use]
    pub const fn weight_assignments(&self) -> f64 {
        self.weight_assignments
    }

    /// Share of the average taken from exams.
    #[must_use]
    pub const fn weight_exams(&self) -> f64 {
        self.weight_exams
    }

    /// Points added to the assignment average per extra credit.
    #[must_use]
    pub const fn extra_credit_bonus(&self) -> f64 {
        self.extra_credit_bonus
    }

    const fn bits(&self) -> (u64, u64, u64) {
        (
            self.weight_assignments.to_bits(),
            self.weight_exams.to_bits(),
            self.extra_credit_bonus.to_bits(),
        )
    }
}

impl PartialEq for ScoringPreferences {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for ScoringPreferences {}

impl Hash for ScoringPreferences {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl fmt::Display for ScoringPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "assignments={} exams={} extra_credit_bonus={}",
            self.weight_assignments, self.weight_exams, self.extra_credit_bonus
        )
    }
}
