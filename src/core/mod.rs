//! Core registry abstractions and score aggregation.

pub mod error;
pub mod preferences;
pub mod registry;
pub mod roster;
pub mod student;

pub use error::{AppResult, EntityKind, GradeError, GradeResult};
pub use preferences::ScoringPreferences;
pub use registry::{GradeRegistry, GradeTracker};
pub use roster::TeacherRoster;
pub use student::{ScoreTally, StudentRecord};
