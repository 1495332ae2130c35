//! # Gradekeeper
//!
//! A concurrent, in-memory grade registry. It tracks teachers, their rosters
//! of students, and running score statistics per student, and computes a
//! weighted average on demand from each teacher's scoring preferences.
//!
//! ## Key Features
//!
//! - **Running statistics**: Only sums and counts are kept per student, so any
//!   number of exams and assignments can be recorded
//! - **Per-teacher policy**: Assignment/exam weights and an extra-credit bonus;
//!   replacing them re-weights every existing student
//! - **Lazy provisioning**: Recording a score for an unknown student creates it
//! - **Fine-grained locking**: One lock per student record; map creation is an
//!   atomic insert-if-absent
//!
//! ## Usage
//!
//! ```
//! use gradekeeper::core::{GradeRegistry, ScoringPreferences};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let registry = Arc::new(GradeRegistry::new());
//! registry.add_teacher("teacher", ScoringPreferences::new(0.2, 0.8, 2.0)?)?;
//!
//! let handles: Vec<_> = (0_u32..4)
//!     .map(|i| {
//!         let registry = Arc::clone(&registry);
//!         thread::spawn(move || registry.record_assignment_score("teacher", "student", f64::from(i)))
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap()?;
//! }
//!
//! // Only assignments recorded, so the weights do not apply yet.
//! assert_eq!(registry.student_average("teacher", "student")?, 1.5);
//! # Ok::<(), gradekeeper::core::GradeError>(())
//! ```
//!
//! Registries can also be seeded from JSON with
//! [`config::RegistryConfig`] and [`builders::build_registry`].

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core registry abstractions and score aggregation.
pub mod core;
/// Configuration models for seeding a registry.
pub mod config;
/// Builders to construct registries from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;
