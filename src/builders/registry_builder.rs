//! Builder to seed a grade registry from configuration.

use crate::config::RegistryConfig;
use crate::core::{GradeError, GradeRegistry, GradeResult};

/// Build a registry containing every configured teacher with an empty roster.
///
/// # Errors
///
/// Returns [`GradeError::InvalidConfig`] if validation fails; nothing is
/// built in that case.
pub fn build_registry(cfg: &RegistryConfig) -> GradeResult<GradeRegistry> {
    cfg.validate().map_err(GradeError::InvalidConfig)?;

    let registry = GradeRegistry::new();
    for teacher in &cfg.teachers {
        registry.add_teacher(&teacher.name, teacher.preferences()?)?;
    }
    tracing::info!(teachers = registry.teacher_count(), "registry built");

    Ok(registry)
}
