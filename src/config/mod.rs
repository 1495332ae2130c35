//! Configuration models for seeding a registry.

pub mod registry;

pub use registry::{RegistryConfig, TeacherConfig, CONFIG_PATH_ENV};
