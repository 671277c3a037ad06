//! Core types and configuration for gantry.
//!
//! This crate defines the profile axis model ([`PythonVersion`],
//! [`BaseVariant`], [`SystemPackage`]), the profile registry
//! ([`ProfileRegistry`]), the `gantry.toml` schema ([`GantryConfig`]),
//! Python project discovery ([`PythonProject`]), and shared error types.

pub mod axis;
pub mod config;
pub mod error;
pub mod profile;
pub mod python;

pub use axis::{BaseVariant, PythonVersion, SystemPackage, base_image};
pub use config::{BuildConfig, GantryConfig, ProfileConfig, ProjectConfig};
pub use error::{Error, Result};
pub use profile::{AsgiEntrypoint, DEFAULT_REQUIREMENTS, Profile, ProfileRegistry};
pub use python::PythonProject;
