//! Build-plan resolution, Dockerfile generation, and eject for gantry.
//!
//! # Build pipeline
//!
//! ```text
//! gantry build <profile>
//!   1. Dirty check ── git status --porcelain (skip with --allow-dirty)
//!   2. Validate    ── validate(profile) must return no violations
//!   3. Resolve     ── BuildPlan::resolve(profile)
//!   4. Dockerfile  ── DockerfileGenerator::render()
//!   5. Context     ── git ls-files → .gantry-build/
//!   6. Image       ── docker build .gantry-build/
//! ```
//!
//! # Context strategy
//!
//! The build context mirrors the git repository state:
//! - All tracked and untracked (non-ignored) files via `git ls-files`
//! - `.gitignore`d paths are excluded automatically
//! - `.gantry-build/`, `.gantry/`, `.git/` are always excluded
//!
//! # Layer ordering
//!
//! A resolved plan always installs native packages before pip dependencies
//! and pip dependencies before the source copy, so dependency layers cache
//! across source edits. [`validate`] enforces the same ordering on any plan.

pub mod context;
pub mod dockerfile;
pub mod eject;
pub mod plan;
pub mod validate;

pub use dockerfile::DockerfileGenerator;
pub use plan::{BuildPlan, BuildStep};
pub use validate::{Violation, validate, validate_plan};
