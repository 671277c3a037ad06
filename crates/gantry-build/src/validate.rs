use gantry_core::Profile;

use crate::plan::{BuildPlan, BuildStep};

/// An internal consistency violation in a profile or its plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("declared port {declared} does not match entrypoint bind port {bound}")]
    PortMismatch { declared: u16, bound: u16 },

    #[error("native packages install after pip dependencies")]
    PackagesAfterDependencies,

    #[error("pip dependencies install after source copy")]
    DependenciesAfterSource,

    #[error("apt package lists survive the install step")]
    MissingCacheCleanup,

    #[error("plan has no base image step")]
    MissingBaseImage,
}

/// Check a profile's internal consistency.
///
/// Returns every violation found; an empty vec means valid. This layer
/// only checks what it can see: a wheel whose native library is missing
/// from the package set surfaces as an import failure at container
/// runtime, not here.
pub fn validate(profile: &Profile) -> Vec<Violation> {
    let mut violations = Vec::new();

    if profile.exposed_port != profile.entrypoint.port {
        violations.push(Violation::PortMismatch {
            declared: profile.exposed_port,
            bound: profile.entrypoint.port,
        });
    }

    violations.extend(validate_plan(&BuildPlan::resolve(profile)));
    violations
}

/// Check step ordering and cache hygiene of a plan.
pub fn validate_plan(plan: &BuildPlan) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !plan
        .steps
        .iter()
        .any(|s| matches!(s, BuildStep::FromImage { .. }))
    {
        violations.push(Violation::MissingBaseImage);
    }

    let apt = position(plan, |s| matches!(s, BuildStep::AptInstall { .. }));
    let pip = position(plan, |s| matches!(s, BuildStep::PipInstall { .. }));
    let source = position(plan, |s| matches!(s, BuildStep::CopySource));

    if let (Some(apt), Some(pip)) = (apt, pip)
        && apt > pip
    {
        violations.push(Violation::PackagesAfterDependencies);
    }
    if let (Some(pip), Some(source)) = (pip, source)
        && pip > source
    {
        violations.push(Violation::DependenciesAfterSource);
    }

    for step in &plan.steps {
        if let BuildStep::AptInstall { clean_lists, .. } = step
            && !clean_lists
        {
            violations.push(Violation::MissingCacheCleanup);
        }
    }

    violations
}

fn position(plan: &BuildPlan, pred: impl Fn(&BuildStep) -> bool) -> Option<usize> {
    plan.steps.iter().position(pred)
}
