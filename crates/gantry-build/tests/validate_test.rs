use gantry_build::plan::{BuildPlan, BuildStep};
use gantry_build::validate::{Violation, validate, validate_plan};
use gantry_core::{BaseVariant, Profile, ProfileRegistry, PythonVersion, SystemPackage};
use proptest::prelude::*;

// ── Profile Validation ──

#[test]
fn builtin_profiles_validate_clean() {
    let registry = ProfileRegistry::builtin();
    for profile in registry.iter() {
        let violations = validate(profile);
        assert!(
            violations.is_empty(),
            "profile '{}' has violations: {violations:?}",
            profile.name
        );
    }
}

#[test]
fn port_mismatch_is_exactly_one_violation() {
    let mut profile = ProfileRegistry::builtin()
        .resolve("azure")
        .unwrap()
        .clone();
    profile.exposed_port = 9000;
    // entrypoint still bound to 8000

    let violations = validate(&profile);
    assert_eq!(
        violations,
        vec![Violation::PortMismatch {
            declared: 9000,
            bound: 8000
        }]
    );
}

#[test]
fn port_mismatch_message_names_both_ports() {
    let mut profile = ProfileRegistry::builtin()
        .resolve("cloudrun")
        .unwrap()
        .clone();
    profile.entrypoint.port = 3000;

    let violations = validate(&profile);
    assert_eq!(violations.len(), 1);
    let message = violations[0].to_string();
    assert!(message.contains("8080"));
    assert!(message.contains("3000"));
}

// ── Plan Validation ──

fn step_from() -> BuildStep {
    BuildStep::FromImage {
        image: "python:3.10-slim".to_owned(),
    }
}

fn step_apt(clean_lists: bool) -> BuildStep {
    BuildStep::AptInstall {
        packages: vec![SystemPackage::OpenGl],
        clean_lists,
    }
}

fn step_pip() -> BuildStep {
    BuildStep::PipInstall {
        manifest: "requirements.txt".to_owned(),
    }
}

#[test]
fn plan_with_packages_after_dependencies_is_flagged() {
    let plan = BuildPlan {
        steps: vec![step_from(), step_pip(), step_apt(true), BuildStep::CopySource],
    };

    let violations = validate_plan(&plan);
    assert!(violations.contains(&Violation::PackagesAfterDependencies));
}

#[test]
fn plan_with_dependencies_after_source_is_flagged() {
    let plan = BuildPlan {
        steps: vec![step_from(), step_apt(true), BuildStep::CopySource, step_pip()],
    };

    let violations = validate_plan(&plan);
    assert!(violations.contains(&Violation::DependenciesAfterSource));
}

#[test]
fn plan_leaking_apt_lists_is_flagged() {
    let plan = BuildPlan {
        steps: vec![step_from(), step_apt(false), step_pip(), BuildStep::CopySource],
    };

    let violations = validate_plan(&plan);
    assert_eq!(violations, vec![Violation::MissingCacheCleanup]);
}

#[test]
fn plan_without_base_image_is_flagged() {
    let plan = BuildPlan {
        steps: vec![step_apt(true), step_pip(), BuildStep::CopySource],
    };

    let violations = validate_plan(&plan);
    assert!(violations.contains(&Violation::MissingBaseImage));
}

#[test]
fn well_ordered_plan_validates_clean() {
    let plan = BuildPlan {
        steps: vec![step_from(), step_apt(true), step_pip(), BuildStep::CopySource],
    };

    assert!(validate_plan(&plan).is_empty());
}

// ── Axis Composition Property ──

fn any_python() -> impl Strategy<Value = PythonVersion> {
    prop_oneof![Just(PythonVersion::Py310), Just(PythonVersion::Py312)]
}

fn any_variant() -> impl Strategy<Value = BaseVariant> {
    prop_oneof![Just(BaseVariant::Slim), Just(BaseVariant::Full)]
}

fn any_packages() -> impl Strategy<Value = Vec<SystemPackage>> {
    use SystemPackage::*;
    proptest::sample::subsequence(
        vec![OpenGl, Glib, Jpeg, Png, PngDev, Ffmpeg, BuildToolchain, StdCpp],
        0..=8,
    )
}

proptest! {
    /// Every point in the axis space resolves to a plan with no violations.
    #[test]
    fn composed_profiles_resolve_to_valid_plans(
        python in any_python(),
        variant in any_variant(),
        packages in any_packages(),
        port in 1u16..,
    ) {
        let profile = Profile::from_axes("t", python, variant, &packages, port);
        prop_assert!(validate(&profile).is_empty());
    }
}
