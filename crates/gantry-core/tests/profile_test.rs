use gantry_core::{
    AsgiEntrypoint, BaseVariant, Error, Profile, ProfileRegistry, PythonVersion, SystemPackage,
};
use proptest::prelude::*;

// ── Builtin Registry ──

#[test]
fn builtin_defines_three_targets() {
    let registry = ProfileRegistry::builtin();
    assert_eq!(registry.names(), vec!["azure", "cloudrun", "compat"]);
}

#[test]
fn azure_target_axes() {
    let registry = ProfileRegistry::builtin();
    let profile = registry.resolve("azure").unwrap();

    assert_eq!(profile.python, PythonVersion::Py310);
    assert_eq!(profile.variant, BaseVariant::Slim);
    assert_eq!(profile.base_image(), "python:3.10-slim");
    assert_eq!(profile.exposed_port, 8000);
    assert_eq!(profile.entrypoint.port, 8000);
    assert!(profile.system_packages.contains(&SystemPackage::BuildToolchain));
    assert!(profile.system_packages.contains(&SystemPackage::StdCpp));
    assert!(profile.system_packages.contains(&SystemPackage::Ffmpeg));
    assert_eq!(profile.requirements, "requirements.txt");
}

#[test]
fn cloudrun_target_axes() {
    let registry = ProfileRegistry::builtin();
    let profile = registry.resolve("cloudrun").unwrap();

    assert_eq!(profile.python, PythonVersion::Py312);
    assert_eq!(profile.base_image(), "python:3.12-slim");
    assert_eq!(profile.exposed_port, 8080);
    // no native build toolchain on this target
    assert!(!profile.system_packages.contains(&SystemPackage::BuildToolchain));
}

#[test]
fn compat_target_uses_full_base_and_dev_headers() {
    let registry = ProfileRegistry::builtin();
    let profile = registry.resolve("compat").unwrap();

    assert_eq!(profile.variant, BaseVariant::Full);
    assert_eq!(profile.base_image(), "python:3.10");
    assert!(profile.system_packages.contains(&SystemPackage::PngDev));
    assert!(!profile.system_packages.contains(&SystemPackage::Ffmpeg));
    assert_eq!(profile.exposed_port, 8000);
}

#[test]
fn resolve_unknown_profile_is_an_error_not_a_default() {
    let registry = ProfileRegistry::builtin();
    let result = registry.resolve("staging");

    let err = result.unwrap_err();
    assert!(matches!(err, Error::UnknownProfile { .. }));
    let message = err.to_string();
    assert!(message.contains("staging"));
    assert!(message.contains("azure, cloudrun, compat"));
}

#[test]
fn resolve_on_empty_registry_lists_none() {
    let registry = ProfileRegistry::empty();
    let err = registry.resolve("azure").unwrap_err();
    assert!(err.to_string().contains("(none)"));
}

#[test]
fn insert_replaces_existing_name() {
    let mut registry = ProfileRegistry::builtin();
    let mut replacement = registry.resolve("azure").unwrap().clone();
    replacement.exposed_port = 9090;
    replacement.entrypoint.port = 9090;
    registry.insert(replacement);

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.resolve("azure").unwrap().exposed_port, 9090);
}

// ── Entrypoint ──

#[test]
fn entrypoint_command_is_exec_form_uvicorn() {
    let entrypoint = AsgiEntrypoint::bind("app", "app", 8000);

    assert_eq!(entrypoint.object_spec(), "app:app");
    assert_eq!(
        entrypoint.command(),
        vec!["uvicorn", "app:app", "--host", "0.0.0.0", "--port", "8000"]
    );
}

#[test]
fn entrypoint_parse_accepts_module_colon_attribute() {
    let entrypoint = AsgiEntrypoint::parse("server:application", 8080).unwrap();
    assert_eq!(entrypoint.module, "server");
    assert_eq!(entrypoint.attribute, "application");
    assert_eq!(entrypoint.port, 8080);
}

#[test]
fn entrypoint_parse_rejects_missing_attribute() {
    assert!(AsgiEntrypoint::parse("app", 8000).is_err());
    assert!(AsgiEntrypoint::parse("app:", 8000).is_err());
    assert!(AsgiEntrypoint::parse(":app", 8000).is_err());
}

// ── Axis Composition Properties ──

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
    /// Any point in the axis space composes into a port-consistent profile.
    #[test]
    fn composed_profiles_are_port_consistent(
        python in any_python(),
        variant in any_variant(),
        packages in any_packages(),
        port in 1024u16..,
    ) {
        let profile = Profile::from_axes("t", python, variant, &packages, port);
        prop_assert_eq!(profile.exposed_port, profile.entrypoint.port);
        prop_assert_eq!(profile.entrypoint.object_spec(), "app:app");
    }

    #[test]
    fn base_image_tracks_axes(python in any_python(), variant in any_variant()) {
        let image = gantry_core::base_image(python, variant);
        prop_assert!(image.starts_with("python:"));
        prop_assert!(image.contains(python.tag()));
        prop_assert_eq!(image.ends_with("-slim"), variant == BaseVariant::Slim);
    }
}
