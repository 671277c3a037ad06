use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::axis::{BaseVariant, PythonVersion, SystemPackage, base_image};

/// Default pip dependency manifest path, relative to the build context.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// ASGI server binding.
///
/// The `module:attribute` object spec is the single seam between the
/// container image and the application code it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsgiEntrypoint {
    pub module: String,
    pub attribute: String,
    pub host: String,
    pub port: u16,
}

impl AsgiEntrypoint {
    /// Entrypoint bound to `0.0.0.0:<port>`.
    pub fn bind(module: &str, attribute: &str, port: u16) -> Self {
        Self {
            module: module.to_owned(),
            attribute: attribute.to_owned(),
            host: "0.0.0.0".to_owned(),
            port,
        }
    }

    /// Parse a `module:attribute` spec, e.g. `app:app`.
    pub fn parse(spec: &str, port: u16) -> crate::Result<Self> {
        match spec.split_once(':') {
            Some((module, attribute)) if !module.is_empty() && !attribute.is_empty() => {
                Ok(Self::bind(module, attribute, port))
            }
            _ => Err(crate::Error::InvalidEntrypoint {
                value: spec.to_owned(),
            }),
        }
    }

    /// `module:attribute` as uvicorn expects it.
    pub fn object_spec(&self) -> String {
        format!("{}:{}", self.module, self.attribute)
    }

    /// Exec-form CMD tokens for the ASGI server invocation.
    pub fn command(&self) -> Vec<String> {
        vec![
            "uvicorn".to_owned(),
            self.object_spec(),
            "--host".to_owned(),
            self.host.clone(),
            "--port".to_owned(),
            self.port.to_string(),
        ]
    }
}

/// One deployment target: a named point in the axis space.
///
/// `exposed_port` and `entrypoint.port` are independent fields; a profile
/// with mismatched ports is representable and it is validation's job
/// (`gantry-build`) to reject it before a build is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub python: PythonVersion,
    pub variant: BaseVariant,
    /// Native packages installed before any pip dependency, in order.
    pub system_packages: Vec<SystemPackage>,
    /// Path to the pip dependency manifest, relative to the build context.
    pub requirements: String,
    /// Port declared via EXPOSE.
    pub exposed_port: u16,
    pub entrypoint: AsgiEntrypoint,
    /// Static environment variables baked into the image as ENV directives.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Profile {
    /// Compose a consistent profile from axis values.
    ///
    /// The entrypoint is bound to `0.0.0.0:<port>` with the conventional
    /// `app:app` object spec, so `exposed_port` and the bound port agree
    /// by construction.
    pub fn from_axes(
        name: &str,
        python: PythonVersion,
        variant: BaseVariant,
        system_packages: &[SystemPackage],
        port: u16,
    ) -> Self {
        Self {
            name: name.to_owned(),
            python,
            variant,
            system_packages: system_packages.to_vec(),
            requirements: DEFAULT_REQUIREMENTS.to_owned(),
            exposed_port: port,
            entrypoint: AsgiEntrypoint::bind("app", "app", port),
            env: HashMap::new(),
        }
    }

    /// Base image reference, e.g. `python:3.12-slim`.
    pub fn base_image(&self) -> String {
        base_image(self.python, self.variant)
    }
}

/// Named profiles available to resolve.
///
/// Lookup never falls back to a default: an unknown name is
/// [`Error::UnknownProfile`](crate::Error::UnknownProfile), listing the
/// defined names.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, Profile>,
}

impl ProfileRegistry {
    /// Registry with no profiles defined.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The three builtin deployment targets:
    ///
    /// | name | base | packages | port |
    /// |---|---|---|---|
    /// | `azure` | 3.10 slim | gl glib jpeg png ffmpeg build-toolchain stdcpp | 8000 |
    /// | `cloudrun` | 3.12 slim | gl glib jpeg png ffmpeg | 8080 |
    /// | `compat` | 3.10 full | gl glib jpeg png-dev build-toolchain | 8000 |
    pub fn builtin() -> Self {
        use SystemPackage::*;

        let mut registry = Self::empty();
        registry.insert(Profile::from_axes(
            "azure",
            PythonVersion::Py310,
            BaseVariant::Slim,
            &[OpenGl, Glib, Jpeg, Png, Ffmpeg, BuildToolchain, StdCpp],
            8000,
        ));
        registry.insert(Profile::from_axes(
            "cloudrun",
            PythonVersion::Py312,
            BaseVariant::Slim,
            &[OpenGl, Glib, Jpeg, Png, Ffmpeg],
            8080,
        ));
        registry.insert(Profile::from_axes(
            "compat",
            PythonVersion::Py310,
            BaseVariant::Full,
            &[OpenGl, Glib, Jpeg, PngDev, BuildToolchain],
            8000,
        ));
        registry
    }

    /// Insert a profile, replacing any existing one with the same name.
    pub fn insert(&mut self, profile: Profile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Look up a profile by name.
    pub fn resolve(&self, name: &str) -> crate::Result<&Profile> {
        self.profiles
            .get(name)
            .ok_or_else(|| crate::Error::UnknownProfile {
                name: name.to_owned(),
                known: self.names(),
            })
    }

    /// Defined profile names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
