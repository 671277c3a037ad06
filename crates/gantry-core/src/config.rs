use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::axis::{BaseVariant, PythonVersion, SystemPackage};
use crate::profile::{AsgiEntrypoint, DEFAULT_REQUIREMENTS, Profile, ProfileRegistry};

/// gantry.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GantryConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub build: BuildConfig,
    /// Custom deployment targets, `[profile.<name>]`. A custom profile
    /// with a builtin name replaces the builtin.
    #[serde(default)]
    pub profile: BTreeMap<String, ProfileConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Service name (defaults to the project directory name at use sites)
    pub name: Option<String>,
    /// Profile used when the CLI is given none
    #[serde(default = "default_profile_name")]
    pub default_profile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// pip dependency manifest path, applied to every profile
    #[serde(default = "default_requirements")]
    pub requirements: String,
    /// Static environment variables baked into every image.
    /// These become ENV directives in the Dockerfile.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

/// One `[profile.<name>]` table: axis values for a custom target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_python")]
    pub python: PythonVersion,
    #[serde(default = "default_variant")]
    pub variant: BaseVariant,
    #[serde(default)]
    pub packages: Vec<SystemPackage>,
    #[serde(default = "default_port")]
    pub port: u16,
    /// ASGI object spec, `module:attribute` (defaults to `app:app`)
    pub entrypoint: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            default_profile: default_profile_name(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            requirements: default_requirements(),
            env: HashMap::new(),
        }
    }
}

impl ProfileConfig {
    /// Materialize the table into a [`Profile`].
    ///
    /// The entrypoint is bound to the profile's own port; port mismatches
    /// are not expressible from gantry.toml.
    pub fn to_profile(&self, name: &str) -> crate::Result<Profile> {
        let entrypoint = match self.entrypoint.as_deref() {
            Some(spec) => AsgiEntrypoint::parse(spec, self.port)?,
            None => AsgiEntrypoint::bind("app", "app", self.port),
        };

        Ok(Profile {
            name: name.to_owned(),
            python: self.python,
            variant: self.variant,
            system_packages: self.packages.clone(),
            requirements: DEFAULT_REQUIREMENTS.to_owned(),
            exposed_port: self.port,
            entrypoint,
            env: HashMap::new(),
        })
    }
}

impl GantryConfig {
    /// Load from gantry.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("gantry.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Build the effective registry: builtins, custom `[profile.*]` tables
    /// merged over them, then `[build]` manifest path and env applied to
    /// every profile.
    pub fn registry(&self) -> crate::Result<ProfileRegistry> {
        let mut registry = ProfileRegistry::builtin();

        for (name, table) in &self.profile {
            tracing::debug!(profile = %name, "merging custom profile");
            registry.insert(table.to_profile(name)?);
        }

        let profiles: Vec<Profile> = registry.iter().cloned().collect();
        for mut profile in profiles {
            profile.requirements = self.build.requirements.clone();
            for (key, value) in &self.build.env {
                profile
                    .env
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
            registry.insert(profile);
        }

        Ok(registry)
    }
}

fn default_profile_name() -> String {
    "azure".to_owned()
}

fn default_requirements() -> String {
    DEFAULT_REQUIREMENTS.to_owned()
}

fn default_python() -> PythonVersion {
    PythonVersion::Py310
}

fn default_variant() -> BaseVariant {
    BaseVariant::Slim
}

fn default_port() -> u16 {
    8000
}
