use gantry_core::{Profile, SystemPackage};
use serde::Serialize;

/// One ordered step of a container image build.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum BuildStep {
    FromImage {
        image: String,
    },
    Workdir {
        path: String,
    },
    /// apt-get install. `clean_lists` removes `/var/lib/apt/lists` within
    /// the same layer so no package index survives into the image.
    AptInstall {
        packages: Vec<SystemPackage>,
        clean_lists: bool,
    },
    Env {
        key: String,
        value: String,
    },
    CopyManifest {
        manifest: String,
    },
    PipUpgrade,
    PipInstall {
        manifest: String,
    },
    CopySource,
    Expose {
        port: u16,
    },
    Command {
        argv: Vec<String>,
    },
}

/// The ordered sequence of steps a builder executes to materialize a
/// profile into a runnable image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPlan {
    pub steps: Vec<BuildStep>,
}

impl BuildPlan {
    /// Deterministically translate a profile into its build plan.
    ///
    /// Step order is fixed: base pull, workdir, native packages, env,
    /// manifest copy, pip upgrade, dependency install, source copy, port
    /// declaration, command. The dependency manifest is copied and
    /// installed before the source tree so a source edit does not
    /// invalidate the dependency layers.
    pub fn resolve(profile: &Profile) -> Self {
        tracing::debug!(profile = %profile.name, image = %profile.base_image(), "resolving build plan");

        let mut steps = vec![
            BuildStep::FromImage {
                image: profile.base_image(),
            },
            BuildStep::Workdir {
                path: "/app".to_owned(),
            },
        ];

        if !profile.system_packages.is_empty() {
            steps.push(BuildStep::AptInstall {
                packages: profile.system_packages.clone(),
                clean_lists: true,
            });
        }

        // Deterministic ENV order regardless of map iteration
        let mut env: Vec<(&String, &String)> = profile.env.iter().collect();
        env.sort();
        for (key, value) in env {
            steps.push(BuildStep::Env {
                key: key.clone(),
                value: value.clone(),
            });
        }

        steps.push(BuildStep::CopyManifest {
            manifest: profile.requirements.clone(),
        });
        steps.push(BuildStep::PipUpgrade);
        steps.push(BuildStep::PipInstall {
            manifest: profile.requirements.clone(),
        });
        steps.push(BuildStep::CopySource);
        steps.push(BuildStep::Expose {
            port: profile.exposed_port,
        });
        steps.push(BuildStep::Command {
            argv: profile.entrypoint.command(),
        });

        Self { steps }
    }
}
