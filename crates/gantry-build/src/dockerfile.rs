use gantry_core::Profile;

use crate::plan::{BuildPlan, BuildStep};

/// Renders a profile's build plan as a single-stage Dockerfile.
pub struct DockerfileGenerator<'a> {
    profile: &'a Profile,
}

impl<'a> DockerfileGenerator<'a> {
    pub fn new(profile: &'a Profile) -> Self {
        Self { profile }
    }

    pub fn render(&self) -> String {
        let plan = BuildPlan::resolve(self.profile);
        let mut out = format!("# === Build profile: {} ===\n", self.profile.name);
        for step in &plan.steps {
            out.push_str(&render_step(step));
            out.push('\n');
        }
        out
    }
}

/// One Dockerfile directive per step.
fn render_step(step: &BuildStep) -> String {
    match step {
        BuildStep::FromImage { image } => format!("FROM {image}"),
        BuildStep::Workdir { path } => format!("WORKDIR {path}"),
        BuildStep::AptInstall {
            packages,
            clean_lists,
        } => {
            let names: Vec<&str> = packages.iter().map(|p| p.apt_name()).collect();
            let mut line = format!(
                "RUN apt-get update && apt-get install -y --no-install-recommends {}",
                names.join(" ")
            );
            if *clean_lists {
                line.push_str(" && rm -rf /var/lib/apt/lists/*");
            }
            line
        }
        BuildStep::Env { key, value } => format!("ENV {key}={value}"),
        BuildStep::CopyManifest { manifest } => format!("COPY {manifest} {manifest}"),
        BuildStep::PipUpgrade => "RUN pip install --no-cache-dir --upgrade pip".to_owned(),
        BuildStep::PipInstall { manifest } => {
            format!("RUN pip install --no-cache-dir -r {manifest}")
        }
        BuildStep::CopySource => "COPY . .".to_owned(),
        BuildStep::Expose { port } => format!("EXPOSE {port}"),
        BuildStep::Command { argv } => {
            let quoted: Vec<String> = argv.iter().map(|arg| format!("\"{arg}\"")).collect();
            format!("CMD [{}]", quoted.join(", "))
        }
    }
}
