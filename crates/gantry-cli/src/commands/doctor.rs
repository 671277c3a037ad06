use std::path::Path;

use gantry_core::{DEFAULT_REQUIREMENTS, GantryConfig, PythonProject};
use gantry_docker::{CheckResult, DockerClient};

pub async fn doctor() -> anyhow::Result<()> {
    let project_dir = Path::new(".");
    let config = GantryConfig::load(project_dir);

    let client = DockerClient::new();
    let mut report = client.doctor().await;

    // Config file check
    if project_dir.join("gantry.toml").exists() {
        report.config_file = CheckResult::ok("Found");
    } else {
        report.config_file = CheckResult::fail("Not found");
    }

    let requirements = config
        .as_ref()
        // arch-lint: allow(no-silent-result-drop) reason="doctor must report diagnostics even when gantry.toml is missing or invalid"
        .ok()
        .map(|c| c.build.requirements.clone())
        // arch-lint: allow(no-silent-result-drop) reason="doctor must report diagnostics even when gantry.toml is missing or invalid"
        .unwrap_or_else(|| DEFAULT_REQUIREMENTS.to_owned());

    match PythonProject::discover(project_dir, &requirements) {
        Ok(python) => {
            report.manifest = CheckResult::ok(&requirements);
            report.app_module = CheckResult::ok(&format!("{}.py", python.app_module));
        }
        Err(err @ gantry_core::Error::MissingRequirements { .. }) => {
            report.manifest = CheckResult::fail(&err.to_string());
            report.app_module = CheckResult::fail("not probed");
        }
        Err(err) => {
            report.manifest = CheckResult::ok(&requirements);
            report.app_module = CheckResult::fail(&err.to_string());
        }
    }

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed, see above for details");
    }

    Ok(())
}
