use std::path::Path;

use gantry_build::BuildPlan;

pub async fn show(name: Option<&str>, json: bool) -> anyhow::Result<()> {
    let (_, profile) = super::resolve_profile(Path::new("."), name)?;

    if json {
        let plan = BuildPlan::resolve(&profile);
        let doc = serde_json::json!({ "profile": profile, "plan": plan });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let packages: Vec<&str> = profile
        .system_packages
        .iter()
        .map(|p| p.apt_name())
        .collect();

    println!("profile:     {}", profile.name);
    println!("base image:  {}", profile.base_image());
    println!("packages:    {}", packages.join(" "));
    println!("manifest:    {}", profile.requirements);
    println!("port:        {}", profile.exposed_port);
    println!("entrypoint:  {}", profile.entrypoint.command().join(" "));
    if !profile.env.is_empty() {
        let mut env: Vec<(&String, &String)> = profile.env.iter().collect();
        env.sort();
        for (key, value) in env {
            println!("env:         {key}={value}");
        }
    }

    Ok(())
}
