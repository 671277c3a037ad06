use std::path::Path;

/// Initialize gantry in an existing Python project.
pub async fn init_project() -> anyhow::Result<()> {
    // Must be inside a Python service root
    if !Path::new("app.py").exists() && !Path::new("main.py").exists() {
        anyhow::bail!(
            "no ASGI module (app.py or main.py) found. Run this command from a Python service root."
        );
    }

    let mut created = Vec::new();

    // gantry.toml
    let gantry_toml_path = Path::new("gantry.toml");
    if gantry_toml_path.exists() {
        eprintln!("gantry.toml already exists, skipping");
    } else {
        let gantry_toml = r#"[project]
# name = "my-service"
# default_profile = "azure"

[build]
# requirements = "requirements.txt"

# [build.env]
# INSIGHTFACE_HOME = "/home/insightface"

# Define extra deployment targets by axis values:
# [profile.edge]
# python = "3.12"
# variant = "slim"
# packages = ["gl", "glib", "jpeg", "png"]
# port = 9000
"#;
        std::fs::write(gantry_toml_path, gantry_toml)?;
        created.push("gantry.toml");
    }

    // .dockerignore
    let dockerignore_path = Path::new(".dockerignore");
    if dockerignore_path.exists() {
        eprintln!(".dockerignore already exists, skipping");
    } else {
        let dockerignore = r#".gantry-build/
.gantry/
.git/
__pycache__/
*.pyc
.venv/
"#;
        std::fs::write(dockerignore_path, dockerignore)?;
        created.push(".dockerignore");
    }

    if created.is_empty() {
        println!("Nothing to create: already initialized.");
    } else {
        for f in &created {
            println!("Created {f}");
        }
    }

    println!();
    println!("Next steps:");
    println!();
    println!("  1. Inspect the builtin targets:");
    println!("     gantry list");
    println!();
    println!("  2. Check the profile invariants:");
    println!("     gantry validate");
    println!();
    println!("  3. Build an image:");
    println!("     gantry build cloudrun");

    Ok(())
}
