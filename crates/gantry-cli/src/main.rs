mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gantry",
    about = "Resolve deployment profiles into container builds for Python ASGI services"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add gantry to an existing Python project
    Init,
    /// List defined profiles
    List,
    /// Show a profile's resolved configuration
    Show {
        /// Profile name (defaults to [project].default_profile)
        profile: Option<String>,
        /// Emit the profile and its resolved build plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a profile's Dockerfile
    Render {
        /// Profile name (defaults to [project].default_profile)
        profile: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Check profiles against the build invariants
    Validate {
        /// Profile to validate (defaults to all)
        profile: Option<String>,
    },
    /// Eject the Dockerfile for manual customization
    Eject {
        /// Profile name (defaults to [project].default_profile)
        profile: Option<String>,
    },
    /// Build the container image with docker
    Build {
        /// Profile name (defaults to [project].default_profile)
        profile: Option<String>,
        /// Image tag (defaults to <service>:<profile>)
        #[arg(long, short = 't')]
        tag: Option<String>,
        /// Allow building with uncommitted changes
        #[arg(long)]
        allow_dirty: bool,
    },
    /// Check docker and project readiness
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="missing RUST_LOG falls back to the default filter"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init_project().await?,
        Commands::List => commands::list().await?,
        Commands::Show { profile, json } => commands::show(profile.as_deref(), json).await?,
        Commands::Render { profile, output } => {
            commands::render(profile.as_deref(), output.as_deref()).await?
        }
        Commands::Validate { profile } => commands::validate(profile.as_deref()).await?,
        Commands::Eject { profile } => commands::eject(profile.as_deref()).await?,
        Commands::Build {
            profile,
            tag,
            allow_dirty,
        } => commands::build(profile.as_deref(), tag.as_deref(), allow_dirty).await?,
        Commands::Doctor => commands::doctor().await?,
    }

    Ok(())
}
