use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tunnel_profile_domain::CliOverrides;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "tunnel-profile")]
#[command(version)]
#[command(about = "Loads proxy profiles into a tun-mode routing engine")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Profile to load on top of the built-in default
    #[arg(short = 'p', long, value_name = "FILE")]
    profile: Option<String>,

    /// Directory relative profile references resolve against
    #[arg(long, value_name = "DIR")]
    base_dir: Option<String>,

    /// Working directory for the built-in default profile
    #[arg(long, value_name = "DIR")]
    home_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Load, print the active state as JSON and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        profile_path: cli.profile.clone(),
        base_dir: cli.base_dir.clone(),
        home_dir: cli.home_dir.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting tunnel-profile v{}", env!("CARGO_PKG_VERSION"));

    let adapters = di::Adapters::new();
    let use_cases = di::UseCases::new(&config, &adapters);

    let profile = config
        .profile
        .path
        .clone()
        .map(PathBuf::from)
        .zip(config.profile.resolved_base_dir());

    let load_default = use_cases.load_default.clone();
    let load_profile = use_cases.load_profile.clone();
    let result = tokio::task::spawn_blocking(move || {
        load_default.execute();
        match profile {
            Some((path, base_dir)) => load_profile.execute(&path, &base_dir),
            None => Ok(()),
        }
    })
    .await?;

    if let Err(e) = &result {
        error!(error = %e, "Profile load failed, keeping the default profile");
    }

    if cli.once {
        let state = serde_json::json!({
            "engine": &*adapters.engine.snapshot(),
            "dns_redirect": &*adapters.redirect.state(),
            "resolver_installed": adapters.registry.is_set(),
        });
        println!("{}", serde_json::to_string_pretty(&state)?);
        result?;
        return Ok(());
    }

    info!(
        generation = adapters.engine.generation(),
        "Profile active, waiting for shutdown signal"
    );
    tokio::signal::ctrl_c().await?;

    info!("Shutdown complete");
    Ok(())
}
