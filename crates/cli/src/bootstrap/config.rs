use tunnel_profile_domain::{AppConfig, CliOverrides};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<AppConfig> {
    let config = AppConfig::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
