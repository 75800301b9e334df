// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use eyre::Context;

use crate::config;

#[derive(clap::Args)]
pub struct NewCommand {
    /// Path to the new configuration file.
    #[arg(default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub path: String,
}

pub fn new_config(command: &NewCommand) -> eyre::Result<()> {
    let config_path = Utf8PathBuf::from(&command.path);
    if config_path.exists() {
        return Err(eyre::eyre!("already exists: {}", config_path));
    }

    let config = config::Config::default();
    let toml = toml::to_string(&config).wrap_err("failed to serialize default config")?;

    std::fs::write(&config_path, toml).wrap_err("failed to create default config file")?;
    println!("Created new config at: {}", config_path);
    Ok(())
}
