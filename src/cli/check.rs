// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;

use crate::{config, environment, validate};

#[derive(clap::Args)]
pub struct CheckCommand {
    /// Path to the configuration file (e.g., "Sitepress.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub config: String,
}

pub fn check(command: &CheckCommand) -> eyre::Result<()> {
    environment::init_environment(Utf8PathBuf::from(&command.config))?;
    let config = environment::get_config();
    validate::validate(config)?;

    color_print::cprintln!(
        "<g>ok</> {}: {} nav entries, {} sidebar entries",
        environment::config_file(),
        config.theme.nav.len(),
        config.theme.sidebar.len()
    );
    Ok(())
}
