// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::sync::OnceLock;

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::{self, Config};

pub struct Environment {
    /// Specifies the project root path.
    ///
    /// Please note that this value should always be automatically derived
    /// from the location of the toml configuration file.
    pub root: Utf8PathBuf,
    pub config_file: Utf8PathBuf,
    pub config: Config,
}

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

fn get_environment() -> &'static Environment {
    ENVIRONMENT.get().expect("environment must be initialized")
}

pub fn init_environment(toml_file: Utf8PathBuf) -> eyre::Result<()> {
    let toml_file = config::find_config(toml_file)?;
    let root = toml_file
        .parent()
        .expect("path cannot be empty")
        .to_owned();
    let toml = std::fs::read_to_string(&toml_file)?;

    _ = ENVIRONMENT.set(Environment {
        root,
        config_file: toml_file,
        config: config::parse_config(&toml)?,
    });
    Ok(())
}

pub fn root_dir() -> &'static Utf8Path {
    &get_environment().root
}

pub fn config_file() -> &'static Utf8Path {
    &get_environment().config_file
}

pub fn get_config() -> &'static Config {
    &get_environment().config
}
