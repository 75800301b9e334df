// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod footer;
pub mod nav;
pub mod search;
pub mod sidebar;
pub mod site;
pub mod social;
pub mod theme;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use site::Site;
use theme::Theme;

pub const DEFAULT_CONFIG_PATH: &str = "./Sitepress.toml";

/// The whole site configuration, laid out the way the generator expects
/// its configuration document: site metadata at the top level and the
/// theme options under `themeConfig`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    #[serde(flatten)]
    pub site: Site,

    #[serde(rename = "themeConfig", default)]
    pub theme: Theme,
}

impl Config {
    /// Resolve build-time values: interpolate `{year}` into the footer
    /// copyright and prefix the base path onto root-relative head links.
    pub fn resolved(&self, year: i32) -> Config {
        let mut config = self.clone();
        config.theme.footer = config.theme.footer.interpolate(year);
        for tag in &mut config.site.head {
            for attr in ["href", "src"] {
                let full = tag
                    .1
                    .get(attr)
                    .filter(|value| value.starts_with('/'))
                    .map(|value| self.site.full_url(value));
                if let Some(full) = full {
                    tag.1.insert(attr.to_string(), full);
                }
            }
        }
        config
    }
}

/// Try to find toml file in the current directory or the parent directory.
pub fn find_config(mut toml_file: Utf8PathBuf) -> eyre::Result<Utf8PathBuf> {
    if !toml_file.exists() {
        let parent = toml_file.parent().unwrap().canonicalize_utf8()?;
        let parent = parent.parent().unwrap();

        toml_file = parent.join(DEFAULT_CONFIG_PATH);
        if !toml_file.exists() {
            return Err(eyre::eyre!("cannot find configuration file: {}", toml_file));
        }
    }
    Ok(toml_file)
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre::eyre!("failed to parse config file: {}", e))?;
    Ok(config)
}
