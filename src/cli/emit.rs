// Copyright (c) 2026 Sitepress Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use chrono::Datelike;
use eyre::Context;

use crate::{config, emit, environment};

#[derive(clap::Args)]
pub struct EmitCommand {
    /// Path to the configuration file (e.g., "Sitepress.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    pub config: String,

    /// Write the document to this file (relative to the config root)
    /// instead of stdout.
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

pub fn emit(command: &EmitCommand) -> eyre::Result<()> {
    environment::init_environment(Utf8PathBuf::from(&command.config))?;
    let config = environment::get_config();

    let year = chrono::Local::now().year();
    let json = emit::to_json_string(config, year)?;

    match &command.output {
        Some(output) => {
            let path = environment::root_dir().join(output);
            std::fs::write(&path, json)
                .wrap_err_with(|| eyre::eyre!("failed to write document to `{}`", path))?;
            println!("Emitted generator config at: {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
