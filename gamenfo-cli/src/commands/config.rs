use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::Settings;

/// Print where settings are read from and their effective values.
pub(crate) fn run_config_show(path: &Path, settings: &Settings) -> Result<(), CliError> {
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found, using defaults)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    println!(
        "# Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    );

    let rendered = toml::to_string_pretty(settings)
        .map_err(|e| CliError::config(format!("cannot display settings: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// Print the settings file path only.
pub(crate) fn run_config_path(path: &Path) {
    println!("{}", path.display());
}
