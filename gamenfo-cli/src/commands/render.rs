use std::io::{Read, Write};
use std::path::Path;

use gamenfo::Game;

use crate::error::CliError;
use crate::settings::Settings;

/// Load `input`, render it in the chosen format and print it to stdout.
///
/// `format` overrides the format from settings.
pub(crate) fn run_render(
    input: &Path,
    format: Option<&str>,
    settings: &Settings,
) -> Result<(), CliError> {
    let name = format.unwrap_or(&settings.render.format);
    let format = gamenfo::format_by_name(name).ok_or_else(|| CliError::unknown_format(name))?;

    let game = load_game(input)?;
    log::debug!(
        "Loaded {} ({} title(s), {} DLC(s))",
        input.display(),
        game.title.len(),
        game.dlcs.len(),
    );

    let document = format.render(&game)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    log::info!("Rendered {} as {}", input.display(), format.name());
    Ok(())
}

/// Read a game from a `.json`/`.yaml`/`.yml` file, or JSON from stdin for `-`.
fn load_game(input: &Path) -> Result<Game, CliError> {
    if input == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        return Ok(gamenfo::from_json(&contents)?);
    }

    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => {
            let contents = std::fs::read_to_string(input)?;
            Ok(gamenfo::from_json(&contents)?)
        }
        Some("yaml" | "yml") => {
            let contents = std::fs::read_to_string(input)?;
            Ok(gamenfo::from_yaml(&contents)?)
        }
        _ => Err(CliError::unsupported_input(input.display().to_string())),
    }
}
