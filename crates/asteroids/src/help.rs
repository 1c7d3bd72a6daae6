//! Help text shown on the game-over splash

use std::path::Path;

/// Built-in help, used when the help file cannot be read
pub fn default_lines() -> Vec<String> {
    [
        "Asteroids 2k",
        " ",
        "N          New game",
        "P          Pause",
        "Esc / Q    Quit",
        " ",
        "Left       Rotate left",
        "Right      Rotate right",
        "Up         Thrust",
        "Space      Fire",
        "S          Shield",
        " ",
        "+ / -      Volume",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Read the help file, one splash line per file line
pub fn load(path: impl AsRef<Path>) -> std::io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().map(|line| line.trim_end().to_string()).collect())
}

/// Read the help file, falling back to the built-in text
pub fn load_or_default(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    match load(path) {
        Ok(lines) if !lines.is_empty() => lines,
        Ok(_) => {
            log::warn!("Help file {} is empty, using built-in help", path.display());
            default_lines()
        }
        Err(e) => {
            log::warn!("Cannot read help file {}: {}, using built-in help", path.display(), e);
            default_lines()
        }
    }
}
