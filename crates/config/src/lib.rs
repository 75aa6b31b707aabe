// Configuration loading

pub mod ai;
pub mod favorites;
pub mod settings;

use std::path::PathBuf;

/// Directory holding all persisted app state (`~/.config/propseek`).
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("propseek")
}
