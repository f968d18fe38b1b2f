use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::Deserialize;

use crate::viewport::{DEFAULT_PAGE_SIZE, DEFAULT_VISIBLE_ROWS};

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub roms_root: PathBuf,
    pub cache_file: PathBuf,
    pub recents_file: PathBuf,
    pub favorites_file: PathBuf,
    // defaults to <roms_root>/js2000
    pub utilities_dir: Option<PathBuf>,
    pub hide_empty_folders: bool,
    pub resume_on_boot: bool,
    pub visible_rows: usize,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roms_root: PathBuf::from("/mnt/sda1/ROMS"),
            cache_file: PathBuf::from("/mnt/sda1/configs/frogui_empty_dirs.cache"),
            recents_file: PathBuf::from("/mnt/sda1/configs/frogui_recent.txt"),
            favorites_file: PathBuf::from("/mnt/sda1/configs/frogui_favorites.txt"),
            utilities_dir: None,
            hide_empty_folders: true,
            resume_on_boot: false,
            visible_rows: DEFAULT_VISIBLE_ROWS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Unable to read {}", path.display()));
            }
        };
        Self::parse(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn utilities_dir(&self) -> PathBuf {
        self.utilities_dir
            .clone()
            .unwrap_or_else(|| self.roms_root.join("js2000"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::parse("roms_root = \"/roms\"\nhide_empty_folders = false\n").unwrap();
        assert_eq!(config.roms_root, PathBuf::from("/roms"));
        assert!(!config.hide_empty_folders);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.utilities_dir(), PathBuf::from("/roms/js2000"));
    }

    #[test]
    fn missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("frogui.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("frogui.toml");
        fs::write(&path, "visible_rows = \"ten\"").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
