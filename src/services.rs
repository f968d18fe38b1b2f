use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{entry::LaunchTarget, frame::Frame};

pub const MAX_RECENTS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub target: LaunchTarget,
    pub display_name: String,
}

impl GameRecord {
    pub fn new(target: LaunchTarget) -> Self {
        let display_name = target.file_stem().to_string();
        Self {
            target,
            display_name,
        }
    }
}

pub trait Launcher {
    // fire and forget; the browser shows its loading screen from here on
    fn launch(&mut self, target: &LaunchTarget);
}

pub trait RecentsStore {
    fn add(&mut self, core_id: &str, file_name: &str, directory: &str);
    fn list(&self) -> &[GameRecord];
    fn count(&self) -> usize {
        self.list().len()
    }
}

pub trait FavoritesStore {
    fn list(&self) -> &[GameRecord];
    fn count(&self) -> usize {
        self.list().len()
    }
    fn toggle(&mut self, core_id: &str, file_name: &str, directory: &str) -> bool;
    fn remove_at(&mut self, index: usize);
    fn is_favorite(&self, directory: &str, file_name: &str) -> bool {
        self.list()
            .iter()
            .any(|r| r.target.directory == directory && r.target.file_name == file_name)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub back: bool,
    pub reset: bool,
}

pub trait SettingsMenu {
    fn is_active(&self) -> bool;
    fn is_saving(&self) -> bool;
    // returns true when the input was consumed
    fn handle_input(&mut self, input: &SettingsInput) -> bool;
    fn load_for_core(&mut self, core_name: &str) -> bool;
    fn load_global(&mut self) -> bool;
    fn show_menu(&mut self);
}

pub trait Thumbnails {
    fn resolve(&self, full_path: &Path) -> PathBuf;
    fn load(&mut self, path: &Path) -> bool;
    fn release(&mut self);
}

pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
    fn notice(&mut self, message: &str);
}

pub struct Services {
    pub launcher: Box<dyn Launcher>,
    pub recents: Box<dyn RecentsStore>,
    pub favorites: Box<dyn FavoritesStore>,
    pub settings: Box<dyn SettingsMenu>,
    pub thumbnails: Box<dyn Thumbnails>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            launcher: Box::new(LogLauncher::default()),
            recents: Box::new(Recents::default()),
            favorites: Box::new(Favorites::default()),
            settings: Box::new(NoSettings),
            thumbnails: Box::new(SiblingThumbnails::default()),
        }
    }
}

#[derive(Debug, Default)]
pub struct LogLauncher {
    pub launched: Vec<LaunchTarget>,
}

impl Launcher for LogLauncher {
    fn launch(&mut self, target: &LaunchTarget) {
        log::info!(
            "Launching {} from {} with core {}",
            target.file_stem(),
            target.directory,
            target.core_id
        );
        self.launched.push(target.clone());
    }
}

// records kept one per line as `core;file;directory` with `;` escaped,
// optionally mirrored to a file after every change
#[derive(Debug, Default)]
struct RecordList {
    records: Vec<GameRecord>,
    file: Option<PathBuf>,
}

impl RecordList {
    fn open(file: &Path) -> anyhow::Result<Self> {
        let text = match fs::read_to_string(file) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("Unable to read {}", file.display()));
            }
        };
        let mut records = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            match line.parse::<LaunchTarget>() {
                Ok(target) => records.push(GameRecord::new(target)),
                Err(e) => log::warn!("{}: {}", file.display(), e),
            }
        }
        Ok(Self {
            records,
            file: Some(file.to_path_buf()),
        })
    }

    fn save(&self) {
        let Some(file) = &self.file else {
            return;
        };
        let text: String = self
            .records
            .iter()
            .map(|r| format!("{}\n", r.target))
            .collect();
        if let Err(e) = fs::write(file, text) {
            log::warn!("Unable to write {}: {}", file.display(), e);
        }
    }

    fn position(&self, directory: &str, file_name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.target.directory == directory && r.target.file_name == file_name)
    }
}

#[derive(Debug, Default)]
pub struct Recents {
    list: RecordList,
}

impl Recents {
    pub fn open(file: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            list: RecordList::open(file)?,
        })
    }
}

impl RecentsStore for Recents {
    fn add(&mut self, core_id: &str, file_name: &str, directory: &str) {
        if let Some(index) = self.list.position(directory, file_name) {
            self.list.records.remove(index);
        }
        let record = GameRecord::new(LaunchTarget::new(core_id, file_name, directory));
        self.list.records.insert(0, record);
        self.list.records.truncate(MAX_RECENTS);
        self.list.save();
    }

    fn list(&self) -> &[GameRecord] {
        &self.list.records
    }
}

#[derive(Debug, Default)]
pub struct Favorites {
    list: RecordList,
}

impl Favorites {
    pub fn open(file: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            list: RecordList::open(file)?,
        })
    }
}

impl FavoritesStore for Favorites {
    fn list(&self) -> &[GameRecord] {
        &self.list.records
    }

    fn toggle(&mut self, core_id: &str, file_name: &str, directory: &str) -> bool {
        let now_favorite = match self.list.position(directory, file_name) {
            Some(index) => {
                self.list.records.remove(index);
                false
            }
            None => {
                let record = GameRecord::new(LaunchTarget::new(core_id, file_name, directory));
                self.list.records.push(record);
                true
            }
        };
        self.list.save();
        now_favorite
    }

    fn remove_at(&mut self, index: usize) {
        if index < self.list.records.len() {
            self.list.records.remove(index);
            self.list.save();
        }
    }
}

#[derive(Debug, Default)]
pub struct NoSettings;

impl SettingsMenu for NoSettings {
    fn is_active(&self) -> bool {
        false
    }
    fn is_saving(&self) -> bool {
        false
    }
    fn handle_input(&mut self, _input: &SettingsInput) -> bool {
        false
    }
    fn load_for_core(&mut self, _core_name: &str) -> bool {
        false
    }
    fn load_global(&mut self) -> bool {
        false
    }
    fn show_menu(&mut self) {}
}

#[derive(Debug, Default)]
pub struct SiblingThumbnails {
    pub current: Option<PathBuf>,
}

impl Thumbnails for SiblingThumbnails {
    fn resolve(&self, full_path: &Path) -> PathBuf {
        full_path.with_extension("png")
    }

    fn load(&mut self, path: &Path) -> bool {
        if path.is_file() {
            self.current = Some(path.to_path_buf());
            true
        } else {
            false
        }
    }

    fn release(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn favorite_toggle_round_trip() {
        let mut favs = Favorites::default();
        let before = favs.count();
        assert!(favs.toggle("gb", "Tetris.gb", "gb"));
        assert!(favs.is_favorite("gb", "Tetris.gb"));
        assert!(!favs.toggle("gb", "Tetris.gb", "gb"));
        assert_eq!(favs.count(), before);
    }

    #[test]
    fn recents_are_most_recent_first_without_duplicates() {
        let mut recents = Recents::default();
        recents.add("gb", "Tetris.gb", "gb");
        recents.add("nes", "Zelda.nes", "nes");
        recents.add("gb", "Tetris.gb", "gb");
        let names: Vec<_> = recents.list().iter().map(|r| r.display_name.as_str()).collect();
        assert_eq!(names, ["Tetris", "Zelda"]);
        for i in 0..30 {
            recents.add("gb", &format!("{i}.gb"), "gb");
        }
        assert_eq!(recents.count(), MAX_RECENTS);
    }

    #[test]
    fn lists_persist_and_skip_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("favorites.txt");
        fs::write(&file, "gb;Tetris.gb;gb\nbroken\nnes;Zelda.nes;nes\n").unwrap();
        let mut favs = Favorites::open(&file).unwrap();
        assert_eq!(favs.count(), 2);
        favs.remove_at(0);
        favs.remove_at(7);
        assert_eq!(fs::read_to_string(&file).unwrap(), "nes;Zelda.nes;nes\n");

        let recents = Recents::open(&dir.path().join("missing.txt")).unwrap();
        assert_eq!(recents.count(), 0);
    }

    #[test]
    fn names_with_separator_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("favorites.txt");
        let mut favs = Favorites::open(&file).unwrap();
        assert!(favs.toggle("gb", "Mario; Luigi.gb", "gb"));

        let mut favs = Favorites::open(&file).unwrap();
        let target = &favs.list()[0].target;
        assert_eq!(target.file_name, "Mario; Luigi.gb");
        assert_eq!(target.directory, "gb");
        assert!(favs.is_favorite("gb", "Mario; Luigi.gb"));
        assert!(!favs.toggle("gb", "Mario; Luigi.gb", "gb"));
        assert_eq!(favs.count(), 0);
    }
}
