use std::path::{Path, PathBuf};

use crate::{
    empty_dirs::EmptyDirCache,
    entry::{Action, Entry, EntryKind, Rows},
    scanner,
    services::GameRecord,
};

pub const ROOT_TITLE: &str = "FROGUI: SYSTEMS";
pub const REBUILD_LABEL: &str = "Rebuild folder cache";

const HOTKEYS: [&str; 5] = [
    "SAVE STATE: L + R + X",
    "LOAD STATE: L + R + Y",
    "NEXT SLOT: L + R + >",
    "PREV SLOT: L + R + <",
    "SCREENSHOT: L + R + START",
];

const CREDITS: [&str; 4] = ["FrogUI Dev & Idea", "Prosty & Desoxyn", "Design", "Q_ta"];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Root,
    Directory(PathBuf),
    Recents,
    Favorites,
    Tools,
    Utilities,
    Hotkeys,
    Credits,
}

impl ViewId {
    pub fn for_path(path: &Path, root: &Path) -> Self {
        if path == root {
            ViewId::Root
        } else {
            ViewId::Directory(path.to_path_buf())
        }
    }

    // where back leads from here; the root has nowhere to go
    pub fn parent(&self, root: &Path) -> Option<ViewId> {
        match self {
            ViewId::Root => None,
            ViewId::Directory(path) => Some(match path.parent() {
                Some(parent) => ViewId::for_path(parent, root),
                None => ViewId::Root,
            }),
            ViewId::Recents | ViewId::Favorites | ViewId::Tools => Some(ViewId::Root),
            ViewId::Utilities | ViewId::Hotkeys | ViewId::Credits => Some(ViewId::Tools),
        }
    }

    // a real, scrollable listing backed by the filesystem
    pub fn is_listing(&self) -> bool {
        matches!(self, ViewId::Root | ViewId::Directory(_))
    }

    pub fn title(&self) -> String {
        match self {
            ViewId::Root => ROOT_TITLE.to_string(),
            ViewId::Directory(path) => path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            ViewId::Recents => scanner::RECENT_LABEL.to_string(),
            ViewId::Favorites => scanner::FAVORITES_LABEL.to_string(),
            ViewId::Tools => scanner::TOOLS_LABEL.to_string(),
            ViewId::Utilities => "Utils".to_string(),
            ViewId::Hotkeys => "HOTKEYS".to_string(),
            ViewId::Credits => "CREDITS".to_string(),
        }
    }
}

pub struct Sources<'a> {
    pub root: &'a Path,
    pub utilities_dir: &'a Path,
    pub empty_dirs: Option<&'a EmptyDirCache>,
    pub recents: &'a [GameRecord],
    pub favorites: &'a [GameRecord],
}

// builds the rows of a view. Nothing is touched on failure
pub fn populate(view: &ViewId, src: &Sources<'_>) -> anyhow::Result<Rows> {
    match view {
        ViewId::Root => scanner::root_rows(src.root, src.empty_dirs),
        ViewId::Directory(path) => scanner::directory_rows(path, src.root),
        ViewId::Recents => record_rows(src.recents),
        ViewId::Favorites => record_rows(src.favorites),
        ViewId::Tools => tools_rows(),
        ViewId::Utilities => utilities_rows(src.utilities_dir),
        ViewId::Hotkeys => info_rows(&HOTKEYS, ViewId::Tools),
        ViewId::Credits => info_rows(&CREDITS, ViewId::Tools),
    }
}

fn record_rows(records: &[GameRecord]) -> anyhow::Result<Rows> {
    let mut rows = Rows::new();
    for record in records {
        rows.push(Entry::new(
            record.display_name.as_str(),
            EntryKind::Launch(record.target.clone()),
        ))?;
    }
    rows.push(Entry::parent(ViewId::Root))?;
    Ok(rows)
}

fn tools_rows() -> anyhow::Result<Rows> {
    let mut rows = Rows::new();
    rows.push(Entry::new("Hotkeys", EntryKind::Link(ViewId::Hotkeys)))?;
    rows.push(Entry::new("Credits", EntryKind::Link(ViewId::Credits)))?;
    rows.push(Entry::new("Utils", EntryKind::Link(ViewId::Utilities)))?;
    rows.push(Entry::parent(ViewId::Root))?;
    Ok(rows)
}

fn utilities_rows(dir: &Path) -> anyhow::Result<Rows> {
    let listing = scanner::read_listing(dir, None).unwrap_or_else(|e| {
        log::debug!("{:#}", e);
        Vec::new()
    });
    let mut rows = Rows::new();
    rows.append(listing)?;
    rows.push(Entry::new(REBUILD_LABEL, EntryKind::Action(Action::RebuildCache)))?;
    rows.push(Entry::parent(ViewId::Tools))?;
    Ok(rows)
}

fn info_rows(lines: &[&str], back: ViewId) -> anyhow::Result<Rows> {
    let mut rows = Rows::new();
    for line in lines {
        rows.push(Entry::new(*line, EntryKind::Info))?;
    }
    rows.push(Entry::parent(back))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::LaunchTarget;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn sources<'a>(root: &'a Path, utils: &'a Path, recents: &'a [GameRecord]) -> Sources<'a> {
        Sources {
            root,
            utilities_dir: utils,
            empty_dirs: None,
            recents,
            favorites: &[],
        }
    }

    #[test]
    fn every_special_view_ends_with_its_back_row() {
        let dir = TempDir::new().unwrap();
        let src = sources(dir.path(), dir.path(), &[]);
        for (view, back) in [
            (ViewId::Recents, ViewId::Root),
            (ViewId::Favorites, ViewId::Root),
            (ViewId::Tools, ViewId::Root),
            (ViewId::Utilities, ViewId::Tools),
            (ViewId::Hotkeys, ViewId::Tools),
            (ViewId::Credits, ViewId::Tools),
        ] {
            let rows = populate(&view, &src).unwrap().into_vec();
            let last = rows.last().unwrap();
            assert_eq!(last.kind, EntryKind::Parent(back.clone()));
            assert_eq!(view.parent(dir.path()), Some(back));
        }
    }

    #[test]
    fn recents_rows_carry_launch_targets() {
        let dir = TempDir::new().unwrap();
        let records = [GameRecord::new(LaunchTarget::new("gb", "Tetris.gb", "gb"))];
        let src = sources(dir.path(), dir.path(), &records);
        let rows = populate(&ViewId::Recents, &src).unwrap().into_vec();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Tetris");
        assert!(matches!(&rows[0].kind, EntryKind::Launch(t) if t.core_id == "gb"));
    }

    #[test]
    fn utilities_lists_files_then_rebuild_action() {
        let dir = TempDir::new().unwrap();
        let utils = dir.path().join("js2000");
        fs::create_dir(&utils).unwrap();
        File::create(utils.join("calc.js")).unwrap();
        File::create(utils.join(".hidden")).unwrap();
        let src = sources(dir.path(), &utils, &[]);
        let rows = populate(&ViewId::Utilities, &src).unwrap().into_vec();
        let names: Vec<_> = rows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["calc.js", REBUILD_LABEL, ".."]);
    }

    #[test]
    fn parent_of_nested_directory() {
        let root = Path::new("/roms");
        let view = ViewId::Directory(root.join("gb").join("hacks"));
        assert_eq!(view.parent(root), Some(ViewId::Directory(root.join("gb"))));
        let view = ViewId::Directory(root.join("gb"));
        assert_eq!(view.parent(root), Some(ViewId::Root));
        assert_eq!(ViewId::Root.parent(root), None);
        assert_eq!(view.title(), "gb");
        assert!(view.is_listing());
        assert!(!ViewId::Favorites.is_listing());
    }
}
