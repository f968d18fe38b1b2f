use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    empty_dirs::EmptyDirCache,
    entry::{Action, Entry, EntryKind, Rows},
    view::ViewId,
};

// The browser's own data folder and the two save-data folders.
const RESERVED_DIRS: [&str; 3] = ["frogui", "saves", "save"];

pub const RECENT_LABEL: &str = "Recent games";
pub const FAVORITES_LABEL: &str = "Favorites";
pub const RANDOM_LABEL: &str = "Random game";
pub const TOOLS_LABEL: &str = "Tools";

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_DIRS.iter().any(|r| r.eq_ignore_ascii_case(name))
}

// uses the type hint from the directory read, and only asks for metadata
// when the hint says nothing (links, exotic filesystems)
pub fn is_directory(entry: &fs::DirEntry) -> bool {
    match entry.file_type() {
        Ok(ft) if ft.is_dir() => true,
        Ok(ft) if ft.is_file() => false,
        _ => fs::metadata(entry.path())
            .map(|m| m.is_dir())
            .unwrap_or(false),
    }
}

// An entry that fails mid-listing is skipped; the rest of the listing stays.
pub(crate) fn readable<T>(
    entries: impl Iterator<Item = io::Result<T>>,
    path: &Path,
) -> impl Iterator<Item = T> {
    entries.filter_map(move |entry| match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            log::debug!("Skipping unreadable entry in {}: {}", path.display(), e);
            None
        }
    })
}

pub struct RootFilter<'a> {
    pub empty_dirs: Option<&'a EmptyDirCache>,
}

// reads one directory into sorted rows, without any synthetic rows.
// With a root filter, files are dropped and known-empty containers elided
pub fn read_listing(path: &Path, root: Option<RootFilter<'_>>) -> anyhow::Result<Vec<Entry>> {
    let read_dir =
        fs::read_dir(path).with_context(|| format!("Unable to open {}", path.display()))?;
    let mut listing = Vec::new();

    for entry in readable(read_dir, path) {
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) || is_reserved(&name) {
            continue;
        }
        let is_dir = is_directory(&entry);

        if let Some(filter) = &root {
            if !is_dir {
                continue;
            }
            if filter.empty_dirs.is_some_and(|cache| cache.contains(&name)) {
                log::debug!("Skipping empty folder {}", name);
                continue;
            }
        }

        let kind = if is_dir {
            EntryKind::Directory(entry.path())
        } else {
            EntryKind::File(entry.path())
        };
        listing.try_reserve(1)?;
        listing.push(Entry::new(name, kind));
    }

    listing.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listing)
}

// An unreadable directory shows as empty.
fn read_listing_or_empty(path: &Path, root: Option<RootFilter<'_>>) -> Vec<Entry> {
    match read_listing(path, root) {
        Ok(listing) => listing,
        Err(e) => {
            log::warn!("{:#}", e);
            Vec::new()
        }
    }
}

pub fn root_rows(root: &Path, empty_dirs: Option<&EmptyDirCache>) -> anyhow::Result<Rows> {
    let listing = read_listing_or_empty(root, Some(RootFilter { empty_dirs }));
    let mut rows = Rows::new();
    rows.push(Entry::new(RECENT_LABEL, EntryKind::Link(ViewId::Recents)))?;
    rows.push(Entry::new(FAVORITES_LABEL, EntryKind::Link(ViewId::Favorites)))?;
    rows.push(Entry::new(RANDOM_LABEL, EntryKind::Action(Action::RandomGame)))?;
    rows.append(listing)?;
    rows.push(Entry::new(TOOLS_LABEL, EntryKind::Link(ViewId::Tools)))?;
    Ok(rows)
}

pub fn directory_rows(path: &Path, root: &Path) -> anyhow::Result<Rows> {
    let parent = match path.parent() {
        Some(parent) => ViewId::for_path(parent, root),
        None => ViewId::Root,
    };
    let mut rows = Rows::new();
    rows.push(Entry::parent(parent))?;
    rows.append(read_listing_or_empty(path, None))?;
    Ok(rows)
}

pub fn containers(root: &Path, empty_dirs: Option<&EmptyDirCache>) -> Vec<PathBuf> {
    read_listing_or_empty(root, Some(RootFilter { empty_dirs }))
        .into_iter()
        .filter_map(|e| match e.kind {
            EntryKind::Directory(path) => Some(path),
            _ => None,
        })
        .collect()
}

pub fn files(path: &Path) -> Vec<PathBuf> {
    read_listing_or_empty(path, None)
        .into_iter()
        .filter_map(|e| match e.kind {
            EntryKind::File(path) => Some(path),
            _ => None,
        })
        .collect()
}
