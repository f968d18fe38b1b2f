use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::view::ViewId;

pub const PARENT_MARKER: &str = "..";
pub const MAX_NAME_LEN: usize = 255;

const KEY_SEPARATOR: char = ';';
const ESCAPE: char = '\\';

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LaunchTarget {
    pub core_id: String,
    pub file_name: String,
    // relative to the root collection, e.g. "gb" or "gb/hacks"
    pub directory: String,
}

impl LaunchTarget {
    pub fn new(
        core_id: impl Into<String>,
        file_name: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            core_id: core_id.into(),
            file_name: file_name.into(),
            directory: directory.into(),
        }
    }

    pub fn file_stem(&self) -> &str {
        match self.file_name.rfind('.') {
            Some(0) | None => &self.file_name,
            Some(dot) => &self.file_name[..dot],
        }
    }

    pub fn full_path(&self, root: &Path) -> PathBuf {
        root.join(&self.directory).join(&self.file_name)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseKeyError(String);

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed launch key: {:?}", self.0)
    }
}

impl std::error::Error for ParseKeyError {}

// "core;file" or "core;file;directory"; a literal ';' or '\\' inside a
// field is written with a leading '\\'
impl FromStr for LaunchTarget {
    type Err = ParseKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let fields = split_key(key);
        let malformed = || ParseKeyError(key.to_string());
        let (core_id, file_name, directory) = match fields.as_slice() {
            [core, file] => (core, file, core),
            [core, file, dir] => (core, file, dir),
            _ => return Err(malformed()),
        };
        if core_id.is_empty() || file_name.is_empty() {
            return Err(malformed());
        }
        Ok(Self::new(core_id.as_str(), file_name.as_str(), directory.as_str()))
    }
}

fn split_key(key: &str) -> Vec<String> {
    let mut fields = vec![String::new()];
    let mut chars = key.chars();
    while let Some(c) = chars.next() {
        match c {
            ESCAPE => {
                if let (Some(next), Some(field)) = (chars.next(), fields.last_mut()) {
                    field.push(next);
                }
            }
            KEY_SEPARATOR => fields.push(String::new()),
            _ => {
                if let Some(field) = fields.last_mut() {
                    field.push(c);
                }
            }
        }
    }
    fields
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            if c == KEY_SEPARATOR || c == ESCAPE {
                write!(f, "{}", ESCAPE)?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Display for LaunchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            Escaped(&self.core_id),
            Escaped(&self.file_name),
            Escaped(&self.directory),
            sep = KEY_SEPARATOR
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    RandomGame,
    RebuildCache,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File(PathBuf),
    Directory(PathBuf),
    // the ".." row; confirming it returns to the given view
    Parent(ViewId),
    Launch(LaunchTarget),
    Link(ViewId),
    Action(Action),
    // static text, nothing happens on confirm
    Info,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        let mut name = name.into();
        truncate_name(&mut name);
        Self { name, kind }
    }

    pub fn parent(target: ViewId) -> Self {
        Self::new(PARENT_MARKER, EntryKind::Parent(target))
    }

    pub fn is_dir(&self) -> bool {
        matches!(
            self.kind,
            EntryKind::Directory(_)
                | EntryKind::Parent(_)
                | EntryKind::Link(_)
                | EntryKind::Action(Action::RandomGame)
        )
    }

    pub fn is_parent(&self) -> bool {
        matches!(self.kind, EntryKind::Parent(_))
    }
}

fn truncate_name(name: &mut String) {
    if name.len() <= MAX_NAME_LEN {
        return;
    }
    let mut end = MAX_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name.truncate(end);
}

/// Rows of a view under construction. Growth is fallible so that a failed
/// allocation never leaves a half-built listing behind.
#[derive(Debug, Default)]
pub struct Rows(Vec<Entry>);

impl Rows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) -> anyhow::Result<()> {
        self.0.try_reserve(1)?;
        self.0.push(entry);
        Ok(())
    }

    pub fn append(&mut self, entries: Vec<Entry>) -> anyhow::Result<()> {
        self.0.try_reserve(entries.len())?;
        self.0.extend(entries);
        Ok(())
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_vec(self) -> Vec<Entry> {
        self.0
    }
}

/// The rows of the current view, in display order.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    // swaps in a freshly built listing. On allocation failure the previous
    // listing stays as it was
    pub fn replace(&mut self, rows: Rows) -> anyhow::Result<()> {
        let rows = rows.into_vec();
        self.entries
            .try_reserve(rows.len().saturating_sub(self.entries.len()))?;
        self.entries.clear();
        self.entries.extend(rows);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn position_of_link(&self, view: &ViewId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| matches!(&e.kind, EntryKind::Link(v) if v == view))
    }
}
