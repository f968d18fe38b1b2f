use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};

use crate::scanner::{is_directory, is_hidden, is_reserved, readable};

pub const MAX_EMPTY_DIRS: usize = 256;
pub const MAX_NAME_BYTES: usize = 63;

/// Names of root containers known to hold nothing, persisted one per line so
/// that the root listing does not have to open every container.
///
/// This is a set of names, not paths: two containers with the same name under
/// different parents are treated alike.
#[derive(Debug)]
pub struct EmptyDirCache {
    root: PathBuf,
    file: PathBuf,
    names: Vec<String>,
    loaded: bool,
}

impl EmptyDirCache {
    pub fn new(root: impl Into<PathBuf>, file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file: file.into(),
            names: Vec::new(),
            loaded: false,
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    // loads the cache file once. When the file is missing or damaged,
    // `before_rebuild` runs first and then the cache is rebuilt from disk
    pub fn load(&mut self, before_rebuild: impl FnOnce()) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        match read_cache_file(&self.file) {
            Ok(names) => {
                log::info!("Empty dirs cache: loaded {} entries", names.len());
                self.names = names;
            }
            Err(e) => {
                log::info!("Empty dirs cache: {:#}, rebuilding", e);
                before_rebuild();
                self.rebuild();
            }
        }
    }

    /// Re-derives the set from one level below the root and writes it out.
    pub fn rebuild(&mut self) {
        self.loaded = true;
        self.names = match find_empty_dirs(&self.root) {
            Ok(names) => names,
            Err(e) => {
                log::warn!("Empty dirs cache: {:#}", e);
                Vec::new()
            }
        };
        if let Err(e) = write_cache_file(&self.file, &self.names) {
            log::warn!("Empty dirs cache: {:#}", e);
        }
        log::info!("Empty dirs cache: rebuilt with {} entries", self.names.len());
    }
}

fn read_cache_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => bail!("file not found"),
        Err(e) => return Err(e).with_context(|| format!("Unable to read {}", path.display())),
    };
    if !text.is_empty() && !text.ends_with('\n') {
        bail!("truncated file");
    }
    let mut names = Vec::new();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        if line.len() > MAX_NAME_BYTES {
            bail!("line too long: {:?}", line);
        }
        if names.len() == MAX_EMPTY_DIRS {
            break;
        }
        names.push(line.to_string());
    }
    Ok(names)
}

fn write_cache_file(path: &Path, names: &[String]) -> anyhow::Result<()> {
    let mut text = String::new();
    for name in names {
        text.push_str(name);
        text.push('\n');
    }
    fs::write(path, text).with_context(|| format!("Unable to write {}", path.display()))
}

// A container counts as empty when nothing but hidden entries sits directly
// inside it.
fn find_empty_dirs(root: &Path) -> anyhow::Result<Vec<String>> {
    let read_dir =
        fs::read_dir(root).with_context(|| format!("Unable to open {}", root.display()))?;
    let mut names = Vec::new();
    for entry in readable(read_dir, root) {
        if names.len() == MAX_EMPTY_DIRS {
            break;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) || is_reserved(&name) || !is_directory(&entry) {
            continue;
        }
        if name.len() > MAX_NAME_BYTES {
            log::debug!("Empty dirs cache: name too long to store: {}", name);
            continue;
        }
        let has_content = match fs::read_dir(entry.path()) {
            Ok(children) => children
                .filter_map(Result::ok)
                .any(|c| !is_hidden(&c.file_name().to_string_lossy())),
            Err(_) => continue,
        };
        if !has_content {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
