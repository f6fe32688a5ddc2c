use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::core::SourceFile;

/// Lazy, recursive listing of translation files under one locale root.
///
/// Yields a [`SourceFile`] for every `.json`, `.json5` or `.jsonc` file
/// (extension case is ignored). Entries are visited in file-name order inside
/// each directory. A root that does not exist yields nothing.
///
/// Unreadable entries are yielded as `Err` so the caller can report them and
/// keep going.
pub struct LocaleFiles {
    root: PathBuf,
    walker: Option<walkdir::IntoIter>,
    excluded_dirs: Vec<PathBuf>,
    ignores: Vec<Pattern>,
}

impl LocaleFiles {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let walker = root.is_dir().then(|| {
            WalkDir::new(&root)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
        });
        Self {
            root,
            walker,
            excluded_dirs: Vec::new(),
            ignores: Vec::new(),
        }
    }

    /// Skip a subdirectory (relative to the root) entirely.
    pub fn excluding(mut self, dir: impl AsRef<Path>) -> Self {
        self.excluded_dirs.push(self.root.join(dir));
        self
    }

    /// Skip files whose root-relative path matches any of these patterns.
    pub fn ignoring(mut self, patterns: impl IntoIterator<Item = Pattern>) -> Self {
        self.ignores.extend(patterns);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for LocaleFiles {
    type Item = Result<SourceFile, walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let walker = self.walker.as_mut()?;

        loop {
            let entry = match walker.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e)),
            };
            let path = entry.path();

            if entry.file_type().is_dir() {
                if entry.depth() > 0 && self.excluded_dirs.iter().any(|d| d == path) {
                    walker.skip_current_dir();
                }
                continue;
            }

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            let relative = relative.to_string_lossy().replace('\\', "/");
            if self.ignores.iter().any(|p| p.matches(&relative)) {
                continue;
            }

            if let Some(file) = SourceFile::from_path(path) {
                return Some(Ok(file));
            }
        }
    }
}
