use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Text dialect of a translation file, chosen by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    /// Strict JSON: `*.json`
    Json,
    /// Relaxed JSON5: `*.json5`
    Json5,
    /// JSON with `//` and `/* */` comments and trailing commas: `*.jsonc`
    Jsonc,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Json, Dialect::Json5, Dialect::Jsonc];

    /// Resolve a dialect from a file extension, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dialect| ext.eq_ignore_ascii_case(dialect.extension()))
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::Json => "json",
            Dialect::Json5 => "json5",
            Dialect::Jsonc => "jsonc",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A translation file discovered under a locale root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub dialect: Dialect,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, dialect: Dialect) -> Self {
        Self {
            path: path.into(),
            dialect,
        }
    }

    /// Build a descriptor if the path carries a recognised extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let dialect = Dialect::from_path(&path)?;
        Some(Self { path, dialect })
    }

    /// File name used in reports (e.g. "items.json").
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}
