use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{MergeStrategy, OverlayOptions};

pub const CONFIG_FILE_NAME: &str = ".overlayrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale directory, relative to the mod root.
    #[serde(default = "default_locales_root")]
    pub locales_root: String,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    #[serde(default = "default_target_locales")]
    pub target_locales: Vec<String>,
    #[serde(default = "default_dialogue_dir")]
    pub dialogue_dir: String,
    #[serde(default = "default_exclude_dialogue")]
    pub exclude_dialogue: bool,
    #[serde(default)]
    pub merge_strategy: MergeStrategy,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_locales_root() -> String {
    "db/locales".to_string()
}

fn default_reference_locale() -> String {
    "en".to_string()
}

fn default_target_locales() -> Vec<String> {
    vec!["ch".to_string()]
}

fn default_dialogue_dir() -> String {
    "dialogue".to_string()
}

fn default_exclude_dialogue() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales_root: default_locales_root(),
            reference_locale: default_reference_locale(),
            target_locales: default_target_locales(),
            dialogue_dir: default_dialogue_dir(),
            exclude_dialogue: default_exclude_dialogue(),
            merge_strategy: MergeStrategy::default(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.target_locales.is_empty() {
            bail!("'targetLocales' must list at least one locale code");
        }
        for code in self.target_locales.iter().chain([&self.reference_locale]) {
            if !is_single_component(code) {
                bail!("Invalid locale code: \"{}\"", code);
            }
        }

        if !is_single_component(&self.dialogue_dir) {
            bail!(
                "'dialogueDir' must be a plain directory name, got \"{}\"",
                self.dialogue_dir
            );
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Resolve against `mod_root` into options for a run.
    pub fn to_options(&self, mod_root: &Path) -> Result<OverlayOptions> {
        self.validate()?;

        let ignores = self
            .ignores
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: \"{}\"", p)))
            .collect::<Result<Vec<_>>>()?;

        Ok(OverlayOptions {
            locales_root: mod_root.join(&self.locales_root),
            reference_locale: self.reference_locale.clone(),
            target_locales: self.target_locales.clone(),
            dialogue_dir: self.dialogue_dir.clone(),
            exclude_dialogue: self.exclude_dialogue,
            merge_strategy: self.merge_strategy,
            ignores,
        })
    }
}

/// True for a non-empty name that is exactly one normal path component.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
