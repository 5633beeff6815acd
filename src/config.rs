use std::{env, fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::builder::{Builder, ProductionBuilder};
use crate::menu::{Orientation, ProductionMenu};

pub const CONFIG_ENV: &str = "MENUBUILDER_CONFIG";

/// A menu definition as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuConfig {
    pub id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub border: Option<i32>,

    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub orientation: Option<Orientation>,
}

impl MenuConfig {
    /// Replays the definition through a fresh builder.
    pub fn apply(&self) -> ProductionMenu {
        let mut builder = ProductionBuilder::new(self.id.as_str());
        if let Some(title) = &self.title {
            builder = builder.with_title(title.as_str());
        }
        if let Some(border) = self.border {
            builder = builder.with_border(border);
        }
        for option in &self.options {
            builder = builder.add_option(option.as_str());
        }
        builder = match self.orientation {
            Some(Orientation::Horizontal) => builder.horizontal(),
            Some(Orientation::Vertical) => builder.vertical(),
            None => builder,
        };
        builder.build()
    }
}

pub fn load(path: &Path) -> Result<MenuConfig> {
    let bytes = fs::read(path)
        .with_context(|| format!("reading menu definition {}", path.display()))?;
    let cfg: MenuConfig =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), id = %cfg.id, "loaded menu definition");
    Ok(cfg)
}

/// Loads the definition at `explicit`, which must exist, or else at the
/// resolved default path, where a missing file yields `Ok(None)`.
pub fn load_optional(explicit: Option<&Path>) -> Result<Option<MenuConfig>> {
    if let Some(path) = explicit {
        return load(path).map(Some);
    }
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no menu definition");
        return Ok(None);
    }
    load(&path).map(Some)
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("menubuilder.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("menubuilder").join("menu.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("menubuilder").join("menu.json"));
    }

    None
}
