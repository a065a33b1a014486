use crate::error::{CoverScoutError, Result};
use crate::types::config::CoverScoutConfig;
use std::path::{Path, PathBuf};
use toml::map::{Entry, Map};
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "coverscout.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".coverscout/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/coverscout/config.toml";

pub fn load_config(root: &Path) -> Result<Option<CoverScoutConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CoverScoutConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.exists() {
        tracing::debug!(path = %project_path.display(), "no project config, using defaults");
        return Ok(None);
    }

    // Later layers win.
    let layers = [
        ("global", global_path.map(Path::to_path_buf)),
        ("project", Some(project_path)),
        ("local", Some(root.join(DEFAULT_LOCAL_FILE))),
    ];
    let mut merged = Value::Table(Map::new());
    for (layer, path) in layers {
        let Some(path) = path.filter(|path| path.exists()) else {
            continue;
        };
        tracing::debug!(layer, path = %path.display(), "merging config layer");
        merge_toml(&mut merged, parse_layer(&path)?);
    }

    let cfg: CoverScoutConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CoverScoutError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn parse_layer(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CoverScoutError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Deep-merges `overlay` into `base`. Tables merge key by key; anything else
/// in `overlay` replaces what `base` held.
fn merge_toml(base: &mut Value, overlay: Value) {
    let overlay_table = match overlay {
        Value::Table(table) if base.is_table() => table,
        other => {
            *base = other;
            return;
        }
    };
    if let Some(base_table) = base.as_table_mut() {
        for (key, value) in overlay_table {
            match base_table.entry(key) {
                Entry::Occupied(mut slot) => merge_toml(slot.get_mut(), value),
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
            }
        }
    }
}
