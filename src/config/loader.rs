//! Config file loading
//!
//! Only `<root>/.translation-merger.json` is consulted. There is no lookup in
//! parent directories and no merging with other sources; keys the file omits
//! fall back to [`MergeSettings::default`].

use std::io::ErrorKind;
use std::path::Path;

use super::{
    ConfigError,
    MergeSettings,
};

/// Name of the optional config file at the project root.
pub const CONFIG_FILE_NAME: &str = ".translation-merger.json";

/// Read settings from the project root.
///
/// # Arguments
/// * `root` - Project root; the config file is looked up directly inside it
///
/// # Returns
/// - `Ok(Some(settings))`: the config file exists and parsed
/// - `Ok(None)`: there is no config file
/// - `Err(ConfigError)`: read or JSON parse error
pub(super) fn load_from_root(root: &Path) -> Result<Option<MergeSettings>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("No {CONFIG_FILE_NAME} in {root:?}, using defaults");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!("Loaded configuration from: {:?}", config_path);
    Ok(Some(serde_json::from_str(&content)?))
}
