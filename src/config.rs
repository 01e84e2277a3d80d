//! Project configuration
/// Config file loader
mod loader;
/// Configuration types and validation
mod types;

use std::path::Path;

pub use loader::CONFIG_FILE_NAME;
pub use types::{
    ConfigError,
    MergeSettings,
    ValidationError,
};

/// Load and validate the settings for the project at `root`.
///
/// # Returns
/// - `Ok(settings)`: the config file's values, or the defaults when it is missing
/// - `Err(ConfigError::ValidationErrors)`: every problem found, not just the first
/// - `Err(_)`: the file exists but could not be read or parsed
pub fn load_settings(root: &Path) -> Result<MergeSettings, ConfigError> {
    let settings = loader::load_from_root(root)?.map_or_else(MergeSettings::default, |settings| {
        tracing::debug!("Loaded project settings: {:?}", settings);
        settings
    });

    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(settings)
}
