pub mod feature;
pub mod mode;
pub mod paths;
pub mod profile;
pub mod settings;
pub mod version;

pub use feature::{Feature, FeatureSet, FeatureToken};
pub use mode::Mode;
pub use paths::AppPaths;
pub use profile::{Profile, resolve};
pub use settings::{Settings, SettingsOverrides};
pub use version::{ReleaseVersion, VersionProvider};

use std::path::Path;

use crate::error::AppResult;

/// Layers the optional config file under `overrides`.
pub fn load_settings(
    config_file: Option<&Path>,
    overrides: SettingsOverrides,
) -> AppResult<Settings> {
    let base = match config_file {
        Some(path) => settings::load(path)?,
        None => Settings::default(),
    };
    Ok(base.apply(overrides))
}
